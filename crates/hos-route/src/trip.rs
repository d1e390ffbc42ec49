//! Two-leg trip assembly: current location → pickup → dropoff.

use hos_core::units::{meters_to_miles, round2, secs_to_hours};
use hos_core::GeoPoint;
use tracing::debug;

use crate::{RouteGeometry, RouteLeg, RouteProvider, RouteResult};

/// Endpoints closer than this many degrees on both axes are one place.
pub const SAME_PLACE_TOL_DEG: f64 = 0.0001;

/// The two legs of a trip and their combined totals.
#[derive(Clone, Debug, PartialEq)]
pub struct TripRoute {
    /// Current location → pickup.
    pub to_pickup:  RouteLeg,
    /// Pickup → dropoff.
    pub to_dropoff: RouteLeg,
}

impl TripRoute {
    /// Fetch both legs from `provider`.
    ///
    /// A leg whose endpoints are the same place is not sent to the provider;
    /// it becomes [`RouteLeg::stationary`] at its start point.
    pub fn assemble<P: RouteProvider + ?Sized>(
        provider: &P,
        current:  GeoPoint,
        pickup:   GeoPoint,
        dropoff:  GeoPoint,
    ) -> RouteResult<Self> {
        Ok(Self {
            to_pickup:  leg(provider, current, pickup)?,
            to_dropoff: leg(provider, pickup, dropoff)?,
        })
    }

    pub fn distance_m(&self) -> f64 {
        self.to_pickup.distance_m + self.to_dropoff.distance_m
    }

    pub fn duration_s(&self) -> f64 {
        self.to_pickup.duration_s + self.to_dropoff.duration_s
    }

    /// Leg-1 vertices followed by leg-2 vertices.
    pub fn geometry(&self) -> RouteGeometry {
        let mut g = self.to_pickup.geometry.clone();
        g.extend(&self.to_dropoff.geometry);
        g
    }

    /// Total distance in miles, two decimals.
    pub fn distance_miles(&self) -> f64 {
        round2(meters_to_miles(self.distance_m()))
    }

    /// Total driving time in hours, two decimals.
    pub fn duration_hours(&self) -> f64 {
        round2(secs_to_hours(self.duration_s()))
    }
}

fn leg<P: RouteProvider + ?Sized>(provider: &P, from: GeoPoint, to: GeoPoint) -> RouteResult<RouteLeg> {
    if from.same_place(to, SAME_PLACE_TOL_DEG) {
        debug!(%from, %to, "leg endpoints coincide, skipping provider");
        return Ok(RouteLeg::stationary(from));
    }
    provider.route(from, to)
}
