//! The route-provider seam.
//!
//! # Pluggability
//!
//! The planner asks for each leg through the [`RouteProvider`] trait, so
//! applications can back it with a hosted directions API, a local routing
//! engine, or a fixture, without touching the planning core.
//! [`StraightLineProvider`] needs no network and is what the demo and the
//! tests use.

use hos_core::units::miles_to_meters;
use hos_core::GeoPoint;

use crate::{RouteError, RouteGeometry, RouteResult};

// ── RouteLeg ─────────────────────────────────────────────────────────────────

/// One provider answer: total distance, total driving time, and the
/// polyline between two points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    pub distance_m: f64,
    pub duration_s: f64,
    pub geometry:   RouteGeometry,
}

impl RouteLeg {
    /// A leg that goes nowhere: zero distance and time, geometry is `at`.
    pub fn stationary(at: GeoPoint) -> Self {
        Self {
            distance_m: 0.0,
            duration_s: 0.0,
            geometry:   RouteGeometry::new(vec![at]),
        }
    }

    /// `true` if the leg covers no distance.
    pub fn is_trivial(&self) -> bool {
        self.distance_m <= 0.0
    }
}

// ── RouteProvider trait ──────────────────────────────────────────────────────

/// Source of driving routes between two geocoded points.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one provider can serve trips
/// planned on several threads.
pub trait RouteProvider: Send + Sync {
    /// Compute the driving route from `from` to `to`.
    ///
    /// Provider failures (service down, no road connection) are reported as
    /// [`RouteError`]; they are never retried here.
    fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<RouteLeg>;
}

// ── StraightLineProvider ─────────────────────────────────────────────────────

/// Great-circle "routing" at a constant average speed.
///
/// Distance is the haversine distance between the endpoints and the geometry
/// is the two endpoints themselves.
#[derive(Clone, Copy, Debug)]
pub struct StraightLineProvider {
    /// Average speed, metres per second.
    pub speed_mps: f64,
}

impl StraightLineProvider {
    pub fn new(speed_mps: f64) -> Self {
        Self { speed_mps }
    }

    pub fn from_mph(mph: f64) -> Self {
        Self::new(miles_to_meters(mph) / 3_600.0)
    }
}

impl Default for StraightLineProvider {
    /// 55 mph, a typical loaded-truck highway average.
    fn default() -> Self {
        Self::from_mph(55.0)
    }
}

impl RouteProvider for StraightLineProvider {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<RouteLeg> {
        if self.speed_mps.is_nan() || self.speed_mps <= 0.0 {
            return Err(RouteError::Provider(format!(
                "straight-line speed must be positive, got {} m/s",
                self.speed_mps
            )));
        }
        let distance_m = from.distance_m(to);
        Ok(RouteLeg {
            distance_m,
            duration_s: distance_m / self.speed_mps,
            geometry:   RouteGeometry::new(vec![from, to]),
        })
    }
}
