//! Planning entry points and the plan's wire shape.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use hos_core::{GeoPoint, HosRules};
use hos_logs::{bucketize, DailyLog};
use hos_route::{RouteGeometry, RouteProvider, TripRoute};
use hos_sim::{SimBuilder, TripTotals};

use crate::{PlanResult, TripRequest};

/// Everything a front end needs to draw the route and the log sheets.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub route_map: RouteMap,
    #[serde(rename = "geocoded")]
    pub locations: Locations,
    pub eld_logs:  Vec<DailyLog>,
}

/// Leg polylines (`[lng, lat]` vertices) and route totals.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMap {
    pub leg1:           RouteGeometry,
    pub leg2:           RouteGeometry,
    pub distance_miles: f64,
    pub duration_hours: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Locations {
    pub current: GeoPoint,
    pub pickup:  GeoPoint,
    pub dropoff: GeoPoint,
}

/// Route the trip through `provider`, simulate it under `rules`, and slice
/// the result into daily logs.
pub fn plan_trip<P: RouteProvider + ?Sized>(
    provider: &P,
    rules:    &HosRules,
    request:  &TripRequest,
) -> PlanResult<TripPlan> {
    let route = TripRoute::assemble(provider, request.current, request.pickup, request.dropoff)?;
    info!(
        miles = route.distance_miles(),
        hours = route.duration_hours(),
        "trip routed"
    );

    let eld_logs = plan_from_totals(
        rules,
        route.distance_m(),
        route.duration_s(),
        request.cycle_used_hours,
        request.start(),
        &route.geometry(),
    )?;

    Ok(TripPlan {
        route_map: RouteMap {
            distance_miles: route.distance_miles(),
            duration_hours: route.duration_hours(),
            leg1:           route.to_pickup.geometry,
            leg2:           route.to_dropoff.geometry,
        },
        locations: Locations {
            current: request.current,
            pickup:  request.pickup,
            dropoff: request.dropoff,
        },
        eld_logs,
    })
}

/// Simulate and bucketize a trip whose route totals are already known.
pub fn plan_from_totals(
    rules:            &HosRules,
    distance_m:       f64,
    duration_s:       f64,
    cycle_used_hours: f64,
    start:            NaiveDateTime,
    geometry:         &RouteGeometry,
) -> PlanResult<Vec<DailyLog>> {
    let sim = SimBuilder::new().rules(rules.clone()).build()?;
    let timeline = sim.simulate(&TripTotals::new(distance_m, duration_s, cycle_used_hours, start))?;
    Ok(bucketize(&timeline.events, &timeline.stops, geometry))
}
