//! `hos-plan` — one call from a trip request to daily log sheets.
//!
//! ```text
//! TripRequest ──► TripRoute::assemble ──► DutySimulator ──► bucketize ──► TripPlan
//!                 (RouteProvider)          (HosRules)        (geometry)
//! ```
//!
//! Geocoding is the caller's job: requests carry coordinates.

pub mod error;
pub mod plan;
pub mod request;


pub use error::{PlanError, PlanResult};
pub use plan::{plan_from_totals, plan_trip, Locations, RouteMap, TripPlan};
pub use request::TripRequest;
