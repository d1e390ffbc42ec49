//! The planner's input.

use chrono::{Local, NaiveDateTime};
use hos_core::GeoPoint;
use serde::{Deserialize, Serialize};

/// A trip to plan, with every location already geocoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub current:          GeoPoint,
    pub pickup:           GeoPoint,
    pub dropoff:          GeoPoint,
    /// On-duty hours already used in the current cycle.
    #[serde(default, alias = "cycleUsed")]
    pub cycle_used_hours: f64,
    /// Local start time; `None` means now.
    #[serde(default)]
    pub start_time:       Option<NaiveDateTime>,
}

impl TripRequest {
    pub fn new(current: GeoPoint, pickup: GeoPoint, dropoff: GeoPoint, cycle_used_hours: f64) -> Self {
        Self { current, pickup, dropoff, cycle_used_hours, start_time: None }
    }

    pub fn starting_at(mut self, start: NaiveDateTime) -> Self {
        self.start_time = Some(start);
        self
    }

    /// The requested start time, or the local clock if none was given.
    pub fn start(&self) -> NaiveDateTime {
        self.start_time.unwrap_or_else(|| Local::now().naive_local())
    }
}
