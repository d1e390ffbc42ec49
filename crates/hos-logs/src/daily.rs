//! Per-day log sheet types.
//!
//! These are wire types: their serde form is what log-sheet front ends
//! render.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use hos_core::units::{round2, secs_to_hours};
use hos_core::{DutyStatus, GeoPoint};
use hos_sim::StopKind;

/// One calendar day of the driver's log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyLog {
    /// 1-based position of the day within the trip.
    pub day_no:      u32,
    /// Serialized as `YYYY-MM-DD`.
    pub date:        NaiveDate,
    pub grid_events: Vec<GridEvent>,
    pub stops:       Vec<LogStop>,
    pub summary:     DaySummary,
}

/// A duty-status interval clipped to one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridEvent {
    pub status:           DutyStatus,
    pub start:            NaiveDateTime,
    pub end:              NaiveDateTime,
    pub duration_seconds: f64,
}

/// A stop marker on the day's sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogStop {
    #[serde(rename = "type", serialize_with = "stop_label")]
    pub kind:  StopKind,
    /// Serialized as `HH:MM`.
    #[serde(serialize_with = "clock_time")]
    pub time:  NaiveDateTime,
    /// Where along the route the stop happens; `None` without geometry.
    pub coord: Option<GeoPoint>,
}

/// Day totals, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DaySummary {
    pub drive_hours:    f64,
    pub on_duty_hours:  f64,
    pub distance_miles: f64,
}

impl DailyLog {
    /// Hours on each grid line, in grid order, rounded to two decimals.
    ///
    /// For a day the trip covers end to end the four values sum to 24.
    pub fn hours_by_status(&self) -> [(DutyStatus, f64); 4] {
        DutyStatus::ALL.map(|status| {
            let secs: f64 = self
                .grid_events
                .iter()
                .filter(|e| e.status == status)
                .map(|e| e.duration_seconds)
                .sum();
            (status, round2(secs_to_hours(secs)))
        })
    }

    /// Total seconds covered by this day's grid events.
    pub fn covered_seconds(&self) -> f64 {
        self.grid_events.iter().map(|e| e.duration_seconds).sum()
    }
}

fn stop_label<S: Serializer>(kind: &StopKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.label())
}

fn clock_time<S: Serializer>(t: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&t.format("%H:%M"))
}
