//! Slicing a continuous timeline into calendar days.
//!
//! # Algorithm
//!
//! ```text
//! day = [midnight(first.start), +24h)
//! loop:
//!   for each event: overlap = event ∩ day
//!     grid event  += overlap
//!     drive secs  += |overlap|               if Driving
//!     on-duty secs+= |overlap|               if Driving | OnDuty
//!     metres      += event.distance × |overlap| / |event|
//!   stops with time in [day.start, day.end) → sampled on the route
//!   until day.end ≥ last.end
//! ```
//!
//! Each pass scans every event, which is fine for timelines of a few hundred
//! events.

use chrono::TimeDelta;
use tracing::debug;

use hos_core::time::delta_secs;
use hos_core::units::{meters_to_miles, round2, secs_to_hours};
use hos_core::{DutyStatus, Span};
use hos_route::RouteGeometry;
use hos_sim::{DutyEvent, Stop};

use crate::{DailyLog, DaySummary, GridEvent, LogStop};

/// Partition `events` into one [`DailyLog`] per calendar day they touch.
///
/// `events` must be contiguous and in time order, as produced by the
/// simulator.  Stop coordinates are looked up on `geometry` by the stop's
/// distance along the route; with an empty geometry they stay `None`.
/// An empty timeline yields no days.
pub fn bucketize(events: &[DutyEvent], stops: &[Stop], geometry: &RouteGeometry) -> Vec<DailyLog> {
    let (Some(first), Some(last)) = (events.first(), events.last()) else {
        return Vec::new();
    };

    let mut logs = Vec::new();
    let mut day = Span::day_of(first.start);
    loop {
        let log = build_day(logs.len() as u32 + 1, day, events, stops, geometry);
        debug!(
            day = log.day_no,
            date = %log.date,
            events = log.grid_events.len(),
            stops = log.stops.len(),
            "day bucketed"
        );
        logs.push(log);

        if day.end >= last.end {
            break;
        }
        day = Span::new(day.end, day.end + TimeDelta::days(1));
    }
    logs
}

fn build_day(
    day_no:   u32,
    day:      Span,
    events:   &[DutyEvent],
    stops:    &[Stop],
    geometry: &RouteGeometry,
) -> DailyLog {
    let mut grid_events = Vec::new();
    let mut drive_secs = 0.0;
    let mut on_duty_secs = 0.0;
    let mut metres = 0.0;

    for event in events {
        let Some(overlap) = event.span().intersect(&day) else {
            continue;
        };
        let secs = delta_secs(overlap.duration());

        grid_events.push(GridEvent {
            status:           event.status,
            start:            overlap.start,
            end:              overlap.end,
            duration_seconds: secs,
        });

        if event.status == DutyStatus::Driving {
            drive_secs += secs;
        }
        if event.status.is_on_duty() {
            on_duty_secs += secs;
        }

        let parent_secs = event.duration_secs();
        if parent_secs > 0.0 {
            metres += event.distance_m() * secs / parent_secs;
        }
    }

    let stops = stops
        .iter()
        .filter(|s| day.contains(s.at))
        .map(|s| LogStop {
            kind:  s.kind,
            time:  s.at,
            coord: geometry.coordinate_at_distance(s.distance_m),
        })
        .collect();

    DailyLog {
        day_no,
        date: day.start.date(),
        grid_events,
        stops,
        summary: DaySummary {
            drive_hours:    round2(secs_to_hours(drive_secs)),
            on_duty_hours:  round2(secs_to_hours(on_duty_secs)),
            distance_miles: round2(meters_to_miles(metres)),
        },
    }
}
