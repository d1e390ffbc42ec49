//! Timeline records produced by the simulator.
//!
//! Events and stops are append-only.  Consecutive events share their
//! boundary instant (`events[i].end == events[i + 1].start`), so together
//! they cover the whole trip with no gaps.

use chrono::{NaiveDateTime, TimeDelta};
use hos_core::time::delta_secs;
use hos_core::{DutyStatus, Span};

// ── DutyEvent ─────────────────────────────────────────────────────────────────

/// One interval spent in a single duty status.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyEvent {
    pub status:  DutyStatus,
    pub start:   NaiveDateTime,
    pub end:     NaiveDateTime,
    /// Cumulative distance travelled when the event began, metres.
    pub start_m: f64,
    /// Cumulative distance travelled when the event ended, metres.
    pub end_m:   f64,
}

impl DutyEvent {
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    #[inline]
    pub fn duration_secs(&self) -> f64 {
        delta_secs(self.duration())
    }

    /// Distance covered during the event, metres.
    #[inline]
    pub fn distance_m(&self) -> f64 {
        self.end_m - self.start_m
    }
}

// ── Stop ──────────────────────────────────────────────────────────────────────

/// Why the truck stopped.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StopKind {
    Pickup,
    Dropoff,
    Fuel,
    /// Mid-shift 30-minute break.
    Rest30,
    /// 10-hour sleeper-berth shift reset.
    Rest10,
    /// 34-hour cycle restart.
    Restart34,
}

impl StopKind {
    /// Label printed on the log sheet.
    pub fn label(self) -> &'static str {
        match self {
            StopKind::Pickup    => "Pickup",
            StopKind::Dropoff   => "Dropoff",
            StopKind::Fuel      => "Fuel",
            StopKind::Rest30    => "Rest (30m)",
            StopKind::Rest10    => "Rest (10h)",
            StopKind::Restart34 => "Cycle Restart (34h)",
        }
    }

    /// The duty status the driver is in for the duration of the stop.
    pub fn status(self) -> DutyStatus {
        match self {
            StopKind::Pickup | StopKind::Dropoff | StopKind::Fuel => DutyStatus::OnDuty,
            StopKind::Rest30 | StopKind::Restart34                => DutyStatus::OffDuty,
            StopKind::Rest10                                      => DutyStatus::Sleeper,
        }
    }
}

impl std::fmt::Display for StopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A stop marker: what, when, and how far along the route.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub kind:       StopKind,
    pub at:         NaiveDateTime,
    /// Cumulative distance along the route at the stop, metres.
    pub distance_m: f64,
}

// ── Timeline ──────────────────────────────────────────────────────────────────

/// The complete output of one simulation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    pub events: Vec<DutyEvent>,
    pub stops:  Vec<Stop>,
}

impl Timeline {
    /// From the first event's start to the last event's end.
    pub fn span(&self) -> Option<Span> {
        let first = self.events.first()?;
        let last = self.events.last()?;
        Some(Span::new(first.start, last.end))
    }

    /// Total simulated time.  Zero for an empty timeline.
    pub fn elapsed(&self) -> TimeDelta {
        self.span().map_or_else(TimeDelta::zero, |s| s.duration())
    }

    /// Total time spent in `status`.
    pub fn time_in(&self, status: DutyStatus) -> TimeDelta {
        self.events
            .iter()
            .filter(|e| e.status == status)
            .fold(TimeDelta::zero(), |acc, e| acc + e.duration())
    }

    /// Distance at the end of the last event, metres.
    pub fn distance_m(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.end_m)
    }

    /// Stops of one kind, in time order.
    pub fn stops_of(&self, kind: StopKind) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(move |s| s.kind == kind)
    }

    /// `true` if every event starts exactly where its predecessor ended.
    pub fn is_contiguous(&self) -> bool {
        self.events.windows(2).all(|w| w[0].end == w[1].start)
    }
}
