//! Simulation time model.
//!
//! # Design
//!
//! Timestamps are local, zone-less `chrono::NaiveDateTime`s and durations are
//! `chrono::TimeDelta`s.  Both are integer-backed, so the timeline arithmetic
//! is exact: an event that ends at `start + d` is followed by one that starts
//! at exactly that instant, and summing durations never drifts.
//!
//! Fractional driving times (distance / speed) enter the integer domain once,
//! through [`secs_to_delta`], which rounds **up** to the next millisecond so a
//! segment sized to reach a mark never stops just short of it.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

// ── Conversions ──────────────────────────────────────────────────────────────

/// Convert fractional seconds to a `TimeDelta`, rounding up to whole
/// milliseconds.  Negative and NaN inputs map to zero.
pub fn secs_to_delta(secs: f64) -> TimeDelta {
    if secs.is_nan() || secs <= 0.0 {
        return TimeDelta::zero();
    }
    // `as` saturates, so absurdly long spans clamp instead of wrapping.
    TimeDelta::try_milliseconds((secs * 1_000.0).ceil() as i64).unwrap_or(TimeDelta::MAX)
}

/// Seconds in `d`, at millisecond resolution.
#[inline]
pub fn delta_secs(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 1_000.0
}

/// Local midnight at the start of `t`'s calendar day.
#[inline]
pub fn midnight(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

// ── Span ─────────────────────────────────────────────────────────────────────

/// A half-open time interval `[start, end)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: NaiveDateTime,
    pub end:   NaiveDateTime,
}

impl Span {
    #[inline]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// The 24-hour window starting at the midnight of `t`'s day.
    pub fn day_of(t: NaiveDateTime) -> Self {
        let start = midnight(t);
        Self { start, end: start + TimeDelta::days(1) }
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// `true` if `t` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }

    /// The overlap of two spans, or `None` if it is empty.
    pub fn intersect(&self, other: &Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Span { start, end })
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {})", self.start, self.end)
    }
}
