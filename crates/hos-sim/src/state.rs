//! The mutable counters of one simulation run.

use chrono::{NaiveDateTime, TimeDelta};
use hos_core::time::secs_to_delta;
use hos_core::{HosRules, SECS_PER_HOUR};

/// Everything the duty rules look at, threaded through each transition.
///
/// A run creates one `ShiftState`, mutates it as events are emitted, and
/// drops it once the timeline is complete.  Runs never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftState {
    /// Driving since the last 10 h reset (or 34 h restart).
    pub shift_drive:  TimeDelta,
    /// On-duty window used since the last reset, breaks included.
    pub shift_duty:   TimeDelta,
    /// On-duty time counted against the cycle since the last restart.
    pub cycle_used:   TimeDelta,
    /// Metres driven since the last fuel stop.
    pub since_fuel_m: f64,
    /// Metres driven since pickup.
    pub travelled_m:  f64,
    /// Metres left to the destination.
    pub remaining_m:  f64,
    /// Current simulated instant.
    pub now:          NaiveDateTime,
}

impl ShiftState {
    /// Fresh state at the start of a trip.
    pub fn new(distance_m: f64, cycle_used_hours: f64, start: NaiveDateTime) -> Self {
        Self {
            shift_drive:  TimeDelta::zero(),
            shift_duty:   TimeDelta::zero(),
            cycle_used:   secs_to_delta(cycle_used_hours * SECS_PER_HOUR),
            since_fuel_m: 0.0,
            travelled_m:  0.0,
            remaining_m:  distance_m,
            now:          start,
        }
    }

    // ── Limits ────────────────────────────────────────────────────────────

    #[inline]
    pub fn drive_left(&self, rules: &HosRules) -> TimeDelta {
        rules.max_drive() - self.shift_drive
    }

    #[inline]
    pub fn duty_left(&self, rules: &HosRules) -> TimeDelta {
        rules.max_duty() - self.shift_duty
    }

    #[inline]
    pub fn cycle_left(&self, rules: &HosRules) -> TimeDelta {
        rules.cycle_limit() - self.cycle_used
    }

    /// Metres until the next fuel stop is due.
    #[inline]
    pub fn fuel_left_m(&self, rules: &HosRules) -> f64 {
        rules.fuel_interval_m - self.since_fuel_m
    }

    /// Destination reached, within tolerance.
    #[inline]
    pub fn arrived(&self, rules: &HosRules) -> bool {
        self.remaining_m <= rules.distance_tolerance_m
    }

    /// Fuel interval reached, within tolerance.
    #[inline]
    pub fn fuel_due(&self, rules: &HosRules) -> bool {
        self.since_fuel_m >= rules.fuel_interval_m - rules.distance_tolerance_m
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Account for `d` of driving that covered `metres`.
    pub fn record_drive(&mut self, d: TimeDelta, metres: f64) {
        self.travelled_m  += metres;
        self.remaining_m  -= metres;
        self.since_fuel_m += metres;
        self.shift_drive  = saturating(self.shift_drive, d);
        self.shift_duty   = saturating(self.shift_duty, d);
        self.cycle_used   = saturating(self.cycle_used, d);
    }

    /// Account for `d` of non-driving work (pickup, fuel, dropoff).
    pub fn record_on_duty(&mut self, d: TimeDelta) {
        self.shift_duty = saturating(self.shift_duty, d);
        self.cycle_used = saturating(self.cycle_used, d);
    }

    /// A mid-shift break keeps the duty window running but is not driving
    /// and does not count against the cycle.
    pub fn record_break(&mut self, d: TimeDelta) {
        self.shift_duty = saturating(self.shift_duty, d);
    }

    pub fn refuel(&mut self) {
        self.since_fuel_m = 0.0;
    }

    /// 10 h reset: a new shift begins, the cycle carries on.
    pub fn reset_shift(&mut self) {
        self.shift_drive = TimeDelta::zero();
        self.shift_duty  = TimeDelta::zero();
    }

    /// 34 h restart: clears the cycle and the shift.
    pub fn restart_cycle(&mut self) {
        self.cycle_used = TimeDelta::zero();
        self.reset_shift();
    }
}

/// Counters pin at `TimeDelta::MAX`; an absurd prior cycle then reads as
/// spent instead of overflowing.
fn saturating(a: TimeDelta, b: TimeDelta) -> TimeDelta {
    a.checked_add(&b).unwrap_or(TimeDelta::MAX)
}
