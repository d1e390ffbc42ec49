//! Duty-cycle state machine: phases and their guarded transitions.
//!
//! The transition functions here are pure: they read the rules and the
//! [`ShiftState`] and name the next phase.  Emitting events and mutating the
//! state on phase entry is the runner's job (see [`crate::sim`]), which keeps
//! every decision testable in isolation.

use chrono::TimeDelta;
use hos_core::time::secs_to_delta;
use hos_core::{DutyStatus, HosRules};

use crate::{ShiftState, SimError, SimResult, StopKind};

/// Where the simulated driver is in the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Loading at the shipper.  Entry phase.
    Pickup,
    /// Choose between resting, breaking, driving, and unloading.
    Deciding,
    /// Drive for the given time.
    Driving(TimeDelta),
    Break30,
    Rest10,
    Restart34,
    Fuel,
    /// Unloading at the receiver.
    Dropoff,
    /// Terminal.
    Complete,
}

impl Phase {
    /// The stop recorded on entering this phase, if any.
    pub fn stop_kind(self) -> Option<StopKind> {
        match self {
            Phase::Pickup    => Some(StopKind::Pickup),
            Phase::Break30   => Some(StopKind::Rest30),
            Phase::Rest10    => Some(StopKind::Rest10),
            Phase::Restart34 => Some(StopKind::Restart34),
            Phase::Fuel      => Some(StopKind::Fuel),
            Phase::Dropoff   => Some(StopKind::Dropoff),
            Phase::Deciding | Phase::Driving(_) | Phase::Complete => None,
        }
    }
}

/// Transition out of [`Phase::Deciding`].
///
/// Guards, in priority order:
///
/// 1. nothing left to drive → `Dropoff`.  A leftover inside the arrival
///    tolerance is still driven when the truck can move, so a short trip
///    keeps its distance; at zero speed it counts as arrived.
/// 2. shift drive or duty window spent → `Rest10`
/// 3. cycle spent → `Restart34`
/// 4. cumulative shift driving sits at the break mark and the previous event
///    was not already off-duty → `Break30`
/// 5. otherwise → `Driving(d)`, where `d` is the shortest of: time to the
///    next fuel stop, time to the destination, and the three limits, capped
///    so one segment never carries shift driving past the break mark.  Inside
///    the tolerance band, after the break, the cap no longer applies; that
///    keeps a break taken just short of the mark from being followed by a
///    second one at the mark itself.
///
/// The break rule approximates "30 minutes off after 8 hours of driving"
/// with cumulative shift driving; on-duty work between segments does not
/// reset it.
///
/// `last` is the status of the most recently emitted event.
pub fn decide(
    rules:     &HosRules,
    state:     &ShiftState,
    speed_mps: f64,
    last:      Option<DutyStatus>,
) -> SimResult<Phase> {
    let moving = !speed_mps.is_nan() && speed_mps > 0.0;
    if state.remaining_m <= 0.0 || (!moving && state.arrived(rules)) {
        return Ok(Phase::Dropoff);
    }

    let drive_left = state.drive_left(rules);
    let duty_left = state.duty_left(rules);
    if drive_left <= TimeDelta::zero() || duty_left <= TimeDelta::zero() {
        return Ok(Phase::Rest10);
    }

    let cycle_left = state.cycle_left(rules);
    if cycle_left <= TimeDelta::zero() {
        return Ok(Phase::Restart34);
    }

    if !moving {
        return Err(SimError::Stalled { remaining_m: state.remaining_m });
    }

    let to_fuel = secs_to_delta(state.fuel_left_m(rules) / speed_mps);
    let to_dest = secs_to_delta(state.remaining_m / speed_mps);
    let mut drive = to_fuel.min(to_dest).min(drive_left).min(duty_left).min(cycle_left);

    let mark = rules.break_after_drive();
    let off_mark = if state.shift_drive > mark {
        state.shift_drive - mark
    } else {
        mark - state.shift_drive
    };
    if off_mark < rules.break_tolerance() {
        if last != Some(DutyStatus::OffDuty) {
            return Ok(Phase::Break30);
        }
    } else if state.shift_drive < mark && state.shift_drive + drive > mark {
        drive = mark - state.shift_drive;
    }

    if drive <= TimeDelta::zero() {
        return Err(SimError::Stalled { remaining_m: state.remaining_m });
    }
    Ok(Phase::Driving(drive))
}

/// Transition out of [`Phase::Driving`]: unload if arrived, else refuel if
/// due, else decide again.
pub fn after_drive(rules: &HosRules, state: &ShiftState) -> Phase {
    if state.arrived(rules) {
        Phase::Dropoff
    } else if state.fuel_due(rules) {
        Phase::Fuel
    } else {
        Phase::Deciding
    }
}

/// Metres covered by driving for `d` at `speed_mps`, never past the
/// destination.
pub fn drive_distance(state: &ShiftState, d: TimeDelta, speed_mps: f64) -> f64 {
    let secs = hos_core::time::delta_secs(d);
    (secs * speed_mps).min(state.remaining_m).max(0.0)
}
