//! The `DutySimulator` and its run loop.

use chrono::{Local, NaiveDateTime, TimeDelta};
use hos_core::time::delta_secs;
use hos_core::{DutyStatus, HosRules};
use tracing::{debug, info};

use crate::machine::{after_drive, decide, drive_distance};
use crate::{
    DutyEvent, NoopObserver, Phase, ShiftState, SimError, SimObserver, SimResult, Stop,
    StopKind, Timeline,
};

// ── TripTotals ────────────────────────────────────────────────────────────────

/// Inputs to one run, as delivered by the routing collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTotals {
    /// Route length, metres.
    pub distance_m:       f64,
    /// Provider's driving time for the whole route, seconds.
    pub duration_s:       f64,
    /// Hours already used in the current cycle before this trip.
    pub cycle_used_hours: f64,
    /// When the pickup begins.
    pub start:            NaiveDateTime,
}

impl TripTotals {
    pub fn new(distance_m: f64, duration_s: f64, cycle_used_hours: f64, start: NaiveDateTime) -> Self {
        Self { distance_m, duration_s, cycle_used_hours, start }
    }

    /// Trip whose pickup begins at the current local time.
    pub fn starting_now(distance_m: f64, duration_s: f64, cycle_used_hours: f64) -> Self {
        Self::new(distance_m, duration_s, cycle_used_hours, Local::now().naive_local())
    }

    /// Average speed over the route, metres per second.  Zero when the
    /// duration is not positive.
    pub fn avg_speed_mps(&self) -> f64 {
        if self.duration_s > 0.0 {
            self.distance_m / self.duration_s
        } else {
            0.0
        }
    }
}

// ── DutySimulator ─────────────────────────────────────────────────────────────

/// Runs trips through the hours-of-service state machine.
///
/// The simulator itself is immutable; each run builds its own
/// [`ShiftState`], so one simulator can serve many trips, from many threads.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug, Clone)]
pub struct DutySimulator {
    pub(crate) rules:      HosRules,
    pub(crate) max_events: usize,
}

impl DutySimulator {
    pub fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Simulate `trip` to completion.
    pub fn simulate(&self, trip: &TripTotals) -> SimResult<Timeline> {
        self.run(trip, &mut NoopObserver)
    }

    /// Simulate `trip` to completion, reporting progress to `observer`.
    pub fn run<O: SimObserver>(&self, trip: &TripTotals, observer: &mut O) -> SimResult<Timeline> {
        let mut run = Run {
            rules:     &self.rules,
            speed_mps: trip.avg_speed_mps(),
            state:     ShiftState::new(trip.distance_m, trip.cycle_used_hours, trip.start),
            timeline:  Timeline::default(),
            observer,
        };

        let mut phase = Phase::Pickup;
        while phase != Phase::Complete {
            if run.timeline.events.len() > self.max_events {
                return Err(SimError::EventLimit { limit: self.max_events });
            }
            debug!(?phase, now = %run.state.now, remaining_m = run.state.remaining_m, "enter");
            phase = run.enter(phase)?;
        }

        run.observer.on_complete(&run.timeline);
        info!(
            events = run.timeline.events.len(),
            stops = run.timeline.stops.len(),
            elapsed_h = delta_secs(run.timeline.elapsed()) / 3_600.0,
            "trip simulated"
        );
        Ok(run.timeline)
    }

    /// Simulate independent trips on Rayon's thread pool.  Results are in
    /// input order.
    #[cfg(feature = "parallel")]
    pub fn simulate_many(&self, trips: &[TripTotals]) -> Vec<SimResult<Timeline>> {
        use rayon::prelude::*;

        trips.par_iter().map(|t| self.simulate(t)).collect()
    }
}

// ── Run ───────────────────────────────────────────────────────────────────────

/// Per-run state: the counters, the growing timeline, and the observer.
struct Run<'a, O: SimObserver> {
    rules:     &'a HosRules,
    speed_mps: f64,
    state:     ShiftState,
    timeline:  Timeline,
    observer:  &'a mut O,
}

impl<O: SimObserver> Run<'_, O> {
    /// Perform `phase`'s entry action and return the next phase.
    fn enter(&mut self, phase: Phase) -> SimResult<Phase> {
        let rules = self.rules;
        let next = match phase {
            Phase::Pickup => {
                let d = rules.pickup();
                self.emit(StopKind::Pickup.status(), d, 0.0, phase.stop_kind());
                self.state.record_on_duty(d);
                Phase::Deciding
            }
            Phase::Deciding => {
                let last = self.timeline.events.last().map(|e| e.status);
                decide(rules, &self.state, self.speed_mps, last)?
            }
            Phase::Driving(d) => {
                let metres = drive_distance(&self.state, d, self.speed_mps);
                self.emit(DutyStatus::Driving, d, metres, None);
                self.state.record_drive(d, metres);
                after_drive(rules, &self.state)
            }
            Phase::Break30 => {
                let d = rules.break_duration();
                self.emit(StopKind::Rest30.status(), d, 0.0, phase.stop_kind());
                self.state.record_break(d);
                Phase::Deciding
            }
            Phase::Rest10 => {
                self.emit(StopKind::Rest10.status(), rules.shift_reset(), 0.0, phase.stop_kind());
                self.state.reset_shift();
                Phase::Deciding
            }
            Phase::Restart34 => {
                self.emit(StopKind::Restart34.status(), rules.cycle_restart(), 0.0, phase.stop_kind());
                self.state.restart_cycle();
                Phase::Deciding
            }
            Phase::Fuel => {
                let d = rules.fuel_stop();
                self.emit(StopKind::Fuel.status(), d, 0.0, phase.stop_kind());
                self.state.refuel();
                self.state.record_on_duty(d);
                Phase::Deciding
            }
            Phase::Dropoff => {
                let d = rules.dropoff();
                self.emit(StopKind::Dropoff.status(), d, 0.0, phase.stop_kind());
                self.state.record_on_duty(d);
                Phase::Complete
            }
            Phase::Complete => Phase::Complete,
        };
        Ok(next)
    }

    /// Append an event of length `d` starting now, covering `metres`, with
    /// an optional stop marker at its start, and advance the clock.
    fn emit(&mut self, status: DutyStatus, d: TimeDelta, metres: f64, stop: Option<StopKind>) {
        let start = self.state.now;
        let start_m = self.state.travelled_m;

        if let Some(kind) = stop {
            let stop = Stop { kind, at: start, distance_m: start_m };
            self.observer.on_stop(&stop);
            self.timeline.stops.push(stop);
        }

        let event = DutyEvent {
            status,
            start,
            end: start + d,
            start_m,
            end_m: start_m + metres,
        };
        self.state.now = event.end;
        self.observer.on_event(&event);
        self.timeline.events.push(event);
    }
}
