//! Simulation observer trait for progress reporting and data collection.

use crate::{DutyEvent, Stop, Timeline};

/// Callbacks invoked by [`DutySimulator::run`][crate::DutySimulator::run] as
/// the timeline grows.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — stop printer
///
/// ```rust,ignore
/// struct StopPrinter;
///
/// impl SimObserver for StopPrinter {
///     fn on_stop(&mut self, stop: &Stop) {
///         println!("{} at {}", stop.kind, stop.at);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each event is appended.
    fn on_event(&mut self, _event: &DutyEvent) {}

    /// Called after each stop is recorded, before its event is appended.
    fn on_stop(&mut self, _stop: &Stop) {}

    /// Called once after the dropoff event.  Not called if the run fails.
    fn on_complete(&mut self, _timeline: &Timeline) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
