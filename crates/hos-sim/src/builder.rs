//! Fluent builder for constructing a [`DutySimulator`].

use hos_core::HosRules;

use crate::{DutySimulator, SimResult};

/// Default cap on emitted events per run.  A 5 000-mile trip produces a few
/// hundred, so hitting this means the inputs make no progress.
pub const DEFAULT_MAX_EVENTS: usize = 100_000;

/// Fluent builder for [`DutySimulator`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.rules(r)`       | `HosRules::property_70_hour()`   |
/// | `.max_events(n)`  | [`DEFAULT_MAX_EVENTS`]           |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new()
///     .rules(HosRules::property_60_hour())
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimBuilder {
    rules:      Option<HosRules>,
    max_events: Option<usize>,
}

impl SimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regulatory regime to enforce.
    pub fn rules(mut self, rules: HosRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Fail a run with [`SimError::EventLimit`][crate::SimError::EventLimit]
    /// once it has emitted more than `n` events.
    pub fn max_events(mut self, n: usize) -> Self {
        self.max_events = Some(n);
        self
    }

    /// Validate the rule set and return a ready-to-run [`DutySimulator`].
    pub fn build(self) -> SimResult<DutySimulator> {
        let rules = self.rules.unwrap_or_default();
        rules.validate()?;
        Ok(DutySimulator {
            rules,
            max_events: self.max_events.unwrap_or(DEFAULT_MAX_EVENTS),
        })
    }
}
