//! `hos-logs` — calendar-day log sheets from a simulated duty timeline.
//!
//! The simulator's timeline runs continuously across midnights.  A driver's
//! log is kept per calendar day, so [`bucketize`] slices the timeline at each
//! local midnight and summarises every slice:
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`daily`]    | `DailyLog`, `GridEvent`, `LogStop`, `DaySummary`       |
//! | [`bucketize`]| `bucketize` — timeline → ordered `Vec<DailyLog>`       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_logs::bucketize;
//!
//! let timeline = sim.simulate(&trip)?;
//! let logs = bucketize(&timeline.events, &timeline.stops, &geometry);
//! println!("{}", serde_json::to_string_pretty(&logs)?);
//! ```

pub mod bucketize;
pub mod daily;

#[cfg(test)]
mod tests;

pub use bucketize::bucketize;
pub use daily::{DailyLog, DaySummary, GridEvent, LogStop};
