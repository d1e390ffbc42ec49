//! `hos-core` — foundational types for the hours-of-service trip planner.
//!
//! This crate is a dependency of every other `hos-*` crate.  It intentionally
//! has no `hos-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance                            |
//! | [`time`]    | `Span`, midnight/day helpers, seconds ↔ `TimeDelta`       |
//! | [`units`]   | metres ↔ miles, two-decimal rounding                      |
//! | [`status`]  | `DutyStatus` enum                                         |
//! | [`rules`]   | `HosRules` — the regulatory constants of one regime       |
//! | [`error`]   | `HosError`, `HosResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `hos-logs` and `hos-plan`.                     |

pub mod error;
pub mod geo;
pub mod rules;
pub mod status;
pub mod time;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HosError, HosResult};
pub use geo::GeoPoint;
pub use rules::HosRules;
pub use status::DutyStatus;
pub use time::Span;
pub use units::{METERS_PER_MILE, SECS_PER_HOUR};
