//! Planner error type.
//!
//! Sub-crates define their own error enums and convert `HosError` into them
//! via `From` impls.

use thiserror::Error;

/// The top-level error type for `hos-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HosError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `hos-core`.
pub type HosResult<T> = Result<T, HosError>;
