//! Routing error type.

use thiserror::Error;

use hos_core::GeoPoint;

/// Errors produced by `hos-route` and by [`RouteProvider`][crate::RouteProvider]
/// implementations.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("route provider error: {0}")]
    Provider(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
