//! `hos-route` — route geometry, the route-provider seam, and trip legs.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`geometry`]  | `RouteGeometry`, `coordinate_at_distance`                  |
//! | [`provider`]  | `RouteProvider` trait, `RouteLeg`, `StraightLineProvider`  |
//! | [`trip`]      | `TripRoute` — current → pickup → dropoff assembly          |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                             |
//!
//! Geocoding and the third-party directions service stay outside this
//! crate: applications implement [`RouteProvider`] over whatever service they
//! use and hand the resulting legs to [`TripRoute::assemble`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod geometry;
pub mod provider;
pub mod trip;


pub use error::{RouteError, RouteResult};
pub use geometry::{coordinate_at_distance, RouteGeometry};
pub use provider::{RouteLeg, RouteProvider, StraightLineProvider};
pub use trip::TripRoute;
