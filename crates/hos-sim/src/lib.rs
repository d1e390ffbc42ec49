//! `hos-sim` — hours-of-service duty simulator.
//!
//! Given trip totals (distance, driving time) and the driver's prior cycle
//! hours, the simulator produces a contiguous timeline of duty-status events
//! and the stops that caused them.
//!
//! # State machine
//!
//! ```text
//! Pickup ─▶ Deciding ─┬─▶ Dropoff ─▶ Complete           (arrived)
//!              ▲      ├─▶ Rest10    ─┐                  (shift drive/duty spent)
//!              │      ├─▶ Restart34 ─┤                  (cycle spent)
//!              │      ├─▶ Break30   ─┤                  (at the break mark)
//!              │      └─▶ Driving ───┼─▶ Dropoff        (arrived)
//!              │                     ├─▶ Fuel ─┐        (fuel interval reached)
//!              └─────────────────────┴─────────┘
//! ```
//!
//! Every transition is a function of the [`HosRules`][hos_core::HosRules]
//! value and the [`ShiftState`]; see [`machine`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Adds `DutySimulator::simulate_many` on Rayon's pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_core::HosRules;
//! use hos_sim::{SimBuilder, TripTotals};
//!
//! let sim = SimBuilder::new().rules(HosRules::default()).build()?;
//! let timeline = sim.simulate(&TripTotals::starting_now(804_670.0, 32_727.0, 12.0))?;
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod machine;
pub mod observer;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{DutyEvent, Stop, StopKind, Timeline};
pub use machine::Phase;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{DutySimulator, TripTotals};
pub use state::ShiftState;
