use hos_core::HosError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid rule set: {0}")]
    Rules(#[from] HosError),

    #[error("simulation stalled with {remaining_m:.1} m left: average speed is zero")]
    Stalled { remaining_m: f64 },

    #[error("simulation exceeded {limit} events without reaching the destination")]
    EventLimit { limit: usize },
}

pub type SimResult<T> = Result<T, SimError>;
