use hos_route::RouteError;
use hos_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("routing failed: {0}")]
    Route(#[from] RouteError),

    #[error("duty simulation failed: {0}")]
    Sim(#[from] SimError),
}

pub type PlanResult<T> = Result<T, PlanError>;
