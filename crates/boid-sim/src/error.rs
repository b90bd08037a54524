use boid_agent::AgentError;
use boid_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("obstacle {index} is invalid: {reason}")]
    InvalidObstacle {
        index:  usize,
        reason: &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
