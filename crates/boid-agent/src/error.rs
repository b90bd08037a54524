use boid_core::{AgentKind, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{kind} #{index}: {what} is not finite")]
    NonFinite {
        kind:  AgentKind,
        index: usize,
        what:  &'static str,
    },

    #[error("{kind} #{index}: initial speed {speed} exceeds max_speed {max_speed}")]
    SpeedAboveLimit {
        kind:      AgentKind,
        index:     usize,
        speed:     f32,
        max_speed: f32,
    },

    #[error("population {0} exceeds the AgentId range")]
    TooManyAgents(usize),

    #[error("inconsistent agent store: {0}")]
    InvalidStore(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
