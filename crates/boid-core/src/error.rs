//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration failures surface unchanged from
//! whichever builder detected them.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `boid-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `boid-core`.
pub type CoreResult<T> = Result<T, CoreError>;
