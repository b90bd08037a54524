//! `boid-core`: foundational types for the boids/hoiks steering engine.
//!
//! This crate is a dependency of every other `boid-*` crate.  It has no
//! `boid-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ObstacleId`                               |
//! | [`vector`]      | `Vec2` and its zero-length normalize policy           |
//! | [`kind`]        | `AgentKind` (`Boid` / `Hoik`)                         |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`config`]      | `WorldConfig`, `SteeringConfig`, `SpawnSpec`, `Arena` |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; needed to   |
//! |         | load a `WorldConfig` from a file.                          |

pub mod config;
pub mod error;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Arena, ObstacleSpec, SpawnSpec, SteeringConfig, WorldConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ObstacleId};
pub use kind::AgentKind;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
pub use vector::Vec2;
