//! `boid-agent`: Structure-of-Arrays agent storage for the steering engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA state), checked `StoreParts`            |
//! | [`obstacle`]    | `Obstacle`, seeded obstacle scattering                    |
//! | [`builder`]     | `AgentStoreBuilder` (seeded or fixed spawning)            |
//! | [`kinematics`]  | `Drive`, `Motion`, `integrate` - one agent's tick step    |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # Iteration order
//!
//! Boids always occupy `AgentId(0) .. AgentId(boid_count)` and hoiks follow.
//! The builder enforces this regardless of the order agents were requested
//! in, so ascending `AgentId` order is the world's tick order.

pub mod builder;
pub mod error;
pub mod kinematics;
pub mod obstacle;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use kinematics::{Drive, Motion, integrate};
pub use obstacle::{Obstacle, scatter_obstacles};
pub use store::{AgentStore, StoreParts};
