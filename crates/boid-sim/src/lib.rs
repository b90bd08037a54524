//! `boid-sim`: world and tick loop for the boids/hoiks steering engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   for agent in AgentId order (boids, then hoiks):
//!     ① Target   hoiks only: revalidate, reselect if lost or too far
//!     ② Steer    SteeringModel::drive → Accelerate(a) | Steer(v)
//!     ③ Move     clamp speed, update heading, integrate position
//! ```
//!
//! In [`TickMode::Snapshot`] the same three steps run as phases over a copy
//! of last tick's state: ① sequentially, ② against an R-tree (parallel with
//! the `parallel` feature), ③ as a sequential commit.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the snapshot mode's force phase on Rayon.           |
//! | `serde`    | `Serialize`/`Deserialize` on frames and config.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use boid_core::WorldConfig;
//! use boid_sim::{NoopObserver, WorldBuilder};
//! use boid_steer::ClassicSteering;
//!
//! let mut world = WorldBuilder::new(WorldConfig::default(), ClassicSteering).build()?;
//! world.run(&mut NoopObserver);
//! let frame = world.frame();
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod observer;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use frame::{AgentView, Frame, ObstacleView};
pub use observer::{NoopObserver, TracingObserver, WorldObserver};
pub use world::{TickMode, TickStats, World};
