//! `boid-steer`: steering rules and predator target assignment.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`context`] | `SteeringContext<'a>` - read-only world view for one decision   |
//! | [`rules`]   | One pure function per steering rule                             |
//! | [`model`]   | `SteeringModel` trait                                           |
//! | [`classic`] | `ClassicSteering` - weighted boid rules, pursuing hoiks         |
//! | [`noop`]    | `NoopSteering` - agents coast                                   |
//! | [`target`]  | `TargetState`, `assign_target` - exclusive prey selection       |
//!
//! # Design notes
//!
//! Rules never mutate anything; they map an agent and a context to a
//! contribution vector.  A [`SteeringModel`] combines the rules that apply to
//! the agent's kind into a single [`Drive`][boid_agent::Drive], which the
//! world then integrates.  Target assignment is the only step that writes
//! shared state and runs strictly in world order.

pub mod classic;
pub mod context;
pub mod model;
pub mod noop;
pub mod rules;
pub mod target;


pub use classic::{BoidForces, ClassicSteering};
pub use context::SteeringContext;
pub use model::SteeringModel;
pub use noop::NoopSteering;
pub use target::{TargetState, TargetUpdate, assign_target, select_target, target_state};
