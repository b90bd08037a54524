//! A steering model that never steers.

use boid_agent::Drive;
use boid_core::{AgentId, Vec2};

use crate::{SteeringContext, SteeringModel};

/// Every agent keeps its current velocity.
///
/// Useful as a baseline in tests and benchmarks: it isolates the cost of the
/// tick loop and target assignment from the cost of the steering rules.
pub struct NoopSteering;

impl SteeringModel for NoopSteering {
    fn drive(&self, _agent: AgentId, _ctx: &SteeringContext<'_>) -> Drive {
        Drive::Accelerate(Vec2::ZERO)
    }
}
