//! The `SteeringModel` trait: the extension point for agent decisions.

use boid_agent::Drive;
use boid_core::AgentId;

use crate::SteeringContext;

/// Pluggable per-tick steering.
///
/// Called once per agent per tick, after the agent's target (if it is a
/// hoik) has been refreshed.  The returned [`Drive`] is integrated by the
/// world; the model never writes state itself.
///
/// # Thread safety
///
/// The snapshot tick mode may call `drive` for many agents in parallel, so
/// implementations must be `Send + Sync`.  Per-agent state belongs in the
/// `AgentStore`, not in the model.
///
/// # Example
///
/// ```rust,ignore
/// /// Boids drift toward the arena centre; hoiks sit still.
/// struct Drift;
///
/// impl SteeringModel for Drift {
///     fn drive(&self, agent: AgentId, ctx: &SteeringContext<'_>) -> Drive {
///         match ctx.agents.kind[agent.index()] {
///             AgentKind::Boid => Drive::Accelerate((ctx.arena.center() - ctx.position(agent)) * 0.001),
///             AgentKind::Hoik => Drive::Steer(Vec2::ZERO),
///         }
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    fn drive(&self, agent: AgentId, ctx: &SteeringContext<'_>) -> Drive;
}
