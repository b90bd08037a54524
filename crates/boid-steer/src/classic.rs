//! `ClassicSteering`: weighted flocking for boids, pursuit for hoiks.

use boid_agent::Drive;
use boid_core::{AgentId, AgentKind, SteeringConfig, Vec2};

use crate::{SteeringContext, SteeringModel, rules};

/// The unweighted per-rule contributions acting on one boid.
///
/// Exposed so callers can inspect or visualise individual rules; the model
/// itself only needs [`total`][Self::total].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoidForces {
    pub cohesion:   Vec2,
    pub alignment:  Vec2,
    pub separation: Vec2,
    pub obstacles:  Vec2,
    pub hoiks:      Vec2,
    pub boundary:   Vec2,
}

impl BoidForces {
    /// Evaluate every boid rule for `agent`.
    pub fn compute(agent: AgentId, ctx: &SteeringContext<'_>) -> Self {
        let motion = ctx.agents.motion(agent);
        let flock = ctx.flock(agent, ctx.config.flock_radius);
        Self {
            cohesion:   rules::cohesion(motion.position, &flock),
            alignment:  rules::alignment(motion.velocity, &flock),
            separation: rules::separation(agent, ctx),
            obstacles:  rules::avoid_obstacles(agent, ctx),
            hoiks:      rules::avoid_hoiks(agent, ctx),
            boundary:   rules::contain(motion.position, &ctx.arena, ctx.config),
        }
    }

    /// `Σ wᵢ·ruleᵢ + boundary`.  The boundary push is unweighted and added
    /// last.
    pub fn total(&self, config: &SteeringConfig) -> Vec2 {
        self.cohesion * config.cohesion_weight
            + self.alignment * config.alignment_weight
            + self.separation * config.separation_weight
            + self.obstacles * config.obstacle_weight
            + self.hoiks * config.hoik_avoid_weight
            + self.boundary
    }
}

/// Boids flock, avoid obstacles and flee hoiks; hoiks chase their target.
///
/// | Kind | Drive                                                    |
/// |------|----------------------------------------------------------|
/// | Boid | `Accelerate(Σ wᵢ·ruleᵢ + boundary)`                      |
/// | Hoik | `Steer(pursuit + boundary)`, or `Accelerate(boundary)`   |
///
/// A hoik without a target coasts on its current velocity, nudged only by
/// the arena boundary.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClassicSteering;

impl SteeringModel for ClassicSteering {
    fn drive(&self, agent: AgentId, ctx: &SteeringContext<'_>) -> Drive {
        match ctx.agents.kind[agent.index()] {
            AgentKind::Boid => Drive::Accelerate(BoidForces::compute(agent, ctx).total(ctx.config)),
            AgentKind::Hoik => {
                let boundary = rules::contain(ctx.position(agent), &ctx.arena, ctx.config);
                match rules::pursue(agent, ctx) {
                    Some(desired) => Drive::Steer(desired + boundary),
                    None => Drive::Accelerate(boundary),
                }
            }
        }
    }
}
