//! Steering rules, one pure function each.
//!
//! | Rule                | Contribution                                        |
//! |---------------------|-----------------------------------------------------|
//! | [`cohesion`]        | `avg_position(flock) − position`                    |
//! | [`alignment`]       | `avg_velocity(flock) − velocity`                    |
//! | [`separation`]      | Σ `(self − n)` over boids closer than the radius    |
//! | [`avoid_obstacles`] | Σ `(self − o)` over obstacles inside the margin     |
//! | [`avoid_hoiks`]     | Σ `(self − h)` over hoiks closer than the radius    |
//! | [`contain`]         | fixed inward push on each axis inside the buffer    |
//! | [`pursue`]          | unit direction to the target × `max_speed`          |
//!
//! Sums are not averaged: three crowding neighbours push three
//! times as hard as one.  Every rule returns an unweighted vector; weights
//! are applied by the model that combines them.

use boid_core::{AgentId, AgentKind, Arena, SteeringConfig, Vec2};
use boid_spatial::{Flock, obstacles_near};

use crate::SteeringContext;

/// Steer toward the centre of the local flock.  Zero for an empty flock.
pub fn cohesion(position: Vec2, flock: &Flock<'_>) -> Vec2 {
    flock.avg_position().map_or(Vec2::ZERO, |centre| centre - position)
}

/// Match the mean velocity of the local flock.  Zero for an empty flock.
pub fn alignment(velocity: Vec2, flock: &Flock<'_>) -> Vec2 {
    flock.avg_velocity().map_or(Vec2::ZERO, |mean| mean - velocity)
}

/// Push away from every boid strictly closer than `separation_radius`.
pub fn separation(agent: AgentId, ctx: &SteeringContext<'_>) -> Vec2 {
    repel_from(agent, AgentKind::Boid, ctx.config.separation_radius, ctx)
}

/// Push away from every hoik strictly closer than `hoik_avoid_radius`.
pub fn avoid_hoiks(agent: AgentId, ctx: &SteeringContext<'_>) -> Vec2 {
    repel_from(agent, AgentKind::Hoik, ctx.config.hoik_avoid_radius, ctx)
}

/// Push away from the centre of every obstacle whose rim is closer than
/// `obstacle_margin`.
pub fn avoid_obstacles(agent: AgentId, ctx: &SteeringContext<'_>) -> Vec2 {
    let position = ctx.position(agent);
    obstacles_near(ctx.obstacles, position, ctx.config.obstacle_margin)
        .map(|(_, obstacle)| position - obstacle.position)
        .sum()
}

/// Fixed inward push on each axis where `position` lies inside the buffer
/// band along an arena edge.  Zero anywhere in the interior.
pub fn contain(position: Vec2, arena: &Arena, config: &SteeringConfig) -> Vec2 {
    let axis = |p: f32, extent: f32| {
        if p < config.boundary_buffer {
            config.boundary_push
        } else if p > extent - config.boundary_buffer {
            -config.boundary_push
        } else {
            0.0
        }
    };
    Vec2::new(axis(position.x, arena.width), axis(position.y, arena.height))
}

/// Desired velocity of a hoik chasing its current target: full speed
/// straight at it.
///
/// `None` if the hoik has no valid target.  A target sitting exactly on the
/// hoik is chased along the hoik's current heading.
pub fn pursue(hoik: AgentId, ctx: &SteeringContext<'_>) -> Option<Vec2> {
    let agents = ctx.agents;
    let target = agents.target[hoik.index()].filter(|&t| agents.is_boid(t))?;
    let i = hoik.index();
    let direction = (agents.position[target.index()] - agents.position[i]).normalize_or(agents.heading[i]);
    Some(direction * agents.max_speed[i])
}

fn repel_from(agent: AgentId, kind: AgentKind, radius: f32, ctx: &SteeringContext<'_>) -> Vec2 {
    let position = ctx.position(agent);
    let r2 = radius * radius;
    ctx.neighbors(agent, kind, radius)
        .into_iter()
        .map(|other| ctx.position(other))
        .filter(|&other| position.distance_sq(other) < r2)
        .map(|other| position - other)
        .sum()
}
