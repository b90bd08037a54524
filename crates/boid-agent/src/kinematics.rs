//! One agent's integration step.
//!
//! ```text
//! velocity ← velocity + accel        (Drive::Accelerate)
//! velocity ← desired                 (Drive::Steer)
//! velocity ← clamp(velocity, max_speed)
//! heading  ← normalize(velocity)     unless velocity = 0
//! position ← position + velocity
//! ```

use boid_core::Vec2;

/// What the steering layer asks of an agent this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Drive {
    /// Add an acceleration to the current velocity.
    Accelerate(Vec2),
    /// Replace the current velocity with a desired one.  Used by pursuit,
    /// which fully determines where a hoik wants to go.
    Steer(Vec2),
}

/// Position, velocity, and heading of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    pub heading:  Vec2,
}

/// Advance `motion` by one tick.
///
/// The returned velocity is never longer than `max_speed`, and the returned
/// heading is `motion.heading` whenever the new velocity is zero.
pub fn integrate(motion: Motion, drive: Drive, max_speed: f32) -> Motion {
    let velocity = match drive {
        Drive::Accelerate(accel) => motion.velocity + accel,
        Drive::Steer(desired) => desired,
    };
    debug_assert!(velocity.x.is_finite() && velocity.y.is_finite(), "non-finite velocity {velocity}");

    let velocity = velocity.clamp_magnitude(max_speed);
    Motion {
        position: motion.position + velocity,
        velocity,
        heading:  velocity.normalize_or(motion.heading),
    }
}
