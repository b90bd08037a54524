//! Static circular obstacles.

use boid_core::{Arena, CoreResult, ObstacleSpec, SimRng, Vec2};

/// An immovable disc.  Obstacles never take part in a tick; they are only
/// ever read by steering rules and renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub position: Vec2,
    pub radius:   f32,
}

impl Obstacle {
    #[inline]
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Distance from `p` to the obstacle's rim.  Negative inside the disc.
    #[inline]
    pub fn surface_distance(&self, p: Vec2) -> f32 {
        self.position.distance(p) - self.radius
    }
}

/// Scatter `spec.count` obstacles uniformly over `arena`, each kept one
/// radius away from every edge so it is never clipped.
pub fn scatter_obstacles(spec: &ObstacleSpec, arena: &Arena, rng: &mut SimRng) -> CoreResult<Vec<Obstacle>> {
    spec.validate(arena)?;
    let obstacles = (0..spec.count)
        .map(|_| {
            let radius = rng.gen_range(spec.min_radius..=spec.max_radius);
            let position = Vec2::new(
                rng.gen_range(radius..=arena.width - radius),
                rng.gen_range(radius..=arena.height - radius),
            );
            Obstacle::new(position, radius)
        })
        .collect();
    Ok(obstacles)
}
