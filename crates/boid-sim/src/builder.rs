//! Fluent builder for constructing a [`World`].

use boid_agent::{AgentStore, AgentStoreBuilder, Obstacle, scatter_obstacles};
use boid_core::{SimRng, Tick, WorldConfig};
use boid_steer::SteeringModel;
use tracing::info;

use crate::{SimError, SimResult, TickMode, World};

/// RNG stream reserved for obstacle placement.  Agents draw from per-agent
/// streams keyed by id, so the two never overlap.
const OBSTACLE_STREAM: u64 = 1;

/// Fluent builder for [`World<S>`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: arena, population, spawn specs, steering, seed, …
/// - `S: SteeringModel`: usually [`boid_steer::ClassicSteering`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                              |
/// |-------------------|------------------------------------------------------|
/// | `.mode(m)`        | `TickMode::Sequential`                               |
/// | `.agents(store)`  | Seeded random population from the config             |
/// | `.obstacles(v)`   | `config.obstacles.count` seeded random obstacles     |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(WorldConfig::default(), ClassicSteering)
///     .mode(TickMode::Snapshot)
///     .build()?;
/// world.run(&mut NoopObserver);
/// ```
pub struct WorldBuilder<S: SteeringModel> {
    config:    WorldConfig,
    steering:  S,
    mode:      TickMode,
    agents:    Option<AgentStore>,
    obstacles: Option<Vec<Obstacle>>,
}

impl<S: SteeringModel> WorldBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: WorldConfig, steering: S) -> Self {
        Self {
            config,
            steering,
            mode:      TickMode::default(),
            agents:    None,
            obstacles: None,
        }
    }

    pub fn mode(mut self, mode: TickMode) -> Self {
        self.mode = mode;
        self
    }

    /// Supply a pre-built population (for example hand-placed agents from
    /// [`AgentStoreBuilder::boid`]).  The config's counts and spawn specs are
    /// then ignored.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Supply fixed obstacles instead of scattering `config.obstacles`.
    pub fn obstacles(mut self, obstacles: Vec<Obstacle>) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    /// Validate the config, spawn whatever was not supplied, and return a
    /// ready-to-run [`World`] at tick 0.
    pub fn build(self) -> SimResult<World<S>> {
        self.config.validate()?;

        let agents = match self.agents {
            Some(agents) => agents,
            None => AgentStoreBuilder::from_config(&self.config).build()?,
        };

        let obstacles = match self.obstacles {
            Some(obstacles) => {
                for (index, o) in obstacles.iter().enumerate() {
                    if !(o.position.x.is_finite() && o.position.y.is_finite()) {
                        return Err(SimError::InvalidObstacle { index, reason: "non-finite position" });
                    }
                    if !(o.radius.is_finite() && o.radius > 0.0) {
                        return Err(SimError::InvalidObstacle { index, reason: "radius must be positive" });
                    }
                }
                obstacles
            }
            None => {
                let mut rng = SimRng::new(self.config.seed).child(OBSTACLE_STREAM);
                scatter_obstacles(&self.config.obstacles, &self.config.arena, &mut rng)?
            }
        };

        info!(
            boids     = agents.boid_count(),
            hoiks     = agents.hoik_count(),
            obstacles = obstacles.len(),
            mode      = ?self.mode,
            seed      = self.config.seed,
            "world built"
        );

        Ok(World {
            config: self.config,
            mode: self.mode,
            agents,
            obstacles,
            steering: self.steering,
            tick: Tick::ZERO,
        })
    }
}
