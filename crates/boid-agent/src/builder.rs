//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use boid_agent::AgentStoreBuilder;
//! use boid_core::{Arena, SpawnSpec, Vec2};
//!
//! let store = AgentStoreBuilder::new(Arena::new(800.0, 600.0), /*seed=*/ 42)
//!     .random_boids(50, &SpawnSpec::boid())
//!     .hoik(Vec2::new(10.0, 10.0), Vec2::ZERO, &SpawnSpec::hoik())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.boid_count(), 50);
//! assert_eq!(store.hoik_count(), 1);
//! ```

use boid_core::{AgentId, AgentKind, AgentRng, Arena, SpawnSpec, Vec2, WorldConfig};

use crate::{AgentError, AgentResult, AgentStore, Motion};

/// Heading given to an agent that starts without velocity.
const REST_HEADING: Vec2 = Vec2::X;

enum Placement {
    Random,
    Fixed { position: Vec2, velocity: Vec2 },
}

struct Pending {
    spec:      SpawnSpec,
    placement: Placement,
}

/// Fluent builder for [`AgentStore`].
///
/// Agents may be requested in any order; `build` lays out all boids first,
/// then all hoiks, each group in request order.  Randomized agents draw from
/// an [`AgentRng`] seeded by their final `AgentId`.
pub struct AgentStoreBuilder {
    arena:         Arena,
    seed:          u64,
    buffer_factor: f32,
    boids:         Vec<Pending>,
    hoiks:         Vec<Pending>,
}

impl AgentStoreBuilder {
    /// Create a builder for `arena` using `seed` as the global RNG seed.
    pub fn new(arena: Arena, seed: u64) -> Self {
        Self {
            arena,
            seed,
            buffer_factor: 2.0,
            boids: Vec::new(),
            hoiks: Vec::new(),
        }
    }

    /// A builder holding the randomized population described by `config`.
    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.arena, config.seed)
            .spawn_buffer_factor(config.spawn_buffer_factor)
            .random_boids(config.boid_count, &config.boid)
            .random_hoiks(config.hoik_count, &config.hoik)
    }

    /// Randomized agents keep `factor × size` away from every arena edge.
    pub fn spawn_buffer_factor(mut self, factor: f32) -> Self {
        self.buffer_factor = factor;
        self
    }

    pub fn random_boids(mut self, n: usize, spec: &SpawnSpec) -> Self {
        self.boids.extend((0..n).map(|_| Pending { spec: spec.clone(), placement: Placement::Random }));
        self
    }

    pub fn random_hoiks(mut self, n: usize, spec: &SpawnSpec) -> Self {
        self.hoiks.extend((0..n).map(|_| Pending { spec: spec.clone(), placement: Placement::Random }));
        self
    }

    /// Add one boid with a fixed initial state.
    pub fn boid(mut self, position: Vec2, velocity: Vec2, spec: &SpawnSpec) -> Self {
        self.boids.push(Pending { spec: spec.clone(), placement: Placement::Fixed { position, velocity } });
        self
    }

    /// Add one hoik with a fixed initial state.
    pub fn hoik(mut self, position: Vec2, velocity: Vec2, spec: &SpawnSpec) -> Self {
        self.hoiks.push(Pending { spec: spec.clone(), placement: Placement::Fixed { position, velocity } });
        self
    }

    /// Validate every request and construct the store.
    pub fn build(self) -> AgentResult<AgentStore> {
        let total = self.boids.len() + self.hoiks.len();
        if u32::try_from(total).is_err() {
            return Err(AgentError::TooManyAgents(total));
        }

        let mut store = AgentStore::with_capacity(self.boids.len(), total);
        let groups = [(AgentKind::Boid, &self.boids), (AgentKind::Hoik, &self.hoiks)];
        for (kind, group) in groups {
            for (index, pending) in group.iter().enumerate() {
                let id = AgentId(store.count as u32);
                let motion = self.spawn(kind, index, id, pending)?;
                store.push(kind, motion, pending.spec.max_speed, pending.spec.size);
            }
        }
        Ok(store)
    }

    fn spawn(&self, kind: AgentKind, index: usize, id: AgentId, pending: &Pending) -> AgentResult<Motion> {
        let spec = &pending.spec;
        spec.validate(&kind.to_string(), &self.arena, self.buffer_factor)?;

        match pending.placement {
            Placement::Random => {
                let mut rng = AgentRng::new(self.seed, id);
                let buffer = spec.size * self.buffer_factor;
                let position = Vec2::new(
                    rng.gen_range(buffer..=self.arena.width - buffer),
                    rng.gen_range(buffer..=self.arena.height - buffer),
                );
                let heading = rng.direction();
                let speed = rng.gen_range(spec.min_initial_speed..=spec.max_initial_speed);
                Ok(Motion { position, velocity: heading * speed, heading })
            }
            Placement::Fixed { position, velocity } => {
                let finite = |v: Vec2| v.x.is_finite() && v.y.is_finite();
                if !finite(position) {
                    return Err(AgentError::NonFinite { kind, index, what: "position" });
                }
                if !finite(velocity) {
                    return Err(AgentError::NonFinite { kind, index, what: "velocity" });
                }
                let speed = velocity.magnitude();
                if speed > spec.max_speed {
                    return Err(AgentError::SpeedAboveLimit { kind, index, speed, max_speed: spec.max_speed });
                }
                Ok(Motion { position, velocity, heading: velocity.normalize_or(REST_HEADING) })
            }
        }
    }
}
