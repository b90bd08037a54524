//! Seeded random streams.
//!
//! Randomness only happens while a world is being built: agent spawn state
//! and obstacle placement.  Both are drawn from explicit `SmallRng` streams
//! so a seed fully determines the initial world.
//!
//! An agent's stream is keyed by its id:
//!
//! ```text
//! stream seed = world seed ^ (id · φ64)
//! ```
//!
//! where φ64 is the golden-ratio constant below.  Consecutive ids land far
//! apart in seed space, and adding agents never perturbs the ones already
//! spawned.  World-level draws go through a [`SimRng`] and its children.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Vec2};

/// ⌊2⁶⁴ / φ⌋, the usual Fibonacci-hashing multiplier.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Spawn-time stream for one agent.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(world_seed: u64, agent: AgentId) -> Self {
        let mixed = world_seed ^ u64::from(agent.0).wrapping_mul(GOLDEN_GAMMA);
        AgentRng(SmallRng::seed_from_u64(mixed))
    }

    /// Uniform sample from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniformly distributed unit vector.
    pub fn direction(&mut self) -> Vec2 {
        Vec2::from_angle(self.0.gen_range(0.0..std::f32::consts::TAU))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// World-level stream for draws not tied to one agent (obstacle placement).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream tagged by `stream`, so separate
    /// construction stages never share draws.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let base: u64 = self.0.r#gen();
        SimRng(SmallRng::seed_from_u64(base ^ stream.wrapping_mul(GOLDEN_GAMMA)))
    }

    /// Uniform sample from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
