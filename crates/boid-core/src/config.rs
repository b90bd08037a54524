//! Construction-time configuration.
//!
//! Every value here is read once when the world is built and never changes
//! during a run.  All structs implement `Default` with the engine's reference
//! tuning, and with the `serde` feature every field is optional in a config
//! file (`#[serde(default)]`), so a file only needs to name what it overrides.
//!
//! The default steering weights are one reasonable tuning among several that
//! produce convincing flocks; they are configuration, not physics.

use crate::{CoreError, CoreResult, Tick, Vec2};

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The bounded rectangle `[0, width] × [0, height]` agents live in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Arena {
    pub width:  f32,
    pub height: f32,
}

impl Arena {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// `true` if `p` lies inside the arena, edges included.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

// ── SpawnSpec ─────────────────────────────────────────────────────────────────

/// Per-kind kinematic limits and randomized spawn ranges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnSpec {
    /// Hard speed limit in arena units per tick.
    pub max_speed: f32,
    /// Lower bound of the randomized initial speed.
    pub min_initial_speed: f32,
    /// Upper bound of the randomized initial speed.  Must not exceed
    /// `max_speed`.
    pub max_initial_speed: f32,
    /// Body length in arena units.  Used for the spawn buffer and handed to
    /// renderers.
    pub size: f32,
}

impl SpawnSpec {
    /// Reference tuning for boids.
    pub fn boid() -> Self {
        Self {
            max_speed:         4.0,
            min_initial_speed: 1.0,
            max_initial_speed: 3.0,
            size:              6.0,
        }
    }

    /// Reference tuning for hoiks: slightly faster and larger than boids.
    pub fn hoik() -> Self {
        Self {
            max_speed:         4.5,
            min_initial_speed: 1.0,
            max_initial_speed: 2.0,
            size:              10.0,
        }
    }

    /// Check limits and that the spawn buffer leaves room inside `arena`.
    pub fn validate(&self, what: &str, arena: &Arena, buffer_factor: f32) -> CoreResult<()> {
        check(
            self.max_speed.is_finite() && self.max_speed > 0.0,
            || format!("{what}.max_speed must be positive, got {}", self.max_speed),
        )?;
        check(
            self.min_initial_speed >= 0.0
                && self.min_initial_speed <= self.max_initial_speed
                && self.max_initial_speed <= self.max_speed,
            || format!(
                "{what}: need 0 <= min_initial_speed ({}) <= max_initial_speed ({}) <= max_speed ({})",
                self.min_initial_speed, self.max_initial_speed, self.max_speed
            ),
        )?;
        check(
            self.size.is_finite() && self.size >= 0.0,
            || format!("{what}.size must be non-negative, got {}", self.size),
        )?;
        let buffer = self.size * buffer_factor;
        check(
            2.0 * buffer < arena.width && 2.0 * buffer < arena.height,
            || format!("{what} spawn buffer {buffer} does not fit in the arena"),
        )
    }
}

impl Default for SpawnSpec {
    fn default() -> Self {
        Self::boid()
    }
}

// ── ObstacleSpec ──────────────────────────────────────────────────────────────

/// How many static obstacles to scatter and how large they are.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleSpec {
    pub count:      usize,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl ObstacleSpec {
    /// Check the radius range; a zero count skips every other check.
    pub fn validate(&self, arena: &Arena) -> CoreResult<()> {
        if self.count == 0 {
            return Ok(());
        }
        check(
            self.min_radius > 0.0 && self.min_radius <= self.max_radius,
            || format!(
                "obstacles: need 0 < min_radius ({}) <= max_radius ({})",
                self.min_radius, self.max_radius
            ),
        )?;
        check(
            2.0 * self.max_radius < arena.width && 2.0 * self.max_radius < arena.height,
            || format!("obstacle radius {} does not fit in the arena", self.max_radius),
        )
    }
}

impl Default for ObstacleSpec {
    fn default() -> Self {
        Self {
            count:      4,
            min_radius: 15.0,
            max_radius: 40.0,
        }
    }
}

// ── SteeringConfig ────────────────────────────────────────────────────────────

/// Named weights and radii for every steering rule.
///
/// | Field               | Rule                                   |
/// |---------------------|----------------------------------------|
/// | `cohesion_*`        | toward the local flock's centre        |
/// | `alignment_weight`  | toward the local flock's mean velocity |
/// | `separation_*`      | away from crowding boids (summed)      |
/// | `obstacle_*`        | away from nearby obstacles (summed)    |
/// | `hoik_avoid_*`      | away from nearby hoiks (summed)        |
/// | `boundary_*`        | fixed inward push near the arena edge  |
/// | `give_up_radius`    | hoik abandons a target beyond this     |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringConfig {
    pub cohesion_weight:   f32,
    pub alignment_weight:  f32,
    pub separation_weight: f32,
    pub obstacle_weight:   f32,
    pub hoik_avoid_weight: f32,

    /// Radius of the local flock used by cohesion and alignment.
    pub flock_radius:      f32,
    pub separation_radius: f32,
    /// Surface distance under which an obstacle repels.
    pub obstacle_margin:   f32,
    pub hoik_avoid_radius: f32,
    pub give_up_radius:    f32,

    /// Width of the inset band along each arena edge.
    pub boundary_buffer:   f32,
    /// Magnitude of the inward component applied per violated axis.
    pub boundary_push:     f32,
}

impl SteeringConfig {
    pub fn validate(&self) -> CoreResult<()> {
        let named = [
            ("cohesion_weight",   self.cohesion_weight),
            ("alignment_weight",  self.alignment_weight),
            ("separation_weight", self.separation_weight),
            ("obstacle_weight",   self.obstacle_weight),
            ("hoik_avoid_weight", self.hoik_avoid_weight),
            ("flock_radius",      self.flock_radius),
            ("separation_radius", self.separation_radius),
            ("obstacle_margin",   self.obstacle_margin),
            ("hoik_avoid_radius", self.hoik_avoid_radius),
            ("give_up_radius",    self.give_up_radius),
            ("boundary_buffer",   self.boundary_buffer),
            ("boundary_push",     self.boundary_push),
        ];
        for (name, value) in named {
            check(value.is_finite() && value >= 0.0, || {
                format!("steering.{name} must be finite and non-negative, got {value}")
            })?;
        }
        Ok(())
    }
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            cohesion_weight:   0.01,
            alignment_weight:  0.05,
            separation_weight: 0.4,
            obstacle_weight:   0.2,
            hoik_avoid_weight: 0.2,

            flock_radius:      50.0,
            separation_radius: 16.0,
            obstacle_margin:   16.0,
            hoik_avoid_radius: 64.0,
            give_up_radius:    200.0,

            boundary_buffer:   30.0,
            boundary_push:     1.0,
        }
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration for one run.
///
/// Typically loaded from a TOML file by the driver and passed to the world
/// builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    pub arena: Arena,

    pub boid_count: usize,
    pub hoik_count: usize,

    pub boid:      SpawnSpec,
    pub hoik:      SpawnSpec,
    pub obstacles: ObstacleSpec,

    /// Randomized spawns keep `spawn_buffer_factor × size` from every edge.
    pub spawn_buffer_factor: f32,

    pub steering: SteeringConfig,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks simulated by `World::run`.
    pub total_ticks: u64,

    /// Hand a frame to observers every N ticks.  0 disables frames.
    pub frame_interval_ticks: u64,
}

impl WorldConfig {
    /// The tick at which `World::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Check every field; the first violation is returned.
    pub fn validate(&self) -> CoreResult<()> {
        check(
            self.arena.width.is_finite()
                && self.arena.height.is_finite()
                && self.arena.width > 0.0
                && self.arena.height > 0.0,
            || format!("arena must have positive size, got {}x{}", self.arena.width, self.arena.height),
        )?;
        check(
            self.spawn_buffer_factor.is_finite() && self.spawn_buffer_factor >= 0.0,
            || format!("spawn_buffer_factor must be non-negative, got {}", self.spawn_buffer_factor),
        )?;
        let population = self.boid_count.checked_add(self.hoik_count);
        check(
            population.is_some_and(|n| u32::try_from(n).is_ok()),
            || format!("population {} + {} exceeds the AgentId range", self.boid_count, self.hoik_count),
        )?;
        self.boid.validate("boid", &self.arena, self.spawn_buffer_factor)?;
        self.hoik.validate("hoik", &self.arena, self.spawn_buffer_factor)?;
        self.obstacles.validate(&self.arena)?;
        self.steering.validate()
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            arena:                Arena::default(),
            boid_count:           60,
            hoik_count:           3,
            boid:                 SpawnSpec::boid(),
            hoik:                 SpawnSpec::hoik(),
            obstacles:            ObstacleSpec::default(),
            spawn_buffer_factor:  2.0,
            steering:             SteeringConfig::default(),
            seed:                 42,
            total_ticks:          1_000,
            frame_interval_ticks: 1,
        }
    }
}

fn check(ok: bool, msg: impl FnOnce() -> String) -> CoreResult<()> {
    if ok { Ok(()) } else { Err(CoreError::Config(msg())) }
}
