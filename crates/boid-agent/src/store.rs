//! Core agent storage: `AgentStore` (SoA kinematic and identity state).
//!
//! Every `Vec` field has exactly `count` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let pos = store.position[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! `AgentStore` is `Clone` so the snapshot tick mode can take a read-only
//! copy of last tick's state at the start of a tick.
//!
//! A store rebuilt from raw arrays goes through [`StoreParts`], which checks
//! the layout before handing out an `AgentStore`.

use boid_core::{AgentId, AgentKind, Vec2};

use crate::{AgentError, AgentResult, Drive, Motion, integrate};

/// Structure-of-Arrays storage for every agent in the world.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StoreParts"))]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Rule set of each agent.  All boids precede all hoiks.
    pub kind: Vec<AgentKind>,

    // ── Kinematic state ───────────────────────────────────────────────────
    pub position: Vec<Vec2>,

    /// Never longer than `max_speed` after an integration step.
    pub velocity: Vec<Vec2>,

    /// Unit-length facing.  Only changes when velocity is non-zero.
    pub heading: Vec<Vec2>,

    pub max_speed: Vec<f32>,

    /// Body length, for renderers and the spawn buffer.
    pub size: Vec<f32>,

    // ── Pursuit state ─────────────────────────────────────────────────────
    /// The boid a hoik is chasing.  Always `None` for boids.  A non-owning
    /// index that is revalidated every tick.
    pub target: Vec<Option<AgentId>>,

    boid_count: usize,
}

impl AgentStore {
    /// An empty store (no boids, no hoiks).
    pub fn empty() -> Self {
        Self::with_capacity(0, 0)
    }

    pub(crate) fn with_capacity(boid_count: usize, capacity: usize) -> Self {
        Self {
            count: 0,
            kind: Vec::with_capacity(capacity),
            position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            heading: Vec::with_capacity(capacity),
            max_speed: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            target: Vec::with_capacity(capacity),
            boid_count,
        }
    }

    pub(crate) fn push(&mut self, kind: AgentKind, motion: Motion, max_speed: f32, size: f32) {
        self.kind.push(kind);
        self.position.push(motion.position);
        self.velocity.push(motion.velocity);
        self.heading.push(motion.heading);
        self.max_speed.push(max_speed);
        self.size.push(size);
        self.target.push(None);
        self.count += 1;
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn boid_count(&self) -> usize {
        self.boid_count
    }

    #[inline]
    pub fn hoik_count(&self) -> usize {
        self.count - self.boid_count
    }

    /// `true` if `agent` is in range.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// `true` if `agent` is in range and is a boid.
    #[inline]
    pub fn is_boid(&self, agent: AgentId) -> bool {
        agent.index() < self.boid_count
    }

    /// Iterator over all `AgentId`s in tick order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.count as u32).map(AgentId)
    }

    /// Iterator over the boids' `AgentId`s in tick order.
    pub fn boid_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.boid_count as u32).map(AgentId)
    }

    /// Iterator over the hoiks' `AgentId`s in tick order.
    pub fn hoik_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (self.boid_count as u32..self.count as u32).map(AgentId)
    }

    /// Iterator over the `AgentId`s of one kind in tick order.
    pub fn ids_of(&self, kind: AgentKind) -> impl Iterator<Item = AgentId> + use<> {
        let range = match kind {
            AgentKind::Boid => 0..self.boid_count as u32,
            AgentKind::Hoik => self.boid_count as u32..self.count as u32,
        };
        range.map(AgentId)
    }

    /// Current kinematic state of one agent.
    #[inline]
    pub fn motion(&self, agent: AgentId) -> Motion {
        let i = agent.index();
        Motion {
            position: self.position[i],
            velocity: self.velocity[i],
            heading:  self.heading[i],
        }
    }

    /// Run one integration step for `agent` and write the result back.
    pub fn apply(&mut self, agent: AgentId, drive: Drive) {
        let i = agent.index();
        let next = integrate(self.motion(agent), drive, self.max_speed[i]);
        self.position[i] = next.position;
        self.velocity[i] = next.velocity;
        self.heading[i] = next.heading;
    }
}

impl Default for AgentStore {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Checked reconstruction ────────────────────────────────────────────────

/// The raw arrays of an [`AgentStore`], unchecked.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct StoreParts {
    pub count:      usize,
    pub kind:       Vec<AgentKind>,
    pub position:   Vec<Vec2>,
    pub velocity:   Vec<Vec2>,
    pub heading:    Vec<Vec2>,
    pub max_speed:  Vec<f32>,
    pub size:       Vec<f32>,
    pub target:     Vec<Option<AgentId>>,
    pub boid_count: usize,
}

impl AgentStore {
    /// Split the store into its raw arrays.
    pub fn into_parts(self) -> StoreParts {
        StoreParts {
            count:      self.count,
            kind:       self.kind,
            position:   self.position,
            velocity:   self.velocity,
            heading:    self.heading,
            max_speed:  self.max_speed,
            size:       self.size,
            target:     self.target,
            boid_count: self.boid_count,
        }
    }
}

impl TryFrom<StoreParts> for AgentStore {
    type Error = AgentError;

    fn try_from(parts: StoreParts) -> AgentResult<Self> {
        parts.check()?;
        Ok(Self {
            count:      parts.count,
            kind:       parts.kind,
            position:   parts.position,
            velocity:   parts.velocity,
            heading:    parts.heading,
            max_speed:  parts.max_speed,
            size:       parts.size,
            target:     parts.target,
            boid_count: parts.boid_count,
        })
    }
}

impl StoreParts {
    fn check(&self) -> AgentResult<()> {
        let invalid = |msg: String| Err(AgentError::InvalidStore(msg));

        if u32::try_from(self.count).is_err() {
            return Err(AgentError::TooManyAgents(self.count));
        }
        for (name, len) in [
            ("kind", self.kind.len()),
            ("position", self.position.len()),
            ("velocity", self.velocity.len()),
            ("heading", self.heading.len()),
            ("max_speed", self.max_speed.len()),
            ("size", self.size.len()),
            ("target", self.target.len()),
        ] {
            if len != self.count {
                return invalid(format!("{name} has {len} elements, expected {}", self.count));
            }
        }
        if self.boid_count > self.count {
            return invalid(format!("boid_count {} exceeds count {}", self.boid_count, self.count));
        }
        for (i, &kind) in self.kind.iter().enumerate() {
            let expected = if i < self.boid_count { AgentKind::Boid } else { AgentKind::Hoik };
            if kind != expected {
                return invalid(format!("agent #{i} is a {kind}, expected a {expected}"));
            }
        }
        if let Some(i) = self.target[..self.boid_count].iter().position(Option::is_some) {
            return invalid(format!("boid #{i} has a target"));
        }
        Ok(())
    }
}
