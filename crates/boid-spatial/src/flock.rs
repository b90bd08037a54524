//! Transient aggregate view over a neighbor set.

use boid_agent::AgentStore;
use boid_core::{AgentId, AgentKind, Vec2};

use crate::NeighborQuery;

/// A set of boids around a reference point, with derived averages.
///
/// Built per query and dropped right after; it never mutates the store.
///
/// # Empty flocks
///
/// Every aggregate returns `None` when the flock has no members.  Steering
/// rules treat that as "no contribution" rather than inventing a neutral
/// position.
pub struct Flock<'a> {
    agents:  &'a AgentStore,
    members: Vec<AgentId>,
}

impl<'a> Flock<'a> {
    pub fn new(agents: &'a AgentStore, members: Vec<AgentId>) -> Self {
        Self { agents, members }
    }

    /// The boids within `radius` of `origin`, excluding `exclude`.
    pub fn around<Q: NeighborQuery + ?Sized>(
        query:   &Q,
        agents:  &'a AgentStore,
        origin:  Vec2,
        radius:  f32,
        exclude: Option<AgentId>,
    ) -> Self {
        let members = query.agents_within(agents, origin, radius, AgentKind::Boid, exclude);
        Self::new(agents, members)
    }

    pub fn members(&self) -> &[AgentId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Arithmetic mean of the members' positions.
    pub fn avg_position(&self) -> Option<Vec2> {
        self.mean(&self.agents.position)
    }

    /// Arithmetic mean of the members' velocities.
    pub fn avg_velocity(&self) -> Option<Vec2> {
        self.mean(&self.agents.velocity)
    }

    /// Mean heading as a unit vector.  `None` for an empty flock or when the
    /// headings cancel out exactly.
    pub fn avg_heading(&self) -> Option<Vec2> {
        self.mean(&self.agents.heading)?.try_normalize()
    }

    fn mean(&self, field: &[Vec2]) -> Option<Vec2> {
        if self.members.is_empty() {
            return None;
        }
        let sum: Vec2 = self.members.iter().map(|id| field[id.index()]).sum();
        Some(sum / self.members.len() as f32)
    }
}
