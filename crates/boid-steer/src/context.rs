//! Read-only world state passed to every steering decision.

use boid_agent::{AgentStore, Obstacle};
use boid_core::{AgentId, AgentKind, Arena, SteeringConfig, Vec2};
use boid_spatial::{Flock, NeighborQuery};

/// A read-only view of the world for one steering decision.
///
/// In the sequential tick mode a fresh context is built for every agent over
/// the live store, so it reflects the updates of agents earlier in the tick.
/// In the snapshot mode one context over last tick's state is shared by all
/// agents (and threads).
#[derive(Copy, Clone)]
pub struct SteeringContext<'a> {
    pub agents:    &'a AgentStore,
    pub obstacles: &'a [Obstacle],
    pub arena:     Arena,
    pub config:    &'a SteeringConfig,
    pub query:     &'a dyn NeighborQuery,
}

impl<'a> SteeringContext<'a> {
    #[inline]
    pub fn new(
        agents:    &'a AgentStore,
        obstacles: &'a [Obstacle],
        arena:     Arena,
        config:    &'a SteeringConfig,
        query:     &'a dyn NeighborQuery,
    ) -> Self {
        Self { agents, obstacles, arena, config, query }
    }

    /// Other agents of `kind` within `radius` of `agent`.
    pub fn neighbors(&self, agent: AgentId, kind: AgentKind, radius: f32) -> Vec<AgentId> {
        let origin = self.agents.position[agent.index()];
        self.query.agents_within(self.agents, origin, radius, kind, Some(agent))
    }

    /// The boids within `radius` of `agent`, excluding `agent` itself.
    pub fn flock(&self, agent: AgentId, radius: f32) -> Flock<'a> {
        let origin = self.agents.position[agent.index()];
        Flock::around(self.query, self.agents, origin, radius, Some(agent))
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec2 {
        self.agents.position[agent.index()]
    }
}
