//! Read-only render views.
//!
//! A [`Frame`] is everything an external renderer needs to draw one tick:
//! per-agent placement and facing plus the static obstacles.  Colours are the
//! renderer's business and are chosen from [`AgentKind`].

use boid_agent::{AgentStore, Obstacle};
use boid_core::{AgentId, AgentKind, Arena, ObstacleId, Tick, Vec2};

/// One agent as a renderer sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:       AgentId,
    pub kind:     AgentKind,
    pub position: Vec2,
    /// Unit facing vector.
    pub heading:  Vec2,
    pub size:     f32,
}

impl AgentView {
    pub fn of(agents: &AgentStore, id: AgentId) -> Self {
        let i = id.index();
        Self {
            id,
            kind:     agents.kind[i],
            position: agents.position[i],
            heading:  agents.heading[i],
            size:     agents.size[i],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleView {
    pub id:       ObstacleId,
    pub position: Vec2,
    pub radius:   f32,
}

/// Snapshot of the world after `tick` ticks have completed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub tick:      Tick,
    pub arena:     Arena,
    pub agents:    Vec<AgentView>,
    pub obstacles: Vec<ObstacleView>,
}

impl Frame {
    pub fn capture(tick: Tick, arena: Arena, agents: &AgentStore, obstacles: &[Obstacle]) -> Self {
        Self {
            tick,
            arena,
            agents: agents.agent_ids().map(|id| AgentView::of(agents, id)).collect(),
            obstacles: obstacles
                .iter()
                .enumerate()
                .map(|(i, o)| ObstacleView { id: ObstacleId(i as u32), position: o.position, radius: o.radius })
                .collect(),
        }
    }

    pub fn boids(&self) -> impl Iterator<Item = &AgentView> {
        self.agents.iter().filter(|a| a.kind.is_boid())
    }

    pub fn hoiks(&self) -> impl Iterator<Item = &AgentView> {
        self.agents.iter().filter(|a| a.kind.is_hoik())
    }
}
