//! Radius queries over agents and obstacles.

use boid_agent::{AgentStore, Obstacle};
use boid_core::{AgentId, AgentKind, ObstacleId, Vec2};

/// Source of radius-limited agent neighborhoods.
///
/// Implementations must return IDs in ascending order so that steering sums
/// are accumulated in the same order whichever index answered the query.
pub trait NeighborQuery: Sync {
    /// Agents of `kind` whose distance to `origin` is at most `radius`,
    /// excluding `exclude`.
    fn agents_within(
        &self,
        agents:  &AgentStore,
        origin:  Vec2,
        radius:  f32,
        kind:    AgentKind,
        exclude: Option<AgentId>,
    ) -> Vec<AgentId>;
}

/// Filter `candidates` to those within `radius` of `origin`, skipping
/// `exclude` (the querying agent itself).
///
/// Order of `candidates` is preserved.
pub fn neighbors_within<I>(origin: Vec2, radius: f32, candidates: I, exclude: Option<AgentId>) -> Vec<AgentId>
where
    I: IntoIterator<Item = (AgentId, Vec2)>,
{
    let r2 = radius * radius;
    candidates
        .into_iter()
        .filter(|&(id, pos)| Some(id) != exclude && origin.distance_sq(pos) <= r2)
        .map(|(id, _)| id)
        .collect()
}

/// Brute-force scan over the live store.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl NeighborQuery for LinearScan {
    fn agents_within(
        &self,
        agents:  &AgentStore,
        origin:  Vec2,
        radius:  f32,
        kind:    AgentKind,
        exclude: Option<AgentId>,
    ) -> Vec<AgentId> {
        let candidates = agents.ids_of(kind).map(|id| (id, agents.position[id.index()]));
        neighbors_within(origin, radius, candidates, exclude)
    }
}

/// Obstacles whose rim is closer than `margin` to `origin`.
pub fn obstacles_near(
    obstacles: &[Obstacle],
    origin:    Vec2,
    margin:    f32,
) -> impl Iterator<Item = (ObstacleId, &Obstacle)> + '_ {
    obstacles
        .iter()
        .enumerate()
        .filter(move |(_, o)| o.surface_distance(origin) < margin)
        .map(|(i, o)| (ObstacleId(i as u32), o))
}
