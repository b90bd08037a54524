//! R-tree neighbor index.
//!
//! # Lifetime of an index
//!
//! An `RTreeIndex` is bulk-loaded from one `AgentStore` and answers queries
//! against *those* positions only.  The snapshot tick mode rebuilds it once
//! per tick from last tick's state; sequential in-place updates must use
//! [`LinearScan`][crate::LinearScan] instead.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use boid_agent::AgentStore;
use boid_core::{AgentId, AgentKind, Vec2};

use crate::NeighborQuery;

// ── R-tree agent entry ────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point with its `AgentId`.
#[derive(Clone)]
struct AgentEntry {
    point: [f32; 2],
    id:    AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

fn entries(agents: &AgentStore, kind: AgentKind) -> Vec<AgentEntry> {
    agents
        .ids_of(kind)
        .map(|id| AgentEntry { point: agents.position[id.index()].into(), id })
        .collect()
}

// ── RTreeIndex ────────────────────────────────────────────────────────────────

/// One R-tree per agent kind, built from a store snapshot.
pub struct RTreeIndex {
    boids: RTree<AgentEntry>,
    hoiks: RTree<AgentEntry>,
    count: usize,
}

impl RTreeIndex {
    /// Bulk-load both trees from `agents`.  O(n log n).
    pub fn build(agents: &AgentStore) -> Self {
        Self {
            boids: RTree::bulk_load(entries(agents, AgentKind::Boid)),
            hoiks: RTree::bulk_load(entries(agents, AgentKind::Hoik)),
            count: agents.count,
        }
    }

    /// Number of agents indexed.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl NeighborQuery for RTreeIndex {
    fn agents_within(
        &self,
        agents:  &AgentStore,
        origin:  Vec2,
        radius:  f32,
        kind:    AgentKind,
        exclude: Option<AgentId>,
    ) -> Vec<AgentId> {
        debug_assert_eq!(agents.count, self.count, "index built from a different store");
        let tree = match kind {
            AgentKind::Boid => &self.boids,
            AgentKind::Hoik => &self.hoiks,
        };
        let mut ids: Vec<AgentId> = tree
            .locate_within_distance(origin.into(), radius * radius)
            .map(|e| e.id)
            .filter(|&id| Some(id) != exclude)
            .collect();
        ids.sort_unstable();
        ids
    }
}
