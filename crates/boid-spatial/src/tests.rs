//! Unit tests for boid-spatial.
//!
//! All tests use hand-placed agents so distances are known exactly.

#[cfg(test)]
mod helpers {
    use boid_agent::{AgentStore, AgentStoreBuilder};
    use boid_core::{Arena, SpawnSpec, Vec2};

    /// Boids 0..=3 on a line 10 units apart, hoiks 4 and 5 further along:
    ///
    /// ```text
    ///   B0(100)  B1(110)  B2(120)  B3(130)  ...  H4(160)  H5(300)   (y = 100)
    /// ```
    pub fn line_store() -> AgentStore {
        let boid = SpawnSpec::boid();
        let hoik = SpawnSpec::hoik();
        AgentStoreBuilder::new(Arena::new(800.0, 600.0), 1)
            .boid(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), &boid)
            .boid(Vec2::new(110.0, 100.0), Vec2::new(0.0, 1.0), &boid)
            .boid(Vec2::new(120.0, 100.0), Vec2::new(-1.0, 0.0), &boid)
            .boid(Vec2::new(130.0, 100.0), Vec2::new(0.0, -1.0), &boid)
            .hoik(Vec2::new(160.0, 100.0), Vec2::ZERO, &hoik)
            .hoik(Vec2::new(300.0, 100.0), Vec2::ZERO, &hoik)
            .build()
            .unwrap()
    }
}

// ── Linear scan ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod linear {
    use boid_core::{AgentId, AgentKind, Vec2};

    use crate::{LinearScan, NeighborQuery, neighbors_within};

    #[test]
    fn radius_is_inclusive_and_self_is_excluded() {
        let store = super::helpers::line_store();
        let origin = store.position[1];
        let ids = LinearScan.agents_within(&store, origin, 10.0, AgentKind::Boid, Some(AgentId(1)));
        assert_eq!(ids, vec![AgentId(0), AgentId(2)]);
    }

    #[test]
    fn kind_filter() {
        let store = super::helpers::line_store();
        let ids = LinearScan.agents_within(&store, Vec2::new(130.0, 100.0), 50.0, AgentKind::Hoik, None);
        assert_eq!(ids, vec![AgentId(4)]);
    }

    #[test]
    fn free_function_preserves_candidate_order() {
        let candidates = vec![
            (AgentId(9), Vec2::new(1.0, 0.0)),
            (AgentId(2), Vec2::new(0.0, 1.0)),
            (AgentId(5), Vec2::new(50.0, 0.0)),
        ];
        let ids = neighbors_within(Vec2::ZERO, 2.0, candidates, None);
        assert_eq!(ids, vec![AgentId(9), AgentId(2)]);
    }

    #[test]
    fn empty_store_has_no_neighbors() {
        let store = boid_agent::AgentStore::empty();
        assert!(LinearScan.agents_within(&store, Vec2::ZERO, 1e6, AgentKind::Boid, None).is_empty());
    }
}

// ── R-tree ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rtree {
    use boid_agent::AgentStoreBuilder;
    use boid_core::{AgentKind, Arena, SpawnSpec, Vec2};

    use crate::{LinearScan, NeighborQuery, RTreeIndex};

    #[test]
    fn matches_linear_scan_on_hand_placed_agents() {
        let store = super::helpers::line_store();
        let index = RTreeIndex::build(&store);
        assert_eq!(index.len(), 6);
        for kind in [AgentKind::Boid, AgentKind::Hoik] {
            for id in store.agent_ids() {
                let origin = store.position[id.index()];
                for radius in [0.0, 10.0, 25.0, 200.0] {
                    assert_eq!(
                        index.agents_within(&store, origin, radius, kind, Some(id)),
                        LinearScan.agents_within(&store, origin, radius, kind, Some(id)),
                        "{kind} around {id} r={radius}",
                    );
                }
            }
        }
    }

    #[test]
    fn matches_linear_scan_on_random_population() {
        let store = AgentStoreBuilder::new(Arena::new(800.0, 600.0), 11)
            .random_boids(300, &SpawnSpec::boid())
            .random_hoiks(10, &SpawnSpec::hoik())
            .build()
            .unwrap();
        let index = RTreeIndex::build(&store);
        for id in store.agent_ids().step_by(7) {
            let origin = store.position[id.index()];
            assert_eq!(
                index.agents_within(&store, origin, 50.0, AgentKind::Boid, Some(id)),
                LinearScan.agents_within(&store, origin, 50.0, AgentKind::Boid, Some(id)),
            );
        }
    }

    #[test]
    fn empty_index() {
        let store = boid_agent::AgentStore::empty();
        let index = RTreeIndex::build(&store);
        assert!(index.is_empty());
        assert!(index.agents_within(&store, Vec2::ZERO, 10.0, AgentKind::Hoik, None).is_empty());
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacles {
    use boid_agent::Obstacle;
    use boid_core::{ObstacleId, Vec2};

    use crate::obstacles_near;

    #[test]
    fn margin_is_measured_from_the_rim() {
        let obstacles = [
            Obstacle::new(Vec2::new(100.0, 0.0), 50.0), // rim at 50 → distance 50
            Obstacle::new(Vec2::new(0.0, 30.0), 20.0),  // rim at 10 → distance 10
        ];
        let near: Vec<ObstacleId> = obstacles_near(&obstacles, Vec2::ZERO, 16.0).map(|(id, _)| id).collect();
        assert_eq!(near, vec![ObstacleId(1)]);
        assert_eq!(obstacles_near(&obstacles, Vec2::ZERO, 51.0).count(), 2);
    }
}

// ── Flock aggregates ──────────────────────────────────────────────────────────

#[cfg(test)]
mod flock {
    use boid_agent::AgentStoreBuilder;
    use boid_core::{AgentId, Arena, SpawnSpec, Vec2};

    use crate::{Flock, LinearScan};

    #[test]
    fn single_member_flock_is_that_boid() {
        let store = AgentStoreBuilder::new(Arena::new(800.0, 600.0), 1)
            .boid(Vec2::new(12.5, 40.0), Vec2::new(0.5, -2.0), &SpawnSpec::boid())
            .build()
            .unwrap();
        let flock = Flock::new(&store, vec![AgentId(0)]);
        assert_eq!(flock.avg_position(), Some(Vec2::new(12.5, 40.0)));
        assert_eq!(flock.avg_velocity(), Some(Vec2::new(0.5, -2.0)));
        let heading = flock.avg_heading().unwrap();
        assert!((heading - Vec2::new(0.5, -2.0).try_normalize().unwrap()).magnitude() < 1e-6);
    }

    #[test]
    fn empty_flock_has_no_aggregates() {
        let store = super::helpers::line_store();
        let flock = Flock::around(&LinearScan, &store, Vec2::new(700.0, 500.0), 10.0, None);
        assert!(flock.is_empty());
        assert_eq!(flock.avg_position(), None);
        assert_eq!(flock.avg_velocity(), None);
        assert_eq!(flock.avg_heading(), None);
    }

    #[test]
    fn averages_over_members() {
        let store = super::helpers::line_store();
        let flock = Flock::around(&LinearScan, &store, Vec2::new(115.0, 100.0), 5.0, None);
        assert_eq!(flock.members(), &[AgentId(1), AgentId(2)]);
        assert_eq!(flock.avg_position(), Some(Vec2::new(115.0, 100.0)));
        assert_eq!(flock.avg_velocity(), Some(Vec2::new(-0.5, 0.5)));
    }

    #[test]
    fn cancelling_headings_have_no_mean_direction() {
        let store = super::helpers::line_store();
        // B0 heads +x and B2 heads -x.
        let flock = Flock::new(&store, vec![AgentId(0), AgentId(2)]);
        assert_eq!(flock.len(), 2);
        assert_eq!(flock.avg_heading(), None);
    }
}
