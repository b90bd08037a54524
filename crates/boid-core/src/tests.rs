//! Unit tests for boid-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ObstacleId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(ObstacleId(100) > ObstacleId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vector {
    use std::f32::consts::FRAC_PI_2;

    use crate::Vec2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn magnitude_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_sq(), 25.0);
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
        assert_eq!(Vec2::ZERO.distance_sq(v), 25.0);
    }

    #[test]
    fn normalize_is_unit_length() {
        let n = Vec2::new(3.0, 4.0).try_normalize().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!(close(n, Vec2::new(0.6, 0.8)));
    }

    #[test]
    fn zero_normalize_uses_fallback() {
        assert_eq!(Vec2::ZERO.try_normalize(), None);
        let previous = Vec2::new(0.0, -1.0);
        assert_eq!(Vec2::ZERO.normalize_or(previous), previous);
        assert_eq!(Vec2::new(f32::NAN, 0.0).try_normalize(), None);
    }

    #[test]
    fn clamp_magnitude_only_shrinks() {
        let slow = Vec2::new(1.0, 1.0);
        assert_eq!(slow.clamp_magnitude(5.0), slow);
        let fast = Vec2::new(30.0, 40.0).clamp_magnitude(5.0);
        assert!((fast.magnitude() - 5.0).abs() < 1e-5);
        assert!(close(fast, Vec2::new(3.0, 4.0)));
        assert_eq!(Vec2::ZERO.with_magnitude(3.0), Vec2::ZERO);
    }

    #[test]
    fn rotate_quarter_turn() {
        assert!(close(Vec2::X.rotate(FRAC_PI_2), Vec2::Y));
        assert!(close(Vec2::from_angle(FRAC_PI_2), Vec2::Y));
        assert!((Vec2::Y.angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn sum_of_vectors() {
        let total: Vec2 = [Vec2::X, Vec2::Y, Vec2::new(1.0, 1.0)].into_iter().sum();
        assert_eq!(total, Vec2::new(2.0, 2.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod config {
    use crate::{Arena, CoreError, SpawnSpec, Tick, Vec2, WorldConfig};

    #[test]
    fn defaults_are_valid() {
        let cfg = WorldConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
    }

    #[test]
    fn arena_geometry() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.center(), Vec2::new(400.0, 300.0));
        assert!(arena.contains(Vec2::new(0.0, 600.0)));
        assert!(!arena.contains(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn rejects_empty_arena() {
        let cfg = WorldConfig { arena: Arena::new(0.0, 600.0), ..WorldConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_negative_weight() {
        let mut cfg = WorldConfig::default();
        cfg.steering.separation_weight = -0.4;
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("separation_weight"), "got {err}");
    }

    #[test]
    fn rejects_initial_speed_above_limit() {
        let cfg = WorldConfig {
            boid: SpawnSpec { max_initial_speed: 9.0, ..SpawnSpec::boid() },
            ..WorldConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_population_that_overflows() {
        let cfg = WorldConfig { boid_count: usize::MAX, hoik_count: 1, ..WorldConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = WorldConfig { boid_count: u32::MAX as usize, hoik_count: 1, ..WorldConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_spawn_buffer_wider_than_arena() {
        let cfg = WorldConfig {
            arena: Arena::new(30.0, 30.0),
            hoik:  SpawnSpec { size: 10.0, ..SpawnSpec::hoik() },
            ..WorldConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn obstacle_radii_ignored_when_no_obstacles() {
        let mut cfg = WorldConfig::default();
        cfg.obstacles.count = 0;
        cfg.obstacles.min_radius = 50.0;
        cfg.obstacles.max_radius = 1.0;
        cfg.validate().unwrap();
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0.0f32..1.0), r2.gen_range(0.0f32..1.0));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<u32> = (0..4).map(|_| r0.gen_range(0..u32::MAX)).collect();
        let b: Vec<u32> = (0..4).map(|_| r1.gen_range(0..u32::MAX)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn direction_is_unit() {
        let mut rng = AgentRng::new(0, AgentId(3));
        for _ in 0..100 {
            assert!((rng.direction().magnitude() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn child_streams_are_reproducible() {
        let mut a = SimRng::new(9).child(1);
        let mut b = SimRng::new(9).child(1);
        for _ in 0..10 {
            assert_eq!(a.gen_range(0.0f32..1.0), b.gen_range(0.0f32..1.0));
        }
    }
}

#[cfg(test)]
mod kind {
    use crate::AgentKind;

    #[test]
    fn predicates_and_display() {
        assert!(AgentKind::Boid.is_boid());
        assert!(AgentKind::Hoik.is_hoik());
        assert!(!AgentKind::Hoik.is_boid());
        assert_eq!(AgentKind::Hoik.to_string(), "hoik");
    }
}
