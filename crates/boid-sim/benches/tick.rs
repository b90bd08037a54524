//! Tick loop throughput for both modes over a range of population sizes.

use std::time::Duration;

use boid_core::WorldConfig;
use boid_sim::{TickMode, WorldBuilder};
use boid_steer::{ClassicSteering, NoopSteering};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn config(boids: usize) -> WorldConfig {
    WorldConfig {
        boid_count: boids,
        hoik_count: (boids / 20).max(1),
        ..WorldConfig::default()
    }
}

fn bench_classic(c: &mut Criterion) {
    let mut group = c.benchmark_group("classic_step");
    for boids in [100, 500, 2_000] {
        for mode in [TickMode::Sequential, TickMode::Snapshot] {
            let id = BenchmarkId::new(format!("{mode:?}"), boids);
            group.bench_with_input(id, &boids, |b, &n| {
                let mut world = WorldBuilder::new(config(n), ClassicSteering).mode(mode).build().unwrap();
                b.iter(|| black_box(world.step()));
            });
        }
    }
    group.finish();
}

fn bench_noop(c: &mut Criterion) {
    let mut group = c.benchmark_group("noop_step");
    for boids in [500, 2_000] {
        group.bench_with_input(BenchmarkId::from_parameter(boids), &boids, |b, &n| {
            let mut world = WorldBuilder::new(config(n), NoopSteering).build().unwrap();
            b.iter(|| black_box(world.step()));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_classic, bench_noop
}

criterion_main!(benches);
