//! Benchmarks for tatter cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tatter::*;

fn bench_weave(c: &mut Criterion) {
    c.bench_function("weave_30x30_lattice", |b| {
        b.iter(|| Fabric::weave(&GridConfig::new(30, 15.0f32)));
    });
}

fn bench_draping_cloth(c: &mut Criterion) {
    c.bench_function("cloth_30x30_pinned_60_frames", |b| {
        b.iter(|| {
            let grid = GridConfig::centered(800.0f32, 600.0, 30, 15.0).with_pins(&[0, 14, 29]);
            let mut cloth = Cloth::new(grid, 800.0, 600.0);
            for _ in 0..60 {
                cloth.step();
            }
            cloth.positions()
        });
    });
}

fn bench_tearing_cloth(c: &mut Criterion) {
    c.bench_function("cloth_30x30_tearing_60_frames", |b| {
        b.iter(|| {
            let grid = GridConfig::centered(800.0f32, 600.0, 30, 15.0).with_pins(&[0, 14, 29]);
            let config = ClothConfig::new()
                .with_gravity(1.0)
                .with_accuracy(10)
                .with_tear_ratio(1.5);
            let mut cloth = Cloth::with_config(grid, Bounds::new(800.0, 600.0), config);
            for _ in 0..60 {
                cloth.step();
            }
            cloth.broken_count()
        });
    });
}

criterion_group!(benches, bench_weave, bench_draping_cloth, bench_tearing_cloth);
criterion_main!(benches);
