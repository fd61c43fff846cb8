// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for classifier building and tree replay.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use thicket_dataset::{data_frame, quadratic_dataset};
use thicket_replay::{builder, replay};
use thicket_surface::{Recording, ShapeIds};

fn bench_build(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(23);
    let points = quadratic_dataset(50, &mut rng);

    c.bench_function("classifier_build_50_points", |b| {
        b.iter(|| black_box(builder::build(&points)));
    });
}

fn bench_replay(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(29);
    let points = quadratic_dataset(50, &mut rng);
    let tree = builder::build(&points);

    c.bench_function("replay_schedule", |b| {
        b.iter(|| black_box(replay(&tree, data_frame(), &points)));
    });
}

fn bench_emit(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(31);
    let points = quadratic_dataset(50, &mut rng);
    let tree = builder::build(&points);
    let (schedule, _) = replay(&tree, data_frame(), &points);

    c.bench_function("replay_emit", |b| {
        b.iter(|| {
            let mut surface = Recording::new();
            let mut ids = ShapeIds::new();
            schedule.emit(&mut surface, &mut ids);
            black_box(surface.live_len())
        });
    });
}

criterion_group!(benches, bench_build, bench_replay, bench_emit);
criterion_main!(benches);
