// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for split computation, tree growth, and evaluation.
//!
//! Interactive use never exceeds a few dozen regions, so beyond raw split
//! math these mostly guard against accidental quadratic behavior in the
//! descent and evaluation paths.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thicket_dataset::{LabeledPoint, data_frame, random_dataset};
use thicket_partition::{PartitionTree, compute_split, evaluate};

fn random_pointer(rng: &mut SmallRng) -> Point {
    Point::new(rng.random::<f64>() * 10.0, rng.random::<f64>() * 10.0)
}

/// Grows a tree by splitting the leaf under random pointer positions.
fn grown_tree(splits: usize, rng: &mut SmallRng) -> PartitionTree {
    let mut tree = PartitionTree::new(data_frame());
    let mut applied = 0;
    while applied < splits {
        let pointer = random_pointer(rng);
        let Some(leaf) = tree.leaf_at(pointer) else {
            continue;
        };
        let rect = tree.region(leaf).unwrap().rect;
        let decision = compute_split(rect, pointer);
        if tree.split(leaf, &decision).is_some() {
            applied += 1;
        }
    }
    tree
}

fn bench_compute_split(c: &mut Criterion) {
    let frame = data_frame();
    let mut rng = SmallRng::seed_from_u64(7);
    let pointers: Vec<Point> = (0..1024).map(|_| random_pointer(&mut rng)).collect();

    let mut i = 0;
    c.bench_function("compute_split", |b| {
        b.iter(|| {
            let pointer = pointers[i % pointers.len()];
            i += 1;
            black_box(compute_split(frame, pointer))
        });
    });
}

fn bench_tree_growth(c: &mut Criterion) {
    c.bench_function("tree_growth_64_splits", |b| {
        b.iter_batched(
            || SmallRng::seed_from_u64(11),
            |mut rng| grown_tree(64, &mut rng),
            BatchSize::SmallInput,
        );
    });
}

fn bench_leaf_descent(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(13);
    let tree = grown_tree(64, &mut rng);
    let pointers: Vec<Point> = (0..1024).map(|_| random_pointer(&mut rng)).collect();

    let mut i = 0;
    c.bench_function("leaf_at_64_regions", |b| {
        b.iter(|| {
            let pointer = pointers[i % pointers.len()];
            i += 1;
            black_box(tree.leaf_at(pointer))
        });
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(17);
    let tree = grown_tree(32, &mut rng);
    let points: Vec<LabeledPoint> = random_dataset(100, &mut rng);

    c.bench_function("evaluate_100_points", |b| {
        b.iter_batched(
            || points.clone(),
            |mut points| black_box(evaluate(&tree, &mut points)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_compute_split,
    bench_tree_growth,
    bench_leaf_descent,
    bench_evaluate
);
criterion_main!(benches);
