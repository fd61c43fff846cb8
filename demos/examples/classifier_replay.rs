// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building and replaying a classifier tree.
//!
//! Generates a diagonal dataset, fits the reference classifier to it, and
//! walks the resulting reveal schedule: each depth level is printed with
//! the delay an animating host would apply, then the whole schedule is
//! emitted onto a [`Recording`] surface.
//!
//! Run:
//! - `cargo run -p thicket_demos --example classifier_replay`

use rand::SeedableRng;
use rand::rngs::SmallRng;
use thicket_dataset::{data_frame, diagonal_dataset};
use thicket_replay::{RevealAction, builder, replay};
use thicket_surface::{Recording, ShapeIds};

fn main() {
    let mut rng = SmallRng::seed_from_u64(0x517);
    let points = diagonal_dataset(15, &mut rng);
    println!("{} points, labelled A above the rising diagonal", points.len());

    let tree = builder::build(&points);
    let (schedule, summary) = replay(&tree, data_frame(), &points);

    println!(
        "classifier solution: {} leaves, depth {}\n",
        summary.leaf_count, summary.max_depth
    );

    for depth in 0..schedule.depth_count() as u32 {
        println!("t + {:>5} ms:", schedule.delay_for(depth));
        for action in schedule.actions_at(depth) {
            match action {
                RevealAction::Boundary(line) => println!(
                    "  boundary ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                    line.p0.x, line.p0.y, line.p1.x, line.p1.y
                ),
                RevealAction::Region(rect, label) => println!(
                    "  region {label:?} [{:.2}, {:.2}] x [{:.2}, {:.2}]",
                    rect.x0, rect.x1, rect.y0, rect.y1
                ),
            }
        }
    }

    let mut surface = Recording::new();
    let mut ids = ShapeIds::new();
    schedule.emit(&mut surface, &mut ids);
    println!("\nemitted {} shapes onto the surface", surface.live_len());
}
