// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted interactive round.
//!
//! Drives a [`Session`] through a fixed pointer script against a generated
//! dataset, printing each commit's metrics and the personal bests after a
//! faster retry. The surface is a [`Recording`], so the output also shows
//! what a painting host would have been asked to draw.
//!
//! Run:
//! - `cargo run -p thicket_demos --example interactive_round`

use kurbo::Point;
use thicket_dataset::{Label, LabeledPoint};
use thicket_session::{PointerEvent, Session};
use thicket_surface::Recording;

/// A dataset solvable with two splits, so the script below always wins.
fn dataset() -> Vec<LabeledPoint> {
    vec![
        LabeledPoint::new(2.0, 3.0, Label::A),
        LabeledPoint::new(3.5, 7.0, Label::A),
        LabeledPoint::new(7.0, 2.5, Label::B),
        LabeledPoint::new(8.5, 4.0, Label::B),
        LabeledPoint::new(7.5, 8.0, Label::A),
    ]
}

fn commit(session: &mut Session, surface: &mut Recording, pos: Point, now: u64) {
    session.pointer_event(PointerEvent::enter(pos), now, surface);
    session.pointer_event(PointerEvent::moved(pos), now, surface);
    if let Some(outcome) = session.pointer_event(PointerEvent::commit(pos), now, surface) {
        let e = outcome.evaluation;
        println!(
            "commit at ({:.1}, {:.1}): leaves={} depth={} success={} after {} ms",
            pos.x, pos.y, e.leaf_count, e.max_depth, e.success, outcome.elapsed_millis
        );
    }
}

fn solve(session: &mut Session, surface: &mut Recording, start: u64, pace_millis: u64) {
    // Vertical cut between the classes, then a horizontal cut that
    // reclaims the top-right A point.
    commit(session, surface, Point::new(5.0, 1.0), start + pace_millis);
    commit(session, surface, Point::new(7.0, 6.0), start + 2 * pace_millis);
}

fn main() {
    let mut surface = Recording::new();
    let mut session = Session::new(dataset(), 0, &mut surface);

    println!("Round 1 (deliberate):");
    solve(&mut session, &mut surface, 0, 4_000);

    println!("\nRetrying the same dataset, faster:");
    session.retry(20_000, &mut surface);
    solve(&mut session, &mut surface, 20_000, 1_500);

    println!("\nPersonal bests:");
    println!("  leaves: {:?}", session.scores().best_leaves());
    println!("  depth:  {:?}", session.scores().best_depth());
    println!("  time:   {:?} ms", session.scores().best_millis());

    println!("\nSurface after the final commit:");
    println!("  {} live shapes, {} ops recorded", surface.live_len(), surface.ops().len());
}
