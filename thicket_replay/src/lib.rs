// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Replay: turning a classifier tree into a depth-ordered reveal.
//!
//! An external two-class classifier produces a [`ClassifierNode`] tree over
//! the same point space the user partitions by hand. This crate walks that
//! tree and converts it into the geometry the interactive side shows: each
//! internal node becomes an axis-aligned boundary, each leaf a colored
//! region, all bucketed into a [`RevealSchedule`] so depth `d` appears
//! strictly after every shallower depth.
//!
//! Split positions are not the classifier's raw pivots. A pivot is snapped
//! to the midpoint between the nearest in-range data values on either side
//! ([`snap_pivot`]), which keeps the revealed line visually off the exact
//! points that induced it.
//!
//! The tree is consumed read-only; any producer matching the node shape
//! works. The [`builder`] module provides a compact reference classifier so
//! demos and tests are self-contained.
//!
//! ```rust
//! use kurbo::Rect;
//! use thicket_dataset::{Label, LabeledPoint, data_frame};
//! use thicket_replay::{Attribute, ClassifierNode, replay};
//!
//! let points = vec![
//!     LabeledPoint::new(2.0, 5.0, Label::A),
//!     LabeledPoint::new(8.0, 5.0, Label::B),
//! ];
//! let tree = ClassifierNode::internal(
//!     Attribute::X,
//!     6.0,
//!     ClassifierNode::leaf(Label::B), // matched: x >= pivot
//!     ClassifierNode::leaf(Label::A),
//! );
//!
//! let (schedule, summary) = replay(&tree, data_frame(), &points);
//! assert_eq!(summary.leaf_count, 2);
//! assert_eq!(summary.max_depth, 1);
//! assert_eq!(schedule.depth_count(), 2); // boundary at 0, regions at 1
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod builder;
mod schedule;

pub use schedule::{RevealAction, RevealSchedule};

use alloc::boxed::Box;
use kurbo::{Line, Point, Rect};
use thicket_dataset::{DATA_MAX, DATA_MIN, Label, LabeledPoint};

/// The coordinate a classifier split tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Attribute {
    /// Horizontal coordinate; splits are vertical lines.
    X,
    /// Vertical coordinate; splits are horizontal lines.
    Y,
}

impl Attribute {
    /// The tested coordinate of `pos`.
    #[must_use]
    pub fn of(self, pos: Point) -> f64 {
        match self {
            Self::X => pos.x,
            Self::Y => pos.y,
        }
    }
}

/// One node of an externally produced classifier tree.
///
/// Internal nodes route a point to `matched` when its tested coordinate is
/// at or above the pivot, `not_matched` otherwise. The tree is consumed
/// read-only.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassifierNode {
    /// A pivot test over one attribute.
    Internal {
        /// Which coordinate the test reads.
        attribute: Attribute,
        /// Threshold; `value >= pivot` routes to `matched`.
        pivot: f64,
        /// Subtree for values at or above the pivot (right/upper).
        matched: Box<ClassifierNode>,
        /// Subtree for values below the pivot (left/lower).
        not_matched: Box<ClassifierNode>,
    },
    /// A terminal classification.
    Leaf {
        /// The class every point reaching this node is assigned.
        category: Label,
    },
}

impl ClassifierNode {
    /// An internal pivot-test node.
    #[must_use]
    pub fn internal(
        attribute: Attribute,
        pivot: f64,
        matched: ClassifierNode,
        not_matched: ClassifierNode,
    ) -> Self {
        Self::Internal {
            attribute,
            pivot,
            matched: Box::new(matched),
            not_matched: Box::new(not_matched),
        }
    }

    /// A leaf classifying everything as `category`.
    #[must_use]
    pub const fn leaf(category: Label) -> Self {
        Self::Leaf { category }
    }

    /// Classifies a position by walking the tree.
    #[must_use]
    pub fn classify(&self, pos: Point) -> Label {
        match self {
            Self::Leaf { category } => *category,
            Self::Internal {
                attribute,
                pivot,
                matched,
                not_matched,
            } => {
                if attribute.of(pos) >= *pivot {
                    matched.classify(pos)
                } else {
                    not_matched.classify(pos)
                }
            }
        }
    }
}

/// Shape metrics accumulated while replaying a classifier tree.
///
/// Reports the same leaf-count/depth pair the interactive evaluation
/// produces, so the two sides compare directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Number of leaf regions revealed.
    pub leaf_count: usize,
    /// Depth of the deepest leaf; 0 for a single-leaf tree.
    pub max_depth: u32,
}

/// Snaps a classifier pivot to the midpoint between the nearest data values
/// on either side of it.
///
/// Only values within the data range participate. `below` is the largest
/// such value strictly under the pivot, `above` the smallest at or above
/// it; the snapped position is their midpoint, which keeps the revealed
/// boundary off exact data points without changing which side any point
/// falls on. When either side is empty the raw pivot is returned unchanged.
#[must_use]
pub fn snap_pivot(points: &[LabeledPoint], attribute: Attribute, pivot: f64) -> f64 {
    let mut below: Option<f64> = None;
    let mut above: Option<f64> = None;
    for point in points {
        let value = attribute.of(point.pos);
        if !(DATA_MIN..=DATA_MAX).contains(&value) {
            continue;
        }
        if value < pivot {
            if below.is_none_or(|b| value > b) {
                below = Some(value);
            }
        } else if above.is_none_or(|a| value < a) {
            above = Some(value);
        }
    }
    match (below, above) {
        (Some(b), Some(a)) => (b + a) / 2.0,
        _ => pivot,
    }
}

/// Replays `tree` over `frame`, with the default per-depth reveal delay.
#[must_use]
pub fn replay(
    tree: &ClassifierNode,
    frame: Rect,
    points: &[LabeledPoint],
) -> (RevealSchedule, ReplaySummary) {
    replay_with_step(tree, frame, points, RevealSchedule::DEFAULT_STEP_MILLIS)
}

/// Replays `tree` over `frame` with a custom per-depth delay.
///
/// Walks the tree recursively: each internal node snaps its pivot against
/// `points`, schedules its boundary at the node's depth, and recurses into
/// both halves of the rectangle; leaves schedule their colored region. The
/// summary counts leaves and tracks the deepest one.
#[must_use]
pub fn replay_with_step(
    tree: &ClassifierNode,
    frame: Rect,
    points: &[LabeledPoint],
    step_millis: u64,
) -> (RevealSchedule, ReplaySummary) {
    let mut schedule = RevealSchedule::with_step(step_millis);
    let mut summary = ReplaySummary::default();
    walk(tree, frame, 0, points, &mut schedule, &mut summary);
    (schedule, summary)
}

fn walk(
    node: &ClassifierNode,
    rect: Rect,
    depth: u32,
    points: &[LabeledPoint],
    schedule: &mut RevealSchedule,
    summary: &mut ReplaySummary,
) {
    match node {
        ClassifierNode::Leaf { category } => {
            schedule.push(depth, RevealAction::Region(rect, *category));
            summary.leaf_count += 1;
            summary.max_depth = summary.max_depth.max(depth);
        }
        ClassifierNode::Internal {
            attribute,
            pivot,
            matched,
            not_matched,
        } => {
            let position = snap_pivot(points, *attribute, *pivot);
            let (boundary, not_matched_rect, matched_rect) = match attribute {
                Attribute::X => (
                    Line::new((position, rect.y0), (position, rect.y1)),
                    Rect::new(rect.x0, rect.y0, position, rect.y1),
                    Rect::new(position, rect.y0, rect.x1, rect.y1),
                ),
                Attribute::Y => (
                    Line::new((rect.x0, position), (rect.x1, position)),
                    Rect::new(rect.x0, rect.y0, rect.x1, position),
                    Rect::new(rect.x0, position, rect.x1, rect.y1),
                ),
            };
            schedule.push(depth, RevealAction::Boundary(boundary));
            walk(not_matched, not_matched_rect, depth + 1, points, schedule, summary);
            walk(matched, matched_rect, depth + 1, points, schedule, summary);
        }
    }
}
