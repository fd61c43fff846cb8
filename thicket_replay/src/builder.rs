// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A compact two-class reference classifier.
//!
//! The replay API consumes any [`ClassifierNode`](crate::ClassifierNode)
//! tree; this module supplies one so demos and tests need no external
//! producer. It is a plain recursive CART-style builder: at each node it
//! scans every midpoint between consecutive distinct attribute values and
//! keeps the split with the lowest weighted Gini impurity, stopping when a
//! node is pure or no split separates the points.
//!
//! Not tuned for large data; the interactive datasets are tens of points.

use alloc::vec::Vec;
use thicket_dataset::{Label, LabeledPoint};

use crate::{Attribute, ClassifierNode};

/// Builds a classifier tree over `points`.
///
/// Pure or unsplittable nodes become leaves classifying as the majority
/// label (ties go to [`Label::A`]). An empty slice yields a single
/// majority leaf for the default label.
#[must_use]
pub fn build(points: &[LabeledPoint]) -> ClassifierNode {
    if points.is_empty() {
        return ClassifierNode::leaf(Label::default());
    }
    grow(points)
}

fn grow(points: &[LabeledPoint]) -> ClassifierNode {
    let a_count = points.iter().filter(|p| p.label == Label::A).count();
    if a_count == 0 || a_count == points.len() {
        return ClassifierNode::leaf(points[0].label);
    }
    let Some((attribute, pivot)) = best_split(points) else {
        return ClassifierNode::leaf(majority(points, a_count));
    };

    let (matched, not_matched): (Vec<LabeledPoint>, Vec<LabeledPoint>) = points
        .iter()
        .copied()
        .partition(|p| attribute.of(p.pos) >= pivot);
    ClassifierNode::internal(attribute, pivot, grow(&matched), grow(&not_matched))
}

fn majority(points: &[LabeledPoint], a_count: usize) -> Label {
    if a_count * 2 >= points.len() {
        Label::A
    } else {
        Label::B
    }
}

/// The split with the lowest weighted Gini impurity, or `None` when no
/// candidate separates the points.
fn best_split(points: &[LabeledPoint]) -> Option<(Attribute, f64)> {
    let mut best: Option<(Attribute, f64)> = None;
    let mut best_impurity = f64::INFINITY;

    for attribute in [Attribute::X, Attribute::Y] {
        let mut values: Vec<f64> = points.iter().map(|p| attribute.of(p.pos)).collect();
        values.sort_unstable_by(f64::total_cmp);
        values.dedup();

        for pair in values.windows(2) {
            let pivot = (pair[0] + pair[1]) / 2.0;
            let impurity = weighted_gini(points, attribute, pivot);
            if impurity < best_impurity {
                best_impurity = impurity;
                best = Some((attribute, pivot));
            }
        }
    }
    best
}

/// Size-weighted Gini impurity of the two sides of a candidate split.
fn weighted_gini(points: &[LabeledPoint], attribute: Attribute, pivot: f64) -> f64 {
    let mut matched = [0usize; 2];
    let mut not_matched = [0usize; 2];
    for p in points {
        let side = if attribute.of(p.pos) >= pivot {
            &mut matched
        } else {
            &mut not_matched
        };
        side[usize::from(p.label == Label::B)] += 1;
    }
    side_gini(matched) + side_gini(not_matched)
}

fn side_gini(counts: [usize; 2]) -> f64 {
    let total = counts[0] + counts[1];
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let pa = counts[0] as f64 / n;
    let pb = counts[1] as f64 / n;
    n * (1.0 - pa * pa - pb * pb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use thicket_dataset::{data_frame, diagonal_dataset};

    use crate::replay;

    fn count_leaves(node: &ClassifierNode) -> usize {
        match node {
            ClassifierNode::Leaf { .. } => 1,
            ClassifierNode::Internal {
                matched,
                not_matched,
                ..
            } => count_leaves(matched) + count_leaves(not_matched),
        }
    }

    #[test]
    fn pure_data_builds_a_single_leaf() {
        let points = vec![
            LabeledPoint::new(1.0, 1.0, Label::B),
            LabeledPoint::new(9.0, 9.0, Label::B),
        ];
        assert_eq!(build(&points), ClassifierNode::leaf(Label::B));
    }

    #[test]
    fn empty_data_builds_a_default_leaf() {
        assert_eq!(build(&[]), ClassifierNode::leaf(Label::A));
    }

    #[test]
    fn separable_data_splits_once() {
        let points = vec![
            LabeledPoint::new(2.0, 5.0, Label::A),
            LabeledPoint::new(3.0, 4.0, Label::A),
            LabeledPoint::new(7.0, 5.0, Label::B),
            LabeledPoint::new(8.0, 6.0, Label::B),
        ];
        let tree = build(&points);
        assert_eq!(count_leaves(&tree), 2);
        assert_eq!(tree.classify(Point::new(2.5, 4.5)), Label::A);
        assert_eq!(tree.classify(Point::new(7.5, 5.5)), Label::B);
    }

    #[test]
    fn training_points_classify_to_their_own_labels() {
        let mut rng = SmallRng::seed_from_u64(0x7d1a);
        let points = diagonal_dataset(30, &mut rng);
        let tree = build(&points);
        for p in &points {
            assert_eq!(tree.classify(p.pos), p.label, "misclassified {:?}", p.pos);
        }
    }

    #[test]
    fn identical_positions_with_mixed_labels_become_a_majority_leaf() {
        let points = vec![
            LabeledPoint::new(5.0, 5.0, Label::A),
            LabeledPoint::new(5.0, 5.0, Label::A),
            LabeledPoint::new(5.0, 5.0, Label::B),
        ];
        assert_eq!(build(&points), ClassifierNode::leaf(Label::A));
    }

    #[test]
    fn replaying_a_built_tree_reports_its_own_shape() {
        let points = vec![
            LabeledPoint::new(2.0, 2.0, Label::A),
            LabeledPoint::new(8.0, 3.0, Label::B),
            LabeledPoint::new(8.0, 8.0, Label::A),
            LabeledPoint::new(2.0, 7.0, Label::A),
        ];
        let tree = build(&points);
        let (_, summary) = replay(&tree, data_frame(), &points);
        assert_eq!(summary.leaf_count, count_leaves(&tree));
    }
}
