// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification evaluation: score a partition against its dataset.

use thicket_dataset::LabeledPoint;

use crate::tree::PartitionTree;

/// The outcome of scoring a partition tree against a dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Number of leaf regions.
    pub leaf_count: usize,
    /// Maximum depth among current leaves.
    pub max_depth: u32,
    /// `true` iff every point's predicted label matches its actual label.
    pub success: bool,
}

/// Assigns every point the class of its containing leaf and scores the tree.
///
/// This is a full recomputation over all points and all current leaves, run
/// after every commit; nothing is incremental. Points are matched by the
/// half-open containment rule of [`PartitionTree::leaf_at`]. A point outside
/// the frame (which a well-formed dataset never produces) keeps its current
/// prediction.
pub fn evaluate(tree: &PartitionTree, points: &mut [LabeledPoint]) -> Evaluation {
    let mut success = true;
    for point in points.iter_mut() {
        if let Some(leaf) = tree.leaf_at(point.pos) {
            // Unpartitioned space (the unsplit root) predicts the default class.
            point.predicted = tree
                .region(leaf)
                .map(|r| r.predicted_label())
                .unwrap_or_default();
        }
        success &= point.is_correct();
    }
    Evaluation {
        leaf_count: tree.leaf_count(),
        max_depth: tree.max_depth(),
        success,
    }
}
