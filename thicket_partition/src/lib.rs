// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Partition: a binary tree of axis-aligned regions grown by pointer splits.
//!
//! This crate is the geometric core of Thicket. It provides:
//!
//! - [`PartitionTree`]: a rooted binary tree of rectangular [`Region`]s whose
//!   leaves exactly tile the root frame at every moment.
//! - [`compute_split`]: the split engine, turning a single pointer position
//!   inside a region into a [`SplitDecision`] (orientation, position, and the
//!   class each child receives).
//! - [`evaluate`]: the classification evaluator, assigning every dataset
//!   point the class of its containing leaf and scoring the partition.
//!
//! ## Split orientation
//!
//! The two diagonals of a rectangle divide it into four triangles. The split
//! engine compares the pointer against both diagonals: a pointer in the left
//! or right triangle yields a horizontal split at the pointer's `y`, a
//! pointer in the top or bottom triangle a vertical split at its `x`. The
//! resulting cut tracks the pointer's angular position relative to the
//! diagonals, independent of the rectangle's aspect ratio.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use thicket_partition::{PartitionTree, compute_split};
//!
//! let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let mut tree = PartitionTree::new(frame);
//!
//! // A pointer in the top-right previews a vertical split.
//! let decision = compute_split(frame, Point::new(9.0, 1.0));
//! let (left, right) = tree.split(tree.root(), &decision).unwrap();
//!
//! assert_eq!(tree.leaf_count(), 2);
//! assert_eq!(tree.region(left).unwrap().depth, 1);
//! assert_eq!(tree.region(right).unwrap().rect.x0, 9.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod evaluate;
mod region;
mod split;
mod tree;

pub use evaluate::{Evaluation, evaluate};
pub use region::{Region, RegionId};
pub use split::{Orientation, SplitDecision, compute_split};
pub use tree::PartitionTree;
