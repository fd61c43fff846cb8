// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region nodes and their identifiers.

use kurbo::Rect;
use thicket_dataset::Label;

/// Identifier for a region in a [`PartitionTree`](crate::PartitionTree).
///
/// This is a small, opaque handle. Regions are never deallocated — a split
/// only attaches children to a leaf — so an id stays valid for the lifetime
/// of its tree and no generation counter is needed. Passing an id from a
/// different tree yields `None`/no-op results, not aliasing.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(pub(crate) u32);

impl RegionId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "node indices come from a Vec that grows one split at a time"
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "usize is at least 32 bits on supported targets"
    )]
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// An axis-aligned rectangular node of the partition tree.
///
/// A region is a leaf until split, at which point it becomes internal and
/// its two children take over its rectangle exactly. `class` is the label
/// the region predicts for points it contains; the root starts with `None`
/// (unpartitioned space predicts the default label).
#[derive(Clone, Debug)]
pub struct Region {
    /// World-space rectangle, half-open on the max edges for containment.
    pub rect: Rect,
    /// Number of ancestor splits above this region.
    pub depth: u32,
    /// Class assigned when this region was created by a split.
    pub class: Option<Label>,
    pub(crate) children: Option<(RegionId, RegionId)>,
}

impl Region {
    pub(crate) fn new(rect: Rect, depth: u32, class: Option<Label>) -> Self {
        Self {
            rect,
            depth,
            class,
            children: None,
        }
    }

    /// Returns `true` if this region has not been split.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The two children created by splitting this region, if any.
    ///
    /// The first child is the upper (horizontal split) or left (vertical
    /// split) rectangle.
    #[must_use]
    pub fn children(&self) -> Option<(RegionId, RegionId)> {
        self.children
    }

    /// The label this region predicts for contained points.
    #[must_use]
    pub fn predicted_label(&self) -> Label {
        self.class.unwrap_or_default()
    }
}
