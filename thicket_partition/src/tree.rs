// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The partition tree: a rooted binary tree of rectangular regions.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::region::{Region, RegionId};
use crate::split::SplitDecision;

/// A rooted binary tree of [`Region`]s.
///
/// Invariant: at every moment the leaves' rectangles exactly tile the root
/// frame, with no gaps or overlaps. A split replaces one leaf by two
/// children that partition its rectangle; nothing else mutates geometry.
///
/// Leaf count and depth are recomputed by O(leaves) traversals rather than
/// maintained incrementally: datasets are tiny and correctness under
/// arbitrary split order is the priority.
#[derive(Clone, Debug)]
pub struct PartitionTree {
    nodes: Vec<Region>,
    root: RegionId,
}

impl PartitionTree {
    /// Creates a tree whose single root leaf covers `frame`.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            nodes: alloc::vec![Region::new(frame, 0, None)],
            root: RegionId::new(0),
        }
    }

    /// The root region id.
    #[must_use]
    pub fn root(&self) -> RegionId {
        self.root
    }

    /// The rectangle covered by the whole tree.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.nodes[self.root.idx()].rect
    }

    /// Looks up a region, returning `None` for ids from another tree.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.nodes.get(id.idx())
    }

    /// Returns `true` if `id` refers to a live leaf of this tree.
    #[must_use]
    pub fn is_leaf(&self, id: RegionId) -> bool {
        self.region(id).is_some_and(Region::is_leaf)
    }

    /// Splits `leaf` into two children per `decision`.
    ///
    /// The children exactly tile the leaf's rectangle, inherit
    /// `depth + 1`, and carry the decision's resolved classes (first class
    /// on the upper/left child). Returns the child ids, or `None` — a
    /// silent no-op — when `leaf` is stale or already split, or when the
    /// split position does not fall strictly inside the leaf's interior.
    pub fn split(
        &mut self,
        leaf: RegionId,
        decision: &SplitDecision,
    ) -> Option<(RegionId, RegionId)> {
        let region = self.region(leaf)?;
        if !region.is_leaf() {
            return None;
        }
        let rect = region.rect;
        let interior = match decision.orientation {
            crate::Orientation::Horizontal => rect.y0 < decision.position && decision.position < rect.y1,
            crate::Orientation::Vertical => rect.x0 < decision.position && decision.position < rect.x1,
        };
        if !interior {
            return None;
        }

        let depth = region.depth + 1;
        let (first_rect, second_rect) = decision.child_rects(rect);
        let first = RegionId::new(self.nodes.len());
        self.nodes.push(Region::new(first_rect, depth, Some(decision.first)));
        let second = RegionId::new(self.nodes.len());
        self.nodes.push(Region::new(second_rect, depth, Some(decision.second)));
        self.nodes[leaf.idx()].children = Some((first, second));
        Some((first, second))
    }

    /// Number of leaf regions. Always `splits + 1`.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|r| r.is_leaf()).count()
    }

    /// Maximum depth among current leaves.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.nodes
            .iter()
            .filter(|r| r.is_leaf())
            .map(|r| r.depth)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over live leaf ids in creation order.
    pub fn leaves(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_leaf())
            .map(|(i, _)| RegionId::new(i))
    }

    /// Finds the unique leaf containing `point`, descending from the root.
    ///
    /// Containment is half-open on both axes (`[x0, x1) × [y0, y1)`), so a
    /// point exactly on a split line belongs to the lower/right child.
    /// Returns `None` for points outside the frame.
    #[must_use]
    pub fn leaf_at(&self, point: Point) -> Option<RegionId> {
        let mut id = self.root;
        if !self.nodes[id.idx()].rect.contains(point) {
            return None;
        }
        while let Some((first, second)) = self.nodes[id.idx()].children {
            id = if self.nodes[first.idx()].rect.contains(point) {
                first
            } else {
                second
            };
        }
        Some(id)
    }
}
