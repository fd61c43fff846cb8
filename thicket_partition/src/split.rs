// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The split engine: from a pointer position to a split decision.

use kurbo::{Line, Point, Rect};
use thicket_dataset::Label;

/// Axis along which a region is divided.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Split line runs left–right; children stack vertically.
    Horizontal,
    /// Split line runs top–bottom; children sit side by side.
    Vertical,
}

/// The outcome of [`compute_split`]: where to cut a region and which class
/// each child receives.
///
/// Decisions are not stored; they are consumed immediately by
/// [`PartitionTree::split`](crate::PartitionTree::split).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitDecision {
    /// Chosen split axis.
    pub orientation: Orientation,
    /// Cut coordinate: a `y` for horizontal splits, an `x` for vertical ones.
    pub position: f64,
    /// Class of the first child (upper or left rectangle).
    pub first: Label,
    /// Class of the second child (lower or right rectangle).
    pub second: Label,
}

impl SplitDecision {
    /// The two child rectangles produced by applying this decision to `rect`.
    ///
    /// Their union is exactly `rect` and their interiors are disjoint. The
    /// first rectangle is the upper or left one.
    #[must_use]
    pub fn child_rects(&self, rect: Rect) -> (Rect, Rect) {
        match self.orientation {
            Orientation::Horizontal => (
                Rect::new(rect.x0, rect.y0, rect.x1, self.position),
                Rect::new(rect.x0, self.position, rect.x1, rect.y1),
            ),
            Orientation::Vertical => (
                Rect::new(rect.x0, rect.y0, self.position, rect.y1),
                Rect::new(self.position, rect.y0, rect.x1, rect.y1),
            ),
        }
    }

    /// The boundary segment this decision draws across `rect`.
    #[must_use]
    pub fn boundary(&self, rect: Rect) -> Line {
        match self.orientation {
            Orientation::Horizontal => Line::new(
                Point::new(rect.x0, self.position),
                Point::new(rect.x1, self.position),
            ),
            Orientation::Vertical => Line::new(
                Point::new(self.position, rect.y0),
                Point::new(self.position, rect.y1),
            ),
        }
    }
}

/// Decides how a pointer at `pointer` splits `rect`.
///
/// The pointer is expected to lie inside `rect`; positions on or outside the
/// top/bottom edges are treated as degenerate (see below), never as faults.
///
/// With `p`/`q` the pointer offsets from the region origin and `w`/`h` its
/// extent, the rule compares the pointer against the rectangle's diagonals:
///
/// - `top_right = p/q > w/h` (above the falling diagonal)
/// - `bottom_right = p/(h−q) > w/h` (below the rising diagonal)
///
/// Equal comparisons place the pointer in the left or right triangle and
/// yield a horizontal split at `pointer.y`; mixed comparisons place it in
/// the top or bottom triangle and yield a vertical split at `pointer.x`.
/// Both comparisons are strict, so a pointer exactly on a diagonal counts
/// toward the side where the comparison fails. The first (upper or left)
/// child receives [`Label::A`] exactly when `top_right` holds.
///
/// Degenerate geometry: `q == 0` or `h − q == 0` would divide by zero, and
/// raw IEEE division would compare unpredictably through `NaN`/`∞`. Those
/// pointer positions fall back to a vertical split, with `q <= 0` treated as
/// the top-right side for class assignment.
#[must_use]
pub fn compute_split(rect: Rect, pointer: Point) -> SplitDecision {
    let p = pointer.x - rect.x0;
    let q = pointer.y - rect.y0;
    let w = rect.width();
    let h = rect.height();
    let ratio = w / h;

    // Guard the two divisions by `q` and `h - q` explicitly.
    if q <= 0.0 || h - q <= 0.0 {
        let top_right = q <= 0.0 || p / q > ratio;
        return vertical(pointer.x, top_right);
    }

    let top_right = p / q > ratio;
    let bottom_right = p / (h - q) > ratio;
    if top_right == bottom_right {
        let first = side_class(top_right);
        SplitDecision {
            orientation: Orientation::Horizontal,
            position: pointer.y,
            first,
            second: first.other(),
        }
    } else {
        vertical(pointer.x, top_right)
    }
}

fn vertical(position: f64, top_right: bool) -> SplitDecision {
    let first = side_class(top_right);
    SplitDecision {
        orientation: Orientation::Vertical,
        position,
        first,
        second: first.other(),
    }
}

fn side_class(top_right: bool) -> Label {
    if top_right { Label::A } else { Label::B }
}
