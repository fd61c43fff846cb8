// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The unified pointer event model.
//!
//! Mouse and touch input are normalized by the host into one event shape
//! before reaching the controller. A mouse maps enter/move/leave/click
//! directly; a touch maps touch-start to [`PointerPhase::Enter`],
//! touch-move to [`PointerPhase::Move`], and touch-end to
//! [`PointerPhase::Commit`]. Touch streams have no reliable leave event —
//! moves keep arriving from the originating region — which is why the
//! controller tracks out-of-bounds moves itself rather than relying on
//! [`PointerPhase::Leave`].

use kurbo::Point;

/// What a pointer event reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer entered the surface (or a touch began).
    Enter,
    /// The pointer moved.
    Move,
    /// The pointer left the surface.
    Leave,
    /// The pointer requested a split at its position (click or touch end).
    Commit,
}

/// A normalized pointer event in data coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub phase: PointerPhase,
    /// Pointer position. Carried by all phases; leave events reuse the last
    /// known position.
    pub pos: Point,
}

impl PointerEvent {
    /// An enter event at `pos`.
    #[must_use]
    pub fn enter(pos: Point) -> Self {
        Self {
            phase: PointerPhase::Enter,
            pos,
        }
    }

    /// A move event at `pos`.
    #[must_use]
    pub fn moved(pos: Point) -> Self {
        Self {
            phase: PointerPhase::Move,
            pos,
        }
    }

    /// A leave event at `pos`.
    #[must_use]
    pub fn leave(pos: Point) -> Self {
        Self {
            phase: PointerPhase::Leave,
            pos,
        }
    }

    /// A commit (click / tap) event at `pos`.
    #[must_use]
    pub fn commit(pos: Point) -> Self {
        Self {
            phase: PointerPhase::Commit,
            pos,
        }
    }
}
