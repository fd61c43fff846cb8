// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Surface: a backend-agnostic drawing surface for the partition UI.
//!
//! The core never paints pixels. It describes what should be on screen as a
//! small set of retained shapes — rectangles, lines, circles — each keyed by
//! an opaque [`ShapeId`] the core assigns. Concrete hosts (SVG, canvas, a GPU
//! renderer, a test harness) implement [`Surface`] and map those operations
//! onto their own technology.
//!
//! Re-issuing a draw operation under an existing id *replaces* that shape,
//! which is how preview chrome (hover fills, the mouse line) is animated
//! without allocating new ids per frame.
//!
//! [`Recording`] is the reference implementation: it keeps the ordered
//! operation log plus a table of currently live shapes, and is what the
//! tests and demos inspect.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Color;
//! use thicket_surface::{Recording, RectStyle, ShapeIds, Surface};
//!
//! let mut ids = ShapeIds::new();
//! let mut surface = Recording::new();
//!
//! let id = ids.next();
//! surface.draw_rect(id, Rect::new(0.0, 0.0, 4.0, 4.0), RectStyle::fill(Color::WHITE));
//! assert_eq!(surface.live_len(), 1);
//!
//! surface.remove(id);
//! assert_eq!(surface.live_len(), 0);
//! assert_eq!(surface.ops().len(), 2); // the log keeps both operations
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;

pub use recording::{LiveShape, Recording, SurfaceOp};

use kurbo::{Circle, Line, Rect};
use peniko::Color;

/// Identifier for a retained shape on a surface.
///
/// This is a small, opaque handle assigned by the core. Ids are stable for
/// the lifetime of the shape; drawing under a live id replaces the shape.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// A monotonically increasing [`ShapeId`] allocator.
///
/// Components that need well-known ids (preview chrome) reserve a fixed
/// prefix via [`ShapeIds::starting_at`] and hand the allocator on.
#[derive(Clone, Debug, Default)]
pub struct ShapeIds {
    next: u32,
}

impl ShapeIds {
    /// An allocator starting at id 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// An allocator whose first id is `first`, leaving `0..first` reserved.
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocates the next id.
    pub fn next(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next`](Self::next) would return.
    ///
    /// Lets owners sweep every id allocated so far, e.g. when tearing a
    /// scene down for a restart.
    #[must_use]
    pub const fn peek(&self) -> u32 {
        self.next
    }
}

/// Fill style for rectangles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub color: Color,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f32,
}

impl RectStyle {
    /// A fully opaque fill.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self { color, opacity: 1.0 }
    }

    /// A fill with the given opacity.
    #[must_use]
    pub const fn fill_with_opacity(color: Color, opacity: f32) -> Self {
        Self { color, opacity }
    }
}

/// Stroke style for lines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in surface units.
    pub width: f64,
    /// Dashed stroke (guide lines) versus solid (split boundaries).
    pub dashed: bool,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f32,
}

impl LineStyle {
    /// A solid, fully opaque stroke.
    #[must_use]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
            opacity: 1.0,
        }
    }

    /// A dashed stroke with the given opacity.
    #[must_use]
    pub const fn dashed(color: Color, width: f64, opacity: f32) -> Self {
        Self {
            color,
            width,
            dashed: true,
            opacity,
        }
    }
}

/// Stroke-and-optional-fill style for circles (data points).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleStyle {
    /// Outline color.
    pub stroke: Color,
    /// Outline width in surface units.
    pub stroke_width: f64,
    /// Interior fill; `None` renders a hollow circle.
    pub fill: Option<Color>,
}

impl CircleStyle {
    /// A hollow circle.
    #[must_use]
    pub const fn hollow(stroke: Color, stroke_width: f64) -> Self {
        Self {
            stroke,
            stroke_width,
            fill: None,
        }
    }

    /// A circle filled with its own stroke color.
    #[must_use]
    pub const fn filled(stroke: Color, stroke_width: f64) -> Self {
        Self {
            stroke,
            stroke_width,
            fill: Some(stroke),
        }
    }
}

/// A retained-shape drawing surface.
///
/// Implementations must treat a draw under a live id as a replacement of
/// that shape, and [`Surface::remove`]/[`Surface::set_opacity`] on an
/// unknown id as a no-op.
pub trait Surface {
    /// Draws (or replaces) a filled rectangle.
    fn draw_rect(&mut self, id: ShapeId, rect: Rect, style: RectStyle);

    /// Draws (or replaces) a line segment.
    fn draw_line(&mut self, id: ShapeId, line: Line, style: LineStyle);

    /// Draws (or replaces) a circle.
    fn draw_circle(&mut self, id: ShapeId, circle: Circle, style: CircleStyle);

    /// Removes a shape from the surface.
    fn remove(&mut self, id: ShapeId);

    /// Adjusts the opacity of a live shape without redescribing it.
    fn set_opacity(&mut self, id: ShapeId, opacity: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_ids_are_sequential() {
        let mut ids = ShapeIds::new();
        assert_eq!(ids.next(), ShapeId(0));
        assert_eq!(ids.next(), ShapeId(1));
    }

    #[test]
    fn starting_at_reserves_a_prefix() {
        let mut ids = ShapeIds::starting_at(8);
        assert_eq!(ids.next(), ShapeId(8));
    }

    #[test]
    fn style_constructors() {
        let r = RectStyle::fill(Color::WHITE);
        assert_eq!(r.opacity, 1.0);

        let l = LineStyle::dashed(Color::BLACK, 1.0, 0.5);
        assert!(l.dashed);

        let c = CircleStyle::filled(Color::WHITE, 3.0);
        assert_eq!(c.fill, Some(Color::WHITE));
        assert_eq!(CircleStyle::hollow(Color::WHITE, 3.0).fill, None);
    }
}
