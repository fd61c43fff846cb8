// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference surface: an ordered op log plus a live-shape table.

use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Circle, Line, Rect};

use crate::{CircleStyle, LineStyle, RectStyle, ShapeId, Surface};

/// One recorded surface operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// A rectangle was drawn or replaced.
    Rect {
        /// Target shape id.
        id: ShapeId,
        /// Rectangle geometry.
        rect: Rect,
        /// Fill style.
        style: RectStyle,
    },
    /// A line was drawn or replaced.
    Line {
        /// Target shape id.
        id: ShapeId,
        /// Segment geometry.
        line: Line,
        /// Stroke style.
        style: LineStyle,
    },
    /// A circle was drawn or replaced.
    Circle {
        /// Target shape id.
        id: ShapeId,
        /// Circle geometry.
        circle: Circle,
        /// Stroke/fill style.
        style: CircleStyle,
    },
    /// A shape was removed.
    Remove(ShapeId),
    /// A live shape's opacity was adjusted.
    Opacity(ShapeId, f32),
}

impl SurfaceOp {
    /// The id this operation targets.
    #[must_use]
    pub fn target(&self) -> ShapeId {
        match *self {
            Self::Rect { id, .. } | Self::Line { id, .. } | Self::Circle { id, .. } => id,
            Self::Remove(id) | Self::Opacity(id, _) => id,
        }
    }
}

/// Geometry and style of a currently live shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LiveShape {
    /// A filled rectangle.
    Rect(Rect, RectStyle),
    /// A stroked line.
    Line(Line, LineStyle),
    /// A circle.
    Circle(Circle, CircleStyle),
}

impl LiveShape {
    fn set_opacity(&mut self, opacity: f32) {
        match self {
            Self::Rect(_, style) => style.opacity = opacity,
            Self::Line(_, style) => style.opacity = opacity,
            // Circles have no scalar opacity; treat zero as "hide the fill".
            Self::Circle(_, style) => {
                if opacity == 0.0 {
                    style.fill = None;
                }
            }
        }
    }
}

/// A [`Surface`] that records operations instead of painting.
///
/// Keeps both the full ordered log (what happened) and the live-shape table
/// (what a painter would currently show). Tests assert on either view.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    ops: Vec<SurfaceOp>,
    live: HashMap<ShapeId, LiveShape>,
}

impl Recording {
    /// An empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered operation log since creation (or the last [`clear`](Self::clear)).
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Looks up the live shape under `id`, if any.
    #[must_use]
    pub fn live(&self, id: ShapeId) -> Option<&LiveShape> {
        self.live.get(&id)
    }

    /// Number of currently live shapes.
    #[must_use]
    pub fn live_len(&self) -> usize {
        self.live.len()
    }

    /// Iterates over all live shapes, in no particular order.
    pub fn live_shapes(&self) -> impl Iterator<Item = (ShapeId, &LiveShape)> {
        self.live.iter().map(|(id, shape)| (*id, shape))
    }

    /// Drops the log and all live shapes.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.live.clear();
    }
}

impl Surface for Recording {
    fn draw_rect(&mut self, id: ShapeId, rect: Rect, style: RectStyle) {
        self.ops.push(SurfaceOp::Rect { id, rect, style });
        let _ = self.live.insert(id, LiveShape::Rect(rect, style));
    }

    fn draw_line(&mut self, id: ShapeId, line: Line, style: LineStyle) {
        self.ops.push(SurfaceOp::Line { id, line, style });
        let _ = self.live.insert(id, LiveShape::Line(line, style));
    }

    fn draw_circle(&mut self, id: ShapeId, circle: Circle, style: CircleStyle) {
        self.ops.push(SurfaceOp::Circle { id, circle, style });
        let _ = self.live.insert(id, LiveShape::Circle(circle, style));
    }

    fn remove(&mut self, id: ShapeId) {
        self.ops.push(SurfaceOp::Remove(id));
        let _ = self.live.remove(&id);
    }

    fn set_opacity(&mut self, id: ShapeId, opacity: f32) {
        self.ops.push(SurfaceOp::Opacity(id, opacity));
        if let Some(shape) = self.live.get_mut(&id) {
            shape.set_opacity(opacity);
        }
    }
}
