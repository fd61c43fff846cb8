// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual constants and the reserved preview shape ids.
//!
//! All geometry the session emits is in data coordinates; stroke widths and
//! the point radius are data-space values with the same visual proportions
//! on a square viewport.

use peniko::Color;
use thicket_dataset::Label;
use thicket_surface::ShapeId;

/// Fill color for class A regions and point outlines.
pub const CLASS_A_COLOR: Color = Color::from_rgb8(0x00, 0xbd, 0xd6);

/// Fill color for class B regions and point outlines.
pub const CLASS_B_COLOR: Color = Color::from_rgb8(0xf5, 0xa6, 0x23);

/// Stroke color for split boundaries and the pointer line.
pub const BOUNDARY_COLOR: Color = Color::BLACK;

/// Stroke color for the dashed diagonal guide lines.
pub const GUIDE_COLOR: Color = Color::from_rgb8(0x80, 0x80, 0x80);

/// Opacity of committed and previewed region fills.
pub const FILL_OPACITY: f32 = 0.3;

/// Radius of a data-point circle, in data units.
pub const POINT_RADIUS: f64 = 0.125;

/// Outline width of a data-point circle, in data units.
pub const POINT_STROKE_WIDTH: f64 = 0.075;

/// Width of the live pointer line, in data units.
pub const POINTER_LINE_WIDTH: f64 = 0.05;

/// Width of a committed split boundary, in data units.
pub const BOUNDARY_WIDTH: f64 = 0.025;

/// Hover fill over the first (upper/left) previewed child.
pub const PREVIEW_FIRST: ShapeId = ShapeId(0);

/// Hover fill over the second (lower/right) previewed child.
pub const PREVIEW_SECOND: ShapeId = ShapeId(1);

/// The live line tracking the pointer through the previewed region.
pub const POINTER_LINE: ShapeId = ShapeId(2);

/// Dashed guide along the previewed region's falling diagonal.
pub const GUIDE_FALLING: ShapeId = ShapeId(3);

/// Dashed guide along the previewed region's rising diagonal.
pub const GUIDE_RISING: ShapeId = ShapeId(4);

/// Number of reserved ids; dynamic allocation starts here.
pub const RESERVED_IDS: u32 = 5;

/// The fill/outline color of a class.
#[must_use]
pub const fn class_color(label: Label) -> Color {
    match label {
        Label::A => CLASS_A_COLOR,
        Label::B => CLASS_B_COLOR,
    }
}
