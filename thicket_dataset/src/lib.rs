// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Dataset: labelled 2D point sets for interactive partitioning.
//!
//! This crate holds the data model shared by the rest of the Thicket stack:
//! a two-class [`Label`], a [`LabeledPoint`] with an immutable position and a
//! mutable prediction, and the bounded coordinate range all datasets live in.
//!
//! With the `gen` feature enabled (default), the [`generate`] module provides
//! the dataset generators: uniformly random points on a half-unit grid, plus
//! diagonally and quadratically separable relabellings of the same grid.
//! Generators take `&mut impl Rng`, so callers own seeding and can reproduce
//! datasets deterministically.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_dataset::{Label, LabeledPoint, data_frame};
//!
//! let mut p = LabeledPoint::new(2.5, 7.0, Label::B);
//! assert_eq!(p.predicted, Label::A); // predictions start at the default class
//! assert!(data_frame().contains(p.pos));
//!
//! p.predicted = Label::B;
//! assert!(p.is_correct());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "gen")]
pub mod generate;

#[cfg(feature = "gen")]
pub use generate::{diagonal_dataset, quadratic_dataset, random_dataset};

use kurbo::{Point, Rect};

/// Lower bound of the data coordinate range, on both axes.
pub const DATA_MIN: f64 = 0.0;

/// Upper bound of the data coordinate range, on both axes.
pub const DATA_MAX: f64 = 10.0;

/// The canonical frame covering the whole data area.
///
/// Every generated dataset fits inside this rectangle, and partition trees
/// conventionally use it as their root region.
#[must_use]
pub fn data_frame() -> Rect {
    Rect::new(DATA_MIN, DATA_MIN, DATA_MAX, DATA_MAX)
}

/// One of the two point classes.
///
/// The default class is [`Label::A`]: freshly created points predict `A`
/// until a partition assigns them something else.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Label {
    /// The first class.
    #[default]
    A,
    /// The second class.
    B,
}

impl Label {
    /// Returns the other class.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A labelled 2D point.
///
/// The position and actual label are fixed for the lifetime of a dataset;
/// only [`predicted`](Self::predicted) changes as splits are committed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    /// Position in data coordinates.
    pub pos: Point,
    /// Ground-truth class.
    pub label: Label,
    /// Class currently assigned by the partition. Starts at [`Label::default`].
    pub predicted: Label,
}

impl LabeledPoint {
    /// Creates a point with the default prediction.
    #[must_use]
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self {
            pos: Point::new(x, y),
            label,
            predicted: Label::default(),
        }
    }

    /// Returns `true` if the current prediction matches the actual label.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.predicted == self.label
    }
}

/// Resets every point's prediction to the default class.
///
/// Used when retrying a session on the same dataset.
pub fn reset_predictions(points: &mut [LabeledPoint]) {
    for p in points {
        p.predicted = Label::default();
    }
}
