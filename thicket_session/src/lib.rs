// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Session: the interactive layer of the partition trainer.
//!
//! This crate turns the pure geometry of `thicket_partition` into a playable
//! round. A [`Session`] owns a labelled dataset, a growing partition tree,
//! and an [`InteractionController`] that interprets a unified pointer-event
//! stream: hovering a leaf previews the split that a commit would apply,
//! committing grows the tree, and a commit that classifies every point
//! correctly ends the round.
//!
//! Hosts stay in charge of the platform. They translate their native mouse
//! or touch input into [`PointerEvent`]s, supply the current time as plain
//! milliseconds, and hand in a [`Surface`](thicket_surface::Surface) for the
//! session to draw on. Nothing here blocks, ticks, or talks to a windowing
//! system.
//!
//! ```rust
//! use kurbo::Point;
//! use thicket_dataset::{Label, LabeledPoint};
//! use thicket_session::{PointerEvent, Session};
//! use thicket_surface::Recording;
//!
//! let points = vec![
//!     LabeledPoint::new(2.0, 5.0, Label::A),
//!     LabeledPoint::new(8.0, 5.0, Label::B),
//! ];
//! let mut surface = Recording::new();
//! let mut session = Session::new(points, 0, &mut surface);
//!
//! session.pointer_event(PointerEvent::enter(Point::new(5.0, 1.0)), 100, &mut surface);
//! let outcome = session
//!     .pointer_event(PointerEvent::commit(Point::new(5.0, 1.0)), 4200, &mut surface)
//!     .unwrap();
//!
//! assert!(outcome.evaluation.success);
//! assert_eq!(session.scores().best_millis(), Some(4200));
//! assert!(session.is_completed());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clock;
mod controller;
mod pointer;
mod score;
mod session;
pub mod style;

pub use clock::SessionClock;
pub use controller::{ControllerPhase, InteractionController};
pub use pointer::{PointerEvent, PointerPhase};
pub use score::ScoreTracker;
pub use session::{CommitOutcome, Session};
