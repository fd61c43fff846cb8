// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One interactive partitioning round, from setup to completion.

use alloc::vec::Vec;
use kurbo::Rect;
use thicket_dataset::{LabeledPoint, data_frame, reset_predictions};
use thicket_partition::{Evaluation, PartitionTree};
use thicket_surface::{ShapeId, ShapeIds, Surface};

use crate::clock::SessionClock;
use crate::controller::{ControllerPhase, InteractionController, draw_point, hide_chrome};
use crate::pointer::PointerEvent;
use crate::score::ScoreTracker;
use crate::style::RESERVED_IDS;

/// Result of a pointer event that committed a split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The evaluation after the split was applied.
    pub evaluation: Evaluation,
    /// Session time at the commit, in milliseconds.
    pub elapsed_millis: u64,
}

/// A complete interactive round over one dataset.
///
/// Owns the dataset, the growing [`PartitionTree`], the interaction
/// controller, the clock and the personal-best tracker, and wires pointer
/// events through all of them. The host owns the [`Surface`] and the clock
/// source; every entry point that can draw or read time takes them as
/// arguments.
///
/// A round ends when a commit classifies every point correctly: the clock
/// freezes, the bests are recorded, and input locks. [`retry`](Self::retry)
/// starts the same dataset over (keeping bests),
/// [`restart`](Self::restart) swaps in a new dataset and clears them.
#[derive(Clone, Debug)]
pub struct Session {
    points: Vec<LabeledPoint>,
    point_ids: Vec<ShapeId>,
    tree: PartitionTree,
    controller: InteractionController,
    scores: ScoreTracker,
    clock: SessionClock,
    ids: ShapeIds,
    first_dynamic: u32,
    completed: bool,
    revealed: bool,
}

impl Session {
    /// Starts a round over `points`, drawing them onto `surface`.
    ///
    /// All points start hollow; fills appear as previews and commits
    /// classify them.
    pub fn new<S: Surface>(points: Vec<LabeledPoint>, now: u64, surface: &mut S) -> Self {
        let mut ids = ShapeIds::starting_at(RESERVED_IDS);
        let point_ids: Vec<ShapeId> = points.iter().map(|_| ids.next()).collect();
        for (p, id) in points.iter().zip(&point_ids) {
            draw_point(surface, *id, p, false);
        }
        let first_dynamic = ids.peek();
        Self {
            points,
            point_ids,
            tree: PartitionTree::new(data_frame()),
            controller: InteractionController::new(),
            scores: ScoreTracker::new(),
            clock: SessionClock::new(now),
            ids,
            first_dynamic,
            completed: false,
            revealed: false,
        }
    }

    /// The data frame this session partitions.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.tree.frame()
    }

    /// The partition tree built so far.
    #[must_use]
    pub fn tree(&self) -> &PartitionTree {
        &self.tree
    }

    /// The dataset with current predictions.
    #[must_use]
    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Shape ids of the data-point circles, parallel to [`points`](Self::points).
    #[must_use]
    pub fn point_ids(&self) -> &[ShapeId] {
        &self.point_ids
    }

    /// Personal bests across retries of this dataset.
    #[must_use]
    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    /// Milliseconds of active play; frozen once the round ends.
    #[must_use]
    pub fn elapsed_millis(&self, now: u64) -> u64 {
        self.clock.elapsed(now)
    }

    /// Whether a commit has classified every point correctly (or the
    /// solution was revealed).
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the round ended by reveal rather than by solving.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Observable interaction phase.
    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        self.controller.phase()
    }

    /// Toggles the dashed diagonal guide lines in previews.
    pub fn set_guide_lines(&mut self, enabled: bool) {
        self.controller.set_guide_lines(enabled);
    }

    /// Routes one pointer event through the interaction controller.
    ///
    /// Returns a [`CommitOutcome`] when the event committed a split. A
    /// fully correct commit completes the round: the clock stops at `now`,
    /// the bests are recorded, and further input is ignored.
    pub fn pointer_event<S: Surface>(
        &mut self,
        event: PointerEvent,
        now: u64,
        surface: &mut S,
    ) -> Option<CommitOutcome> {
        let evaluation = self.controller.handle(
            event,
            &mut self.tree,
            &mut self.points,
            &self.point_ids,
            &mut self.ids,
            surface,
        )?;
        if evaluation.success {
            self.completed = true;
            self.clock.stop(now);
            self.scores
                .record(evaluation.leaf_count, evaluation.max_depth, self.clock.elapsed(now));
            self.controller.lock();
        }
        Some(CommitOutcome {
            evaluation,
            elapsed_millis: self.clock.elapsed(now),
        })
    }

    /// Starts the same dataset over: fresh tree, fresh clock, bests kept.
    pub fn retry<S: Surface>(&mut self, now: u64, surface: &mut S) {
        self.sweep_dynamic(surface);
        reset_predictions(&mut self.points);
        for (p, id) in self.points.iter().zip(&self.point_ids) {
            draw_point(surface, *id, p, false);
        }
        self.tree = PartitionTree::new(data_frame());
        self.clock.restart(now);
        self.controller.reset();
        self.completed = false;
        self.revealed = false;
    }

    /// Swaps in a new dataset and clears the bests.
    pub fn restart<S: Surface>(
        &mut self,
        points: Vec<LabeledPoint>,
        now: u64,
        surface: &mut S,
    ) {
        self.sweep_dynamic(surface);
        for id in &self.point_ids {
            surface.remove(*id);
        }
        let mut ids = ShapeIds::starting_at(RESERVED_IDS);
        self.point_ids = points.iter().map(|_| ids.next()).collect();
        self.points = points;
        for (p, id) in self.points.iter().zip(&self.point_ids) {
            draw_point(surface, *id, p, false);
        }
        self.first_dynamic = ids.peek();
        self.ids = ids;
        self.tree = PartitionTree::new(data_frame());
        self.scores.reset();
        self.clock.restart(now);
        self.controller.reset();
        self.completed = false;
        self.revealed = false;
    }

    /// Ends the round without solving it, e.g. when the reference solution
    /// is shown. The clock stops and input locks; no bests are recorded.
    pub fn reveal(&mut self, now: u64) {
        self.completed = true;
        self.revealed = true;
        self.clock.stop(now);
        self.controller.lock();
    }

    /// Removes every dynamically allocated shape (committed boundaries and
    /// fills) and hides the preview chrome, resetting the id allocator.
    fn sweep_dynamic<S: Surface>(&mut self, surface: &mut S) {
        hide_chrome(surface);
        for id in self.first_dynamic..self.ids.peek() {
            surface.remove(ShapeId(id));
        }
        self.ids = ShapeIds::starting_at(self.first_dynamic);
    }
}
