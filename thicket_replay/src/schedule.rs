// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-ordered reveal scheduling.
//!
//! A replayed classifier tree is not revealed in traversal order: every
//! action at depth `d` appears strictly after all shallower actions and
//! concurrently with its same-depth siblings. The schedule makes that
//! ordering explicit instead of encoding it in animation timings, so hosts
//! without an animation system (tests, headless demos) can play it
//! immediately while animated hosts honor [`RevealSchedule::delay_for`].

use alloc::vec::Vec;
use kurbo::{Line, Rect};
use smallvec::SmallVec;
use thicket_dataset::Label;
use thicket_session::style::{BOUNDARY_COLOR, BOUNDARY_WIDTH, FILL_OPACITY, class_color};
use thicket_surface::{LineStyle, RectStyle, ShapeIds, Surface};

/// One shape revealed during a replay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealAction {
    /// A split boundary contributed by an internal node.
    Boundary(Line),
    /// A colored leaf region.
    Region(Rect, Label),
}

/// Reveal actions bucketed by tree depth.
#[derive(Clone, Debug, Default)]
pub struct RevealSchedule {
    depths: Vec<SmallVec<[RevealAction; 4]>>,
    step_millis: u64,
}

impl RevealSchedule {
    /// Default per-depth reveal delay, in milliseconds.
    pub const DEFAULT_STEP_MILLIS: u64 = 500;

    /// An empty schedule with the default per-depth delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_step(Self::DEFAULT_STEP_MILLIS)
    }

    /// An empty schedule revealing each depth `step_millis` after the last.
    #[must_use]
    pub fn with_step(step_millis: u64) -> Self {
        Self {
            depths: Vec::new(),
            step_millis,
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "usize is at least 32 bits on supported targets"
    )]
    pub(crate) fn push(&mut self, depth: u32, action: RevealAction) {
        let depth = depth as usize;
        if depth >= self.depths.len() {
            self.depths.resize_with(depth + 1, SmallVec::new);
        }
        self.depths[depth].push(action);
    }

    /// Number of populated depth levels.
    #[must_use]
    pub fn depth_count(&self) -> usize {
        self.depths.len()
    }

    /// `true` when no actions have been scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// The actions revealed together at `depth`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "usize is at least 32 bits on supported targets"
    )]
    pub fn actions_at(&self, depth: u32) -> &[RevealAction] {
        self.depths
            .get(depth as usize)
            .map_or(&[], SmallVec::as_slice)
    }

    /// Milliseconds after the reveal starts at which `depth` appears.
    #[must_use]
    pub fn delay_for(&self, depth: u32) -> u64 {
        u64::from(depth) * self.step_millis
    }

    /// All actions in reveal order, shallowest first.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "depth indices come from `push` and fit in u32"
    )]
    pub fn iter(&self) -> impl Iterator<Item = (u32, &RevealAction)> {
        self.depths
            .iter()
            .enumerate()
            .flat_map(|(depth, bucket)| bucket.iter().map(move |a| (depth as u32, a)))
    }

    /// Plays the whole schedule onto `surface` in reveal order.
    ///
    /// Hosts that animate should instead walk [`iter`](Self::iter) and
    /// defer each action by [`delay_for`](Self::delay_for) of its depth.
    pub fn emit<S: Surface>(&self, surface: &mut S, ids: &mut ShapeIds) {
        for (_, action) in self.iter() {
            match *action {
                RevealAction::Boundary(line) => {
                    surface.draw_line(ids.next(), line, LineStyle::solid(BOUNDARY_COLOR, BOUNDARY_WIDTH));
                }
                RevealAction::Region(rect, label) => {
                    surface.draw_rect(
                        ids.next(),
                        rect,
                        RectStyle::fill_with_opacity(class_color(label), FILL_OPACITY),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thicket_surface::Recording;

    #[test]
    fn actions_bucket_by_depth() {
        let mut schedule = RevealSchedule::new();
        let line = Line::new((0.0, 0.0), (0.0, 10.0));
        schedule.push(1, RevealAction::Region(Rect::new(0.0, 0.0, 5.0, 10.0), Label::A));
        schedule.push(0, RevealAction::Boundary(line));

        assert_eq!(schedule.depth_count(), 2);
        assert_eq!(schedule.actions_at(0), &[RevealAction::Boundary(line)]);
        assert!(schedule.actions_at(2).is_empty());
    }

    #[test]
    fn iteration_is_shallowest_first() {
        let mut schedule = RevealSchedule::new();
        schedule.push(1, RevealAction::Region(Rect::new(0.0, 0.0, 1.0, 1.0), Label::A));
        schedule.push(0, RevealAction::Boundary(Line::new((0.0, 0.0), (1.0, 0.0))));
        schedule.push(1, RevealAction::Region(Rect::new(1.0, 0.0, 2.0, 1.0), Label::B));

        let depths: Vec<u32> = schedule.iter().map(|(d, _)| d).collect();
        assert_eq!(depths, [0, 1, 1]);
    }

    #[test]
    fn delay_scales_with_depth() {
        let schedule = RevealSchedule::new();
        assert_eq!(schedule.delay_for(0), 0);
        assert_eq!(schedule.delay_for(3), 1_500);

        let fast = RevealSchedule::with_step(100);
        assert_eq!(fast.delay_for(3), 300);
    }

    #[test]
    fn emit_draws_every_action() {
        let mut schedule = RevealSchedule::new();
        schedule.push(0, RevealAction::Boundary(Line::new((5.0, 0.0), (5.0, 10.0))));
        schedule.push(1, RevealAction::Region(Rect::new(0.0, 0.0, 5.0, 10.0), Label::A));
        schedule.push(1, RevealAction::Region(Rect::new(5.0, 0.0, 10.0, 10.0), Label::B));

        let mut surface = Recording::new();
        let mut ids = ShapeIds::new();
        schedule.emit(&mut surface, &mut ids);

        assert_eq!(surface.live_len(), 3);
        assert_eq!(surface.ops().len(), 3);
    }
}
