// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller: pointer events in, previews and commits out.
//!
//! The controller is a small state machine over the unified
//! [`PointerEvent`] stream:
//!
//! - **Idle**: no split in progress; every leaf of the partition tree is a
//!   live hit-target.
//! - **Previewing**: the pointer is over a leaf. Every move recomputes the
//!   would-be [`SplitDecision`](thicket_partition::SplitDecision) and
//!   redraws the preview chrome (hover fills, pointer line, guide
//!   diagonals, point-fill feedback) under fixed reserved shape ids. The
//!   tree itself is untouched.
//! - **Committed**: a commit event applies the previewed split, re-scores
//!   every point, draws the permanent boundary and child fills, and drops
//!   straight back to Idle with the two children as fresh hit-targets.
//! - **Locked**: the session completed; all pointer input is ignored
//!   (except in example mode, which previews forever and never commits).
//!
//! A move that lands outside the previewed region suspends the preview and
//! arms an *escaped* flag: the following commit is suppressed until the
//! pointer re-enters the region. This models a touch dragging out of the
//! originating region, where hosts cannot deliver a reliable leave event.

use hashbrown::HashMap;
use kurbo::{Circle, Line, Point};
use thicket_dataset::LabeledPoint;
use thicket_partition::{Evaluation, PartitionTree, RegionId, compute_split, evaluate};
use thicket_surface::{CircleStyle, LineStyle, RectStyle, ShapeId, ShapeIds, Surface};

use crate::pointer::{PointerEvent, PointerPhase};
use crate::style::{
    BOUNDARY_COLOR, BOUNDARY_WIDTH, FILL_OPACITY, GUIDE_COLOR, GUIDE_FALLING, GUIDE_RISING,
    POINT_RADIUS, POINT_STROKE_WIDTH, POINTER_LINE, POINTER_LINE_WIDTH, PREVIEW_FIRST,
    PREVIEW_SECOND, class_color,
};

#[derive(Copy, Clone, Debug)]
enum State {
    Idle,
    Previewing { region: RegionId, escaped: bool },
    Locked,
}

/// Observable controller state, for hosts and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControllerPhase {
    /// No split in progress.
    Idle,
    /// A split preview is active over some leaf.
    Previewing,
    /// The session completed; input is ignored.
    Locked,
}

/// Event-driven state machine turning pointer input into tree splits.
#[derive(Clone, Debug)]
pub struct InteractionController {
    state: State,
    /// The committed fill shape of each child region, removed again when
    /// that region is itself split.
    fills: HashMap<RegionId, ShapeId>,
    example_mode: bool,
    show_guides: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// A controller for a live session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            fills: HashMap::new(),
            example_mode: false,
            show_guides: false,
        }
    }

    /// A controller for a demonstration pane: previews are always active,
    /// commits are ignored, and [`lock`](Self::lock) has no effect.
    #[must_use]
    pub fn example() -> Self {
        Self {
            example_mode: true,
            ..Self::new()
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        match self.state {
            State::Idle => ControllerPhase::Idle,
            State::Previewing { .. } => ControllerPhase::Previewing,
            State::Locked => ControllerPhase::Locked,
        }
    }

    /// Returns `true` while a suspended (escaped) preview blocks commits.
    #[must_use]
    pub fn is_escaped(&self) -> bool {
        matches!(self.state, State::Previewing { escaped: true, .. })
    }

    /// Toggles the dashed diagonal guide lines.
    pub fn set_guide_lines(&mut self, enabled: bool) {
        self.show_guides = enabled;
    }

    /// Locks the controller; further input is ignored. No-op in example mode.
    pub fn lock(&mut self) {
        if !self.example_mode {
            self.state = State::Locked;
        }
    }

    /// Returns to Idle, e.g. after a retry or restart. The caller is
    /// responsible for removing the committed shapes from the surface.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.fills.clear();
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// Returns the fresh [`Evaluation`] when the event committed a split,
    /// `None` otherwise. Invalid commits (no preview, escaped touch,
    /// stale region) are silent no-ops — never faults.
    pub fn handle<S: Surface>(
        &mut self,
        event: PointerEvent,
        tree: &mut PartitionTree,
        points: &mut [LabeledPoint],
        point_ids: &[ShapeId],
        ids: &mut ShapeIds,
        surface: &mut S,
    ) -> Option<Evaluation> {
        if matches!(self.state, State::Locked) {
            return None;
        }
        match event.phase {
            PointerPhase::Enter => {
                self.enter_at(event.pos, tree, points, point_ids, surface);
                None
            }
            PointerPhase::Move => {
                self.move_to(event.pos, tree, points, point_ids, surface);
                None
            }
            PointerPhase::Leave => {
                if let State::Previewing { region, .. } = self.state {
                    self.suspend_preview(region, tree, points, point_ids, surface);
                    self.state = State::Idle;
                }
                None
            }
            PointerPhase::Commit => self.commit_at(event.pos, tree, points, point_ids, ids, surface),
        }
    }

    fn enter_at<S: Surface>(
        &mut self,
        pos: Point,
        tree: &PartitionTree,
        points: &[LabeledPoint],
        point_ids: &[ShapeId],
        surface: &mut S,
    ) {
        if let Some(leaf) = tree.leaf_at(pos) {
            self.state = State::Previewing {
                region: leaf,
                escaped: false,
            };
            self.draw_preview(leaf, pos, tree, points, point_ids, surface);
        }
    }

    fn move_to<S: Surface>(
        &mut self,
        pos: Point,
        tree: &PartitionTree,
        points: &[LabeledPoint],
        point_ids: &[ShapeId],
        surface: &mut S,
    ) {
        match self.state {
            // A move without a preceding enter starts a preview, so touch
            // streams that skip the enter still work.
            State::Idle => self.enter_at(pos, tree, points, point_ids, surface),
            State::Previewing { region, escaped } => {
                let Some(rect) = tree.region(region).map(|r| r.rect) else {
                    self.state = State::Idle;
                    return;
                };
                if rect.contains(pos) {
                    self.state = State::Previewing {
                        region,
                        escaped: false,
                    };
                    self.draw_preview(region, pos, tree, points, point_ids, surface);
                } else if !escaped {
                    self.suspend_preview(region, tree, points, point_ids, surface);
                    self.state = State::Previewing {
                        region,
                        escaped: true,
                    };
                }
            }
            State::Locked => {}
        }
    }

    fn commit_at<S: Surface>(
        &mut self,
        pos: Point,
        tree: &mut PartitionTree,
        points: &mut [LabeledPoint],
        point_ids: &[ShapeId],
        ids: &mut ShapeIds,
        surface: &mut S,
    ) -> Option<Evaluation> {
        if self.example_mode {
            return None;
        }
        let State::Previewing { region, escaped } = self.state else {
            return None;
        };
        if escaped {
            return None;
        }
        let rect = tree.region(region)?.rect;
        if !rect.contains(pos) {
            return None;
        }

        // Recompute at the commit position; a commit without a preceding
        // move is still well-defined.
        let decision = compute_split(rect, pos);
        let (first, second) = tree.split(region, &decision)?;

        // The children's fills cover the split region exactly, so its own
        // fill (if any; the root never had one) comes off the surface.
        if let Some(fill) = self.fills.remove(&region) {
            surface.remove(fill);
        }
        surface.draw_line(
            ids.next(),
            decision.boundary(rect),
            LineStyle::solid(BOUNDARY_COLOR, BOUNDARY_WIDTH),
        );
        for child in [first, second] {
            if let Some(r) = tree.region(child) {
                let fill = ids.next();
                surface.draw_rect(
                    fill,
                    r.rect,
                    RectStyle::fill_with_opacity(class_color(r.predicted_label()), FILL_OPACITY),
                );
                self.fills.insert(child, fill);
            }
        }
        hide_chrome(surface);

        let evaluation = evaluate(tree, points);
        for (p, id) in points.iter().zip(point_ids) {
            draw_point(surface, *id, p, p.is_correct());
        }

        self.state = State::Idle;
        Some(evaluation)
    }

    fn draw_preview<S: Surface>(
        &self,
        region: RegionId,
        pos: Point,
        tree: &PartitionTree,
        points: &[LabeledPoint],
        point_ids: &[ShapeId],
        surface: &mut S,
    ) {
        let Some(rect) = tree.region(region).map(|r| r.rect) else {
            return;
        };
        let decision = compute_split(rect, pos);
        let (first_rect, second_rect) = decision.child_rects(rect);

        surface.draw_rect(
            PREVIEW_FIRST,
            first_rect,
            RectStyle::fill_with_opacity(class_color(decision.first), FILL_OPACITY),
        );
        surface.draw_rect(
            PREVIEW_SECOND,
            second_rect,
            RectStyle::fill_with_opacity(class_color(decision.second), FILL_OPACITY),
        );
        surface.draw_line(
            POINTER_LINE,
            decision.boundary(rect),
            LineStyle::solid(BOUNDARY_COLOR, POINTER_LINE_WIDTH),
        );

        let guide_opacity = if self.show_guides { 1.0 } else { 0.0 };
        surface.draw_line(
            GUIDE_FALLING,
            Line::new((rect.x0, rect.y0), (rect.x1, rect.y1)),
            LineStyle::dashed(GUIDE_COLOR, BOUNDARY_WIDTH, guide_opacity),
        );
        surface.draw_line(
            GUIDE_RISING,
            Line::new((rect.x1, rect.y0), (rect.x0, rect.y1)),
            LineStyle::dashed(GUIDE_COLOR, BOUNDARY_WIDTH, guide_opacity),
        );

        // Live feedback: a point fills in when the previewed side would
        // classify it correctly.
        for (p, id) in points.iter().zip(point_ids) {
            if first_rect.contains(p.pos) {
                draw_point(surface, *id, p, p.label == decision.first);
            } else if second_rect.contains(p.pos) {
                draw_point(surface, *id, p, p.label == decision.second);
            }
        }
    }

    /// Hides the preview chrome and restores point fills to the committed
    /// predictions for points inside the previewed region.
    fn suspend_preview<S: Surface>(
        &self,
        region: RegionId,
        tree: &PartitionTree,
        points: &[LabeledPoint],
        point_ids: &[ShapeId],
        surface: &mut S,
    ) {
        hide_chrome(surface);
        let Some(rect) = tree.region(region).map(|r| r.rect) else {
            return;
        };
        for (p, id) in points.iter().zip(point_ids) {
            if rect.contains(p.pos) {
                draw_point(surface, *id, p, p.is_correct());
            }
        }
    }
}

pub(crate) fn hide_chrome<S: Surface>(surface: &mut S) {
    for id in [
        PREVIEW_FIRST,
        PREVIEW_SECOND,
        POINTER_LINE,
        GUIDE_FALLING,
        GUIDE_RISING,
    ] {
        surface.set_opacity(id, 0.0);
    }
}

/// Draws one data point: hollow when misclassified, filled when correct.
pub(crate) fn draw_point<S: Surface>(
    surface: &mut S,
    id: ShapeId,
    point: &LabeledPoint,
    filled: bool,
) {
    let color = class_color(point.label);
    let style = if filled {
        CircleStyle::filled(color, POINT_STROKE_WIDTH)
    } else {
        CircleStyle::hollow(color, POINT_STROKE_WIDTH)
    };
    surface.draw_circle(id, Circle::new(point.pos, POINT_RADIUS), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use thicket_dataset::Label;
    use thicket_surface::{LiveShape, Recording};

    use crate::style::RESERVED_IDS;

    const FRAME: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    struct Rig {
        controller: InteractionController,
        tree: PartitionTree,
        points: [LabeledPoint; 2],
        point_ids: [ShapeId; 2],
        ids: ShapeIds,
        surface: Recording,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                controller: InteractionController::new(),
                tree: PartitionTree::new(FRAME),
                points: [
                    LabeledPoint::new(2.0, 2.0, Label::A),
                    LabeledPoint::new(8.0, 8.0, Label::B),
                ],
                point_ids: [ShapeId(RESERVED_IDS), ShapeId(RESERVED_IDS + 1)],
                ids: ShapeIds::starting_at(RESERVED_IDS + 2),
                surface: Recording::new(),
            }
        }

        fn send(&mut self, event: PointerEvent) -> Option<Evaluation> {
            self.controller.handle(
                event,
                &mut self.tree,
                &mut self.points,
                &self.point_ids,
                &mut self.ids,
                &mut self.surface,
            )
        }
    }

    #[test]
    fn enter_starts_a_preview_without_touching_the_tree() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));

        assert_eq!(rig.controller.phase(), ControllerPhase::Previewing);
        assert_eq!(rig.tree.leaf_count(), 1);
        assert!(rig.surface.live(PREVIEW_FIRST).is_some());
        assert!(rig.surface.live(POINTER_LINE).is_some());
    }

    #[test]
    fn move_recomputes_the_preview_in_place() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        rig.send(PointerEvent::moved(Point::new(6.0, 2.0)));

        // Vertical preview at x = 6: the first hover rect ends there.
        match rig.surface.live(PREVIEW_FIRST) {
            Some(LiveShape::Rect(rect, _)) => assert_eq!(rect.x1, 6.0),
            other => panic!("expected preview rect, got {other:?}"),
        }
        assert_eq!(rig.tree.leaf_count(), 1, "preview must not mutate the tree");
    }

    #[test]
    fn leave_returns_to_idle_and_hides_chrome() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        rig.send(PointerEvent::leave(Point::new(5.0, 2.0)));

        assert_eq!(rig.controller.phase(), ControllerPhase::Idle);
        match rig.surface.live(PREVIEW_FIRST) {
            Some(LiveShape::Rect(_, style)) => assert_eq!(style.opacity, 0.0),
            other => panic!("expected hidden preview rect, got {other:?}"),
        }
    }

    #[test]
    fn commit_splits_and_returns_the_evaluation() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        let eval = rig.send(PointerEvent::commit(Point::new(5.0, 2.0))).unwrap();

        assert_eq!(eval.leaf_count, 2);
        assert_eq!(eval.max_depth, 1);
        assert!(eval.success, "A|B split at x=5 classifies both points");
        assert_eq!(rig.controller.phase(), ControllerPhase::Idle);
    }

    #[test]
    fn children_become_hit_targets_after_commit() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        rig.send(PointerEvent::commit(Point::new(5.0, 2.0)));

        // Preview inside the right child only spans that child.
        rig.send(PointerEvent::enter(Point::new(9.0, 8.0)));
        match rig.surface.live(PREVIEW_FIRST) {
            Some(LiveShape::Rect(rect, _)) => assert_eq!(rect.x0, 5.0),
            other => panic!("expected preview rect, got {other:?}"),
        }
    }

    #[test]
    fn splitting_a_region_replaces_its_committed_fill() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        rig.send(PointerEvent::commit(Point::new(5.0, 2.0)));
        // Split the right child again; its fill must come off the surface
        // so ancestor fills never stack up under the grandchildren.
        rig.send(PointerEvent::enter(Point::new(6.0, 2.0)));
        rig.send(PointerEvent::commit(Point::new(6.0, 2.0)));

        let spot = Point::new(8.0, 2.0);
        let covering = rig
            .surface
            .live_shapes()
            .filter(|(_, shape)| {
                matches!(shape, LiveShape::Rect(rect, style)
                    if style.opacity > 0.0 && rect.contains(spot))
            })
            .count();
        assert_eq!(covering, 1, "one visible fill per leaf, no stacked parents");
    }

    #[test]
    fn commit_without_preview_is_ignored() {
        let mut rig = Rig::new();
        assert_eq!(rig.send(PointerEvent::commit(Point::new(5.0, 5.0))), None);
        assert_eq!(rig.tree.leaf_count(), 1);
    }

    #[test]
    fn escaped_move_suppresses_the_commit() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        // Drag out of the frame: preview suspends and arms the escape flag.
        rig.send(PointerEvent::moved(Point::new(12.0, 2.0)));
        assert!(rig.controller.is_escaped());

        assert_eq!(rig.send(PointerEvent::commit(Point::new(5.0, 2.0))), None);
        assert_eq!(rig.tree.leaf_count(), 1);
    }

    #[test]
    fn reentering_after_escape_rearms_the_commit() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        rig.send(PointerEvent::moved(Point::new(12.0, 2.0)));
        rig.send(PointerEvent::moved(Point::new(4.0, 2.0)));
        assert!(!rig.controller.is_escaped());

        let eval = rig.send(PointerEvent::commit(Point::new(4.0, 2.0)));
        assert!(eval.is_some());
        assert_eq!(rig.tree.leaf_count(), 2);
    }

    #[test]
    fn locked_controller_ignores_everything() {
        let mut rig = Rig::new();
        rig.controller.lock();

        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        assert_eq!(rig.controller.phase(), ControllerPhase::Locked);
        assert_eq!(rig.send(PointerEvent::commit(Point::new(5.0, 2.0))), None);
        assert!(rig.surface.ops().is_empty());
    }

    #[test]
    fn example_mode_previews_but_never_commits_or_locks() {
        let mut rig = Rig::new();
        rig.controller = InteractionController::example();
        rig.controller.lock(); // must have no effect

        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));
        assert_eq!(rig.controller.phase(), ControllerPhase::Previewing);
        assert_eq!(rig.send(PointerEvent::commit(Point::new(5.0, 2.0))), None);
        assert_eq!(rig.tree.leaf_count(), 1);
    }

    #[test]
    fn preview_fills_points_the_split_would_classify() {
        let mut rig = Rig::new();
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));

        // Vertical A|B preview at x=5 classifies both points correctly.
        for id in rig.point_ids {
            match rig.surface.live(id) {
                Some(LiveShape::Circle(_, style)) => {
                    assert!(style.fill.is_some(), "correct point should be filled");
                }
                other => panic!("expected point circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn guide_lines_follow_the_toggle() {
        let mut rig = Rig::new();
        rig.controller.set_guide_lines(true);
        rig.send(PointerEvent::enter(Point::new(5.0, 2.0)));

        match rig.surface.live(GUIDE_FALLING) {
            Some(LiveShape::Line(line, style)) => {
                assert_eq!(style.opacity, 1.0);
                assert!(style.dashed);
                assert_eq!(line.p1, Point::new(10.0, 10.0));
            }
            other => panic!("expected guide line, got {other:?}"),
        }
    }
}
