// SPDX-License-Identifier: MPL-2.0
//! Scroll progress of a target block relative to the viewport.
//!
//! Progress runs from 0 to 1 between two intersection points. Each point
//! pairs an edge of the target with an edge of the viewport: `"start end"`
//! means "the target's start meets the viewport's end".

use iced::Rectangle;

/// An edge along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn position(self, start: f32, length: f32) -> f32 {
        match self {
            Edge::Start => start,
            Edge::Center => start + length / 2.0,
            Edge::End => start + length,
        }
    }
}

/// Where a target edge meets a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionPoint {
    pub target: Edge,
    pub viewport: Edge,
}

impl IntersectionPoint {
    #[must_use]
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }

    /// Viewport scroll position (its top edge) at which this point is reached.
    fn scroll_position(self, target: Rectangle, viewport_height: f32) -> f32 {
        self.target.position(target.y, target.height) - self.viewport.position(0.0, viewport_height)
    }
}

/// The pair of intersection points progress is measured between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOffsets {
    pub start: IntersectionPoint,
    pub end: IntersectionPoint,
}

impl ScrollOffsets {
    /// From the target entering at the bottom to it leaving at the top.
    pub const ENTER_TO_EXIT: Self = Self {
        start: IntersectionPoint::new(Edge::Start, Edge::End),
        end: IntersectionPoint::new(Edge::End, Edge::Start),
    };

    /// From the target's top at the viewport top to it leaving at the top.
    pub const TOP_TO_EXIT: Self = Self {
        start: IntersectionPoint::new(Edge::Start, Edge::Start),
        end: IntersectionPoint::new(Edge::End, Edge::Start),
    };

    /// Measures progress in `[0, 1]` of `target` for the given viewport.
    ///
    /// Both rectangles are in page coordinates; only the vertical axis is
    /// considered.
    #[must_use]
    pub fn measure(self, target: Rectangle, viewport: Rectangle) -> f32 {
        let start = self.start.scroll_position(target, viewport.height);
        let end = self.end.scroll_position(target, viewport.height);
        let scroll = viewport.y;

        if end <= start {
            return if scroll < start { 0.0 } else { 1.0 };
        }

        ((scroll - start) / (end - start)).clamp(0.0, 1.0)
    }
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self::ENTER_TO_EXIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, rect};

    const VIEWPORT_HEIGHT: f32 = 600.0;

    fn viewport_at(scroll: f32) -> Rectangle {
        rect(0.0, scroll, 800.0, VIEWPORT_HEIGHT)
    }

    #[test]
    fn enter_to_exit_endpoints() {
        let section = rect(0.0, 1000.0, 800.0, 400.0);
        let offsets = ScrollOffsets::ENTER_TO_EXIT;

        // Section top meets viewport bottom at scroll 400.
        assert_abs_diff_eq!(offsets.measure(section, viewport_at(400.0)), 0.0);
        // Section bottom meets viewport top at scroll 1400.
        assert_abs_diff_eq!(offsets.measure(section, viewport_at(1400.0)), 1.0);
        assert_abs_diff_eq!(offsets.measure(section, viewport_at(900.0)), 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        let section = rect(0.0, 1000.0, 800.0, 400.0);
        let offsets = ScrollOffsets::ENTER_TO_EXIT;
        assert_abs_diff_eq!(offsets.measure(section, viewport_at(0.0)), 0.0);
        assert_abs_diff_eq!(offsets.measure(section, viewport_at(5000.0)), 1.0);
    }

    #[test]
    fn top_to_exit_for_hero() {
        let hero = rect(0.0, 0.0, 800.0, 600.0);
        let offsets = ScrollOffsets::TOP_TO_EXIT;
        assert_abs_diff_eq!(offsets.measure(hero, viewport_at(0.0)), 0.0);
        assert_abs_diff_eq!(offsets.measure(hero, viewport_at(300.0)), 0.5);
        assert_abs_diff_eq!(offsets.measure(hero, viewport_at(600.0)), 1.0);
    }

    #[test]
    fn center_edges() {
        let section = rect(0.0, 1000.0, 800.0, 200.0);
        let offsets = ScrollOffsets {
            start: IntersectionPoint::new(Edge::Center, Edge::Center),
            end: IntersectionPoint::new(Edge::End, Edge::Start),
        };
        // Centre alignment at 1100 - 300 = 800, exit at 1200.
        assert_abs_diff_eq!(offsets.measure(section, viewport_at(800.0)), 0.0);
        assert_abs_diff_eq!(offsets.measure(section, viewport_at(1000.0)), 0.5);
    }

    #[test]
    fn degenerate_span_steps() {
        let empty = rect(0.0, 500.0, 800.0, 0.0);
        let offsets = ScrollOffsets::TOP_TO_EXIT;
        assert_abs_diff_eq!(offsets.measure(empty, viewport_at(499.0)), 0.0);
        assert_abs_diff_eq!(offsets.measure(empty, viewport_at(500.0)), 1.0);
    }
}
