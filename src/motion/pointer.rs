// SPDX-License-Identifier: MPL-2.0
//! Pointer-driven micro-interactions: hover tracking, cursor parallax and the
//! trailing cursor ring.

use super::spring::{Spring, SpringConfig};
use crate::domain::ui::ParallaxDivisor;
use iced::{Point, Size, Vector};
use std::time::Duration;

/// Enter/leave state of a hoverable card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    #[must_use]
    pub fn is_hovered(self) -> bool {
        self.hovered
    }

    /// Returns `true` if the state changed.
    pub fn enter(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }

    /// Returns `true` if the state changed.
    pub fn leave(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }
}

/// Offsets a background layer by the cursor's distance from the window centre.
///
/// The raw offset is `(cursor - centre) / divisor` on each axis; springs
/// smooth the layer toward it frame by frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerParallax {
    divisor: ParallaxDivisor,
    x: Spring,
    y: Spring,
}

impl PointerParallax {
    #[must_use]
    pub fn new(divisor: ParallaxDivisor, spring: SpringConfig) -> Self {
        Self {
            divisor,
            x: Spring::new(spring, 0.0),
            y: Spring::new(spring, 0.0),
        }
    }

    /// Raw (unsmoothed) offset for a cursor position inside a window.
    #[must_use]
    pub fn target_for(&self, cursor: Point, window: Size) -> Vector {
        let divisor = self.divisor.value();
        Vector::new(
            (cursor.x - window.width / 2.0) / divisor,
            (cursor.y - window.height / 2.0) / divisor,
        )
    }

    pub fn pointer_moved(&mut self, cursor: Point, window: Size) {
        let target = self.target_for(cursor, window);
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// The cursor left the window: drift back to the centre.
    pub fn pointer_left(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Advances both springs. Returns `true` while the layer is still moving.
    pub fn step(&mut self, elapsed: Duration) -> bool {
        let moving_x = self.x.step(elapsed);
        let moving_y = self.y.step(elapsed);
        moving_x || moving_y
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !(self.x.is_at_rest() && self.y.is_at_rest())
    }

    /// Current smoothed offset.
    #[must_use]
    pub fn offset(&self) -> Vector {
        Vector::new(self.x.value(), self.y.value())
    }

    /// Offset for layers that move against the cursor.
    #[must_use]
    pub fn inverted_offset(&self) -> Vector {
        Vector::new(-self.x.value(), -self.y.value())
    }
}

impl Default for PointerParallax {
    fn default() -> Self {
        Self::new(ParallaxDivisor::default(), SpringConfig::default())
    }
}

/// Stiffness of the cursor ring: much tighter than the background springs so
/// the ring trails the pointer by a few frames only.
pub const CURSOR_STIFFNESS: f32 = 500.0;
pub const CURSOR_DAMPING: f32 = 28.0;

/// A ring drawn in place of the system cursor, trailing the pointer.
///
/// Hidden until the pointer first moves over the window. The first position
/// is taken as is; later ones are approached through the springs.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    x: Spring,
    y: Spring,
    visible: bool,
}

impl CursorFollower {
    #[must_use]
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            x: Spring::new(spring, 0.0),
            y: Spring::new(spring, 0.0),
            visible: false,
        }
    }

    pub fn pointer_moved(&mut self, cursor: Point) {
        if self.visible {
            self.x.set_target(cursor.x);
            self.y.set_target(cursor.y);
        } else {
            self.x.snap_to(cursor.x);
            self.y.snap_to(cursor.y);
            self.visible = true;
        }
    }

    /// Hides the ring; it reappears where the pointer re-enters.
    pub fn pointer_left(&mut self) {
        self.visible = false;
        self.x.snap_to(self.x.target());
        self.y.snap_to(self.y.target());
    }

    /// Returns `true` while the ring is still catching up.
    pub fn step(&mut self, elapsed: Duration) -> bool {
        let moving_x = self.x.step(elapsed);
        let moving_y = self.y.step(elapsed);
        moving_x || moving_y
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.visible && !(self.x.is_at_rest() && self.y.is_at_rest())
    }

    /// Centre of the ring in window coordinates, if it is shown.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.visible
            .then(|| Point::new(self.x.value(), self.y.value()))
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(SpringConfig::new(CURSOR_STIFFNESS, CURSOR_DAMPING))
    }
}
