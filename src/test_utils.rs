// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and geometry fixtures.
//!
//! Float assertions come from the `approx` crate, which handles precision
//! issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use iced::{Point, Rectangle, Size};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Shorthand for a page-space rectangle.
pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}
