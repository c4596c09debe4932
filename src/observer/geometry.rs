// SPDX-License-Identifier: MPL-2.0
//! Intersection geometry for visibility checks.

use iced::Rectangle;
use serde::{Deserialize, Serialize};

/// Per-side adjustment applied to the viewport before intersection testing.
///
/// Positive values grow the viewport outward (regions count as visible
/// earlier), negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    #[must_use]
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the viewport adjusted by this margin.
    ///
    /// A margin that shrinks the viewport past zero collapses it to an empty
    /// rectangle at its centre line instead of producing a negative size.
    #[must_use]
    pub fn apply(self, viewport: Rectangle) -> Rectangle {
        let mut x = viewport.x - self.left;
        let mut y = viewport.y - self.top;
        let mut width = viewport.width + self.left + self.right;
        let mut height = viewport.height + self.top + self.bottom;

        if width < 0.0 {
            x += width / 2.0;
            width = 0.0;
        }
        if height < 0.0 {
            y += height / 2.0;
            height = 0.0;
        }

        Rectangle {
            x,
            y,
            width,
            height,
        }
    }
}

/// Fraction of `region`'s area that overlaps `viewport`, in `[0, 1]`.
///
/// A zero-area region has no meaningful fraction; it reports `1.0` when it
/// lies within the viewport (edges included) and `0.0` otherwise.
#[must_use]
pub fn intersection_ratio(region: Rectangle, viewport: Rectangle) -> f32 {
    let region_width = region.width.max(0.0);
    let region_height = region.height.max(0.0);

    let left = region.x.max(viewport.x);
    let top = region.y.max(viewport.y);
    let right = (region.x + region_width).min(viewport.x + viewport.width.max(0.0));
    let bottom = (region.y + region_height).min(viewport.y + viewport.height.max(0.0));

    if right < left || bottom < top {
        return 0.0;
    }

    let region_area = region_width * region_height;
    if region_area <= 0.0 {
        return 1.0;
    }

    ((right - left) * (bottom - top) / region_area).clamp(0.0, 1.0)
}
