// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the host scrollable's bounds and scroll offset, and converts them
//! into the page-space rectangle that regions are tested against.

use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{Point, Rectangle, Size};

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Previous scroll offset (for delta tracking)
    pub previous_offset: AbsoluteOffset,

    /// Current viewport bounds, in window coordinates
    pub bounds: Option<Rectangle>,

    /// Previous viewport bounds (for layout change detection)
    pub previous_bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            previous_offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
            previous_bounds: None,
        }
    }
}

/// Minimum size change (in pixels) treated as a relayout rather than jitter.
const RESIZE_EPSILON: f32 = 0.5;

impl ViewportState {
    /// Updates the viewport state with new bounds and offset.
    /// Returns true if the bounds size changed (section layout must be recomputed).
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        self.previous_offset = self.offset;
        self.offset = offset;
        self.previous_bounds = self.bounds;

        let resized = match self.previous_bounds {
            Some(prev) => {
                (prev.width - bounds.width).abs() > RESIZE_EPSILON
                    || (prev.height - bounds.height).abs() > RESIZE_EPSILON
            }
            // First update always lays the page out.
            None => true,
        };

        self.bounds = Some(bounds);
        resized
    }

    /// Visible size of the scrollable, if it has reported yet.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.bounds.map(|bounds| bounds.size())
    }

    /// The visible area expressed in page coordinates.
    ///
    /// Section bounds are laid out from the page origin, so the viewport is
    /// simply the scrollable's size positioned at the scroll offset.
    #[must_use]
    pub fn page_viewport(&self) -> Option<Rectangle> {
        let bounds = self.bounds?;
        Some(Rectangle::new(
            Point::new(self.offset.x, self.offset.y),
            bounds.size(),
        ))
    }

    /// Vertical distance scrolled since the previous update.
    #[must_use]
    pub fn scroll_delta(&self) -> f32 {
        self.offset.y - self.previous_offset.y
    }

    /// Relative offset that places page position `target_y` at the top of the
    /// viewport, for a page `content_height` tall.
    ///
    /// Returns `None` before the first viewport update.
    #[must_use]
    pub fn relative_offset_for(&self, target_y: f32, content_height: f32) -> Option<RelativeOffset> {
        let bounds = self.bounds?;
        let max_offset = (content_height - bounds.height).max(0.0);
        let y = if max_offset > 0.0 {
            (target_y / max_offset).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some(RelativeOffset { x: 0.0, y })
    }

    /// Calculates the scroll position as percentage (0-100%)
    #[must_use]
    pub fn scroll_position_percentage(&self, content_height: f32) -> Option<f32> {
        let viewport = self.bounds?;
        let max_offset_y = (content_height - viewport.height).max(0.0);
        if max_offset_y <= 0.0 {
            return None;
        }
        Some((self.offset.y / max_offset_y * 100.0).clamp(0.0, 100.0))
    }
}
