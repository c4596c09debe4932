// SPDX-License-Identifier: MPL-2.0
//! Observation settings for a single region.

use super::geometry::RootMargin;
use crate::domain::ui::Threshold;
use crate::error::ObserveError;

/// How a region is observed.
///
/// The threshold is kept raw here and validated by [`super::observe`], so a
/// bad value is reported at the call site that registers the region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveConfig {
    /// Fraction of the region that must be on screen, in `[0, 1]`.
    pub threshold: f32,
    /// Stop evaluating after the first `Hidden -> Visible` transition.
    pub once: bool,
    /// Adjustment applied to the viewport before intersecting.
    pub root_margin: RootMargin,
}

impl ObserveConfig {
    /// One-shot reveal: becomes visible once and stays visible.
    #[must_use]
    pub fn once(threshold: f32) -> Self {
        Self {
            threshold,
            once: true,
            root_margin: RootMargin::ZERO,
        }
    }

    /// Tracks visibility in both directions for as long as it is observed.
    #[must_use]
    pub fn repeating(threshold: f32) -> Self {
        Self {
            threshold,
            once: false,
            root_margin: RootMargin::ZERO,
        }
    }

    #[must_use]
    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub(crate) fn validated_threshold(&self) -> Result<Threshold, ObserveError> {
        Threshold::new(self.threshold).ok_or(ObserveError::InvalidConfig {
            threshold: self.threshold,
        })
    }
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self::repeating(0.0)
    }
}
