// SPDX-License-Identifier: MPL-2.0
//! Per-region visibility state machine.

use super::geometry::{intersection_ratio, RootMargin};
use super::region::{Region, RegionId};
use crate::domain::ui::Threshold;
use iced::Rectangle;

/// Visibility classification of an observed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// A change in a region's visibility classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub region: RegionId,
    pub from: Visibility,
    pub to: Visibility,
    /// Intersection ratio that caused the change.
    pub ratio: f32,
}

/// Handle returned by [`super::observe`].
///
/// Evaluation returns transitions as values instead of calling back into the
/// owner, so stopping the handle while reacting to a transition is safe.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedRegion {
    region: RegionId,
    threshold: Threshold,
    once: bool,
    root_margin: RootMargin,
    visibility: Visibility,
    observing: bool,
    last_ratio: Option<f32>,
}

impl ObservedRegion {
    pub(super) fn new(
        region: RegionId,
        threshold: Threshold,
        once: bool,
        root_margin: RootMargin,
    ) -> Self {
        Self {
            region,
            threshold,
            once,
            root_margin,
            visibility: Visibility::Hidden,
            observing: true,
            last_ratio: None,
        }
    }

    #[must_use]
    pub fn region(&self) -> RegionId {
        self.region
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn is_once(&self) -> bool {
        self.once
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Whether further evaluations can still change the state.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Ratio seen by the last evaluation, if any evaluation has run.
    #[must_use]
    pub fn last_ratio(&self) -> Option<f32> {
        self.last_ratio
    }

    /// Evaluates the region against the current viewport.
    ///
    /// Detached regions, regions that belong to another handle, and stopped
    /// handles are skipped without error.
    pub fn evaluate(&mut self, region: &Region, viewport: Rectangle) -> Option<Transition> {
        if region.id() != self.region {
            tracing::warn!(
                expected = %self.region,
                got = %region.id(),
                "evaluated observer against a foreign region"
            );
            return None;
        }
        let bounds = region.bounds()?;
        self.evaluate_bounds(bounds, viewport)
    }

    /// Evaluates raw page-space bounds against the viewport.
    pub fn evaluate_bounds(&mut self, bounds: Rectangle, viewport: Rectangle) -> Option<Transition> {
        if !self.observing {
            return None;
        }
        let ratio = intersection_ratio(bounds, self.root_margin.apply(viewport));
        self.record_ratio(ratio)
    }

    /// Feeds an already computed intersection ratio through the state machine.
    pub fn record_ratio(&mut self, ratio: f32) -> Option<Transition> {
        if !self.observing {
            return None;
        }
        self.last_ratio = Some(ratio);

        let next = Visibility::from(self.threshold.is_met_by(ratio));
        if next == self.visibility {
            return None;
        }

        let transition = Transition {
            region: self.region,
            from: self.visibility,
            to: next,
            ratio,
        };
        self.visibility = next;

        tracing::debug!(
            region = %self.region,
            from = ?transition.from,
            to = ?transition.to,
            ratio,
            "visibility transition"
        );

        if self.once && next == Visibility::Visible {
            // Visible is terminal for one-shot handles.
            self.observing = false;
        }

        Some(transition)
    }

    /// Stops evaluation. Calling it again is a no-op.
    pub fn stop(&mut self) {
        if self.observing {
            tracing::debug!(region = %self.region, "observation stopped");
        }
        self.observing = false;
    }
}
