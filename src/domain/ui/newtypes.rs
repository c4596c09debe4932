// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values. Values read from
//! settings are clamped into range; the visibility threshold is the exception
//! and is rejected instead, because a bad threshold at a call site is a bug
//! that must not be papered over.

// =============================================================================
// Threshold
// =============================================================================

/// Fraction of a region's area that must be on screen, in `[0, 1]`.
///
/// # Example
///
/// ```
/// use iced_reveal::domain::ui::Threshold;
///
/// assert!(Threshold::new(0.2).is_some());
/// assert!(Threshold::new(1.5).is_none());
/// assert!(Threshold::new(f32::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    /// Met by every ratio, so a region observed with it reports visible
    /// even with no overlap at all.
    pub const ZERO: Self = Self(0.0);

    /// The whole region must be on screen.
    pub const FULL: Self = Self(1.0);

    /// Creates a threshold, returning `None` if the value is NaN or outside `[0, 1]`.
    #[must_use]
    pub fn new(value: f32) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Inclusive comparison: a ratio exactly at the threshold is satisfied.
    #[must_use]
    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// ParallaxDivisor
// =============================================================================

/// Pointer parallax bounds.
pub mod parallax_bounds {
    /// Smallest divisor (strongest effect).
    pub const MIN_DIVISOR: f32 = 1.0;
    /// Largest divisor (weakest effect).
    pub const MAX_DIVISOR: f32 = 500.0;
    /// Default divisor.
    pub const DEFAULT_DIVISOR: f32 = 50.0;
}

/// How many pixels of pointer travel produce one pixel of layer offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxDivisor(f32);

impl ParallaxDivisor {
    /// Creates a divisor, clamping to the valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(parallax_bounds::MIN_DIVISOR, parallax_bounds::MAX_DIVISOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ParallaxDivisor {
    fn default() -> Self {
        Self(parallax_bounds::DEFAULT_DIVISOR)
    }
}

// =============================================================================
// PixelOffset
// =============================================================================

/// Upper bound for configured pixel offsets.
pub const MAX_PIXEL_OFFSET: f32 = 10_000.0;

/// A non-negative distance in logical pixels (scroll trigger, nav bar height).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PixelOffset(f32);

impl PixelOffset {
    /// Creates an offset, clamping into `[0, MAX_PIXEL_OFFSET]`. NaN becomes zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_PIXEL_OFFSET))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
