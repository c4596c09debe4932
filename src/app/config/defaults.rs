// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Reveal**: Default visibility threshold for sections
//! - **Navigation**: Scroll trigger and activation offsets
//! - **Pointer**: Cursor parallax and spring smoothing
//! - **Diagnostics**: Transition log size

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of a section that must be on screen before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.2;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Scroll distance after which the navigation bar switches to its solid style.
pub const DEFAULT_SCROLLED_OFFSET_PX: f32 = 50.0;

/// Distance below the viewport top at which a section counts as active
/// (roughly the fixed navigation bar height).
pub const DEFAULT_ACTIVATION_OFFSET_PX: f32 = 96.0;

/// Window width below which the navigation collapses into a menu button.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f32 = 768.0;

// ==========================================================================
// Pointer Defaults
// ==========================================================================

/// Pixels of cursor travel per pixel of background offset.
pub const DEFAULT_PARALLAX_DIVISOR: f32 = 50.0;

/// Spring stiffness for pointer smoothing.
pub const DEFAULT_SPRING_STIFFNESS: f32 = crate::motion::spring::DEFAULT_STIFFNESS;

/// Spring damping for pointer smoothing.
pub const DEFAULT_SPRING_DAMPING: f32 = crate::motion::spring::DEFAULT_DAMPING;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of visibility transitions kept in memory.
pub const DEFAULT_TRANSITION_LOG_CAPACITY: usize =
    crate::domain::diagnostics::log_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Reveal validation
    assert!(DEFAULT_REVEAL_THRESHOLD >= 0.0);
    assert!(DEFAULT_REVEAL_THRESHOLD <= 1.0);

    // Navigation validation
    assert!(DEFAULT_SCROLLED_OFFSET_PX >= 0.0);
    assert!(DEFAULT_ACTIVATION_OFFSET_PX >= 0.0);
    assert!(DEFAULT_MOBILE_BREAKPOINT_PX > DEFAULT_ACTIVATION_OFFSET_PX);

    // Pointer validation
    assert!(DEFAULT_PARALLAX_DIVISOR >= crate::domain::ui::newtypes::parallax_bounds::MIN_DIVISOR);
    assert!(DEFAULT_PARALLAX_DIVISOR <= crate::domain::ui::newtypes::parallax_bounds::MAX_DIVISOR);
    assert!(DEFAULT_SPRING_STIFFNESS > 0.0);
    assert!(DEFAULT_SPRING_DAMPING > 0.0);

    // Diagnostics validation
    assert!(DEFAULT_TRANSITION_LOG_CAPACITY >= crate::domain::diagnostics::log_capacity_bounds::MIN);
    assert!(DEFAULT_TRANSITION_LOG_CAPACITY <= crate::domain::diagnostics::log_capacity_bounds::MAX);
};
