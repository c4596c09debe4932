// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Log Capacity Bounds
// =============================================================================

/// Transition log capacity bounds (16 to 4096 entries).
pub mod log_capacity_bounds {
    /// Minimum log capacity.
    pub const MIN: usize = 16;
    /// Maximum log capacity.
    pub const MAX: usize = 4096;
    /// Default log capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// LogCapacity
// =============================================================================

/// Number of visibility transitions kept in memory.
///
/// Values outside the valid range (16–4096 entries) are clamped.
///
/// # Example
///
/// ```
/// use iced_reveal::domain::diagnostics::LogCapacity;
///
/// assert_eq!(LogCapacity::new(100).value(), 100);
/// assert_eq!(LogCapacity::new(1).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCapacity(usize);

impl LogCapacity {
    /// Creates a new log capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(log_capacity_bounds::MIN, log_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for LogCapacity {
    fn default() -> Self {
        Self(log_capacity_bounds::DEFAULT)
    }
}
