// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! This module provides pure domain types for diagnostics:
//! - [`LogCapacity`]: Capacity for the transition log

mod newtypes;

pub use newtypes::{log_capacity_bounds, LogCapacity};
