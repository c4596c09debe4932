// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State derived from host events (scroll, resize), kept separate from the
//! main App struct.

pub mod viewport;

pub use viewport::ViewportState;
