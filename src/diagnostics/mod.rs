// SPDX-License-Identifier: MPL-2.0
//! In-memory record of recent visibility transitions.
//!
//! Transitions are also emitted as `tracing` events; the log keeps the last
//! few in memory for inspection. The page does not render it: it shows up
//! in the app's debug output and is what the tests assert on.

mod buffer;
mod log;

pub use buffer::CircularBuffer;
pub use log::{TransitionLog, TransitionRecord};
