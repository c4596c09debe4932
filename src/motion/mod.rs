// SPDX-License-Identifier: MPL-2.0
//! Continuous motion inputs: scroll progress, parallax transforms and
//! pointer-driven smoothing.
//!
//! Nothing in here knows about visibility. Scroll progress is a continuous
//! value fed through [`parallax`] transforms; the observer only ever produces
//! a boolean.

pub mod parallax;
pub mod pointer;
pub mod scroll_progress;
pub mod spring;

pub use parallax::{offset, Keyframes};
pub use pointer::{CursorFollower, HoverState, PointerParallax};
pub use scroll_progress::{Edge, IntersectionPoint, ScrollOffsets};
pub use spring::{Spring, SpringConfig};
