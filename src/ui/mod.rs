// SPDX-License-Identifier: MPL-2.0
//! User interface state and rendering for the scrolling page.
//!
//! This module follows the Elm-style "state down, messages up" pattern: the
//! page state is updated from host events and rendered by pure view functions.
//!
//! # State
//!
//! - [`page`] - Section layout, per-section observation and navigation
//! - [`section`] - One block of the page with its region, observer and parallax layers
//! - [`navigation`] - Scrolled flag, active link and mobile menu
//! - [`project_card`] - Hover and screenshot state of project cards
//! - [`state`] - Viewport tracking
//!
//! # Rendering
//!
//! - [`page_view`] - Widgets for the page and navigation bar
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod navigation;
pub mod page;
pub mod page_view;
pub mod project_card;
pub mod section;
pub mod state;
pub mod styles;
