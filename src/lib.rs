// SPDX-License-Identifier: MPL-2.0
//! `iced_reveal` renders a single-page portfolio whose sections reveal as
//! they scroll into view.
//!
//! The core is the [`observer`]: regions register once with a visibility
//! threshold and are re-evaluated against the viewport on every scroll or
//! resize. Scroll-linked [`motion`] (parallax, pointer springs) is computed
//! independently of visibility.

#![doc(html_root_url = "https://docs.rs/iced_reveal/0.1.0")]

pub mod app;
pub mod content;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod motion;
pub mod observer;
pub mod ui;

pub use app::config;

#[cfg(test)]
pub(crate) mod test_utils;
