// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::page_view;
use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Scroll, navigation and hover events from the page.
    Page(page_view::Message),
    WindowResized(Size),
    CursorMoved(Point),
    CursorLeft,
    /// Animation frame while the pointer parallax settles.
    Tick(Instant),
    ProjectImageLoaded {
        index: usize,
        result: Result<Vec<u8>, Error>,
    },
}

/// Runtime flags passed from `main.rs` into the application on startup.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_REVEAL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional page content file replacing the built-in content.
    pub content_path: Option<PathBuf>,
}
