// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[reveal]` - Default threshold and viewport margin for section reveals
//! - `[navigation]` - Scroll trigger, active-section offset, mobile breakpoint
//! - `[pointer]` - Cursor parallax strength and spring smoothing
//! - `[diagnostics]` - Transition log size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_REVEAL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_reveal::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//! config.reveal.default_threshold = Some(0.3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::LogCapacity;
use crate::domain::ui::{ParallaxDivisor, PixelOffset, Threshold};
use crate::error::{Error, Result};
use crate::motion::SpringConfig;
use crate::observer::RootMargin;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Section reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    /// Threshold used by sections that do not set their own.
    #[serde(
        default = "default_reveal_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_threshold: Option<f32>,

    /// Grow (positive) or shrink (negative) the viewport before testing.
    #[serde(default)]
    pub root_margin: RootMargin,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_reveal_threshold(),
            root_margin: RootMargin::ZERO,
        }
    }
}

impl RevealConfig {
    /// The configured threshold, or the built-in default if it is out of range.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.default_threshold
            .and_then(Threshold::new)
            .or_else(|| Threshold::new(DEFAULT_REVEAL_THRESHOLD))
            .unwrap_or_default()
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    #[serde(
        default = "default_scrolled_offset_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub scrolled_offset_px: Option<f32>,

    #[serde(
        default = "default_activation_offset_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub activation_offset_px: Option<f32>,

    #[serde(
        default = "default_mobile_breakpoint_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_breakpoint_px: Option<f32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scrolled_offset_px: default_scrolled_offset_px(),
            activation_offset_px: default_activation_offset_px(),
            mobile_breakpoint_px: default_mobile_breakpoint_px(),
        }
    }
}

impl NavigationConfig {
    #[must_use]
    pub fn scrolled_offset(&self) -> PixelOffset {
        PixelOffset::new(self.scrolled_offset_px.unwrap_or(DEFAULT_SCROLLED_OFFSET_PX))
    }

    #[must_use]
    pub fn activation_offset(&self) -> PixelOffset {
        PixelOffset::new(
            self.activation_offset_px
                .unwrap_or(DEFAULT_ACTIVATION_OFFSET_PX),
        )
    }

    #[must_use]
    pub fn mobile_breakpoint(&self) -> PixelOffset {
        PixelOffset::new(
            self.mobile_breakpoint_px
                .unwrap_or(DEFAULT_MOBILE_BREAKPOINT_PX),
        )
    }
}

/// Pointer parallax settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointerConfig {
    #[serde(
        default = "default_parallax_divisor",
        skip_serializing_if = "Option::is_none"
    )]
    pub parallax_divisor: Option<f32>,

    #[serde(
        default = "default_spring_stiffness",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_stiffness: Option<f32>,

    #[serde(
        default = "default_spring_damping",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_damping: Option<f32>,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            parallax_divisor: default_parallax_divisor(),
            spring_stiffness: default_spring_stiffness(),
            spring_damping: default_spring_damping(),
        }
    }
}

impl PointerConfig {
    #[must_use]
    pub fn divisor(&self) -> ParallaxDivisor {
        ParallaxDivisor::new(self.parallax_divisor.unwrap_or(DEFAULT_PARALLAX_DIVISOR))
    }

    #[must_use]
    pub fn spring(&self) -> SpringConfig {
        SpringConfig::new(
            self.spring_stiffness.unwrap_or(DEFAULT_SPRING_STIFFNESS),
            self.spring_damping.unwrap_or(DEFAULT_SPRING_DAMPING),
        )
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_transition_log_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_log_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            transition_log_capacity: default_transition_log_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn log_capacity(&self) -> LogCapacity {
        self.transition_log_capacity
            .map(LogCapacity::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub pointer: PointerConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_reveal_threshold() -> Option<f32> {
    Some(DEFAULT_REVEAL_THRESHOLD)
}

fn default_scrolled_offset_px() -> Option<f32> {
    Some(DEFAULT_SCROLLED_OFFSET_PX)
}

fn default_activation_offset_px() -> Option<f32> {
    Some(DEFAULT_ACTIVATION_OFFSET_PX)
}

fn default_mobile_breakpoint_px() -> Option<f32> {
    Some(DEFAULT_MOBILE_BREAKPOINT_PX)
}

fn default_parallax_divisor() -> Option<f32> {
    Some(DEFAULT_PARALLAX_DIVISOR)
}

fn default_spring_stiffness() -> Option<f32> {
    Some(DEFAULT_SPRING_STIFFNESS)
}

fn default_spring_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

fn default_transition_log_capacity() -> Option<usize> {
    Some(DEFAULT_TRANSITION_LOG_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
