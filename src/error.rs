// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Observation errors are kept in their own enum because callers usually
//! match on them directly (to retry after a region attaches), while the
//! crate-level [`Error`] wraps everything else the application can hit at
//! startup: file access, configuration and content parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Content Error: {0}")]
    Content(String),

    #[error("Observer Error: {0}")]
    Observe(#[from] ObserveError),

    #[error("Motion Error: {0}")]
    Motion(#[from] MotionError),

    #[error("GUI Error: {0}")]
    Gui(String),
}

/// Registration failures reported by [`crate::observer::observe`].
///
/// Both variants are programming or sequencing errors at the call site;
/// neither is a transient runtime fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObserveError {
    /// The visibility threshold is not a number in `[0, 1]`.
    #[error("visibility threshold {threshold} is outside [0, 1]")]
    InvalidConfig { threshold: f32 },

    /// The region has no layout yet. Retry once the host attaches it.
    #[error("region {0} is not attached to a renderable surface")]
    RegionUnavailable(crate::observer::RegionId),
}

/// Invalid input to one of the motion transforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("keyframes need matching input and output stops (got {inputs} and {outputs})")]
    MismatchedStops { inputs: usize, outputs: usize },

    #[error("keyframes need at least two stops (got {0})")]
    TooFewStops(usize),

    #[error("keyframe inputs must be finite and non-decreasing")]
    UnsortedStops,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
