// SPDX-License-Identifier: MPL-2.0
//! Observable screen regions.
//!
//! A [`Region`] is the host-side handle to a block of page content. It starts
//! detached (no layout yet) and receives page-space bounds once the host knows
//! where the block sits. Observers only ever read it.

use iced::Rectangle;
use std::fmt;

/// Opaque identity of a region, unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    /// Creates a new unique region ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RegionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// A rectangular block of rendered content, in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: RegionId,
    bounds: Option<Rectangle>,
}

impl Region {
    /// Creates a detached region.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: RegionId::new(),
            bounds: None,
        }
    }

    /// Creates a region that is already laid out.
    #[must_use]
    pub fn attached(bounds: Rectangle) -> Self {
        Self {
            id: RegionId::new(),
            bounds: Some(bounds),
        }
    }

    #[must_use]
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Page-space bounds, or `None` while detached.
    #[must_use]
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.bounds.is_some()
    }

    /// Attaches the region or moves it after a layout change.
    ///
    /// Returns `true` if the bounds actually changed.
    pub fn attach(&mut self, bounds: Rectangle) -> bool {
        let changed = self.bounds != Some(bounds);
        self.bounds = Some(bounds);
        changed
    }

    /// Detaches the region from the surface (e.g. the section was torn down).
    pub fn detach(&mut self) {
        self.bounds = None;
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}
