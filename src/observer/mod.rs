// SPDX-License-Identifier: MPL-2.0
//! Viewport visibility observation.
//!
//! Every content section registers its block once with [`observe`] and keeps
//! the returned [`ObservedRegion`]. On each scroll, resize or layout change the
//! section calls [`ObservedRegion::evaluate`] with the current viewport; the
//! handle compares the intersection ratio against its threshold and reports a
//! [`Transition`] whenever the classification flips.
//!
//! There is no registry: handles are owned by the sections that created them
//! and dropping a section drops its observation.
//!
//! # Example
//!
//! ```
//! use iced::{Point, Rectangle, Size};
//! use iced_reveal::observer::{self, ObserveConfig, Region};
//!
//! let region = Region::attached(Rectangle::new(Point::new(0.0, 900.0), Size::new(800.0, 400.0)));
//! let mut handle = observer::observe(&region, ObserveConfig::once(0.2)).unwrap();
//!
//! let top = Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0));
//! assert!(handle.evaluate(&region, top).is_none());
//!
//! let scrolled = Rectangle::new(Point::new(0.0, 400.0), Size::new(800.0, 600.0));
//! assert!(handle.evaluate(&region, scrolled).is_some());
//! assert!(handle.is_visible());
//!
//! // Scrolling back up never hides a one-shot region again.
//! assert!(handle.evaluate(&region, top).is_none());
//! assert!(handle.is_visible());
//! ```

mod config;
pub mod geometry;
mod handle;
mod region;

pub use config::ObserveConfig;
pub use geometry::{intersection_ratio, RootMargin};
pub use handle::{ObservedRegion, Transition, Visibility};
pub use region::{Region, RegionId};

use crate::error::ObserveError;

/// Registers `region` for visibility evaluation.
///
/// The configuration is validated before the region is looked at, so an
/// invalid threshold is reported even for a detached region.
///
/// # Errors
///
/// - [`ObserveError::InvalidConfig`] if the threshold is not in `[0, 1]`.
/// - [`ObserveError::RegionUnavailable`] if the region has no bounds yet.
pub fn observe(region: &Region, config: ObserveConfig) -> Result<ObservedRegion, ObserveError> {
    let threshold = config.validated_threshold()?;
    if !region.is_attached() {
        return Err(ObserveError::RegionUnavailable(region.id()));
    }

    tracing::debug!(
        region = %region.id(),
        threshold = threshold.value(),
        once = config.once,
        "observing region"
    );
    Ok(ObservedRegion::new(
        region.id(),
        threshold,
        config.once,
        config.root_margin,
    ))
}

/// Stops evaluation for `handle`. Idempotent.
pub fn stop(handle: &mut ObservedRegion) {
    handle.stop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::rect;

    #[test]
    fn invalid_threshold_fails_before_region_check() {
        let detached = Region::new();
        let err = observe(&detached, ObserveConfig::once(1.5)).unwrap_err();
        assert_eq!(err, ObserveError::InvalidConfig { threshold: 1.5 });
    }

    #[test]
    fn negative_threshold_is_invalid() {
        let region = Region::attached(rect(0.0, 0.0, 10.0, 10.0));
        assert!(matches!(
            observe(&region, ObserveConfig::repeating(-0.5)),
            Err(ObserveError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn nan_threshold_is_invalid() {
        let region = Region::attached(rect(0.0, 0.0, 10.0, 10.0));
        assert!(matches!(
            observe(&region, ObserveConfig::once(f32::NAN)),
            Err(ObserveError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn detached_region_is_unavailable() {
        let region = Region::new();
        assert_eq!(
            observe(&region, ObserveConfig::once(0.2)),
            Err(ObserveError::RegionUnavailable(region.id()))
        );
    }

    #[test]
    fn retry_after_attach_succeeds() {
        let mut region = Region::new();
        assert!(observe(&region, ObserveConfig::once(0.2)).is_err());
        region.attach(rect(0.0, 0.0, 800.0, 300.0));
        assert!(observe(&region, ObserveConfig::once(0.2)).is_ok());
    }

    #[test]
    fn stop_twice_is_a_noop() {
        let region = Region::attached(rect(0.0, 0.0, 800.0, 300.0));
        let mut handle = observe(&region, ObserveConfig::repeating(0.5)).unwrap();
        handle.evaluate(&region, rect(0.0, 0.0, 800.0, 600.0));
        assert!(handle.is_visible());

        stop(&mut handle);
        stop(&mut handle);
        assert!(!handle.is_observing());
        assert!(handle.is_visible());
    }

    #[test]
    fn stop_after_teardown_is_a_noop() {
        let mut region = Region::attached(rect(0.0, 0.0, 800.0, 300.0));
        let mut handle = observe(&region, ObserveConfig::once(0.5)).unwrap();
        region.detach();
        drop(region);
        stop(&mut handle);
        assert!(!handle.is_visible());
    }
}
