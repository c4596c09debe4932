// SPDX-License-Identifier: MPL-2.0
//! Property tests for the visibility observer contract.

use iced::{Point, Rectangle, Size};
use iced_reveal::error::ObserveError;
use iced_reveal::observer::{self, intersection_ratio, ObserveConfig, Region, Visibility};
use proptest::prelude::*;

fn region_at(y: f32, height: f32) -> Region {
    Region::attached(Rectangle::new(
        Point::new(0.0, y),
        Size::new(800.0, height),
    ))
}

fn viewport_at(y: f32) -> Rectangle {
    Rectangle::new(Point::new(0.0, y), Size::new(800.0, 600.0))
}

fn arb_threshold() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0_f32), Just(1.0_f32), 0.0_f32..=1.0]
}

proptest! {
    #[test]
    fn prop_ratio_held_at_threshold_is_visible(threshold in arb_threshold()) {
        let region = region_at(0.0, 100.0);
        let mut handle = observer::observe(&region, ObserveConfig::repeating(threshold)).unwrap();

        let transition = handle.record_ratio(threshold);
        prop_assert_eq!(handle.visibility(), Visibility::Visible);
        prop_assert!(transition.is_some());
    }

    #[test]
    fn prop_measured_ratio_used_as_threshold_is_visible(
        region_y in 0.0_f32..2000.0,
        region_height in 1.0_f32..900.0,
        scroll_y in 0.0_f32..2000.0,
    ) {
        let region = region_at(region_y, region_height);
        let viewport = viewport_at(scroll_y);
        let ratio = intersection_ratio(region.bounds().unwrap(), viewport);
        prop_assert!((0.0..=1.0).contains(&ratio));

        let mut handle = observer::observe(&region, ObserveConfig::repeating(ratio)).unwrap();
        let _ = handle.evaluate(&region, viewport);
        prop_assert!(handle.is_visible());
    }

    #[test]
    fn prop_once_never_returns_to_hidden(
        threshold in arb_threshold(),
        ratios in prop::collection::vec(0.0_f32..=1.0, 1..64),
    ) {
        let region = region_at(0.0, 100.0);
        let mut handle = observer::observe(&region, ObserveConfig::once(threshold)).unwrap();

        let mut transitions = 0;
        let mut seen_visible = false;
        for ratio in ratios {
            if let Some(transition) = handle.record_ratio(ratio) {
                transitions += 1;
                prop_assert_eq!(transition.from, Visibility::Hidden);
                prop_assert_eq!(transition.to, Visibility::Visible);
            }
            if seen_visible {
                prop_assert!(handle.is_visible());
            }
            seen_visible |= handle.is_visible();
        }
        prop_assert!(transitions <= 1);
        prop_assert_eq!(handle.is_observing(), !seen_visible);
    }

    #[test]
    fn prop_repeating_reports_each_crossing_once(
        threshold in 0.05_f32..=0.95,
        ratios in prop::collection::vec(0.0_f32..=1.0, 1..64),
    ) {
        let region = region_at(0.0, 100.0);
        let mut handle = observer::observe(&region, ObserveConfig::repeating(threshold)).unwrap();

        let mut expected = Visibility::Hidden;
        for ratio in ratios {
            let next = if ratio >= threshold { Visibility::Visible } else { Visibility::Hidden };
            let transition = handle.record_ratio(ratio);
            if next == expected {
                prop_assert!(transition.is_none());
            } else {
                let transition = transition.unwrap();
                prop_assert_eq!(transition.from, expected);
                prop_assert_eq!(transition.to, next);
                expected = next;
            }
            prop_assert_eq!(handle.visibility(), expected);
        }
    }

    #[test]
    fn prop_out_of_range_threshold_is_rejected(
        threshold in prop_oneof![-10.0_f32..-0.001, 1.001_f32..10.0],
        once in any::<bool>(),
    ) {
        let config = ObserveConfig { threshold, once, ..ObserveConfig::default() };
        // Detached: the configuration is checked first.
        let result = observer::observe(&Region::new(), config);
        prop_assert!(
            matches!(result, Err(ObserveError::InvalidConfig { .. })),
            "unexpected result: {:?}",
            result
        );
    }

    #[test]
    fn prop_stopped_handle_ignores_every_ratio(
        ratios in prop::collection::vec(0.0_f32..=1.0, 1..32),
    ) {
        let region = region_at(0.0, 100.0);
        let mut handle = observer::observe(&region, ObserveConfig::repeating(0.5)).unwrap();
        observer::stop(&mut handle);
        observer::stop(&mut handle);

        for ratio in ratios {
            prop_assert!(handle.record_ratio(ratio).is_none());
        }
        prop_assert_eq!(handle.visibility(), Visibility::Hidden);
    }
}

#[test]
fn threshold_above_one_fails_before_evaluation() {
    let region = region_at(0.0, 100.0);
    let err = observer::observe(&region, ObserveConfig::once(1.5)).unwrap_err();
    assert!(matches!(err, ObserveError::InvalidConfig { threshold } if threshold == 1.5));
}

#[test]
fn detached_region_is_unavailable_until_attached() {
    let mut region = Region::new();
    let err = observer::observe(&region, ObserveConfig::once(0.2)).unwrap_err();
    assert!(matches!(err, ObserveError::RegionUnavailable(id) if id == region.id()));

    region.attach(Rectangle::new(Point::ORIGIN, Size::new(800.0, 400.0)));
    assert!(observer::observe(&region, ObserveConfig::once(0.2)).is_ok());
}

#[test]
fn one_shot_reveal_survives_scrolling_away() {
    // Region starts fully below the fold.
    let region = region_at(1000.0, 400.0);
    let mut handle = observer::observe(&region, ObserveConfig::once(0.2)).unwrap();

    assert!(handle.evaluate(&region, viewport_at(0.0)).is_none());
    assert!(!handle.is_visible());

    // 40px of 400px on screen: 10%.
    assert!(handle.evaluate(&region, viewport_at(440.0)).is_none());
    assert!(!handle.is_visible());

    // 80px of 400px on screen: exactly 20%.
    let transition = handle.evaluate(&region, viewport_at(480.0)).unwrap();
    assert_eq!(transition.to, Visibility::Visible);
    assert!(handle.is_visible());

    for y in [0.0, 2000.0, 5000.0, 0.0] {
        assert!(handle.evaluate(&region, viewport_at(y)).is_none());
        assert!(handle.is_visible());
    }
}

#[test]
fn stop_twice_is_a_no_op() {
    let region = region_at(0.0, 100.0);
    let mut handle = observer::observe(&region, ObserveConfig::repeating(0.5)).unwrap();
    let _ = handle.evaluate(&region, viewport_at(0.0));
    assert!(handle.is_visible());

    observer::stop(&mut handle);
    observer::stop(&mut handle);
    assert!(!handle.is_observing());
    assert!(handle.evaluate(&region, viewport_at(5000.0)).is_none());
    assert!(handle.is_visible());
}
