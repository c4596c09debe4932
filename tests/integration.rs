// SPDX-License-Identifier: MPL-2.0
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use iced_reveal::config::{self, Config};
use iced_reveal::content::{self, Portfolio};
use iced_reveal::observer::Visibility;
use iced_reveal::ui::page::Page;
use iced_reveal::ui::section::SectionKind;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

const WINDOW: Size = Size::new(1280.0, 800.0);

fn scroll_to(page: &mut Page, portfolio: &Portfolio, y: f32) {
    let bounds = Rectangle::new(Point::ORIGIN, WINDOW);
    page.scrolled(bounds, AbsoluteOffset { x: 0.0, y }, portfolio);
}

#[test]
fn test_config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut original = Config::default();
    original.reveal.default_threshold = Some(0.35);
    original.navigation.mobile_breakpoint_px = Some(900.0);
    original.diagnostics.transition_log_capacity = Some(32);

    config::save_to_path(&original, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, original);
    assert!((loaded.reveal.threshold().value() - 0.35).abs() < f32::EPSILON);
}

#[test]
fn test_config_directory_override_and_corrupt_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // Missing file: defaults without a warning.
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());

    fs::write(dir.path().join("settings.toml"), "reveal = [not toml").unwrap();
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn test_content_file_resolves_relative_images() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("portfolio.toml");
    fs::write(
        &path,
        r#"
[profile]
name = "Ada"
headline = "Engineer"

[[projects]]
name = "Engine"
description = "Analytical"
category = "Hardware"
image = "shots/engine.png"
"#,
    )
    .unwrap();

    let portfolio = content::load_from_path(&path).expect("content loads");
    assert_eq!(portfolio.profile.name, "Ada");
    assert_eq!(
        portfolio.projects[0].image.as_deref(),
        Some(dir.path().join("shots/engine.png").as_path())
    );
}

#[test]
fn test_scrolling_through_page_reveals_each_section_once() {
    let portfolio = Portfolio::builtin().expect("built-in content");
    let mut page = Page::new(&Config::default()).expect("page builds");
    page.resize(WINDOW, &portfolio);

    let bottom = page.content_height() - WINDOW.height;
    let mut y = 0.0;
    while y <= bottom {
        scroll_to(&mut page, &portfolio, y);
        y += 40.0;
    }
    scroll_to(&mut page, &portfolio, bottom);

    // Back to the top: nothing hides again.
    scroll_to(&mut page, &portfolio, 0.0);
    for section in page.sections() {
        assert!(section.is_revealed(), "{:?} not revealed", section.kind());
    }

    let mut reveals: HashMap<&str, usize> = HashMap::new();
    for record in page.log().iter() {
        assert_eq!(record.transition.to, Visibility::Visible);
        *reveals.entry(record.label.as_str()).or_default() += 1;
    }
    for kind in SectionKind::ALL.into_iter().filter(|kind| kind.is_observed()) {
        assert_eq!(reveals.get(kind.anchor()), Some(&1), "{kind:?}");
    }
}

#[test]
fn test_navigation_follows_scroll_position() {
    let portfolio = Portfolio::builtin().expect("built-in content");
    let mut page = Page::new(&Config::default()).expect("page builds");
    page.resize(WINDOW, &portfolio);
    assert!(!page.navigation().is_scrolled());
    assert_eq!(page.navigation().active(), SectionKind::Hero);

    let skills = page
        .section(SectionKind::Skills)
        .and_then(|section| section.bounds())
        .expect("skills placed");
    scroll_to(&mut page, &portfolio, skills.y);

    assert!(page.navigation().is_scrolled());
    assert_eq!(page.navigation().active(), SectionKind::Skills);
    assert!(page.section(SectionKind::Skills).unwrap().is_revealed());
}
