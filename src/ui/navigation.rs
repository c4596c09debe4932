// SPDX-License-Identifier: MPL-2.0
//! Navigation bar state: scrolled styling, active link and the mobile menu.

use iced::Rectangle;

use crate::app::config::NavigationConfig;
use crate::domain::ui::PixelOffset;
use crate::ui::section::SectionKind;

/// Sections linked from the navigation bar, in display order.
pub const NAV_ITEMS: [SectionKind; 7] = [
    SectionKind::Hero,
    SectionKind::About,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Skills,
    SectionKind::Certifications,
    SectionKind::Education,
];

#[derive(Debug, Clone)]
pub struct NavigationState {
    scrolled: bool,
    active: SectionKind,
    menu_open: bool,
    scrolled_offset: PixelOffset,
    activation_offset: PixelOffset,
    mobile_breakpoint: PixelOffset,
}

impl NavigationState {
    #[must_use]
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            scrolled: false,
            active: SectionKind::Hero,
            menu_open: false,
            scrolled_offset: config.scrolled_offset(),
            activation_offset: config.activation_offset(),
            mobile_breakpoint: config.mobile_breakpoint(),
        }
    }

    /// Recomputes the scroll-dependent state. Returns true if anything changed.
    pub fn update<I>(&mut self, scroll_y: f32, sections: I) -> bool
    where
        I: IntoIterator<Item = (SectionKind, Rectangle)>,
    {
        let scrolled = scroll_y > self.scrolled_offset.value();
        let active = active_section(scroll_y, self.activation_offset.value(), sections);
        let changed = scrolled != self.scrolled || active != self.active;
        self.scrolled = scrolled;
        self.active = active;
        changed
    }

    /// Whether the page has scrolled far enough to switch the bar style.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn active(&self) -> SectionKind {
        self.active
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Whether the bar collapses into the menu button at this window width.
    #[must_use]
    pub fn is_compact(&self, width: f32) -> bool {
        width < self.mobile_breakpoint.value()
    }

    /// Follows a navigation link: closes the mobile menu and returns the
    /// page offset to scroll to.
    pub fn follow<I>(&mut self, anchor: &str, sections: I) -> Option<f32>
    where
        I: IntoIterator<Item = (SectionKind, Rectangle)>,
    {
        self.close_menu();
        let target = scroll_target(anchor, sections);
        if target.is_none() {
            tracing::debug!(anchor, "navigation link has no matching section");
        }
        target
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

/// The last linked section whose top has passed the activation line.
///
/// The activation line sits `activation_offset` below the viewport top, so a
/// section becomes active as soon as it slides under the navigation bar.
pub fn active_section<I>(scroll_y: f32, activation_offset: f32, sections: I) -> SectionKind
where
    I: IntoIterator<Item = (SectionKind, Rectangle)>,
{
    let line = scroll_y + activation_offset;
    sections
        .into_iter()
        .filter(|(kind, _)| NAV_ITEMS.contains(kind))
        .filter(|(_, bounds)| bounds.y <= line)
        .last()
        .map_or(SectionKind::Hero, |(kind, _)| kind)
}

/// Page offset that brings the section named by `anchor` to the viewport top.
pub fn scroll_target<I>(anchor: &str, sections: I) -> Option<f32>
where
    I: IntoIterator<Item = (SectionKind, Rectangle)>,
{
    let wanted = SectionKind::from_anchor(anchor)?;
    sections
        .into_iter()
        .find(|(kind, _)| *kind == wanted)
        .map(|(_, bounds)| bounds.y.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, rect};

    fn layout() -> Vec<(SectionKind, Rectangle)> {
        vec![
            (SectionKind::Hero, rect(0.0, 0.0, 800.0, 600.0)),
            (SectionKind::About, rect(0.0, 600.0, 800.0, 500.0)),
            (SectionKind::Experience, rect(0.0, 1100.0, 800.0, 900.0)),
            (SectionKind::Stats, rect(0.0, 2000.0, 800.0, 240.0)),
            (SectionKind::Education, rect(0.0, 2240.0, 800.0, 500.0)),
        ]
    }

    #[test]
    fn scrolled_flag_uses_strict_threshold() {
        let mut nav = NavigationState::default();
        nav.update(50.0, layout());
        assert!(!nav.is_scrolled());
        assert!(nav.update(51.0, layout()));
        assert!(nav.is_scrolled());
    }

    #[test]
    fn active_section_follows_activation_line() {
        assert_eq!(active_section(0.0, 96.0, layout()), SectionKind::Hero);
        assert_eq!(active_section(503.0, 96.0, layout()), SectionKind::Hero);
        assert_eq!(active_section(504.0, 96.0, layout()), SectionKind::About);
        assert_eq!(active_section(1500.0, 96.0, layout()), SectionKind::Experience);
    }

    #[test]
    fn unlinked_sections_never_become_active() {
        // Stats is not in the navigation bar; Experience stays active over it.
        assert_eq!(active_section(2050.0, 96.0, layout()), SectionKind::Experience);
    }

    #[test]
    fn scroll_target_accepts_hash_prefix() {
        assert_abs_diff_eq!(scroll_target("#about", layout()).unwrap(), 600.0);
        assert_abs_diff_eq!(scroll_target("experience", layout()).unwrap(), 1100.0);
        assert!(scroll_target("#projects", layout()).is_none());
        assert!(scroll_target("#missing", layout()).is_none());
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert_eq!(nav.follow("#education", layout()), Some(2240.0));
        assert!(!nav.is_menu_open());

        nav.toggle_menu();
        assert_eq!(nav.follow("#missing", layout()), None);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn compact_below_breakpoint() {
        let nav = NavigationState::default();
        assert!(nav.is_compact(600.0));
        assert!(!nav.is_compact(768.0));
    }
}
