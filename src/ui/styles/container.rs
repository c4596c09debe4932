// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every section.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// Card surface. Hovered cards get an accent border and glow.
pub fn card(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if hovered {
            palette::SURFACE_RAISED
        } else {
            palette::SURFACE
        })),
        border: Border {
            color: if hovered {
                palette::ACCENT
            } else {
                palette::BORDER
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if hovered { shadow::GLOW } else { shadow::NONE },
        ..Default::default()
    }
}

/// Grey box shown while a screenshot loads or when it failed to load.
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_RAISED)),
        text_color: Some(palette::TEXT_MUTED),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round decorative blob. `alpha` is multiplied into the blob opacity.
pub fn blob(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BLOB * alpha.clamp(0.0, 1.0),
            ..color
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outline ring that follows the pointer.
pub fn cursor_ring(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::ACCENT_SOFT,
            width: 2.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Navigation bar: transparent at the top of the page, solid once scrolled.
pub fn nav_bar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if scrolled {
            opacity::NAV_SCROLLED
        } else {
            opacity::TRANSPARENT
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::SURFACE
            })),
            text_color: Some(palette::TEXT),
            border: Border {
                color: Color {
                    a: alpha,
                    ..palette::BORDER
                },
                width: if scrolled { 1.0 } else { 0.0 },
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Small rounded label used for tags and skills.
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette::ACCENT
        })),
        text_color: Some(palette::TEXT),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
