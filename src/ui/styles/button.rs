// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navigation link. The active section's link is highlighted.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match (active, status) {
            (true, _) => palette::TEXT,
            (false, button::Status::Hovered | button::Status::Pressed) => palette::TEXT,
            (false, _) => palette::TEXT_MUTED,
        };
        let background = if active {
            Some(Background::Color(Color {
                a: 0.2,
                ..palette::ACCENT
            }))
        } else {
            None
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Filled accent button for the hero call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_SOFT,
        _ => palette::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::TEXT,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
