// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::content::Portfolio;
use crate::error::Error;
use crate::content;
use crate::motion::{CursorFollower, PointerParallax};
use crate::ui::page::Page;
use crate::ui::page_view::{self, SCROLLABLE_ID};
use crate::ui::project_card::ProjectCards;
use iced::widget::{operation, Id};
use iced::{Point, Size, Task};
use std::time::{Duration, Instant};

/// Longest step fed to the springs, so a stalled frame does not overshoot.
const MAX_FRAME_STEP: Duration = Duration::from_millis(50);

/// Mutable view of the app state handed to the handlers.
pub struct UpdateContext<'a> {
    pub page: &'a mut Page,
    pub portfolio: &'a Portfolio,
    pub cards: &'a mut ProjectCards,
    pub pointer: &'a mut PointerParallax,
    pub cursor: &'a mut CursorFollower,
    pub window_size: &'a mut Size,
    pub last_tick: &'a mut Option<Instant>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Page(message) => handle_page_message(ctx, message),
        Message::WindowResized(size) => handle_window_resized(ctx, size),
        Message::CursorMoved(position) => handle_cursor_moved(ctx, position),
        Message::CursorLeft => {
            ctx.pointer.pointer_left();
            ctx.cursor.pointer_left();
            Task::none()
        }
        Message::Tick(now) => handle_tick(ctx, now),
        Message::ProjectImageLoaded { index, result } => {
            ctx.cards.image_loaded(index, result);
            Task::none()
        }
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page_view::Message) -> Task<Message> {
    match message {
        page_view::Message::Scrolled { bounds, offset } => {
            let revealed = ctx.page.scrolled(bounds, offset, ctx.portfolio);
            if !revealed.is_empty() {
                tracing::debug!(count = revealed.len(), "sections changed visibility");
            }
            Task::none()
        }
        page_view::Message::NavigateTo(kind) => match ctx.page.navigate(kind.anchor()) {
            Some(target) => operation::snap_to(Id::new(SCROLLABLE_ID), target),
            None => Task::none(),
        },
        page_view::Message::ToggleMenu => {
            ctx.page.navigation_mut().toggle_menu();
            Task::none()
        }
        page_view::Message::ProjectHovered { index, hovered } => {
            ctx.cards.set_hovered(index, hovered);
            Task::none()
        }
        page_view::Message::OpenLink(url) => {
            open_link(&url);
            Task::none()
        }
    }
}

/// Hands a web link to the system opener. Returns `false` if the link was
/// refused or could not be opened.
pub fn open_link(url: &str) -> bool {
    if !content::is_web_link(url) {
        tracing::warn!(url, "refusing to open non-web link");
        return false;
    }
    if let Err(err) = open::that(url) {
        tracing::warn!(url, %err, "cannot open link");
        return false;
    }
    tracing::debug!(url, "opened link");
    true
}

fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    ctx.page.resize(size, ctx.portfolio);
    Task::none()
}

fn handle_cursor_moved(ctx: &mut UpdateContext<'_>, position: Point) -> Task<Message> {
    ctx.pointer.pointer_moved(position, *ctx.window_size);
    ctx.cursor.pointer_moved(position);
    Task::none()
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let elapsed = ctx
        .last_tick
        .map_or(super::subscription::FRAME_INTERVAL, |last| {
            now.saturating_duration_since(last)
        })
        .min(MAX_FRAME_STEP);

    let parallax_moving = ctx.pointer.step(elapsed);
    let cursor_moving = ctx.cursor.step(elapsed);
    let moving = parallax_moving || cursor_moving;
    *ctx.last_tick = moving.then_some(now);
    Task::none()
}

/// Starts loading every project screenshot.
pub fn load_project_images(portfolio: &Portfolio) -> Task<Message> {
    Task::batch(
        crate::ui::project_card::pending_images(portfolio)
            .into_iter()
            .map(|(index, path)| {
                Task::perform(
                    crate::ui::project_card::load_image(path),
                    move |result: Result<Vec<u8>, Error>| Message::ProjectImageLoaded {
                        index,
                        result,
                    },
                )
            }),
    )
}
