// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window size and cursor position come from native events; scrolling is
//! reported by the page scrollable itself.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Frame interval for pointer-driven animation.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window and cursor events to the app.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        _ => None,
    })
}

/// Ticks only while the parallax or the cursor ring is still moving.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
