// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::page_view::{self, ViewContext};
use iced::Element;

/// Renders the page and lifts its messages into the app message type.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    page_view::view(ctx).map(Message::Page)
}
