// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the page (sections, observers, navigation), the
//! content it renders and the pointer-driven motion (parallax and the cursor
//! ring), and translates host events into updates of those.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content::{self, Portfolio};
use crate::error::{Error, Result};
use crate::motion::{CursorFollower, PointerParallax};
use crate::ui::page::Page;
use crate::ui::page_view::ViewContext;
use crate::ui::project_card::ProjectCards;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    page: Page,
    portfolio: Portfolio,
    cards: ProjectCards,
    pointer: PointerParallax,
    cursor: CursorFollower,
    window_size: Size,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("profile", &self.portfolio.profile.name)
            .field("window_size", &self.window_size)
            .field("revealed", &self.page.log().reveal_count())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Fails if the page cannot be built or the event loop cannot start.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let (app, task) = App::new(flags)?;

    // iced 0.14 requires an `Fn` boot function; the prepared state is handed
    // over on the first call.
    let boot_state = RefCell::new(Some((app, task)));
    let boot = move || {
        boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(App::fallback)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|err| Error::Gui(err.to_string()))
}

impl App {
    /// Loads settings and content, and lays the page out for the default
    /// window size. Screenshot loading starts in the returned task.
    ///
    /// # Errors
    ///
    /// Fails only if a section's built-in parallax keyframes are invalid.
    pub fn new(flags: Flags) -> Result<(Self, Task<Message>)> {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "falling back to default settings");
        }

        let portfolio = load_portfolio(flags.content_path.as_deref());
        let mut page = Page::new(&config)?;
        let window_size = window_settings().size;
        page.resize(window_size, &portfolio);

        let app = App {
            cards: ProjectCards::new(&portfolio),
            pointer: PointerParallax::new(config.pointer.divisor(), config.pointer.spring()),
            cursor: CursorFollower::default(),
            page,
            portfolio,
            window_size,
            last_tick: None,
        };
        let task = update::load_project_images(&app.portfolio);

        tracing::info!(
            sections = app.page.sections().len(),
            projects = app.portfolio.projects.len(),
            "page ready"
        );
        Ok((app, task))
    }

    /// State used if the runtime boots more than once: default settings and
    /// empty content.
    fn fallback() -> (Self, Task<Message>) {
        tracing::warn!("application booted more than once; starting empty");
        let config = config::Config::default();
        let page = match Page::new(&config) {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(%err, "cannot build page");
                Page::empty(&config)
            }
        };
        let app = App {
            page,
            portfolio: Portfolio::default(),
            cards: ProjectCards::default(),
            pointer: PointerParallax::default(),
            cursor: CursorFollower::default(),
            window_size: window_settings().size,
            last_tick: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let name = self.portfolio.profile.name.trim();
        if name.is_empty() {
            "Portfolio".to_string()
        } else {
            format!("{name} - Portfolio")
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.pointer.is_animating() || self.cursor.is_animating(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            page: &mut self.page,
            portfolio: &self.portfolio,
            cards: &mut self.cards,
            pointer: &mut self.pointer,
            cursor: &mut self.cursor,
            window_size: &mut self.window_size,
            last_tick: &mut self.last_tick,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(ViewContext {
            page: &self.page,
            portfolio: &self.portfolio,
            cards: &self.cards,
            pointer: self.pointer.offset(),
            cursor: self.cursor.position(),
            window_width: self.window_size.width,
        })
    }
}

/// Loads the user content file if given, falling back to the built-in
/// content when it is missing or invalid.
fn load_portfolio(path: Option<&Path>) -> Portfolio {
    if let Some(path) = path {
        match content::load_from_path(path) {
            Ok(portfolio) => return portfolio,
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "invalid content file; using built-in content");
            }
        }
    }

    Portfolio::builtin().unwrap_or_else(|err| {
        tracing::error!(%err, "built-in content unavailable");
        Portfolio::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Visibility;
    use crate::ui::page_view;
    use crate::ui::section::SectionKind;
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Point, Rectangle};
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // `App::new` reads the config directory from the environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn new_app() -> App {
        let _lock = ENV_MUTEX.lock().unwrap();
        let dir = tempdir().expect("temp dir");
        std::env::set_var(paths::ENV_CONFIG_DIR, dir.path());
        let (app, _task) = App::new(Flags::default()).expect("app builds");
        std::env::remove_var(paths::ENV_CONFIG_DIR);
        app
    }

    fn scroll(app: &mut App, y: f32) {
        let bounds = Rectangle::new(Point::ORIGIN, app.window_size);
        let _ = app.update(Message::Page(page_view::Message::Scrolled {
            bounds,
            offset: AbsoluteOffset { x: 0.0, y },
        }));
    }

    #[test]
    fn new_app_uses_builtin_content() {
        let app = new_app();
        assert!(!app.portfolio.profile.name.is_empty());
        assert_eq!(app.cards.len(), app.portfolio.projects.len());
        assert!(app.title().contains(&app.portfolio.profile.name));
    }

    #[test]
    fn invalid_content_file_falls_back_to_builtin() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[profile]\nname = \"\"\n").unwrap();

        let portfolio = load_portfolio(Some(&path));
        assert_eq!(portfolio, Portfolio::builtin().unwrap());
    }

    #[test]
    fn scrolling_reveals_sections_through_update() {
        let mut app = new_app();
        let education = app
            .page
            .section(SectionKind::Education)
            .and_then(|section| section.bounds())
            .unwrap();
        assert!(!app.page.section(SectionKind::Education).unwrap().is_revealed());

        scroll(&mut app, education.y);
        assert!(app.page.section(SectionKind::Education).unwrap().is_revealed());
        assert!(app
            .page
            .log()
            .iter()
            .any(|record| record.label == "education" && record.transition.to == Visibility::Visible));
    }

    #[test]
    fn toggle_menu_and_navigate_close_it() {
        let mut app = new_app();
        let _ = app.update(Message::Page(page_view::Message::ToggleMenu));
        assert!(app.page.navigation().is_menu_open());

        let _ = app.update(Message::Page(page_view::Message::NavigateTo(
            SectionKind::Skills,
        )));
        assert!(!app.page.navigation().is_menu_open());
    }

    #[test]
    fn resize_relays_out_page() {
        let mut app = new_app();
        let wide = app.page.content_height();
        let _ = app.update(Message::WindowResized(Size::new(480.0, 800.0)));
        assert!(app.page.content_height() > wide);
        assert_eq!(app.page.columns(), 1);
    }

    #[test]
    fn cursor_motion_starts_and_settles_parallax() {
        let mut app = new_app();
        let _ = app.update(Message::CursorMoved(Point::new(1280.0, 800.0)));
        assert!(app.pointer.is_animating());

        let mut now = Instant::now();
        for _ in 0..600 {
            now += subscription::FRAME_INTERVAL;
            let _ = app.update(Message::Tick(now));
        }
        assert!(!app.pointer.is_animating());
        let offset = app.pointer.offset();
        assert!((offset.x - 640.0 / 50.0).abs() < 0.05);
        assert!((offset.y - 400.0 / 50.0).abs() < 0.05);
    }

    #[test]
    fn cursor_ring_follows_pointer_and_hides_on_leave() {
        let mut app = new_app();
        assert!(app.cursor.position().is_none());

        let _ = app.update(Message::CursorMoved(Point::new(100.0, 100.0)));
        let _ = app.update(Message::CursorMoved(Point::new(300.0, 200.0)));
        assert!(app.cursor.is_animating());

        let mut now = Instant::now();
        for _ in 0..300 {
            now += subscription::FRAME_INTERVAL;
            let _ = app.update(Message::Tick(now));
        }
        assert_eq!(app.cursor.position(), Some(Point::new(300.0, 200.0)));

        let _ = app.update(Message::CursorLeft);
        assert!(app.cursor.position().is_none());
    }

    #[test]
    fn cards_reveal_after_their_section_header() {
        let mut app = new_app();
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 480.0)));
        let projects = app
            .page
            .section(SectionKind::Projects)
            .and_then(|section| section.bounds())
            .unwrap();

        scroll(&mut app, projects.y);
        let section = app.page.section(SectionKind::Projects).unwrap();
        assert!(section.is_revealed());
        assert!(section.is_card_revealed(0));
        assert!(!section.is_card_revealed(3));
    }

    #[test]
    fn non_web_links_are_not_opened() {
        let mut app = new_app();
        assert!(!update::open_link("javascript:alert(1)"));
        assert!(!update::open_link("file:///etc/passwd"));
        let _ = app.update(Message::Page(page_view::Message::OpenLink(
            "mailto:someone@example.com".into(),
        )));
    }

    #[test]
    fn view_builds_with_cursor_ring_and_partial_reveals() {
        let mut app = new_app();
        let _ = app.update(Message::CursorMoved(Point::new(640.0, 400.0)));
        scroll(&mut app, 900.0);
        assert!(app.cursor.position().is_some());
        let _element = app.view();
    }

    #[test]
    fn debug_output_reports_logged_reveals() {
        let mut app = new_app();
        let before = format!("{app:?}");
        let end = app.page.content_height() - app.window_size.height;
        scroll(&mut app, end);

        let revealed = app.page.log().reveal_count();
        assert!(revealed > 0);
        let after = format!("{app:?}");
        assert_ne!(before, after);
        assert!(after.contains(&format!("revealed: {revealed}")));
    }

    #[test]
    fn failed_image_keeps_placeholder() {
        let mut app = new_app();
        let _ = app.update(Message::ProjectImageLoaded {
            index: 0,
            result: Err(Error::Io("missing".into())),
        });
        assert!(app.cards.get(0).unwrap().image_state().shows_placeholder());
    }
}
