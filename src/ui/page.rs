// SPDX-License-Identifier: MPL-2.0
//! The scrolling page: section layout, evaluation and navigation.
//!
//! Sections are stacked vertically from the page origin. Their heights are
//! derived from the content and the viewport size, and the view renders each
//! section at exactly that height, so the bounds computed here are the bounds
//! on screen.

use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{Point, Rectangle, Size};

use crate::app::config::Config;
use crate::content::Portfolio;
use crate::diagnostics::TransitionLog;
use crate::domain::ui::PixelOffset;
use crate::error::MotionError;
use crate::observer::Transition;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::navigation::NavigationState;
use crate::ui::section::{Section, SectionKind};
use crate::ui::state::ViewportState;

/// Fixed layout metrics, in logical pixels.
pub mod metrics {
    pub const MIN_HERO_HEIGHT: f32 = 480.0;
    pub const SECTION_PADDING: f32 = 96.0;
    pub const HEADER_HEIGHT: f32 = 140.0;
    pub const ABOUT_HEIGHT: f32 = 560.0;
    pub const EXPERIENCE_CARD_HEIGHT: f32 = 220.0;
    pub const PROJECT_CARD_HEIGHT: f32 = 380.0;
    pub const SKILL_CARD_HEIGHT: f32 = 260.0;
    pub const STAT_ROW_HEIGHT: f32 = 140.0;
    pub const CERTIFICATION_CARD_HEIGHT: f32 = 200.0;
    pub const EDUCATION_CARD_HEIGHT: f32 = 240.0;
    pub const FOOTER_HEIGHT: f32 = 280.0;
    /// Widths at or above this get three card columns.
    pub const WIDE_LAYOUT_WIDTH: f32 = 1024.0;
}

/// Card grid columns for a viewport width.
#[must_use]
pub fn columns_for(width: f32, mobile_breakpoint: PixelOffset) -> usize {
    if width < mobile_breakpoint.value() {
        1
    } else if width < metrics::WIDE_LAYOUT_WIDTH {
        2
    } else {
        3
    }
}

fn rows(items: usize, columns: usize) -> f32 {
    items.div_ceil(columns.max(1)) as f32
}

/// Height of one section for the given content and viewport.
#[must_use]
pub fn section_height(kind: SectionKind, portfolio: &Portfolio, viewport: Size, columns: usize) -> f32 {
    use metrics::*;

    let body = match kind {
        SectionKind::Hero => return viewport.height.max(MIN_HERO_HEIGHT),
        SectionKind::About => return ABOUT_HEIGHT,
        SectionKind::Footer => return FOOTER_HEIGHT,
        SectionKind::Experience => portfolio.experience.len() as f32 * EXPERIENCE_CARD_HEIGHT,
        SectionKind::Projects => rows(portfolio.projects.len(), columns) * PROJECT_CARD_HEIGHT,
        SectionKind::Skills => rows(portfolio.skills.len(), columns) * SKILL_CARD_HEIGHT,
        SectionKind::Stats => {
            let stat_columns = if columns == 1 { 2 } else { 4 };
            return rows(portfolio.stats.len(), stat_columns) * STAT_ROW_HEIGHT
                + 2.0 * SECTION_PADDING;
        }
        SectionKind::Certifications => {
            rows(portfolio.certifications.len(), columns) * CERTIFICATION_CARD_HEIGHT
        }
        SectionKind::Education => portfolio.education.len() as f32 * EDUCATION_CARD_HEIGHT,
    };
    HEADER_HEIGHT + body + 2.0 * SECTION_PADDING
}

/// Page-space bounds of every card in a section placed at `section`, in
/// content order. Sections without cards have none.
///
/// Mirrors the view: content is centered up to the maximum width, cards start
/// below the header and each row advances by the card metric.
#[must_use]
pub fn card_bounds(
    kind: SectionKind,
    portfolio: &Portfolio,
    section: Rectangle,
    columns: usize,
) -> Vec<Rectangle> {
    use metrics::*;

    let (count, pitch, columns) = match kind {
        SectionKind::Experience => (portfolio.experience.len(), EXPERIENCE_CARD_HEIGHT, 1),
        SectionKind::Projects => (portfolio.projects.len(), PROJECT_CARD_HEIGHT, columns),
        SectionKind::Skills => (portfolio.skills.len(), SKILL_CARD_HEIGHT, columns),
        SectionKind::Certifications => (
            portfolio.certifications.len(),
            CERTIFICATION_CARD_HEIGHT,
            columns,
        ),
        SectionKind::Education => (portfolio.education.len(), EDUCATION_CARD_HEIGHT, 1),
        SectionKind::Hero | SectionKind::About | SectionKind::Stats | SectionKind::Footer => {
            return Vec::new()
        }
    };

    let columns = columns.max(1);
    let outer = section.width.min(sizing::CONTENT_MAX_WIDTH);
    let left = section.x + (section.width - outer) / 2.0 + spacing::LG;
    let inner = (outer - 2.0 * spacing::LG).max(0.0);
    let gaps = spacing::LG * (columns - 1) as f32;
    let cell = ((inner - gaps) / columns as f32).max(0.0);
    let top = section.y + SECTION_PADDING + HEADER_HEIGHT;

    (0..count)
        .map(|index| {
            let row = (index / columns) as f32;
            let column = (index % columns) as f32;
            Rectangle::new(
                Point::new(left + column * (cell + spacing::LG), top + row * pitch),
                Size::new(cell, pitch - spacing::LG),
            )
        })
        .collect()
}

/// State of the whole scrolling page.
#[derive(Debug)]
pub struct Page {
    sections: Vec<Section>,
    viewport: ViewportState,
    navigation: NavigationState,
    log: TransitionLog,
    mobile_breakpoint: PixelOffset,
    columns: usize,
    content_height: f32,
}

impl Page {
    /// Builds every section, detached. Call [`Page::resize`] to lay them out.
    pub fn new(config: &Config) -> Result<Self, MotionError> {
        let sections = SectionKind::ALL
            .into_iter()
            .map(|kind| Section::new(kind, &config.reveal))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sections,
            ..Self::empty(config)
        })
    }

    /// A page with no sections.
    #[must_use]
    pub fn empty(config: &Config) -> Self {
        Self {
            sections: Vec::new(),
            viewport: ViewportState::default(),
            navigation: NavigationState::new(&config.navigation),
            log: TransitionLog::new(config.diagnostics.log_capacity()),
            mobile_breakpoint: config.navigation.mobile_breakpoint(),
            columns: 1,
            content_height: 0.0,
        }
    }

    /// Handles a window resize: lays the page out for the new size and
    /// re-evaluates at the current scroll offset.
    pub fn resize(&mut self, size: Size, portfolio: &Portfolio) -> Vec<Transition> {
        let offset = self.viewport.offset;
        self.viewport
            .update(Rectangle::new(Point::ORIGIN, size), offset);
        self.layout(size, portfolio);
        self.evaluate()
    }

    /// Handles a scroll notification from the host scrollable.
    pub fn scrolled(
        &mut self,
        bounds: Rectangle,
        offset: AbsoluteOffset,
        portfolio: &Portfolio,
    ) -> Vec<Transition> {
        if self.viewport.update(bounds, offset) {
            self.layout(bounds.size(), portfolio);
        }
        self.evaluate()
    }

    fn layout(&mut self, size: Size, portfolio: &Portfolio) {
        self.columns = columns_for(size.width, self.mobile_breakpoint);

        let mut top = 0.0;
        for section in &mut self.sections {
            let height = section_height(section.kind(), portfolio, size, self.columns);
            let bounds = Rectangle::new(Point::new(0.0, top), Size::new(size.width, height));
            if let Err(err) = section.place(bounds) {
                // The section simply never reveals.
                tracing::warn!(section = section.kind().anchor(), %err, "section not observed");
            }
            let cards = card_bounds(section.kind(), portfolio, bounds, self.columns);
            if let Err(err) = section.place_cards(&cards) {
                tracing::warn!(section = section.kind().anchor(), %err, "cards not observed");
            }
            top += height;
        }
        self.content_height = top;

        tracing::debug!(
            width = size.width,
            height = size.height,
            columns = self.columns,
            content_height = self.content_height,
            "page laid out"
        );
    }

    /// Evaluates every section and card against the current viewport.
    ///
    /// Returns the transitions in page order, each section before its cards;
    /// they are also appended to the transition log. Cards are labelled
    /// `anchor/index`.
    pub fn evaluate(&mut self) -> Vec<Transition> {
        let Some(viewport) = self.viewport.page_viewport() else {
            return Vec::new();
        };

        let mut transitions = Vec::new();
        for section in &mut self.sections {
            let anchor = section.kind().anchor();
            if let Some(transition) = section.update(viewport) {
                self.log.record(anchor, transition);
                transitions.push(transition);
            }
            for (index, transition) in section.update_cards(viewport) {
                self.log.record(format!("{anchor}/{index}"), transition);
                transitions.push(transition);
            }
        }

        let placed = self.placed_sections();
        self.navigation.update(viewport.y, placed);
        transitions
    }

    fn placed_sections(&self) -> Vec<(SectionKind, Rectangle)> {
        self.sections
            .iter()
            .filter_map(|section| section.bounds().map(|bounds| (section.kind(), bounds)))
            .collect()
    }

    /// Follows a navigation link. Returns where the scrollable should snap to.
    pub fn navigate(&mut self, anchor: &str) -> Option<RelativeOffset> {
        let placed = self.placed_sections();
        let target = self.navigation.follow(anchor, placed)?;
        self.viewport
            .relative_offset_for(target, self.content_height)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind() == kind)
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Card grid columns for the current width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }
}
