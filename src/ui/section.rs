// SPDX-License-Identifier: MPL-2.0
//! Page sections and their scroll-linked state.
//!
//! A [`Section`] owns everything that reacts to scrolling for one block of the
//! page: its [`Region`], the [`ObservedRegion`] that decides when the block is
//! revealed, and the parallax layers sampled from its scroll progress.
//!
//! The section reveal is decided on the header band at the top of the
//! section, not on the whole block, so a section of any length reaches its
//! threshold. Card sections also observe each card on its own.

use iced::Rectangle;

use crate::app::config::RevealConfig;
use crate::error::{MotionError, ObserveError};
use crate::motion::{Keyframes, ScrollOffsets};
use crate::observer::{self, ObserveConfig, ObservedRegion, Region, Transition};
use crate::ui::page::metrics;

/// The blocks of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Stats,
    Certifications,
    Education,
    Footer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Stats,
        SectionKind::Certifications,
        SectionKind::Education,
        SectionKind::Footer,
    ];

    /// Fragment identifier used by navigation links, without the `#`.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionKind::Hero => "home",
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Stats => "stats",
            SectionKind::Certifications => "certifications",
            SectionKind::Education => "education",
            SectionKind::Footer => "contact",
        }
    }

    /// Looks a section up by anchor. Accepts `"#about"` as well as `"about"`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|kind| kind.anchor().eq_ignore_ascii_case(anchor))
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Hero => "Home",
            SectionKind::About => "About",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Stats => "Highlights",
            SectionKind::Certifications => "Certifications",
            SectionKind::Education => "Education",
            SectionKind::Footer => "Contact",
        }
    }

    /// Section-specific reveal threshold. `None` uses the configured default.
    #[must_use]
    pub fn reveal_threshold(self) -> Option<f32> {
        match self {
            SectionKind::Projects | SectionKind::Certifications | SectionKind::Education => {
                Some(0.1)
            }
            SectionKind::Stats => Some(0.3),
            SectionKind::Hero
            | SectionKind::About
            | SectionKind::Experience
            | SectionKind::Skills
            | SectionKind::Footer => None,
        }
    }

    /// Threshold of the per-card observers. `None` for sections without cards.
    #[must_use]
    pub fn card_threshold(self) -> Option<f32> {
        match self {
            SectionKind::Experience | SectionKind::Skills => Some(0.3),
            SectionKind::Projects | SectionKind::Certifications | SectionKind::Education => {
                Some(0.2)
            }
            SectionKind::Hero
            | SectionKind::About
            | SectionKind::Stats
            | SectionKind::Footer => None,
        }
    }

    /// The hero is on screen at startup and is never gated by the observer.
    #[must_use]
    pub fn is_observed(self) -> bool {
        self != SectionKind::Hero
    }

    #[must_use]
    pub fn progress_offsets(self) -> ScrollOffsets {
        match self {
            SectionKind::Hero => ScrollOffsets::TOP_TO_EXIT,
            _ => ScrollOffsets::ENTER_TO_EXIT,
        }
    }

    /// Parallax layers drawn behind (or, for the hero, as) the section content.
    pub fn layers(self) -> Result<Vec<ParallaxLayer>, MotionError> {
        let layers = match self {
            SectionKind::Hero => vec![ParallaxLayer::translate((0.0, 1.0), (0.0, 300.0))?
                .with_opacity(Keyframes::new(vec![0.0, 0.5, 1.0], vec![1.0, 0.8, 0.0])?)
                .with_scale(Keyframes::linear((0.0, 1.0), (1.0, 0.95))?)],
            SectionKind::About | SectionKind::Education => vec![
                ParallaxLayer::translate((0.0, 1.0), (100.0, -100.0))?,
                ParallaxLayer::translate((0.0, 1.0), (-80.0, 80.0))?,
            ],
            SectionKind::Experience | SectionKind::Stats => {
                vec![ParallaxLayer::translate((0.0, 1.0), (50.0, -50.0))?]
            }
            SectionKind::Projects => vec![
                ParallaxLayer::translate((0.0, 1.0), (100.0, -100.0))?,
                ParallaxLayer::translate((0.0, 1.0), (-100.0, 100.0))?,
            ],
            SectionKind::Skills => vec![
                ParallaxLayer::translate((0.0, 1.0), (100.0, -100.0))?,
                ParallaxLayer::translate((0.0, 1.0), (-100.0, 100.0))?.with_opacity(
                    Keyframes::new(vec![0.0, 0.3, 0.7, 1.0], vec![0.0, 1.0, 1.0, 0.0])?,
                ),
            ],
            SectionKind::Certifications => {
                vec![ParallaxLayer::translate((0.0, 1.0), (100.0, -100.0))?]
            }
            SectionKind::Footer => Vec::new(),
        };
        Ok(layers)
    }
}

/// Transform of one parallax layer at a given progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl LayerStyle {
    pub const IDENTITY: Self = Self {
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Keyframe transforms for one decorative layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    y: Keyframes,
    opacity: Option<Keyframes>,
    scale: Option<Keyframes>,
}

impl ParallaxLayer {
    pub fn translate(input: (f32, f32), output: (f32, f32)) -> Result<Self, MotionError> {
        Ok(Self {
            y: Keyframes::linear(input, output)?,
            opacity: None,
            scale: None,
        })
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: Keyframes) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Keyframes) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn sample(&self, progress: f32) -> LayerStyle {
        LayerStyle {
            y: self.y.sample(progress),
            opacity: self
                .opacity
                .as_ref()
                .map_or(1.0, |frames| frames.sample(progress)),
            scale: self
                .scale
                .as_ref()
                .map_or(1.0, |frames| frames.sample(progress)),
        }
    }
}

/// The part of a section its reveal is decided on: the top padding and the
/// header, or the whole section if it is shorter.
#[must_use]
pub fn header_band(bounds: Rectangle) -> Rectangle {
    Rectangle {
        height: bounds
            .height
            .min(metrics::SECTION_PADDING + metrics::HEADER_HEIGHT),
        ..bounds
    }
}

/// One observed card inside a section.
#[derive(Debug)]
struct CardReveal {
    region: Region,
    observer: Option<ObservedRegion>,
}

/// One block of the page.
#[derive(Debug)]
pub struct Section {
    kind: SectionKind,
    region: Region,
    header: Region,
    observe_config: ObserveConfig,
    observer: Option<ObservedRegion>,
    cards: Vec<CardReveal>,
    layers: Vec<ParallaxLayer>,
    progress: f32,
}

impl Section {
    /// Builds a detached section. Observation starts on the first [`place`].
    ///
    /// [`place`]: Section::place
    pub fn new(kind: SectionKind, reveal: &RevealConfig) -> Result<Self, MotionError> {
        let threshold = kind
            .reveal_threshold()
            .unwrap_or_else(|| reveal.threshold().value());
        Ok(Self {
            kind,
            region: Region::new(),
            header: Region::new(),
            observe_config: ObserveConfig::once(threshold).with_root_margin(reveal.root_margin),
            observer: None,
            cards: Vec::new(),
            layers: kind.layers()?,
            progress: 0.0,
        })
    }

    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Rectangle> {
        self.region.bounds()
    }

    /// Page-space bounds the section reveal is evaluated on.
    #[must_use]
    pub fn header_bounds(&self) -> Option<Rectangle> {
        self.header.bounds()
    }

    #[must_use]
    pub fn observer(&self) -> Option<&ObservedRegion> {
        self.observer.as_ref()
    }

    /// Moves the section to `bounds` in page coordinates.
    ///
    /// The observation is registered the first time the section has bounds;
    /// an observation that failed earlier is retried here.
    ///
    /// # Errors
    ///
    /// Returns [`ObserveError::InvalidConfig`] if the reveal threshold is out
    /// of range. The section then stays hidden.
    pub fn place(&mut self, bounds: Rectangle) -> Result<(), ObserveError> {
        self.region.attach(bounds);
        self.header.attach(header_band(bounds));
        if self.kind.is_observed() && self.observer.is_none() {
            self.observer = Some(observer::observe(&self.header, self.observe_config)?);
        }
        Ok(())
    }

    /// Moves the section's cards, one rectangle per card in content order.
    ///
    /// Cards keep their observers across relayouts; a shorter list drops the
    /// trailing cards. Sections without card observers ignore the call.
    ///
    /// # Errors
    ///
    /// Returns [`ObserveError::InvalidConfig`] if a card threshold is out of
    /// range.
    pub fn place_cards(&mut self, cards: &[Rectangle]) -> Result<(), ObserveError> {
        let Some(threshold) = self.kind.card_threshold() else {
            return Ok(());
        };
        let config = ObserveConfig::once(threshold).with_root_margin(self.observe_config.root_margin);

        self.cards.truncate(cards.len());
        while self.cards.len() < cards.len() {
            self.cards.push(CardReveal {
                region: Region::new(),
                observer: None,
            });
        }

        for (card, bounds) in self.cards.iter_mut().zip(cards) {
            card.region.attach(*bounds);
            if card.observer.is_none() {
                card.observer = Some(observer::observe(&card.region, config)?);
            }
        }
        Ok(())
    }

    /// Re-evaluates visibility and scroll progress against `viewport`.
    pub fn update(&mut self, viewport: Rectangle) -> Option<Transition> {
        if let Some(bounds) = self.region.bounds() {
            self.progress = self.kind.progress_offsets().measure(bounds, viewport);
        }
        self.observer
            .as_mut()
            .and_then(|handle| handle.evaluate(&self.header, viewport))
    }

    /// Re-evaluates every card. Returns the card index with each transition.
    pub fn update_cards(&mut self, viewport: Rectangle) -> Vec<(usize, Transition)> {
        self.cards
            .iter_mut()
            .enumerate()
            .filter_map(|(index, card)| {
                let handle = card.observer.as_mut()?;
                handle
                    .evaluate(&card.region, viewport)
                    .map(|transition| (index, transition))
            })
            .collect()
    }

    /// Whether the content is shown in its revealed state.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        if !self.kind.is_observed() {
            return true;
        }
        self.observer
            .as_ref()
            .is_some_and(ObservedRegion::is_visible)
    }

    /// Whether card `index` is shown. Sections without card observers show
    /// their cards together with the section.
    #[must_use]
    pub fn is_card_revealed(&self, index: usize) -> bool {
        if self.kind.card_threshold().is_none() {
            return self.is_revealed();
        }
        self.cards
            .get(index)
            .and_then(|card| card.observer.as_ref())
            .is_some_and(ObservedRegion::is_visible)
    }

    /// Number of placed cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Scroll progress in `[0, 1]`, as of the last update.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn layer_styles(&self) -> impl Iterator<Item = LayerStyle> + '_ {
        self.layers.iter().map(|layer| layer.sample(self.progress))
    }

    /// Style of the first layer, used for sections that move as a whole.
    #[must_use]
    pub fn primary_style(&self) -> LayerStyle {
        self.layer_styles().next().unwrap_or_default()
    }

    /// Ends observation of the section and its cards. Revealed state is kept.
    pub fn stop_observing(&mut self) {
        let handles = self
            .observer
            .iter_mut()
            .chain(self.cards.iter_mut().filter_map(|card| card.observer.as_mut()));
        for handle in handles {
            observer::stop(handle);
        }
    }
}
