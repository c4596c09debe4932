// SPDX-License-Identifier: MPL-2.0
//! Rendering of the scrolling page and its navigation bar.
//!
//! Each section is drawn at exactly the height [`Page`] laid it out with, so
//! the region bounds the observer works on match what is on screen. A section
//! or card that has not been revealed yet renders an empty shell of the same
//! size.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{
    button, image, mouse_area, text, Column, Container, Id, Row, Scrollable, Space, Stack,
};
use iced::{Color, ContentFit, Element, Length, Padding, Point, Rectangle, Vector};

use crate::content::{Certification, Portfolio, Project};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::navigation::NAV_ITEMS;
use crate::ui::page::{metrics, Page};
use crate::ui::project_card::ProjectCards;
use crate::ui::section::{LayerStyle, Section, SectionKind};
use crate::ui::styles;

/// Widget id of the page scrollable, used to scroll programmatically.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    NavigateTo(SectionKind),
    ToggleMenu,
    ProjectHovered {
        index: usize,
        hovered: bool,
    },
    /// A card with an external link was clicked.
    OpenLink(String),
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub portfolio: &'a Portfolio,
    pub cards: &'a ProjectCards,
    /// Smoothed cursor parallax offset for the hero background.
    pub pointer: Vector,
    /// Centre of the cursor ring, in window coordinates.
    pub cursor: Option<Point>,
    pub window_width: f32,
}

/// Render the page.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sections = Column::with_children(
        ctx.page
            .sections()
            .iter()
            .map(|section| view_section(&ctx, section)),
    )
    .width(Length::Fill);

    let scrollable = Scrollable::new(sections)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let page = Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut layers = Stack::new().push(page).push(view_nav(&ctx));
    if let Some(position) = ctx.cursor {
        layers = layers.push(cursor_ring(position));
    }
    layers.into()
}

/// Ring drawn around the pointer. Containers do not capture events, so the
/// widgets below still receive clicks and hovers.
fn cursor_ring<'a>(position: Point) -> Element<'a, Message> {
    let radius = sizing::CURSOR_RING / 2.0;
    let ring = Container::new(
        Space::new()
            .width(Length::Fixed(sizing::CURSOR_RING))
            .height(Length::Fixed(sizing::CURSOR_RING)),
    )
    .style(styles::container::cursor_ring);

    Container::new(ring)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: (position.y - radius).max(0.0),
            left: (position.x - radius).max(0.0),
            ..Padding::ZERO
        })
        .into()
}

// =============================================================================
// Navigation
// =============================================================================

fn view_nav<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navigation = ctx.page.navigation();
    let brand = text(ctx.portfolio.profile.name.as_str())
        .size(typography::TITLE_SM)
        .color(palette::TEXT);

    let link = |kind: SectionKind| {
        button(text(kind.title()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::NavigateTo(kind))
            .style(styles::button::nav_link(navigation.active() == kind))
    };

    let compact = navigation.is_compact(ctx.window_width);
    let mut bar = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::XS)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if compact {
        let label = if navigation.is_menu_open() {
            "Close"
        } else {
            "Menu"
        };
        bar = bar.push(
            button(text(label).size(typography::BODY))
                .on_press(Message::ToggleMenu)
                .style(styles::button::nav_link(navigation.is_menu_open())),
        );
    } else {
        for kind in NAV_ITEMS {
            bar = bar.push(link(kind));
        }
    }

    let mut column = Column::new().push(
        Container::new(bar)
            .height(Length::Fixed(sizing::NAV_HEIGHT))
            .align_y(Vertical::Center)
            .padding([0.0, spacing::LG]),
    );

    if compact && navigation.is_menu_open() {
        let menu = NAV_ITEMS
            .into_iter()
            .fold(Column::new().spacing(spacing::XXS), |menu, kind| {
                menu.push(link(kind).width(Length::Fill))
            });
        column = column.push(Container::new(menu).padding([spacing::XS, spacing::LG]));
    }

    Container::new(column)
        .width(Length::Fill)
        .style(styles::container::nav_bar(
            navigation.is_scrolled() || navigation.is_menu_open(),
        ))
        .into()
}

// =============================================================================
// Sections
// =============================================================================

fn view_section<'a>(ctx: &ViewContext<'a>, section: &'a Section) -> Element<'a, Message> {
    let height = section
        .bounds()
        .map_or(Length::Shrink, |bounds| Length::Fixed(bounds.height));

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    if section.kind() == SectionKind::Hero {
        // The hero's own layer moves its content; its blobs follow the cursor.
        let against = Vector::new(-ctx.pointer.x, -ctx.pointer.y);
        stack = stack
            .push(blob_layer(0, LayerStyle::IDENTITY, ctx.pointer))
            .push(blob_layer(1, LayerStyle::IDENTITY, against));
    } else {
        for (index, style) in section.layer_styles().enumerate() {
            stack = stack.push(blob_layer(index, style, Vector::ZERO));
        }
    }

    // Entrance pending: keep the space, draw nothing.
    let content: Element<'a, Message> = if section.is_revealed() {
        section_content(ctx, section)
    } else {
        Space::new().width(Length::Fill).height(Length::Fill).into()
    };
    stack = stack.push(content);

    Container::new(stack)
        .width(Length::Fill)
        .height(height)
        .clip(true)
        .into()
}

fn blob_layer<'a>(index: usize, style: LayerStyle, pointer: Vector) -> Element<'a, Message> {
    let (color, align) = if index % 2 == 0 {
        (palette::ACCENT, Horizontal::Left)
    } else {
        (palette::ACCENT_WARM, Horizontal::Right)
    };

    let blob = Container::new(
        Space::new()
            .width(Length::Fixed(sizing::BLOB_SIZE))
            .height(Length::Fixed(sizing::BLOB_SIZE)),
    )
    .style(styles::container::blob(color, style.opacity));

    let padding = Padding {
        top: (sizing::BLOB_BASE_OFFSET + style.y + pointer.y).max(0.0),
        right: (spacing::XXL - pointer.x).max(0.0),
        bottom: 0.0,
        left: (spacing::XXL + pointer.x).max(0.0),
    };

    Container::new(blob)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align)
        .padding(padding)
        .into()
}

fn section_content<'a>(ctx: &ViewContext<'a>, section: &'a Section) -> Element<'a, Message> {
    let portfolio = ctx.portfolio;
    let columns = ctx.page.columns();

    let body: Element<'a, Message> = match section.kind() {
        SectionKind::Hero => return hero(portfolio, section.primary_style()),
        SectionKind::About => about(portfolio),
        SectionKind::Experience => experience(portfolio, section),
        SectionKind::Projects => projects(portfolio, ctx.cards, section, columns),
        SectionKind::Skills => skills(portfolio, section, columns),
        SectionKind::Stats => return stats(portfolio, columns),
        SectionKind::Certifications => certifications(portfolio, section, columns),
        SectionKind::Education => education(portfolio, section),
        SectionKind::Footer => return footer(portfolio),
    };

    let column = Column::new()
        .spacing(spacing::XL)
        .push(header(section.kind()))
        .push(body);

    centered(column.into())
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([metrics::SECTION_PADDING, spacing::LG]),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

fn header<'a>(kind: SectionKind) -> Element<'a, Message> {
    Container::new(
        text(kind.title())
            .size(typography::TITLE_LG)
            .color(palette::TEXT),
    )
    .height(Length::Fixed(metrics::HEADER_HEIGHT - spacing::XL))
    .align_y(Vertical::Bottom)
    .into()
}

fn muted(content: &str) -> iced::widget::Text<'_> {
    text(content).size(typography::BODY).color(palette::TEXT_MUTED)
}

fn card<'a>(content: impl Into<Element<'a, Message>>, height: f32, hovered: bool) -> Container<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height - spacing::LG))
        .padding(spacing::LG)
        .clip(true)
        .style(styles::container::card(hovered))
}

fn chips<'a>(labels: &'a [String]) -> Element<'a, Message> {
    labels
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, label| {
            row.push(
                Container::new(text(label.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::chip),
            )
        })
        .wrap()
        .into()
}

/// Grid cell for a card: the card once revealed, an empty cell until then.
fn reveal_cell<'a>(
    section: &Section,
    index: usize,
    height: f32,
    card: impl FnOnce() -> Element<'a, Message>,
) -> Element<'a, Message> {
    if section.is_card_revealed(index) {
        card()
    } else {
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(height - spacing::LG))
            .into()
    }
}

/// Makes `content` clickable when there is a link to open.
fn linked<'a>(content: Element<'a, Message>, link: Option<&str>) -> Element<'a, Message> {
    match link {
        Some(link) => mouse_area(content)
            .on_press(Message::OpenLink(link.to_string()))
            .into(),
        None => content,
    }
}

/// Lays `items` out in rows of `columns`, padding the last row so every
/// cell keeps the same width.
fn grid<'a>(items: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    let mut filled = 0;

    for item in items {
        row = row.push(Container::new(item).width(Length::Fill));
        filled += 1;
        if filled == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn hero<'a>(portfolio: &'a Portfolio, style: LayerStyle) -> Element<'a, Message> {
    let fade = |color: Color| Color {
        a: color.a * style.opacity,
        ..color
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            text(portfolio.profile.name.as_str())
                .size(typography::DISPLAY * style.scale)
                .color(fade(palette::TEXT)),
        )
        .push(
            text(portfolio.profile.headline.as_str())
                .size(typography::TITLE_MD * style.scale)
                .color(fade(palette::ACCENT_SOFT)),
        )
        .push(
            button(text("View my work").size(typography::BODY))
                .padding([spacing::SM, spacing::XL])
                .on_press(Message::NavigateTo(SectionKind::Projects))
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(Padding {
            top: style.y.max(0.0),
            ..Padding::ZERO
        })
        .into()
}

fn about(portfolio: &Portfolio) -> Element<'_, Message> {
    let profile = &portfolio.profile;
    let mut details = Row::new().spacing(spacing::LG);
    if let Some(location) = &profile.location {
        details = details.push(muted(location));
    }
    if let Some(email) = &profile.email {
        details = details.push(muted(email));
    }

    Column::new()
        .spacing(spacing::LG)
        .push(
            text(profile.summary.as_str())
                .size(typography::BODY_LG)
                .color(palette::TEXT),
        )
        .push(details)
        .into()
}

fn experience<'a>(portfolio: &'a Portfolio, section: &Section) -> Element<'a, Message> {
    portfolio
        .experience
        .iter()
        .enumerate()
        .fold(Column::new(), |column, (index, entry)| {
            if !section.is_card_revealed(index) {
                return column.push(
                    Space::new()
                        .width(Length::Fill)
                        .height(Length::Fixed(metrics::EXPERIENCE_CARD_HEIGHT)),
                );
            }

            let title = Row::new()
                .spacing(spacing::MD)
                .push(text(entry.role.as_str()).size(typography::TITLE_SM))
                .push(Space::new().width(Length::Fill))
                .push(muted(&entry.period));

            let mut body = Column::new()
                .spacing(spacing::XS)
                .push(title)
                .push(
                    text(entry.company.as_str())
                        .size(typography::BODY)
                        .color(palette::ACCENT_SOFT),
                );
            if !entry.location.is_empty() {
                body = body.push(muted(&entry.location));
            }
            for highlight in &entry.highlights {
                body = body.push(muted(highlight));
            }

            column.push(
                Container::new(card(body, metrics::EXPERIENCE_CARD_HEIGHT, false))
                    .padding(Padding {
                        bottom: spacing::LG,
                        ..Padding::ZERO
                    }),
            )
        })
        .into()
}

fn projects<'a>(
    portfolio: &'a Portfolio,
    cards: &'a ProjectCards,
    section: &Section,
    columns: usize,
) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            reveal_cell(section, index, metrics::PROJECT_CARD_HEIGHT, || {
                project_card(project, cards, index)
            })
        })
        .collect();

    grid(items, columns)
}

fn project_card<'a>(
    project: &'a Project,
    cards: &'a ProjectCards,
    index: usize,
) -> Element<'a, Message> {
    let state = cards.get(index);
    let hovered = state.is_some_and(|card| card.is_hovered());

    let picture: Element<'a, Message> = match state.and_then(|card| card.handle()) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(text(project.category.as_str()).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::image_placeholder)
            .into(),
    };

    let body = Column::new()
        .spacing(spacing::SM)
        .push(picture)
        .push(text(project.name.as_str()).size(typography::TITLE_SM))
        .push(muted(&project.description))
        .push(chips(&project.tags));

    let mut area = mouse_area(card(body, metrics::PROJECT_CARD_HEIGHT, hovered))
        .on_enter(Message::ProjectHovered {
            index,
            hovered: true,
        })
        .on_exit(Message::ProjectHovered {
            index,
            hovered: false,
        });
    if let Some(link) = project.web_link() {
        area = area.on_press(Message::OpenLink(link.to_string()));
    }
    area.into()
}

fn skills<'a>(portfolio: &'a Portfolio, section: &Section, columns: usize) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = portfolio
        .skills
        .iter()
        .enumerate()
        .map(|(index, category)| {
            reveal_cell(section, index, metrics::SKILL_CARD_HEIGHT, || {
                let body = Column::new()
                    .spacing(spacing::SM)
                    .push(text(category.title.as_str()).size(typography::TITLE_SM))
                    .push(muted(&category.description))
                    .push(chips(&category.skills));
                card(body, metrics::SKILL_CARD_HEIGHT, false).into()
            })
        })
        .collect();

    grid(items, columns)
}

fn stats(portfolio: &Portfolio, columns: usize) -> Element<'_, Message> {
    let stat_columns = if columns == 1 { 2 } else { 4 };
    let items: Vec<Element<'_, Message>> = portfolio
        .stats
        .iter()
        .map(|stat| {
            Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XXS)
                .push(
                    text(stat.value.as_str())
                        .size(typography::TITLE_LG)
                        .color(palette::ACCENT_SOFT),
                )
                .push(muted(&stat.label))
                .width(Length::Fill)
                .height(Length::Fixed(metrics::STAT_ROW_HEIGHT))
                .into()
        })
        .collect();

    centered(grid(items, stat_columns))
}

fn certifications<'a>(
    portfolio: &'a Portfolio,
    section: &Section,
    columns: usize,
) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = portfolio
        .certifications
        .iter()
        .enumerate()
        .map(|(index, certification)| {
            reveal_cell(section, index, metrics::CERTIFICATION_CARD_HEIGHT, || {
                certification_card(certification)
            })
        })
        .collect();

    grid(items, columns)
}

fn certification_card(certification: &Certification) -> Element<'_, Message> {
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(text(certification.title.as_str()).size(typography::TITLE_SM))
        .push(
            text(certification.issuer.as_str())
                .size(typography::BODY)
                .color(palette::ACCENT_SOFT),
        )
        .push(muted(&certification.date));
    if let Some(id) = &certification.credential_id {
        body = body.push(
            text(format!("Credential {id}"))
                .size(typography::CAPTION)
                .color(palette::TEXT_MUTED),
        );
    }
    let link = certification.web_link();
    if link.is_some() {
        body = body.push(
            text("View credential")
                .size(typography::CAPTION)
                .color(palette::ACCENT),
        );
    }
    linked(card(body, metrics::CERTIFICATION_CARD_HEIGHT, false).into(), link)
}

fn education<'a>(portfolio: &'a Portfolio, section: &Section) -> Element<'a, Message> {
    portfolio
        .education
        .iter()
        .enumerate()
        .fold(Column::new(), |column, (index, entry)| {
            if !section.is_card_revealed(index) {
                return column.push(
                    Space::new()
                        .width(Length::Fill)
                        .height(Length::Fixed(metrics::EDUCATION_CARD_HEIGHT)),
                );
            }

            let mut body = Column::new()
                .spacing(spacing::XS)
                .push(
                    Row::new()
                        .push(text(entry.degree.as_str()).size(typography::TITLE_SM))
                        .push(Space::new().width(Length::Fill))
                        .push(muted(&entry.period)),
                )
                .push(
                    text(entry.institution.as_str())
                        .size(typography::BODY)
                        .color(palette::ACCENT_SOFT),
                );
            if !entry.specialization.is_empty() {
                body = body.push(muted(&entry.specialization));
            }
            for highlight in &entry.highlights {
                body = body.push(muted(highlight));
            }
            column.push(
                Container::new(card(body, metrics::EDUCATION_CARD_HEIGHT, false)).padding(
                    Padding {
                        bottom: spacing::LG,
                        ..Padding::ZERO
                    },
                ),
            )
        })
        .into()
}

fn footer(portfolio: &Portfolio) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(text("Let's work together").size(typography::TITLE_MD))
        .push(text(portfolio.profile.name.as_str()).size(typography::BODY_LG));
    if let Some(email) = &portfolio.profile.email {
        column = column.push(muted(email));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
