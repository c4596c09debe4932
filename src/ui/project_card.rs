// SPDX-License-Identifier: MPL-2.0
//! Per-card state for the project grid: hover and screenshot loading.

use std::path::PathBuf;

use iced::widget::image;

use crate::content::{ImageState, Portfolio};
use crate::error::{Error, Result};
use crate::motion::HoverState;

#[derive(Debug, Clone, Default)]
pub struct ProjectCard {
    hover: HoverState,
    image: ImageState,
    handle: Option<image::Handle>,
}

impl ProjectCard {
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    #[must_use]
    pub fn image_state(&self) -> ImageState {
        self.image
    }

    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        self.handle.as_ref()
    }
}

/// Card state for every project, indexed like `Portfolio::projects`.
#[derive(Debug, Clone, Default)]
pub struct ProjectCards {
    cards: Vec<ProjectCard>,
}

impl ProjectCards {
    /// Creates card state. Projects without a screenshot start as `Failed`
    /// so they render the placeholder straight away.
    #[must_use]
    pub fn new(portfolio: &Portfolio) -> Self {
        let cards = portfolio
            .projects
            .iter()
            .map(|project| ProjectCard {
                image: if project.image.is_some() {
                    ImageState::Loading
                } else {
                    ImageState::Failed
                },
                ..ProjectCard::default()
            })
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProjectCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Records pointer enter/leave. Returns true if the hover state changed.
    pub fn set_hovered(&mut self, index: usize, hovered: bool) -> bool {
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        if hovered {
            card.hover.enter()
        } else {
            card.hover.leave()
        }
    }

    /// Stores the outcome of a screenshot load. A failure keeps the placeholder.
    pub fn image_loaded(&mut self, index: usize, result: Result<Vec<u8>>) {
        let Some(card) = self.cards.get_mut(index) else {
            return;
        };
        match result {
            Ok(bytes) => {
                card.handle = Some(image::Handle::from_bytes(bytes));
                card.image = ImageState::Loaded;
            }
            Err(err) => {
                tracing::warn!(project = index, %err, "project image unavailable");
                card.handle = None;
                card.image = ImageState::Failed;
            }
        }
    }
}

/// Screenshot paths to load, with their card index.
pub fn pending_images(portfolio: &Portfolio) -> Vec<(usize, PathBuf)> {
    portfolio
        .projects
        .iter()
        .enumerate()
        .filter_map(|(index, project)| project.image.clone().map(|path| (index, path)))
        .collect()
}

/// Reads a screenshot from disk.
pub async fn load_image(path: PathBuf) -> Result<Vec<u8>> {
    tokio::fs::read(&path)
        .await
        .map_err(|err| Error::Io(format!("{}: {err}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Project;

    fn portfolio_with_images(images: &[Option<&str>]) -> Portfolio {
        let mut portfolio = Portfolio::default();
        portfolio.profile.name = "Ada".into();
        portfolio.projects = images
            .iter()
            .enumerate()
            .map(|(index, image)| Project {
                name: format!("project {index}"),
                description: String::new(),
                url: None,
                category: "Tools".into(),
                tags: Vec::new(),
                image: image.map(PathBuf::from),
            })
            .collect();
        portfolio
    }

    #[test]
    fn projects_without_image_show_placeholder_immediately() {
        let portfolio = portfolio_with_images(&[Some("a.png"), None]);
        let cards = ProjectCards::new(&portfolio);
        assert_eq!(cards.get(0).unwrap().image_state(), ImageState::Loading);
        assert_eq!(cards.get(1).unwrap().image_state(), ImageState::Failed);
        assert_eq!(pending_images(&portfolio), vec![(0, PathBuf::from("a.png"))]);
    }

    #[test]
    fn load_failure_keeps_placeholder() {
        let portfolio = portfolio_with_images(&[Some("a.png")]);
        let mut cards = ProjectCards::new(&portfolio);
        cards.image_loaded(0, Err(Error::Io("gone".into())));
        let card = cards.get(0).unwrap();
        assert!(card.image_state().shows_placeholder());
        assert!(card.handle().is_none());
    }

    #[test]
    fn loaded_bytes_replace_placeholder() {
        let portfolio = portfolio_with_images(&[Some("a.png")]);
        let mut cards = ProjectCards::new(&portfolio);
        cards.image_loaded(0, Ok(vec![0x89, b'P', b'N', b'G']));
        assert_eq!(cards.get(0).unwrap().image_state(), ImageState::Loaded);
        assert!(cards.get(0).unwrap().handle().is_some());
    }

    #[test]
    fn hover_reports_changes_only() {
        let portfolio = portfolio_with_images(&[None, None]);
        let mut cards = ProjectCards::new(&portfolio);
        assert!(cards.set_hovered(1, true));
        assert!(!cards.set_hovered(1, true));
        assert!(cards.get(1).unwrap().is_hovered());
        assert!(cards.set_hovered(1, false));
        assert!(!cards.set_hovered(7, true));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_image(dir.path().join("absent.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn reads_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();
        assert_eq!(load_image(path).await.unwrap(), vec![1, 2, 3]);
    }
}
