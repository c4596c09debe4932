// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! The page renders read-only data: profile, experience, projects, skills,
//! stats, certifications and education. It is parsed once from TOML (either
//! the embedded default or a user file passed with `--content`) and never
//! mutated afterwards.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

const BUILTIN_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Screenshot path, relative to the content file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl Project {
    /// The project link, if it can be opened in a browser.
    #[must_use]
    pub fn web_link(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| is_web_link(url))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Certification {
    /// The credential link, if it can be opened in a browser.
    #[must_use]
    pub fn web_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| is_web_link(link))
    }
}

/// Whether `url` is an absolute `http` or `https` link. Anything else is
/// never handed to the system opener.
#[must_use]
pub fn is_web_link(url: &str) -> bool {
    let url = url.trim();
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        && !rest.is_empty()
        && !url.chars().any(char::is_whitespace)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(default)]
    pub specialization: String,
    pub institution: String,
    #[serde(default)]
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Everything the page displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl Portfolio {
    /// The content shipped with the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded asset is missing or malformed, which is a
    /// packaging bug.
    pub fn builtin() -> Result<Self> {
        let file = ContentAsset::get(BUILTIN_FILE)
            .ok_or_else(|| Error::Content(format!("missing embedded {BUILTIN_FILE}")))?;
        let text = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml(&text)
    }

    /// Parses and validates content from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(text).map_err(|err| Error::Content(err.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Checks the invariants the page relies on.
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::Content("profile name is empty".into()));
        }
        if let Some(project) = self.projects.iter().find(|p| p.name.trim().is_empty()) {
            return Err(Error::Content(format!(
                "project in category '{}' has no name",
                project.category
            )));
        }
        if let Some(category) = self.skills.iter().find(|c| c.skills.is_empty()) {
            return Err(Error::Content(format!(
                "skill category '{}' lists no skills",
                category.title
            )));
        }
        Ok(())
    }

    /// Resolves project image paths against the directory of the content file.
    fn resolve_images(&mut self, base: &Path) {
        for project in &mut self.projects {
            if let Some(image) = project.image.as_mut() {
                if image.is_relative() {
                    *image = base.join(&*image);
                }
            }
        }
    }
}

/// Loads content from a user file.
pub fn load_from_path(path: &Path) -> Result<Portfolio> {
    let text = fs::read_to_string(path)?;
    let mut portfolio = Portfolio::from_toml(&text)?;
    if let Some(base) = path.parent() {
        portfolio.resolve_images(base);
    }
    tracing::info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        "loaded page content"
    );
    Ok(portfolio)
}

/// Loading progress of a project screenshot.
///
/// A failed image is not an error: the card shows a placeholder instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageState {
    #[must_use]
    pub fn shows_placeholder(self) -> bool {
        !matches!(self, ImageState::Loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_content_parses() {
        let portfolio = Portfolio::builtin().expect("embedded content must parse");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.experience.is_empty());
        assert_eq!(portfolio.stats.len(), 4);
    }

    #[test]
    fn minimal_content_uses_empty_lists() {
        let portfolio = Portfolio::from_toml("[profile]\nname = \"Ada\"\n").unwrap();
        assert_eq!(portfolio.profile.name, "Ada");
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.education.is_empty());
    }

    #[test]
    fn empty_profile_name_is_rejected() {
        let result = Portfolio::from_toml("[profile]\nname = \"  \"\n");
        assert!(matches!(result, Err(Error::Content(_))));
    }

    #[test]
    fn empty_skill_category_is_rejected() {
        let text = r#"
            [profile]
            name = "Ada"

            [[skills]]
            title = "Tools"
            skills = []
        "#;
        let err = Portfolio::from_toml(text).unwrap_err();
        assert!(err.to_string().contains("Tools"));
    }

    #[test]
    fn malformed_toml_is_content_error() {
        assert!(matches!(
            Portfolio::from_toml("[[projects]"),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn image_paths_resolve_next_to_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("content.toml");
        fs::write(
            &path,
            r#"
                [profile]
                name = "Ada"

                [[projects]]
                name = "Engine"
                description = "Analytical"
                category = "Hardware"
                image = "shots/engine.png"
            "#,
        )
        .unwrap();

        let portfolio = load_from_path(&path).unwrap();
        assert_eq!(
            portfolio.projects[0].image.as_deref(),
            Some(dir.path().join("shots/engine.png").as_path())
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        assert!(matches!(
            load_from_path(&dir.path().join("absent.toml")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn only_http_links_are_web_links() {
        assert!(is_web_link("https://example.com/project"));
        assert!(is_web_link("HTTP://example.com"));
        assert!(!is_web_link("javascript:alert(1)"));
        assert!(!is_web_link("file:///etc/passwd"));
        assert!(!is_web_link("https://"));
        assert!(!is_web_link("https://exa mple.com"));
        assert!(!is_web_link("example.com"));
    }

    #[test]
    fn builtin_links_are_openable() {
        let portfolio = Portfolio::builtin().unwrap();
        for project in &portfolio.projects {
            assert_eq!(project.web_link(), project.url.as_deref(), "{}", project.name);
        }
        for certification in &portfolio.certifications {
            assert_eq!(certification.web_link(), certification.link.as_deref());
        }
    }

    #[test]
    fn only_loaded_images_hide_placeholder() {
        assert!(ImageState::Loading.shows_placeholder());
        assert!(ImageState::Failed.shows_placeholder());
        assert!(!ImageState::Loaded.shows_placeholder());
    }
}
