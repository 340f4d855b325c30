//! Project domain model
//!
//! A project exists in two shapes:
//! - [`ProjectRecord`]: the persisted fields, the only thing that is ever
//!   serialized to storage.
//! - [`Project`]: the display record, a `ProjectRecord` plus an optional
//!   [`ProjectIcon`] that is re-derived from the default catalog by title.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use super::result::{Error, Result};

/// Color token applied to projects created without an explicit one
pub const DEFAULT_COLOR: &str = "from-blue-500 to-cyan-400";

/// Icon glyphs offered by the project editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconGlyph {
    Calendar,
    Code,
    ExternalLink,
    ArrowRight,
}

impl IconGlyph {
    pub const ALL: [IconGlyph; 4] = [
        IconGlyph::Calendar,
        IconGlyph::Code,
        IconGlyph::ExternalLink,
        IconGlyph::ArrowRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconGlyph::Calendar => "calendar",
            IconGlyph::Code => "code",
            IconGlyph::ExternalLink => "externalLink",
            IconGlyph::ArrowRight => "arrowRight",
        }
    }
}

impl fmt::Display for IconGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconGlyph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IconGlyph::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::validation(format!(
                    "unknown icon '{}' (expected one of: calendar, code, externalLink, arrowRight)",
                    s
                ))
            })
    }
}

/// Presentation handle for a project card.
///
/// Deliberately has no serde implementation: it never reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectIcon {
    pub glyph: IconGlyph,
    /// Tint class for the glyph (e.g. "text-blue-500")
    pub tint: &'static str,
}

impl ProjectIcon {
    pub const fn new(glyph: IconGlyph, tint: &'static str) -> Self {
        Self { glyph, tint }
    }
}

/// Persisted project fields
///
/// `title` doubles as the primary key within the project store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub learnings: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub code_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Display record: persisted fields plus the derived icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub record: ProjectRecord,
    pub icon: Option<ProjectIcon>,
}

impl Project {
    pub fn new(record: ProjectRecord, icon: Option<ProjectIcon>) -> Self {
        Self { record, icon }
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self { record, icon: None }
    }
}

/// Raw editor input for a project, prior to validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub long_description: String,
    /// Comma-separated list, e.g. "Rust, Serde, Clap"
    pub technologies: String,
    pub learnings: String,
    pub color: String,
    pub demo_url: String,
    pub code_url: String,
    /// Empty means no video
    pub video_url: String,
    pub icon: Option<IconGlyph>,
}

impl ProjectDraft {
    /// Prefill a draft from an existing project (edit mode)
    pub fn from_project(project: &Project) -> Self {
        let record = &project.record;
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            long_description: record.long_description.clone(),
            technologies: record.technologies.join(", "),
            learnings: record.learnings.clone(),
            color: record.color.clone(),
            demo_url: record.demo_url.clone(),
            code_url: record.code_url.clone(),
            video_url: record.video_url.clone().unwrap_or_default(),
            icon: project.icon.map(|i| i.glyph),
        }
    }

    /// Validate the draft and produce a persisted record.
    ///
    /// All field problems are collected into a single validation error.
    pub fn validate(&self) -> Result<ProjectRecord> {
        let mut problems = Vec::new();

        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("longDescription", &self.long_description),
            ("learnings", &self.learnings),
            ("color", &self.color),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                problems.push(format!("{} is required", field));
            }
        }

        let technologies = split_technologies(&self.technologies);
        if technologies.is_empty() {
            problems.push("at least one technology is required".to_string());
        }

        for (field, value) in [("demoUrl", &self.demo_url), ("codeUrl", &self.code_url)] {
            if !is_valid_url(value) {
                problems.push(format!("{} must be a valid URL", field));
            }
        }

        let video_url = match self.video_url.trim() {
            "" => None,
            v if is_valid_url(v) => Some(v.to_string()),
            _ => {
                problems.push("videoUrl must be a valid URL".to_string());
                None
            }
        };

        if !problems.is_empty() {
            return Err(Error::validation(problems.join("; ")));
        }

        Ok(ProjectRecord {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            long_description: self.long_description.trim().to_string(),
            technologies,
            learnings: self.learnings.trim().to_string(),
            color: self.color.trim().to_string(),
            demo_url: self.demo_url.trim().to_string(),
            code_url: self.code_url.trim().to_string(),
            video_url,
        })
    }
}

/// Split a comma-separated technology list, dropping empty entries
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn is_valid_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => url.has_host() || url.scheme() == "mailto",
        Err(_) => false,
    }
}
