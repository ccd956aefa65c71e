//! Project domain model.
//!
//! # Responsibility
//! - Define the catalog entry rendered as a card and as a detail overlay.
//! - Validate record-level invariants at construction and decode time.
//!
//! # Invariants
//! - `id` is strictly positive.
//! - `title` is never blank.
//! - `github` and `demo` are absolute `http(s)` URLs.
//! - `tags` keep insertion order; duplicates are allowed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static LINK_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("link url regex must compile"));

/// Stable identifier for a catalog entry.
pub type ProjectId = u32;

/// Fixed set of project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Web,
    Iot,
    Fullstack,
}

impl ProjectCategory {
    /// All categories in display order.
    pub const ALL: [ProjectCategory; 3] = [Self::Web, Self::Iot, Self::Fullstack];

    /// Wire name, e.g. `fullstack`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Iot => "iot",
            Self::Fullstack => "fullstack",
        }
    }

    /// Human-facing label shown on cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Iot => "IoT",
            Self::Fullstack => "Full Stack",
        }
    }

    /// Parses a wire name. Matching is case-insensitive and trims whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "web" => Some(Self::Web),
            "iot" => Some(Self::Iot),
            "fullstack" => Some(Self::Fullstack),
            _ => None,
        }
    }
}

/// Icon shown next to a project title.
///
/// Decoding never fails: unknown names resolve to `Code`, which is what the
/// card renderer falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ProjectIcon {
    #[default]
    Code,
    Cpu,
    Database,
    Globe,
    Layers,
    Monitor,
}

impl ProjectIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Cpu => "cpu",
            Self::Database => "database",
            Self::Globe => "globe",
            Self::Layers => "layers",
            Self::Monitor => "monitor",
        }
    }

    /// Resolves an icon name, falling back to `Code` for unknown values.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "cpu" => Self::Cpu,
            "database" => Self::Database,
            "globe" => Self::Globe,
            "layers" => Self::Layers,
            "monitor" => Self::Monitor,
            _ => Self::Code,
        }
    }
}

impl From<String> for ProjectIcon {
    fn from(value: String) -> Self {
        Self::from_name(value.as_str())
    }
}

/// Validation errors for project records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// `id` must be strictly positive.
    ZeroId,
    /// `title` must contain a non-whitespace character.
    BlankTitle { id: ProjectId },
    /// Link fields must be absolute `http(s)` URLs.
    InvalidLink {
        id: ProjectId,
        field: &'static str,
        value: String,
    },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "project id must be > 0"),
            Self::BlankTitle { id } => write!(f, "project {id} has a blank title"),
            Self::InvalidLink { id, field, value } => write!(
                f,
                "project {id} has invalid {field} link `{value}`; expected http(s) URL"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Image URL or site-relative path.
    pub image: String,
    pub tags: Vec<String>,
    /// Source repository link.
    pub github: String,
    /// Live demo link.
    pub demo: String,
    pub category: ProjectCategory,
    pub featured: bool,
    pub icon: ProjectIcon,
}

impl Project {
    /// Creates a project with empty descriptive fields and placeholder links.
    ///
    /// Callers fill the remaining public fields before handing the record to
    /// a catalog source; sources call [`Project::validate`].
    pub fn new(id: ProjectId, title: impl Into<String>, category: ProjectCategory) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            github: "https://github.com".to_string(),
            demo: "https://example.com".to_string(),
            category,
            featured: false,
            icon: ProjectIcon::default(),
        }
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id == 0 {
            return Err(ProjectValidationError::ZeroId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::BlankTitle { id: self.id });
        }
        for (field, value) in [("github", &self.github), ("demo", &self.demo)] {
            if !LINK_URL_RE.is_match(value) {
                return Err(ProjectValidationError::InvalidLink {
                    id: self.id,
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    tags: Vec<String>,
    github: String,
    demo: String,
    category: ProjectCategory,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    icon: ProjectIcon,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectValidationError;

    fn try_from(value: ProjectRecord) -> Result<Self, Self::Error> {
        let project = Project {
            id: value.id,
            title: value.title,
            description: value.description,
            image: value.image,
            tags: value.tags,
            github: value.github,
            demo: value.demo,
            category: value.category,
            featured: value.featured,
            icon: value.icon,
        };
        project.validate()?;
        Ok(project)
    }
}
