//! Category filter selector.

use super::project::ProjectCategory;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Active filter of the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    Web,
    Iot,
    Fullstack,
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const ALL_OPTIONS: [CategoryFilter; 4] = [Self::All, Self::Web, Self::Iot, Self::Fullstack];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Web => "web",
            Self::Iot => "iot",
            Self::Fullstack => "fullstack",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Tous",
            Self::Web => "Web",
            Self::Iot => "IoT",
            Self::Fullstack => "Full Stack",
        }
    }

    /// Category this filter restricts to, or `None` for `All`.
    pub fn category(self) -> Option<ProjectCategory> {
        match self {
            Self::All => None,
            Self::Web => Some(ProjectCategory::Web),
            Self::Iot => Some(ProjectCategory::Iot),
            Self::Fullstack => Some(ProjectCategory::Fullstack),
        }
    }

    /// Returns whether an item of `category` passes this filter.
    pub fn matches(self, category: ProjectCategory) -> bool {
        match self.category() {
            None => true,
            Some(expected) => expected == category,
        }
    }
}

impl From<ProjectCategory> for CategoryFilter {
    fn from(value: ProjectCategory) -> Self {
        match value {
            ProjectCategory::Web => Self::Web,
            ProjectCategory::Iot => Self::Iot,
            ProjectCategory::Fullstack => Self::Fullstack,
        }
    }
}

/// Returned when a filter string from an untyped boundary is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterError(pub String);

impl Display for UnknownFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter `{}`; expected all|web|iot|fullstack",
            self.0
        )
    }
}

impl Error for UnknownFilterError {}

impl FromStr for CategoryFilter {
    type Err = UnknownFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }
        ProjectCategory::parse(normalized.as_str())
            .map(Self::from)
            .ok_or_else(|| UnknownFilterError(s.trim().to_string()))
    }
}
