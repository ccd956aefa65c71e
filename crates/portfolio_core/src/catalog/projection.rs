//! Presentation-ready projections of catalog state.
//!
//! Renderers consume these instead of reaching into the view; animation and
//! styling decisions stay on the presentation side.

use crate::model::filter::CategoryFilter;
use crate::model::project::{Project, ProjectCategory, ProjectIcon, ProjectId};
use serde::Serialize;

/// Shown in place of the grid when no project passes the filter.
pub const EMPTY_CATEGORY_MESSAGE: &str = "Aucun projet trouvé dans cette catégorie.";

/// Number of tags rendered on a card before collapsing into `+N`.
pub const CARD_PREVIEW_TAGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

impl FilterOption {
    pub fn new(filter: CategoryFilter, active: bool) -> Self {
        Self {
            filter,
            label: filter.label(),
            active,
        }
    }
}

/// Grid card summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: ProjectIcon,
    pub category: ProjectCategory,
    pub category_label: &'static str,
    pub featured: bool,
    /// First [`CARD_PREVIEW_TAGS`] tags.
    pub preview_tags: Vec<String>,
    /// Tags not shown on the card.
    pub hidden_tag_count: usize,
    pub github: String,
    pub demo: String,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let shown = project.tags.len().min(CARD_PREVIEW_TAGS);
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            icon: project.icon,
            category: project.category,
            category_label: project.category.label(),
            featured: project.featured,
            preview_tags: project.tags[..shown].to_vec(),
            hidden_tag_count: project.tags.len() - shown,
            github: project.github.clone(),
            demo: project.demo.clone(),
        }
    }

    /// Overflow badge text, e.g. `+2`, or `None` when every tag is shown.
    pub fn overflow_badge(&self) -> Option<String> {
        (self.hidden_tag_count > 0).then(|| format!("+{}", self.hidden_tag_count))
    }
}

/// Detail overlay content for the selected project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub category_label: &'static str,
}

impl ProjectDetail {
    pub fn from_project(project: &Project) -> Self {
        Self {
            project: project.clone(),
            category_label: project.category.label(),
        }
    }
}

/// Full render state of the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    pub filter: CategoryFilter,
    pub filters: Vec<FilterOption>,
    pub cards: Vec<ProjectCard>,
    pub empty_state: bool,
    pub selected: Option<ProjectDetail>,
}

impl CatalogSnapshot {
    /// Message to render instead of the grid, if any.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.empty_state.then_some(EMPTY_CATEGORY_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectCard;
    use crate::model::project::{Project, ProjectCategory};

    #[test]
    fn card_collapses_tags_beyond_three() {
        let mut project = Project::new(1, "Hub", ProjectCategory::Iot);
        project.tags = ["ESP32", "Raspberry Pi", "MQTT", "React", "Node.js"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        let card = ProjectCard::from_project(&project);
        assert_eq!(card.preview_tags, vec!["ESP32", "Raspberry Pi", "MQTT"]);
        assert_eq!(card.hidden_tag_count, 2);
        assert_eq!(card.overflow_badge().as_deref(), Some("+2"));
        assert_eq!(card.category_label, "IoT");
    }

    #[test]
    fn card_with_few_tags_has_no_badge() {
        let mut project = Project::new(2, "Shop", ProjectCategory::Web);
        project.tags = vec!["React".to_string()];

        let card = ProjectCard::from_project(&project);
        assert_eq!(card.hidden_tag_count, 0);
        assert_eq!(card.overflow_badge(), None);
    }
}
