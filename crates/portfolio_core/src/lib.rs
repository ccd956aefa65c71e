//! Core domain logic for the portfolio site.
//! This crate owns the projects catalog state and every invariant on it.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use catalog::projection::{
    CatalogSnapshot, FilterOption, ProjectCard, ProjectDetail, CARD_PREVIEW_TAGS,
    EMPTY_CATEGORY_MESSAGE,
};
pub use catalog::seed::{builtin_projects, builtin_skills};
pub use catalog::source::{
    validate_catalog, BuiltinCatalog, CatalogError, CatalogResult, CatalogSource, JsonCatalog,
};
pub use catalog::view::{CatalogView, VisibleItems};
pub use config::{CatalogSourceConfig, ConfigError, PortfolioConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::filter::{CategoryFilter, UnknownFilterError};
pub use model::project::{
    Project, ProjectCategory, ProjectIcon, ProjectId, ProjectValidationError,
};
pub use model::skill::{Skill, SkillCatalog, SkillCategory, SkillValidationError};
pub use repo::project_repo::SqliteProjectRepository;
pub use repo::skill_repo::SqliteSkillRepository;
pub use repo::{RepoError, RepoResult};
pub use service::catalog_service::{open_configured_skills, open_configured_view, CatalogService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
