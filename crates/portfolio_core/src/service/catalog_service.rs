//! Catalog loading use-cases.
//!
//! # Responsibility
//! - Load a source exactly once per view and enforce catalog invariants.
//! - Resolve the configured source, opening storage when needed.
//! - Resolve the skills list from the same configured source.
//!
//! # Invariants
//! - Views are only built from catalogs that passed `validate_catalog`.
//! - Storage handles are opened here and passed down, never stored globally.

use crate::catalog::source::{
    validate_catalog, BuiltinCatalog, CatalogResult, CatalogSource, JsonCatalog,
};
use crate::catalog::view::CatalogView;
use crate::config::CatalogSourceConfig;
use crate::db::open_db;
use crate::model::skill::SkillCatalog;
use crate::repo::project_repo::SqliteProjectRepository;
use crate::repo::skill_repo::SqliteSkillRepository;
use crate::repo::RepoError;
use log::{error, info};
use std::time::Instant;

/// Builds catalog views from a source.
pub struct CatalogService<S: CatalogSource> {
    source: S,
}

impl<S: CatalogSource> CatalogService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the source and returns a fresh view (filter `all`, no selection).
    ///
    /// # Errors
    /// - Propagates source I/O, parse and storage errors.
    /// - Returns validation or duplicate-id errors for bad catalogs.
    pub fn open_view(&self) -> CatalogResult<CatalogView> {
        let started_at = Instant::now();
        let loaded = self
            .source
            .load_projects()
            .and_then(|projects| validate_catalog(&projects).map(|()| projects));

        match loaded {
            Ok(projects) => {
                info!(
                    "event=catalog_load module=service status=ok source={} count={} duration_ms={}",
                    self.source.name(),
                    projects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(CatalogView::new(projects))
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=service status=error source={} duration_ms={} error={}",
                    self.source.name(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Opens a view over whichever source `config` names.
pub fn open_configured_view(config: &CatalogSourceConfig) -> CatalogResult<CatalogView> {
    match config {
        CatalogSourceConfig::Builtin => CatalogService::new(BuiltinCatalog).open_view(),
        CatalogSourceConfig::Json { path } => {
            CatalogService::new(JsonCatalog::new(path)).open_view()
        }
        CatalogSourceConfig::Sqlite { path } => {
            let conn = open_db(path).map_err(RepoError::from)?;
            let service = CatalogService::new(SqliteProjectRepository::new(&conn));
            service.open_view()
        }
    }
}

/// Loads the skills list for whichever source `config` names.
///
/// Only SQLite stores skills. Builtin and JSON sources, and a SQLite file
/// whose skills table is empty, use the built-in list.
pub fn open_configured_skills(config: &CatalogSourceConfig) -> CatalogResult<SkillCatalog> {
    let CatalogSourceConfig::Sqlite { path } = config else {
        return Ok(SkillCatalog::builtin());
    };

    let conn = open_db(path).map_err(RepoError::from)?;
    let skills = SqliteSkillRepository::new(&conn).list_skills()?;
    if skills.is_empty() {
        info!("event=skills_load module=service status=fallback source=sqlite reason=empty");
        return Ok(SkillCatalog::builtin());
    }
    info!(
        "event=skills_load module=service status=ok source=sqlite count={}",
        skills.len()
    );
    Ok(SkillCatalog::new(skills))
}
