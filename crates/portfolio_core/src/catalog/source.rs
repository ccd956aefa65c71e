//! Catalog sources: where the item list comes from at view initialization.
//!
//! # Responsibility
//! - Abstract over the origin of the project list (built-in, file, SQLite).
//! - Enforce catalog-level invariants before a view ever sees the items.
//!
//! # Invariants
//! - Returned lists preserve source order.
//! - Every returned project passes `Project::validate()`.
//! - Project ids are unique within one returned list.

use super::seed::builtin_projects;
use crate::model::project::{Project, ProjectId, ProjectValidationError};
use crate::repo::RepoError;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Validation(ProjectValidationError),
    DuplicateId(ProjectId),
    Repo(RepoError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse catalog `{}`: {source}", path.display())
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id {id} in catalog"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Supplies the project list once at view initialization.
pub trait CatalogSource {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;
    fn load_projects(&self) -> CatalogResult<Vec<Project>>;
}

/// Validates every project and rejects duplicate ids.
pub fn validate_catalog(projects: &[Project]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(projects.len());
    for project in projects {
        project.validate()?;
        if !seen.insert(project.id) {
            return Err(CatalogError::DuplicateId(project.id));
        }
    }
    Ok(())
}

/// The catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn load_projects(&self) -> CatalogResult<Vec<Project>> {
        Ok(builtin_projects())
    }
}

/// A JSON file holding an array of projects.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Writes `projects` as pretty JSON, replacing the file.
    pub fn write_projects(&self, projects: &[Project]) -> CatalogResult<()> {
        validate_catalog(projects)?;
        let body = serde_json::to_string_pretty(projects).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, body).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl CatalogSource for JsonCatalog {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load_projects(&self) -> CatalogResult<Vec<Project>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let projects: Vec<Project> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;
        validate_catalog(&projects)?;
        Ok(projects)
    }
}
