//! SQLite repositories for the persisted catalog.
//!
//! # Responsibility
//! - Map catalog records to and from SQLite rows.
//! - Keep SQL inside the core persistence boundary.
//!
//! # Invariants
//! - Writes validate records before touching the database.
//! - Reads reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::project::ProjectValidationError;
use crate::model::skill::SkillValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project_repo;
pub mod skill_repo;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Project(ProjectValidationError),
    Skill(SkillValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project(err) => write!(f, "{err}"),
            Self::Skill(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Project(err) => Some(err),
            Self::Skill(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ProjectValidationError> for RepoError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Project(value)
    }
}

impl From<SkillValidationError> for RepoError {
    fn from(value: SkillValidationError) -> Self {
        Self::Skill(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
