//! Project rows in the catalog database.
//!
//! # Invariants
//! - Row order is the `position` column; `replace_projects` rewrites it from
//!   slice order.
//! - `tags_json` always holds a JSON array of strings.

use super::{RepoError, RepoResult};
use crate::catalog::source::{validate_catalog, CatalogResult, CatalogSource};
use crate::model::project::{Project, ProjectCategory, ProjectIcon, ProjectId};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    image,
    tags_json,
    github,
    demo,
    category,
    featured,
    icon
FROM projects";

/// SQLite-backed project store. Borrows a connection opened by the caller.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Replaces the stored catalog with `projects`, atomically.
    pub fn replace_projects(&self, projects: &[Project]) -> CatalogResult<()> {
        validate_catalog(projects)?;

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(RepoError::from)?;
        tx.execute("DELETE FROM projects;", [])
            .map_err(RepoError::from)?;
        for (position, project) in projects.iter().enumerate() {
            let tags_json = serde_json::to_string(&project.tags)
                .map_err(|err| RepoError::InvalidData(format!("tags encode failed: {err}")))?;
            tx.execute(
                "INSERT INTO projects (
                    id,
                    position,
                    title,
                    description,
                    image,
                    tags_json,
                    github,
                    demo,
                    category,
                    featured,
                    icon
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11);",
                params![
                    project.id,
                    position as i64,
                    project.title.as_str(),
                    project.description.as_str(),
                    project.image.as_str(),
                    tags_json,
                    project.github.as_str(),
                    project.demo.as_str(),
                    project.category.as_str(),
                    project.featured,
                    project.icon.as_str(),
                ],
            )
            .map_err(RepoError::from)?;
        }
        tx.commit().map_err(RepoError::from)?;

        info!(
            "event=catalog_store module=repo status=ok count={}",
            projects.len()
        );
        Ok(())
    }

    /// All stored projects in position order.
    pub fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY position ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }

    pub fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let raw = self
            .conn
            .query_row(
                &format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                read_raw_row,
            )
            .optional()?;
        raw.map(RawProjectRow::into_project).transpose()
    }

    pub fn count_projects(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM projects;", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl CatalogSource for SqliteProjectRepository<'_> {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn load_projects(&self) -> CatalogResult<Vec<Project>> {
        Ok(self.list_projects()?)
    }
}

struct RawProjectRow {
    id: ProjectId,
    title: String,
    description: String,
    image: String,
    tags_json: String,
    github: String,
    demo: String,
    category: String,
    featured: bool,
    icon: String,
}

impl RawProjectRow {
    fn into_project(self) -> RepoResult<Project> {
        let category = ProjectCategory::parse(&self.category).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "project {} has unknown category `{}`",
                self.id, self.category
            ))
        })?;
        let tags: Vec<String> = serde_json::from_str(&self.tags_json).map_err(|err| {
            RepoError::InvalidData(format!("project {} has malformed tags: {err}", self.id))
        })?;

        let project = Project {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            tags,
            github: self.github,
            demo: self.demo,
            category,
            featured: self.featured,
            icon: ProjectIcon::from_name(&self.icon),
        };
        project.validate()?;
        Ok(project)
    }
}

fn read_raw_row(row: &Row<'_>) -> rusqlite::Result<RawProjectRow> {
    Ok(RawProjectRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        image: row.get(3)?,
        tags_json: row.get(4)?,
        github: row.get(5)?,
        demo: row.get(6)?,
        category: row.get(7)?,
        featured: row.get(8)?,
        icon: row.get(9)?,
    })
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    read_raw_row(row)?.into_project()
}
