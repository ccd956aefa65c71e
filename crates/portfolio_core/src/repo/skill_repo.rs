//! Skill rows in the catalog database.

use super::{RepoError, RepoResult};
use crate::model::skill::{Skill, SkillCategory};
use rusqlite::{params, Connection};

pub struct SqliteSkillRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSkillRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Replaces stored skills, keeping slice order.
    pub fn replace_skills(&self, skills: &[Skill]) -> RepoResult<()> {
        for skill in skills {
            skill.validate()?;
        }

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM skills;", [])?;
        for (position, skill) in skills.iter().enumerate() {
            tx.execute(
                "INSERT INTO skills (position, name, level, category) VALUES (?1, ?2, ?3, ?4);",
                params![
                    position as i64,
                    skill.name.as_str(),
                    skill.level,
                    skill.category.as_str()
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn list_skills(&self) -> RepoResult<Vec<Skill>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, level, category FROM skills ORDER BY position ASC;")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u8>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut skills = Vec::new();
        for row in rows {
            let (name, level, category) = row?;
            let category = SkillCategory::ALL
                .into_iter()
                .find(|candidate| candidate.as_str() == category)
                .ok_or_else(|| {
                    RepoError::InvalidData(format!(
                        "skill `{name}` has unknown category `{category}`"
                    ))
                })?;
            skills.push(Skill::new(name, level, category)?);
        }
        Ok(skills)
    }
}
