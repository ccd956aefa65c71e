//! Skill model and the category-grouped skills catalog.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound of `Skill::level`, a percentage.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Skill groups, in the order the skills page renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Iot,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Iot,
        Self::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Iot => "iot",
            Self::Tools => "tools",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::Iot => "IoT",
            Self::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillValidationError {
    BlankName,
    LevelOutOfRange { name: String, level: u8 },
}

impl Display for SkillValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "skill name cannot be blank"),
            Self::LevelOutOfRange { name, level } => write!(
                f,
                "skill `{name}` level {level} exceeds {MAX_SKILL_LEVEL}"
            ),
        }
    }
}

impl Error for SkillValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SkillRecord")]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage in `0..=100`.
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(
        name: impl Into<String>,
        level: u8,
        category: SkillCategory,
    ) -> Result<Self, SkillValidationError> {
        let skill = Self {
            name: name.into(),
            level,
            category,
        };
        skill.validate()?;
        Ok(skill)
    }

    pub fn validate(&self) -> Result<(), SkillValidationError> {
        if self.name.trim().is_empty() {
            return Err(SkillValidationError::BlankName);
        }
        if self.level > MAX_SKILL_LEVEL {
            return Err(SkillValidationError::LevelOutOfRange {
                name: self.name.clone(),
                level: self.level,
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SkillRecord {
    name: String,
    level: u8,
    category: SkillCategory,
}

impl TryFrom<SkillRecord> for Skill {
    type Error = SkillValidationError;

    fn try_from(value: SkillRecord) -> Result<Self, Self::Error> {
        Skill::new(value.name, value.level, value.category)
    }
}

/// Ordered list of skills with per-category grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// The skills shown on the site.
    pub fn builtin() -> Self {
        Self::new(crate::catalog::seed::builtin_skills())
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Skills of one category, in catalog order.
    pub fn by_category(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> + '_ {
        self.skills
            .iter()
            .filter(move |skill| skill.category == category)
    }

    /// Every category in display order with its skills. Empty groups are kept.
    pub fn groups(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        SkillCategory::ALL
            .iter()
            .map(|category| (*category, self.by_category(*category).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Skill, SkillCatalog, SkillCategory, SkillValidationError};

    #[test]
    fn new_rejects_level_above_hundred() {
        let err = Skill::new("Rust", 101, SkillCategory::Backend).unwrap_err();
        assert_eq!(
            err,
            SkillValidationError::LevelOutOfRange {
                name: "Rust".to_string(),
                level: 101,
            }
        );
    }

    #[test]
    fn decoding_validates_skill_records() {
        let skill: Skill =
            serde_json::from_str(r#"{"name":"MQTT","level":75,"category":"iot"}"#).unwrap();
        assert_eq!(skill, Skill::new("MQTT", 75, SkillCategory::Iot).unwrap());

        let err = serde_json::from_str::<Skill>(r#"{"name":"  ","level":50,"category":"tools"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("blank"), "{err}");

        let err = serde_json::from_str::<Skill>(r#"{"name":"Go","level":250,"category":"tools"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("exceeds 100"), "{err}");
    }

    #[test]
    fn groups_keep_display_order_and_empty_categories() {
        let catalog = SkillCatalog::new(vec![
            Skill::new("Docker", 75, SkillCategory::Tools).unwrap(),
            Skill::new("React", 80, SkillCategory::Frontend).unwrap(),
            Skill::new("Angular", 90, SkillCategory::Frontend).unwrap(),
        ]);

        let groups = catalog.groups();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].0, SkillCategory::Frontend);
        let frontend: Vec<&str> = groups[0].1.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(frontend, vec!["React", "Angular"]);
        assert!(groups[1].1.is_empty());
        assert_eq!(groups[4].1.len(), 1);
    }
}
