//! Runtime configuration.
//!
//! # Responsibility
//! - Describe where the catalog comes from and how logging is set up.
//! - Load settings from a JSON file with environment overrides.
//!
//! # Invariants
//! - `log_level` is always one of `trace|debug|info|warn|error` after
//!   `validate()`.
//! - Missing fields fall back to defaults; unknown fields are rejected.

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Path of a JSON config file.
pub const ENV_CONFIG_PATH: &str = "PORTFOLIO_CONFIG";
/// Overrides `log_level`.
pub const ENV_LOG_LEVEL: &str = "PORTFOLIO_LOG_LEVEL";
/// Switches the catalog source to the SQLite file at this path.
pub const ENV_DB_PATH: &str = "PORTFOLIO_DB_PATH";

/// Where the catalog is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogSourceConfig {
    /// Catalog compiled into the binary.
    #[default]
    Builtin,
    /// JSON array of projects.
    Json { path: PathBuf },
    /// SQLite catalog database.
    Sqlite { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    pub log_level: String,
    /// Absolute directory for rolling log files. Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub catalog: CatalogSourceConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            catalog: CatalogSourceConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

impl PortfolioConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Builds config from the process environment.
    ///
    /// Starts from `PORTFOLIO_CONFIG` when set, otherwise from defaults, then
    /// applies `PORTFOLIO_LOG_LEVEL` and `PORTFOLIO_DB_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PortfolioConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match non_blank(lookup(ENV_CONFIG_PATH)) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            self.log_level = level;
        }
        if let Some(path) = non_blank(lookup(ENV_DB_PATH)) {
            self.catalog = CatalogSourceConfig::Sqlite {
                path: PathBuf::from(path),
            };
        }
    }

    /// Normalizes `log_level` and checks `log_dir` is absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be absolute, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{CatalogSourceConfig, ConfigError, PortfolioConfig, ENV_DB_PATH, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_builtin_catalog() {
        let config = PortfolioConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog, CatalogSourceConfig::Builtin);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn env_overrides_level_and_db_path() {
        let config = PortfolioConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, "WARN"),
            (ENV_DB_PATH, " /tmp/catalog.sqlite3 "),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "WARN");
        assert_eq!(
            config.catalog,
            CatalogSourceConfig::Sqlite {
                path: PathBuf::from("/tmp/catalog.sqlite3")
            }
        );
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err =
            PortfolioConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn catalog_source_uses_kind_tag() {
        let config: PortfolioConfig = serde_json::from_str(
            r#"{"catalog": {"kind": "json", "path": "/srv/projects.json"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.catalog,
            CatalogSourceConfig::Json {
                path: PathBuf::from("/srv/projects.json")
            }
        );
    }
}
