//! Server configuration
//!
//! Settings come from an optional YAML file and are overridden by command-line
//! flags. Anything left unset falls back to [`ServerConfig::default`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_session_ttl_days() -> u32 {
    30
}

fn default_max_tables() -> usize {
    50
}

fn default_max_rows() -> usize {
    100
}

/// Upper bounds on how far a form may grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub max_tables: usize,
    pub max_rows: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_tables: default_max_tables(),
            max_rows: default_max_rows(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Sqlite file holding form sessions; `{data_dir}/rgb.db` when unset.
    #[serde(default)]
    pub database: Option<PathBuf>,
    #[serde(default = "default_max_tables")]
    pub max_tables: usize,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    /// Sessions untouched for this many days are pruned at startup; 0 keeps
    /// them forever.
    #[serde(default = "default_session_ttl_days")]
    pub session_ttl_days: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            database: None,
            max_tables: default_max_tables(),
            max_rows: default_max_rows(),
            session_ttl_days: default_session_ttl_days(),
        }
    }
}

impl ServerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Load from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::from_yaml(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn limits(&self) -> FormLimits {
        FormLimits {
            max_tables: self.max_tables,
            max_rows: self.max_rows,
        }
    }

    /// Oldest `updated_at` a session may have and survive pruning.
    pub fn session_cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        (self.session_ttl_days > 0)
            .then(|| now - Duration::days(i64::from(self.session_ttl_days)))
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| data_dir.join("rgb.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:3001");
        assert_eq!(config.max_tables, 50);
        assert_eq!(config.max_rows, 100);
        assert_eq!(config.limits(), FormLimits::default());
        assert_eq!(config.session_ttl_days, 30);
        assert_eq!(
            config.database_path(Path::new("/data")),
            PathBuf::from("/data/rgb.db")
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ServerConfig::from_yaml("bind: 0.0.0.0:8080\nmax_rows: 12\n").unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.max_rows, 12);
        assert_eq!(config.max_tables, 50);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.yaml");
        std::fs::write(&path, "database: /tmp/forms.db\nmax_tables: 3\n").unwrap();

        let config = ServerConfig::load(&path).unwrap();

        assert_eq!(config.database, Some(PathBuf::from("/tmp/forms.db")));
        assert_eq!(config.max_tables, 3);
    }

    #[test]
    fn test_session_cutoff() {
        let now = DateTime::parse_from_rfc3339("2026-03-31T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let config = ServerConfig::default();
        assert_eq!(
            config.session_cutoff(now).unwrap().to_rfc3339(),
            "2026-03-01T12:00:00+00:00"
        );

        let keep_forever = ServerConfig::from_yaml("session_ttl_days: 0\n").unwrap();
        assert!(keep_forever.session_cutoff(now).is_none());
    }
}
