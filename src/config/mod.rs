use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::db::query::DEFAULT_SINCE;
use crate::db::target::DbTarget;
use crate::errors::{AppError, AppResult};

/// PostgreSQL connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_dbname")]
    pub dbname: String,
}

fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    5432
}
fn default_user() -> String {
    "postgres".to_string()
}
fn default_password() -> String {
    "password".to_string()
}
fn default_dbname() -> String {
    "sandbox".to_string()
}
fn default_since() -> NaiveDate {
    DEFAULT_SINCE
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: default_password(),
            dbname: default_dbname(),
        }
    }
}

impl DatabaseSettings {
    pub fn to_pg_config(&self) -> postgres::Config {
        let mut cfg = postgres::Config::new();
        cfg.host(&self.host)
            .port(self.port)
            .user(&self.user)
            .password(&self.password)
            .dbname(&self.dbname);
        cfg
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseSettings,
    /// When set, rows are read from this SQLite file instead of PostgreSQL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqlite: Option<PathBuf>,
    /// Lower bound (inclusive) on the `date` column.
    #[serde(default = "default_since")]
    pub since: NaiveDate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            sqlite: None,
            since: default_since(),
        }
    }
}

impl Config {
    /// `~/.streamflow`, or `./.streamflow` when no home directory is known
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| {
                warn!("home directory not found, using current directory");
                PathBuf::from(".")
            })
            .join(".streamflow")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("streamflow.conf")
    }

    /// Load configuration from `path`, or return defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn target(&self) -> DbTarget {
        match &self.sqlite {
            Some(path) => DbTarget::Sqlite(path.clone()),
            None => DbTarget::Postgres(self.database.to_pg_config()),
        }
    }
}
