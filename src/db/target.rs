//! Where the rows come from.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub enum DbTarget {
    /// PostgreSQL server reached through the blocking client.
    Postgres(postgres::Config),

    /// Existing SQLite database file, opened read-only.
    Sqlite(PathBuf),
}

impl DbTarget {
    /// Pick a backend from the shape of `s`:
    /// - `postgres://…` / `postgresql://…` URL → Postgres
    /// - `host=… user=…` key/value string (first token is a libpq key) → Postgres
    /// - anything else → path to a SQLite file, even one containing `=`
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::InvalidTarget("empty database target".into()));
        }

        if s.starts_with("postgres://") || s.starts_with("postgresql://") || is_key_value(s) {
            let cfg = postgres::Config::from_str(s)
                .map_err(|e| AppError::InvalidTarget(format!("{s}: {e}")))?;
            return Ok(Self::Postgres(cfg));
        }

        Ok(Self::Sqlite(PathBuf::from(s)))
    }
}

/// Keys understood by `postgres::Config` in `key=value` strings.
const PG_KEYS: &[&str] = &[
    "host",
    "hostaddr",
    "port",
    "user",
    "password",
    "dbname",
    "options",
    "application_name",
    "sslmode",
    "connect_timeout",
    "tcp_user_timeout",
    "keepalives",
    "keepalives_idle",
    "target_session_attrs",
    "channel_binding",
    "load_balance_hosts",
];

fn is_key_value(s: &str) -> bool {
    s.split_whitespace()
        .next()
        .and_then(|token| token.split_once('='))
        .is_some_and(|(key, _)| PG_KEYS.contains(&key))
}

impl fmt::Display for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // never print the password
            DbTarget::Postgres(cfg) => {
                let hosts = cfg
                    .get_hosts()
                    .iter()
                    .map(|h| match h {
                        postgres::config::Host::Tcp(name) => name.clone(),
                        #[cfg(unix)]
                        postgres::config::Host::Unix(path) => path.display().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                write!(
                    f,
                    "postgres {}@{}/{}",
                    cfg.get_user().unwrap_or("?"),
                    hosts,
                    cfg.get_dbname().unwrap_or("?")
                )
            }
            DbTarget::Sqlite(path) => write!(f, "sqlite {}", path.display()),
        }
    }
}
