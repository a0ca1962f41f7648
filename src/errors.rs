//! Unified application error type.
//! Every module (db, core, cli, config) returns AppError so that failures
//! propagate with `?` straight up to `main`.

use std::io;
use thiserror::Error;

use crate::telemetry::TracingError;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] postgres::Error),

    #[error("Invalid database target: {0}")]
    InvalidTarget(String),

    // ---------------------------
    // Row decoding
    // ---------------------------
    #[error("Row has {0} column(s), at least 2 are required")]
    RowShape(usize),

    #[error("First column is not a date (found {0})")]
    NotADate(String),

    #[error("Failed to decode {0} value: {1}")]
    Decode(String, String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Logging
    // ---------------------------
    #[error("Tracing setup failed: {0}")]
    Telemetry(#[from] TracingError),
}

pub type AppResult<T> = Result<T, AppError>;
