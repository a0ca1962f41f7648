//! Diagnostics setup.
//!
//! Everything goes to stderr: stdout carries only the data dump.

use std::io;

use thiserror::Error;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_log::{LogTracer, log_tracer::SetLoggerError};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum TracingError {
    #[error("failed to init log tracer: {0}")]
    InitLogTracer(#[from] SetLoggerError),

    #[error("failed to set global default subscriber: {0}")]
    SetGlobalDefault(#[from] SetGlobalDefaultError),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` selects the level; without it only warnings and errors are
/// shown. Records emitted through the `log` crate (the postgres driver uses
/// it) are forwarded to the same subscriber.
pub fn init_tracing() -> Result<(), TracingError> {
    LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    set_global_default(subscriber)?;

    Ok(())
}
