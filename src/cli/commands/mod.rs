pub mod config;
pub mod dump;
pub mod epoch;

use std::path::PathBuf;

use crate::config::Config;
use crate::db::target::DbTarget;

/// Effective settings after applying command-line overrides.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub target: DbTarget,
}
