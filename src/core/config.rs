use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;
use std::path::Path;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        print!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Write the default configuration to `path`. An existing file is kept
    /// unless `force` is set.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, Config::default().to_yaml()?)?;
        messages::success(format!("Config file: {}", path.display()));
        Ok(())
    }
}
