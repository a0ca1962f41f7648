use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        if *init {
            ConfigLogic::init(&ctx.config_path, *force)?;
        }

        if *print_config {
            ConfigLogic::print(&ctx.cfg)?;
        }

        if !*init && !*print_config {
            messages::info(format!("Config file: {}", ctx.config_path.display()));
        }
    }

    Ok(())
}
