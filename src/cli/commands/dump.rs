use std::io;

use crate::cli::commands::Context;
use crate::core::dump::DumpLogic;
use crate::errors::AppResult;

pub fn handle(ctx: &Context) -> AppResult<()> {
    let stdout = io::stdout().lock();
    DumpLogic::run(&ctx.target, ctx.cfg.since, stdout)?;
    Ok(())
}
