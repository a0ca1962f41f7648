use std::io;

use crate::cli::parser::Commands;
use crate::core::epoch::parse_epoch_arg;
use crate::core::printer::RowPrinter;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Epoch { dates } = cmd {
        // parse everything first so a typo prints nothing
        let parsed = dates
            .iter()
            .map(|d| parse_epoch_arg(d))
            .collect::<AppResult<Vec<_>>>()?;

        let mut printer = RowPrinter::new(io::stdout().lock());
        for dt in parsed {
            printer.print_conversion(dt)?;
        }
    }

    Ok(())
}
