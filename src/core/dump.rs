use std::io::Write;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::printer::RowPrinter;
use crate::db::pool::DbPool;
use crate::db::query::streamflow_query;
use crate::db::target::DbTarget;
use crate::errors::AppResult;

pub struct DumpLogic;

impl DumpLogic {
    /// epoch line → connect → query → rows → end marker.
    ///
    /// Any failure returns before the end marker is written. The connection
    /// is dropped before the marker, so it is closed on every path.
    pub fn run<W: Write>(target: &DbTarget, since: NaiveDate, out: W) -> AppResult<usize> {
        let mut printer = RowPrinter::new(out);
        printer.print_epoch()?;

        let count = {
            let mut pool = DbPool::connect(target)?;
            debug!(%target, "connected");

            let sql = streamflow_query(since);
            pool.with_rows(&sql, |cursor| printer.print_all(cursor))?
        };

        info!(rows = count, "streamflow dump complete");
        printer.print_end()?;

        Ok(count)
    }
}
