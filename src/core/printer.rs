use std::io::Write;

use chrono::NaiveDateTime;

use crate::core::epoch::{days_since_epoch, reference_datetime, seconds_since_epoch};
use crate::db::RowCursor;
use crate::db::models::FlowRow;
use crate::errors::AppResult;

pub const END_MARKER: &str = "---- END OF DATA ----";

/// Tab-separated writer for converted rows.
pub struct RowPrinter<W: Write> {
    out: W,
}

impl<W: Write> RowPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_epoch(&mut self) -> AppResult<()> {
        writeln!(self.out, "{}", reference_datetime())?;
        Ok(())
    }

    /// `<date>\t<elapsed_seconds>\t<value>`
    pub fn print_row(&mut self, row: &FlowRow) -> AppResult<()> {
        writeln!(
            self.out,
            "{}\t{}\t{}",
            row.date,
            seconds_since_epoch(row.date),
            row.value
        )?;
        Ok(())
    }

    /// Drain `cursor`, one line per row. Stops at the first bad row.
    pub fn print_all(&mut self, cursor: &mut dyn RowCursor) -> AppResult<usize> {
        let mut count = 0;
        while let Some(row) = cursor.next_row()? {
            self.print_row(&row)?;
            count += 1;
        }
        Ok(count)
    }

    /// `<date>\t<elapsed_seconds>\t<serial_days>`
    pub fn print_conversion(&mut self, dt: NaiveDateTime) -> AppResult<()> {
        writeln!(
            self.out,
            "{}\t{}\t{}",
            dt,
            seconds_since_epoch(dt),
            days_since_epoch(dt)
        )?;
        Ok(())
    }

    pub fn print_end(&mut self) -> AppResult<()> {
        writeln!(self.out, "{END_MARKER}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
