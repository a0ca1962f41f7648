//! SQLite result cursor, used for local copies of the streamflow table.

use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row, Rows};
use tracing::debug;

use crate::core::epoch::parse_timestamp;
use crate::db::RowCursor;
use crate::db::models::{CellValue, FlowRow};
use crate::errors::{AppError, AppResult};

/// Open an existing database file. A missing file is an error, never created.
pub fn open(path: &Path) -> AppResult<Connection> {
    debug!(path = %path.display(), "opening SQLite database");
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

pub struct SqliteCursor<'stmt> {
    rows: Rows<'stmt>,
    columns: usize,
}

impl<'stmt> SqliteCursor<'stmt> {
    pub fn new(rows: Rows<'stmt>, columns: usize) -> Self {
        Self { rows, columns }
    }
}

impl RowCursor for SqliteCursor<'_> {
    fn next_row(&mut self) -> AppResult<Option<FlowRow>> {
        match self.rows.next()? {
            Some(row) => decode_row(row, self.columns).map(Some),
            None => Ok(None),
        }
    }
}

fn decode_row(row: &Row<'_>, columns: usize) -> AppResult<FlowRow> {
    if columns < 2 {
        return Err(AppError::RowShape(columns));
    }

    Ok(FlowRow {
        date: decode_date(row.get_ref(0)?)?,
        value: decode_cell(row.get_ref(1)?)?,
    })
}

/// `YYYY-MM-DD` prefix with every field zero padded.
fn has_padded_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..10]
            .iter()
            .enumerate()
            .all(|(i, c)| if i == 4 || i == 7 { *c == b'-' } else { c.is_ascii_digit() })
        && (b.len() == 10 || b[10] == b' ' || b[10] == b'T')
}

/// SQLite has no date type: dates are stored as ISO text.
///
/// Only zero-padded ISO text is accepted. The threshold filter compares the
/// column as text, which orders correctly for that form alone (`2010-9-30`
/// or `9/30/2010` would sort after `2010-10-01`).
fn decode_date(v: ValueRef<'_>) -> AppResult<NaiveDateTime> {
    match v {
        ValueRef::Text(bytes) => {
            let s = std::str::from_utf8(bytes)
                .map_err(|_| AppError::NotADate("non UTF-8 text".into()))?;
            if !has_padded_iso_date(s) {
                return Err(AppError::NotADate(format!("text '{s}'")));
            }
            parse_timestamp(s).map_err(|_| AppError::NotADate(format!("text '{s}'")))
        }
        other => Err(AppError::NotADate(
            other.data_type().to_string().to_lowercase(),
        )),
    }
}

fn decode_cell(v: ValueRef<'_>) -> AppResult<CellValue> {
    let cell = match v {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Int(i),
        ValueRef::Real(f) => CellValue::Float(f),
        ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => CellValue::Text(format!("\\x{}", hex::encode(bytes))),
    };
    Ok(cell)
}
