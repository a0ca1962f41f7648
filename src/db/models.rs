//! Row models produced by the result cursors.
//! These are thin, backend-neutral wrappers around database rows.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::db::numeric::PgNumeric;

/// One `streamflow_data` row: the date column and the raw second column.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRow {
    pub date: NaiveDateTime,
    pub value: CellValue,
}

/// Dynamically typed cell, printed with its default textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    /// `REAL` keeps single precision so `12.1` prints as `12.1`.
    Float4(f32),
    Float(f64),
    Numeric(PgNumeric),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    DateTimeUtc(DateTime<Utc>),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // NULL prints as nothing, leaving the line shape intact
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float4(x) => write!(f, "{x}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Numeric(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Time(t) => write!(f, "{t}"),
            CellValue::DateTime(dt) => write!(f, "{dt}"),
            CellValue::DateTimeUtc(dt) => write!(f, "{dt}"),
        }
    }
}
