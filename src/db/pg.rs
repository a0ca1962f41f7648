//! PostgreSQL result cursor.
//!
//! Rows are pulled from the server one at a time through
//! [`postgres::Client::query_raw`]; nothing is buffered beyond the row being
//! decoded.

use std::error::Error;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use postgres::fallible_iterator::FallibleIterator;
use postgres::types::{FromSql, Kind, Type};
use postgres::{Client, NoTls, Row, RowIter};
use tracing::debug;

use crate::db::RowCursor;
use crate::db::models::{CellValue, FlowRow};
use crate::errors::{AppError, AppResult};

pub fn connect(cfg: &postgres::Config) -> AppResult<Client> {
    debug!(dbname = ?cfg.get_dbname(), "connecting to PostgreSQL");
    let client = cfg.connect(NoTls)?;
    Ok(client)
}

/// Run `sql` without parameters and return a lazy row iterator.
pub fn query<'a>(client: &'a mut Client, sql: &str) -> AppResult<PgCursor<'a>> {
    debug!(sql, "executing query");
    let rows = client.query_raw(sql, std::iter::empty::<String>())?;
    Ok(PgCursor { rows })
}

pub struct PgCursor<'a> {
    rows: RowIter<'a>,
}

impl RowCursor for PgCursor<'_> {
    fn next_row(&mut self) -> AppResult<Option<FlowRow>> {
        match self.rows.next()? {
            Some(row) => decode_row(&row).map(Some),
            None => Ok(None),
        }
    }
}

/// A column as it came off the wire: its type and binary payload
/// (`None` for SQL NULL). Accepts every type.
pub struct RawCell<'a> {
    pub ty: Type,
    pub raw: Option<&'a [u8]>,
}

impl<'a> FromSql<'a> for RawCell<'a> {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(Self {
            ty: ty.clone(),
            raw: Some(raw),
        })
    }

    fn from_sql_null(ty: &Type) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(Self {
            ty: ty.clone(),
            raw: None,
        })
    }

    fn accepts(_: &Type) -> bool {
        true
    }
}

fn decode_row(row: &Row) -> AppResult<FlowRow> {
    if row.len() < 2 {
        return Err(AppError::RowShape(row.len()));
    }

    let date: RawCell<'_> = row.try_get(0)?;
    let value: RawCell<'_> = row.try_get(1)?;

    Ok(FlowRow {
        date: decode_date_value(&date.ty, date.raw)?,
        value: decode_value(&value.ty, value.raw)?,
    })
}

fn from_raw<'a, T: FromSql<'a>>(ty: &Type, raw: &'a [u8]) -> AppResult<T> {
    T::from_sql(ty, raw).map_err(|e| AppError::Decode(ty.name().to_string(), e.to_string()))
}

/// First column: `DATE` (at midnight) or `TIMESTAMP`.
pub fn decode_date_value(ty: &Type, raw: Option<&[u8]>) -> AppResult<NaiveDateTime> {
    let raw = raw.ok_or_else(|| AppError::NotADate("NULL".into()))?;

    match *ty {
        Type::DATE => Ok(from_raw::<NaiveDate>(ty, raw)?.and_time(NaiveTime::MIN)),
        Type::TIMESTAMP => from_raw::<NaiveDateTime>(ty, raw),
        _ => Err(AppError::NotADate(ty.name().to_string())),
    }
}

/// Second column: any type, rendered the way `psql` would show it where the
/// binary format allows. Types with no known rendering print as `\x<hex>`.
pub fn decode_value(ty: &Type, raw: Option<&[u8]>) -> AppResult<CellValue> {
    let Some(raw) = raw else {
        return Ok(CellValue::Null);
    };

    let cell = match *ty {
        Type::BOOL => CellValue::Bool(from_raw(ty, raw)?),
        Type::CHAR => CellValue::Text(char::from(from_raw::<i8>(ty, raw)? as u8).to_string()),
        Type::INT2 => CellValue::Int(from_raw::<i16>(ty, raw)?.into()),
        Type::INT4 => CellValue::Int(from_raw::<i32>(ty, raw)?.into()),
        Type::INT8 => CellValue::Int(from_raw(ty, raw)?),
        Type::OID => CellValue::Int(from_raw::<u32>(ty, raw)?.into()),
        Type::FLOAT4 => CellValue::Float4(from_raw(ty, raw)?),
        Type::FLOAT8 => CellValue::Float(from_raw(ty, raw)?),
        Type::NUMERIC => CellValue::Numeric(from_raw(ty, raw)?),
        Type::DATE => CellValue::Date(from_raw(ty, raw)?),
        Type::TIME => CellValue::Time(from_raw(ty, raw)?),
        Type::TIMESTAMP => CellValue::DateTime(from_raw(ty, raw)?),
        Type::TIMESTAMPTZ => CellValue::DateTimeUtc(from_raw::<DateTime<Utc>>(ty, raw)?),
        Type::UUID => CellValue::Text(format_uuid(ty, raw)?),
        Type::JSON | Type::XML => CellValue::Text(text_payload(ty, raw)?),
        // binary jsonb carries a one byte version header
        Type::JSONB => match raw.split_first() {
            Some((&1, rest)) => CellValue::Text(text_payload(ty, rest)?),
            _ => return Err(AppError::Decode(ty.name().into(), "unknown jsonb version".into())),
        },
        _ if <String as FromSql>::accepts(ty) => CellValue::Text(from_raw(ty, raw)?),
        _ if matches!(ty.kind(), Kind::Enum(_)) => CellValue::Text(text_payload(ty, raw)?),
        _ => {
            debug!(ty = ty.name(), "no text rendering, printing raw bytes");
            CellValue::Text(format!("\\x{}", hex::encode(raw)))
        }
    };

    Ok(cell)
}

fn text_payload(ty: &Type, raw: &[u8]) -> AppResult<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| AppError::Decode(ty.name().to_string(), e.to_string()))
}

fn format_uuid(ty: &Type, raw: &[u8]) -> AppResult<String> {
    if raw.len() != 16 {
        return Err(AppError::Decode(
            ty.name().to_string(),
            format!("expected 16 bytes, got {}", raw.len()),
        ));
    }

    let h = hex::encode(raw);
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &h[0..8],
        &h[8..12],
        &h[12..16],
        &h[16..20],
        &h[20..32]
    ))
}
