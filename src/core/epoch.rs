// src/core/epoch.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::errors::{AppError, AppResult};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Serial day 0 of the spreadsheet/GoldSim calendar.
const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 30) {
    Some(d) => d,
    None => panic!("1899-12-30 is a valid date"),
};

pub fn reference_date() -> NaiveDate {
    REFERENCE_DATE
}

pub fn reference_datetime() -> NaiveDateTime {
    reference_date().and_time(NaiveTime::MIN)
}

/// Signed seconds elapsed between the epoch and `dt`, sub-second part included.
pub fn seconds_since_epoch(dt: NaiveDateTime) -> f64 {
    let delta = dt - reference_datetime();

    let secs = delta.num_seconds() as f64;
    let nanos = delta.subsec_nanos() as f64;

    secs + nanos / 1_000_000_000.0
}

/// Seconds from the epoch to midnight of `d`; always a whole multiple of a day.
pub fn date_seconds_since_epoch(d: NaiveDate) -> f64 {
    seconds_since_epoch(d.and_time(NaiveTime::MIN))
}

/// Fractional serial day number (seconds / 86400).
pub fn days_since_epoch(dt: NaiveDateTime) -> f64 {
    seconds_since_epoch(dt) / SECONDS_PER_DAY
}

/// Inverse of [`seconds_since_epoch`], rounded to the nearest millisecond.
/// `None` when the value is not finite or falls outside chrono's range.
pub fn from_seconds_since_epoch(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }

    let millis = (seconds * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return None;
    }

    let delta = TimeDelta::try_milliseconds(millis as i64)?;
    reference_datetime().checked_add_signed(delta)
}

/// Argument of the `epoch` command: a number is seconds since the epoch,
/// anything else a date or date-time.
pub fn parse_epoch_arg(s: &str) -> AppResult<NaiveDateTime> {
    match s.trim().parse::<f64>() {
        Ok(seconds) => {
            from_seconds_since_epoch(seconds).ok_or_else(|| AppError::InvalidDate(s.to_string()))
        }
        Err(_) => parse_timestamp(s),
    }
}

/// Parse a date or date-time typed on the command line.
///
/// Month/day/year (`10/1/2010`) is accepted because that is how the
/// threshold literal was historically written.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    let dt_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }

    Err(AppError::InvalidDate(s.to_string()))
}
