use chrono::NaiveDate;

pub const TABLE: &str = "streamflow_data";

/// Threshold of the historical query, `'10/1/2010'` read as month/day/year.
pub const DEFAULT_SINCE: NaiveDate = match NaiveDate::from_ymd_opt(2010, 10, 1) {
    Some(d) => d,
    None => panic!("2010-10-01 is a valid date"),
};

/// The one query this tool runs.
///
/// The threshold is rendered as an ISO literal so neither PostgreSQL's
/// DateStyle nor SQLite's text comparison can read it differently.
pub fn streamflow_query(since: NaiveDate) -> String {
    format!(
        "SELECT * from {TABLE} WHERE date >= '{}'",
        since.format("%Y-%m-%d")
    )
}
