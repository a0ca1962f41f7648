use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::VecDeque;
use std::path::PathBuf;
use streamflow::core::dump::DumpLogic;
use streamflow::core::printer::{END_MARKER, RowPrinter};
use streamflow::db::RowCursor;
use streamflow::db::models::{CellValue, FlowRow};
use streamflow::db::query::DEFAULT_SINCE;
use streamflow::db::target::DbTarget;
use streamflow::errors::{AppError, AppResult};

mod common;
use common::{create_streamflow_db, init_db_with_data, setup_test_db};

/// In-memory stand-in for a database cursor.
struct MockCursor {
    items: VecDeque<AppResult<FlowRow>>,
}

impl MockCursor {
    fn new(items: Vec<AppResult<FlowRow>>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl RowCursor for MockCursor {
    fn next_row(&mut self) -> AppResult<Option<FlowRow>> {
        self.items.pop_front().transpose()
    }
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

fn row(y: i32, m: u32, d: u32, value: CellValue) -> FlowRow {
    FlowRow {
        date: midnight(y, m, d),
        value,
    }
}

fn render(cursor: &mut dyn RowCursor) -> (AppResult<usize>, String) {
    let mut printer = RowPrinter::new(Vec::new());
    let res = printer.print_all(cursor);
    let out = String::from_utf8(printer.into_inner()).unwrap();
    (res, out)
}

#[test]
fn test_print_row_format() {
    let mut cursor = MockCursor::new(vec![Ok(row(2010, 10, 1, CellValue::Float(12.5)))]);
    let (res, out) = render(&mut cursor);

    assert_eq!(res.unwrap(), 1);
    assert_eq!(out, "2010-10-01 00:00:00\t3495052800\t12.5\n");
}

#[test]
fn test_empty_cursor_prints_nothing() {
    let mut cursor = MockCursor::new(vec![]);
    let (res, out) = render(&mut cursor);

    assert_eq!(res.unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_n_rows_give_n_lines_with_two_tabs() {
    let values = vec![
        CellValue::Null,
        CellValue::Bool(true),
        CellValue::Int(42),
        CellValue::Float(-3.25),
        CellValue::Text("gauge A".into()),
        CellValue::Date(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()),
        CellValue::DateTime(midnight(2021, 1, 1)),
    ];
    let n = values.len();
    let rows = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| Ok(row(2010, 10, 1 + i as u32, v)))
        .collect();

    let mut cursor = MockCursor::new(rows);
    let (res, out) = render(&mut cursor);

    assert_eq!(res.unwrap(), n);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), n);
    for line in &lines {
        assert_eq!(line.matches('\t').count(), 2, "line: {line:?}");
    }
    assert!(lines[0].ends_with('\t'));
    assert!(lines[1].ends_with("\ttrue"));
    assert!(lines[4].ends_with("\tgauge A"));
    assert!(lines[5].ends_with("\t2020-02-29"));
}

#[test]
fn test_error_stops_iteration() {
    let mut cursor = MockCursor::new(vec![
        Ok(row(2010, 10, 1, CellValue::Int(1))),
        Err(AppError::NotADate("int4".into())),
        Ok(row(2010, 10, 3, CellValue::Int(3))),
    ]);
    let (res, out) = render(&mut cursor);

    assert!(matches!(res, Err(AppError::NotADate(_))));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_epoch_and_end_lines() {
    let mut printer = RowPrinter::new(Vec::new());
    printer.print_epoch().unwrap();
    printer.print_end().unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();

    assert_eq!(out, format!("1899-12-30 00:00:00\n{END_MARKER}\n"));
}

#[test]
fn test_print_conversion() {
    let mut printer = RowPrinter::new(Vec::new());
    printer.print_conversion(midnight(1899, 12, 31)).unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();

    assert_eq!(out, "1899-12-31 00:00:00\t86400\t1\n");
}

#[test]
fn test_dump_logic_against_sqlite() {
    let db_path = setup_test_db("dump_logic_against_sqlite");
    init_db_with_data(&db_path);

    let mut out = Vec::new();
    let count = DumpLogic::run(&DbTarget::Sqlite(PathBuf::from(&db_path)), DEFAULT_SINCE, &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(count, 3);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.first(), Some(&"1899-12-30 00:00:00"));
    assert_eq!(lines.last(), Some(&END_MARKER));
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "2010-10-01 00:00:00\t3495052800\t12.5");
}

#[test]
fn test_dump_logic_connection_failure() {
    let db_path = setup_test_db("dump_logic_connection_failure");

    let mut out = Vec::new();
    let res = DumpLogic::run(&DbTarget::Sqlite(PathBuf::from(&db_path)), DEFAULT_SINCE, &mut out);
    let out = String::from_utf8(out).unwrap();

    assert!(matches!(res, Err(AppError::Sqlite(_))));
    assert_eq!(out, "1899-12-30 00:00:00\n");
}

#[test]
fn test_dump_logic_rejects_unpadded_sqlite_dates() {
    let db_path = setup_test_db("dump_logic_rejects_unpadded_sqlite_dates");
    create_streamflow_db(&db_path, &[("2010-9-30", 1.0)]);

    let mut out = Vec::new();
    let res = DumpLogic::run(&DbTarget::Sqlite(PathBuf::from(&db_path)), DEFAULT_SINCE, &mut out);
    let out = String::from_utf8(out).unwrap();

    assert!(matches!(res, Err(AppError::NotADate(found)) if found == "text '2010-9-30'"));
    assert_eq!(out, "1899-12-30 00:00:00\n");
}

#[test]
fn test_real_value_keeps_single_precision() {
    assert_eq!(CellValue::Float4(12.1).to_string(), "12.1");
    assert_eq!(CellValue::Float(f64::from(12.1f32)).to_string(), "12.100000381469727");
}
