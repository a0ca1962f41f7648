#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, pointed at a config file that does not exist so the
/// user's own ~/.streamflow never leaks into a run.
pub fn sfl(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("streamflow");
    cmd.args(["--config", &missing_config(name)]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_streamflow.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_streamflow.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create `streamflow_data(date, flow)` and insert the given rows.
pub fn create_streamflow_db(db_path: &str, rows: &[(&str, f64)]) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch("CREATE TABLE streamflow_data (date DATE NOT NULL, flow REAL);")
        .expect("create table");
    for (date, flow) in rows {
        conn.execute(
            "INSERT INTO streamflow_data (date, flow) VALUES (?1, ?2)",
            params![date, flow],
        )
        .expect("insert row");
    }
}

/// Small dataset straddling the default 2010-10-01 threshold.
pub fn init_db_with_data(db_path: &str) {
    create_streamflow_db(
        db_path,
        &[
            ("2010-09-30", 1.25),
            ("2010-10-01", 12.5),
            ("2010-10-02", 13.0),
            ("2011-01-15", 7.75),
        ],
    );
}

/// Lines of stdout between the epoch line and the end marker.
pub fn data_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|l| l.contains('\t'))
        .map(str::to_string)
        .collect()
}
