//! Single open connection, PostgreSQL or SQLite (lightweight for CLI usage).

use postgres::Client;
use rusqlite::Connection;

use crate::db::target::DbTarget;
use crate::db::{RowCursor, pg, sqlite};
use crate::errors::AppResult;

pub enum DbPool {
    Postgres(Client),
    Sqlite(Connection),
}

impl DbPool {
    pub fn connect(target: &DbTarget) -> AppResult<Self> {
        let pool = match target {
            DbTarget::Postgres(cfg) => Self::Postgres(pg::connect(cfg)?),
            DbTarget::Sqlite(path) => Self::Sqlite(sqlite::open(path)?),
        };
        Ok(pool)
    }

    /// Run `sql` and hand the open cursor to `func`.
    ///
    /// The cursor (and for SQLite the prepared statement) lives only for the
    /// duration of the call and is dropped on every return path.
    pub fn with_rows<F, T>(&mut self, sql: &str, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut dyn RowCursor) -> AppResult<T>,
    {
        match self {
            DbPool::Postgres(client) => {
                let mut cursor = pg::query(client, sql)?;
                func(&mut cursor)
            }
            DbPool::Sqlite(conn) => {
                let mut stmt = conn.prepare(sql)?;
                let columns = stmt.column_count();
                let rows = stmt.query([])?;
                let mut cursor = sqlite::SqliteCursor::new(rows, columns);
                func(&mut cursor)
            }
        }
    }
}
