pub mod models;
pub mod numeric;
pub mod pg;
pub mod pool;
pub mod query;
pub mod sqlite;
pub mod target;

use crate::db::models::FlowRow;
use crate::errors::AppResult;

/// Forward-only, single-pass cursor over query results.
pub trait RowCursor {
    /// Decode the next row, `Ok(None)` once the result set is exhausted.
    fn next_row(&mut self) -> AppResult<Option<FlowRow>>;
}
