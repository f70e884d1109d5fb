//! Database backend trait for the command layer.
//!
//! Commands only need to run a query and look up table handles, so they talk
//! to this trait instead of a concrete client. Production uses `HospitalDb`;
//! tests substitute a backend with canned results.

use super::query::{Query, QueryResult};
use super::schema::Schema;
use super::DbError;

pub trait DatabaseBackend {
    /// Execute a structured or raw query, returning decoded rows.
    fn execute_query(&mut self, query: &Query) -> Result<QueryResult, DbError>;

    /// Table handles produced by the startup schema check.
    fn schema(&self) -> &Schema;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
