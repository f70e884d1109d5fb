//! Executable queries and their results.

use postgres::{Row, Statement};
use serde::Serialize;

use super::value::{decode_row, Value};
use super::DbError;
use crate::queries::builder::{CompiledQuery, SelectQuery};

/// Anything `execute` accepts.
///
/// Raw strings are wrapped as `Text` and run verbatim without parameters;
/// structured queries compile to SQL with positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Select(SelectQuery),
    Text(String),
}

impl Query {
    pub fn compile(&self) -> CompiledQuery {
        match self {
            Query::Select(select) => select.compile(),
            Query::Text(sql) => CompiledQuery {
                sql: sql.clone(),
                params: Vec::new(),
            },
        }
    }
}

impl From<SelectQuery> for Query {
    fn from(select: SelectQuery) -> Self {
        Query::Select(select)
    }
}

impl From<&str> for Query {
    fn from(sql: &str) -> Self {
        Query::Text(sql.to_string())
    }
}

impl From<String> for Query {
    fn from(sql: String) -> Self {
        Query::Text(sql)
    }
}

/// Result of a query execution: column names plus decoded rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    /// Decode rows using the prepared statement's column list, so headers
    /// are known even when no rows come back.
    pub(crate) fn from_statement(statement: &Statement, rows: &[Row]) -> Result<Self, DbError> {
        let headers = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let rows = rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }
}
