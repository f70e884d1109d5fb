//! Database connection management.

use std::error::Error;

use postgres::{Client, NoTls};
use tracing::{debug, info};

use super::backend::DatabaseBackend;
use super::query::{Query, QueryResult};
use super::schema::Schema;
use super::DbError;
use crate::config::PostgresConfig;

/// One blocking session against the hospital database.
///
/// The session is opened once and reused for every query for the lifetime
/// of the process.
pub struct HospitalDb {
    client: Client,
    schema: Schema,
    target: String,
}

impl HospitalDb {
    /// Connect and run the schema check.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The configuration cannot be turned into connection parameters
    /// - Connection fails
    /// - `orders`, `analyses` or `groups` is missing or lacks a required column
    pub fn connect(config: &PostgresConfig) -> Result<Self, Box<dyn Error>> {
        let target = config.target();
        let pg = config.to_pg_config()?;

        info!(%target, "connecting to PostgreSQL");
        let mut client = pg.connect(NoTls).map_err(|e| DbError::ConnectFailed {
            target: target.clone(),
            message: e.to_string(),
        })?;

        let schema = Schema::reflect(&mut client)?;

        Ok(Self {
            client,
            schema,
            target,
        })
    }

    /// Execute a structured query or a raw SQL string.
    pub fn execute(&mut self, query: impl Into<Query>) -> Result<QueryResult, DbError> {
        self.execute_query(&query.into())
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl DatabaseBackend for HospitalDb {
    fn execute_query(&mut self, query: &Query) -> Result<QueryResult, DbError> {
        let compiled = query.compile();
        debug!(sql = %compiled.sql, params = compiled.params.len(), "executing query");

        let statement = self.client.prepare(&compiled.sql)?;
        let rows = self.client.query(&statement, &compiled.param_refs())?;

        debug!(rows = rows.len(), "query finished");
        QueryResult::from_statement(&statement, &rows)
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn backend_name(&self) -> &'static str {
        "Postgres"
    }
}
