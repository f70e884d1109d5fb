//! Database connection and query utilities for PostgreSQL.
//!
//! This module provides the data access layer for the report tool:
//! - Connection management (one blocking `postgres::Client` per process)
//! - A startup schema check that produces typed table handles
//! - Query execution for structured and raw text queries
//! - Result row extraction with type-safe helpers
//!
//! # Type Decisions
//!
//! **Why a `Value` enum instead of deserializing straight into row structs?**
//! `execute` serves both the report queries and arbitrary raw SQL, so rows are
//! decoded generically from the column types PostgreSQL reports. Report code
//! then extracts typed fields with the `extract_*` helpers.
//!
//! **Why `Decimal` for prices?**
//! `price` may be `integer` or `numeric` depending on the deployment, and
//! `sum()` widens it again. `Decimal` holds every one of those without
//! rounding.

mod backend;
mod connection;
mod escape;
mod query;
mod schema;
mod value;

pub use backend::DatabaseBackend;
pub use connection::HospitalDb;
pub use escape::{escape_literal, quote_ident};
pub use query::{Query, QueryResult};
pub use schema::{ColumnInfo, ColumnRef, Schema, SchemaError, Table, ANALYSES, GROUPS, ORDERS};
pub use value::{
    extract_date, extract_decimal, extract_i64, extract_string, extract_timestamp, Value,
};

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to '{target}': {message}")]
    ConnectFailed { target: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Cannot decode column '{column}' of type {type_name}: {message}")]
    Decode {
        column: String,
        type_name: String,
        message: String,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl From<postgres::Error> for DbError {
    fn from(e: postgres::Error) -> Self {
        // Server errors carry a readable message; fall back to Display otherwise.
        let message = match e.as_db_error() {
            Some(db) => db.message().to_string(),
            None => e.to_string(),
        };
        DbError::QueryFailed { message }
    }
}
