//! Startup schema check for the three report tables.
//!
//! The tool never creates or alters tables. At connect time it reads
//! `information_schema.columns` for `orders`, `analyses` and `groups`,
//! verifies the columns the reports depend on, and hands out `Table`
//! handles that the query builder uses to reference columns.

use postgres::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::escape::quote_ident;
use super::DbError;

pub const ORDERS: &str = "orders";
pub const ANALYSES: &str = "analyses";
pub const GROUPS: &str = "groups";

/// Columns each report table must provide.
const REQUIRED_COLUMNS: [(&str, &[&str]); 3] = [
    (ORDERS, &["id", "date", "time", "analise_id"]),
    (ANALYSES, &["id", "name", "price", "group_id"]),
    (GROUPS, &["id", "name"]),
];

const REFLECT_SQL: &str = "\
SELECT table_name::text, column_name::text, data_type::text
FROM information_schema.columns
WHERE table_schema = current_schema() AND table_name::text = ANY($1)
ORDER BY table_name, ordinal_position";

#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("Table '{table}' does not exist")]
    MissingTable { table: String },

    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },
}

/// A column as reported by the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
}

/// Fully qualified column reference, rendered as `"table"."column"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn to_sql(&self) -> String {
        format!("{}.{}", quote_ident(&self.table), quote_ident(&self.column))
    }
}

/// Handle to a checked table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<ColumnInfo>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.name == column)
    }

    /// Reference a column of this table.
    ///
    /// Fails for columns the database did not report, so a query can never
    /// name a column that the schema check has not seen.
    pub fn col(&self, column: &str) -> Result<ColumnRef, SchemaError> {
        if !self.has_column(column) {
            return Err(SchemaError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            });
        }
        Ok(ColumnRef {
            table: self.name.clone(),
            column: column.to_string(),
        })
    }

    pub fn to_sql(&self) -> String {
        quote_ident(&self.name)
    }
}

/// The three tables the reports join.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub orders: Table,
    pub analyses: Table,
    pub groups: Table,
}

impl Schema {
    /// Read and check the live schema.
    pub fn reflect(client: &mut Client) -> Result<Self, DbError> {
        let names: Vec<&str> = REQUIRED_COLUMNS.iter().map(|(table, _)| *table).collect();
        let rows = client.query(REFLECT_SQL, &[&names])?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let table: String = row.try_get(0)?;
            let column: String = row.try_get(1)?;
            let data_type: String = row.try_get(2)?;
            debug!(%table, %column, %data_type, "reflected column");
            columns.push((table, column, data_type));
        }

        let schema = Self::from_columns(columns)?;
        info!(
            orders = schema.orders.columns().len(),
            analyses = schema.analyses.columns().len(),
            groups = schema.groups.columns().len(),
            "schema check passed"
        );
        Ok(schema)
    }

    /// Build and check a schema from `(table, column, data_type)` triples.
    pub fn from_columns(
        columns: impl IntoIterator<Item = (String, String, String)>,
    ) -> Result<Self, SchemaError> {
        let mut orders = Vec::new();
        let mut analyses = Vec::new();
        let mut groups = Vec::new();

        for (table, name, data_type) in columns {
            let target = match table.as_str() {
                ORDERS => &mut orders,
                ANALYSES => &mut analyses,
                GROUPS => &mut groups,
                _ => continue,
            };
            target.push(ColumnInfo { name, data_type });
        }

        Ok(Self {
            orders: checked_table(ORDERS, orders)?,
            analyses: checked_table(ANALYSES, analyses)?,
            groups: checked_table(GROUPS, groups)?,
        })
    }

    /// The minimal schema the reports need, with the usual column types.
    pub fn expected() -> Self {
        let column = |name: &str, data_type: &str| ColumnInfo {
            name: name.to_string(),
            data_type: data_type.to_string(),
        };
        Self {
            orders: Table::new(
                ORDERS,
                vec![
                    column("id", "integer"),
                    column("date", "date"),
                    column("time", "time without time zone"),
                    column("analise_id", "integer"),
                ],
            ),
            analyses: Table::new(
                ANALYSES,
                vec![
                    column("id", "integer"),
                    column("name", "character varying"),
                    column("price", "numeric"),
                    column("group_id", "integer"),
                ],
            ),
            groups: Table::new(
                GROUPS,
                vec![column("id", "integer"), column("name", "character varying")],
            ),
        }
    }
}

fn checked_table(name: &str, columns: Vec<ColumnInfo>) -> Result<Table, SchemaError> {
    if columns.is_empty() {
        return Err(SchemaError::MissingTable {
            table: name.to_string(),
        });
    }

    let table = Table::new(name, columns);
    let required = REQUIRED_COLUMNS
        .iter()
        .find(|(t, _)| *t == name)
        .map(|(_, cols)| *cols)
        .unwrap_or_default();

    for column in required {
        if !table.has_column(column) {
            return Err(SchemaError::MissingColumn {
                table: name.to_string(),
                column: column.to_string(),
            });
        }
    }

    Ok(table)
}
