//! Revenue aggregates: total price per analysis group and per month.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::builder::{Expr, SelectQuery};
use super::{field, order_join};
use crate::db::{
    extract_date, extract_decimal, extract_string, DatabaseBackend, DbError, Schema, SchemaError,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEarning {
    pub group: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthEarning {
    /// First day of the month, as truncated by the database.
    pub month: NaiveDate,
    pub total: Decimal,
}

/// Select (group name, sum(price)) grouped by group name.
pub fn earnings_by_group_query(schema: &Schema) -> Result<SelectQuery, SchemaError> {
    let group_name = Expr::col(schema.groups.col("name")?);
    let price = Expr::col(schema.analyses.col("price")?);

    Ok(order_join(schema)?
        .column_as(group_name.clone(), "group_name")
        .column_as(Expr::sum(price), "total")
        .group_by(group_name.clone())
        .order_by(group_name))
}

/// Select (month, sum(price)) grouped by `date_trunc('month', orders.date)`.
///
/// The truncated value is cast to `date` so the label does not depend on the
/// session time zone.
pub fn earnings_by_month_query(schema: &Schema) -> Result<SelectQuery, SchemaError> {
    let month = Expr::date_trunc("month", Expr::col(schema.orders.col("date")?)).cast("date");
    let price = Expr::col(schema.analyses.col("price")?);

    Ok(order_join(schema)?
        .column_as(month.clone(), "month")
        .column_as(Expr::sum(price), "total")
        .group_by(month.clone())
        .order_by(month))
}

pub fn find_earnings_by_group(db: &mut dyn DatabaseBackend) -> Result<Vec<GroupEarning>, DbError> {
    let query = earnings_by_group_query(db.schema())?;
    let result = db.execute_query(&query.into())?;

    result
        .rows
        .iter()
        .map(|row| {
            Ok(GroupEarning {
                group: field(row, 0, "group_name", extract_string)?,
                total: field(row, 1, "total", extract_decimal)?,
            })
        })
        .collect()
}

pub fn find_earnings_by_month(db: &mut dyn DatabaseBackend) -> Result<Vec<MonthEarning>, DbError> {
    let query = earnings_by_month_query(db.schema())?;
    let result = db.execute_query(&query.into())?;

    result
        .rows
        .iter()
        .map(|row| {
            Ok(MonthEarning {
                month: field(row, 0, "month", extract_date)?,
                total: field(row, 1, "total", extract_decimal)?,
            })
        })
        .collect()
}
