//! Per-order report rows.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::builder::{Expr, SelectQuery};
use super::{field, order_join};
use crate::db::{
    extract_decimal, extract_i64, extract_string, extract_timestamp, DatabaseBackend, DbError,
    QueryResult, Schema, SchemaError,
};

/// One order joined with its analysis and group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: i64,
    /// `orders.date + orders.time`
    pub ordered_at: NaiveDateTime,
    pub group: String,
    pub analysis: String,
    pub price: Decimal,
}

/// Select (id, date + time, group name, analysis name, price) over the join.
pub fn orders_query(schema: &Schema) -> Result<SelectQuery, SchemaError> {
    let o = &schema.orders;
    let a = &schema.analyses;
    let g = &schema.groups;

    Ok(order_join(schema)?
        .column(Expr::col(o.col("id")?))
        // `date + timetz` is a timestamptz; casting keeps the session's wall clock
        .column_as(
            Expr::col(o.col("date")?)
                .add(Expr::col(o.col("time")?))
                .cast("timestamp"),
            "ordered_at",
        )
        .column_as(Expr::col(g.col("name")?), "group_name")
        .column_as(Expr::col(a.col("name")?), "analysis_name")
        .column(Expr::col(a.col("price")?))
        .order_by(Expr::col(o.col("id")?)))
}

/// Same projection restricted to a single order id.
pub fn order_by_id_query(schema: &Schema, order_id: i64) -> Result<SelectQuery, SchemaError> {
    let id = Expr::col(schema.orders.col("id")?);
    Ok(orders_query(schema)?.filter(id.equals(Expr::int(order_id))))
}

/// Fetch every order.
pub fn find_orders(db: &mut dyn DatabaseBackend) -> Result<Vec<OrderRow>, DbError> {
    let query = orders_query(db.schema())?;
    let result = db.execute_query(&query.into())?;
    extract_orders(&result)
}

/// Fetch a single order; empty when the id does not exist.
pub fn find_order_by_id(
    db: &mut dyn DatabaseBackend,
    order_id: i64,
) -> Result<Vec<OrderRow>, DbError> {
    let query = order_by_id_query(db.schema(), order_id)?;
    let result = db.execute_query(&query.into())?;
    extract_orders(&result)
}

fn extract_orders(result: &QueryResult) -> Result<Vec<OrderRow>, DbError> {
    result
        .rows
        .iter()
        .map(|row| {
            // Order matches query: id, ordered_at, group_name, analysis_name, price
            Ok(OrderRow {
                id: field(row, 0, "id", extract_i64)?,
                ordered_at: field(row, 1, "ordered_at", extract_timestamp)?,
                group: field(row, 2, "group_name", extract_string)?,
                analysis: field(row, 3, "analysis_name", extract_string)?,
                price: field(row, 4, "price", extract_decimal)?,
            })
        })
        .collect()
}
