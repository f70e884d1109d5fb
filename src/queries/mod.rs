//! Report queries over the orders → analyses → groups join.
//!
//! Each report module builds a `SelectQuery` from the checked schema, runs it
//! through a `DatabaseBackend`, and extracts typed rows.

pub mod builder;
pub mod earnings;
pub mod orders;

use crate::db::{DbError, Schema, SchemaError, Value};
use builder::{Expr, SelectQuery};

/// `orders JOIN analyses ON orders.analise_id = analyses.id
///         JOIN groups ON analyses.group_id = groups.id`
///
/// Every report starts from this join; projections and grouping are added by
/// the caller.
pub fn order_join(schema: &Schema) -> Result<SelectQuery, SchemaError> {
    let o = &schema.orders;
    let a = &schema.analyses;
    let g = &schema.groups;

    Ok(SelectQuery::new()
        .from(o)
        .join(a, Expr::col(o.col("analise_id")?).equals(Expr::col(a.col("id")?)))
        .join(g, Expr::col(a.col("group_id")?).equals(Expr::col(g.col("id")?))))
}

/// Pull one typed field out of a result row.
///
/// A NULL or mistyped cell is an error rather than a skipped row, so report
/// totals never silently drop orders.
pub(crate) fn field<T>(
    row: &[Value],
    idx: usize,
    column: &str,
    extract: impl Fn(&Value) -> Option<T>,
) -> Result<T, DbError> {
    let value = row.get(idx);
    value.and_then(&extract).ok_or_else(|| DbError::Decode {
        column: column.to_string(),
        type_name: value.map_or("missing", Value::type_name).to_string(),
        message: "unexpected value in report row".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::extract_i64;
    use rstest::rstest;

    #[rstest]
    fn test_order_join_sql() {
        let compiled = order_join(&Schema::expected())
            .unwrap()
            .column(Expr::col(Schema::expected().orders.col("id").unwrap()))
            .compile();
        assert_eq!(
            compiled.sql,
            "SELECT \"orders\".\"id\"\n\
             FROM \"orders\"\n\
             JOIN \"analyses\" ON \"orders\".\"analise_id\" = \"analyses\".\"id\"\n\
             JOIN \"groups\" ON \"analyses\".\"group_id\" = \"groups\".\"id\""
        );
    }

    #[rstest]
    fn test_field_extracts_value() {
        let row = vec![Value::Int(5)];
        assert_eq!(field(&row, 0, "id", extract_i64).unwrap(), 5);
    }

    #[rstest]
    fn test_field_null_is_error() {
        let row = vec![Value::Null];
        let err = field(&row, 0, "id", extract_i64).unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }

    #[rstest]
    fn test_field_short_row_is_error() {
        let row: Vec<Value> = vec![];
        assert!(field(&row, 3, "price", extract_i64).is_err());
    }
}
