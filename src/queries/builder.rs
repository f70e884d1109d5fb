//! A small structured `SELECT` builder.
//!
//! Queries are assembled from typed column references handed out by the
//! schema check, then compiled to PostgreSQL text with positional `$n`
//! parameters. User input never reaches the SQL text directly.
//!
//! # Example
//!
//! ```ignore
//! let o = &schema.orders;
//! let query = SelectQuery::new()
//!     .column(Expr::col(o.col("id")?))
//!     .from(o)
//!     .filter(Expr::col(o.col("id")?).equals(Expr::int(7)));
//! let compiled = query.compile();
//! ```

use postgres::types::ToSql;

use crate::db::{escape_literal, quote_ident, ColumnRef, Table};

/// A bound query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(i64),
}

impl Param {
    /// The explicit cast pins the parameter type, so an `i64` can be compared
    /// against an `integer` column without a serialization mismatch.
    fn cast(&self) -> &'static str {
        match self {
            Param::Int(_) => "bigint",
        }
    }

    fn as_sql(&self) -> &(dyn ToSql + Sync) {
        match self {
            Param::Int(i) => i,
        }
    }
}

/// SQL expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnRef),
    Param(Param),
    Add(Box<Expr>, Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    Sum(Box<Expr>),
    DateTrunc(String, Box<Expr>),
    Cast(Box<Expr>, String),
}

impl Expr {
    pub fn col(column: ColumnRef) -> Self {
        Expr::Column(column)
    }

    pub fn int(value: i64) -> Self {
        Expr::Param(Param::Int(value))
    }


    pub fn sum(expr: Expr) -> Self {
        Expr::Sum(Box::new(expr))
    }

    /// `date_trunc('<field>', expr)`, evaluated by the database.
    pub fn date_trunc(field: &str, expr: Expr) -> Self {
        Expr::DateTrunc(field.to_string(), Box::new(expr))
    }

    pub fn add(self, other: Expr) -> Self {
        Expr::Add(Box::new(self), Box::new(other))
    }

    pub fn equals(self, other: Expr) -> Self {
        Expr::Eq(Box::new(self), Box::new(other))
    }

    pub fn cast(self, sql_type: &str) -> Self {
        Expr::Cast(Box::new(self), sql_type.to_string())
    }

    fn render(&self, params: &mut Vec<Param>) -> String {
        match self {
            Expr::Column(c) => c.to_sql(),
            Expr::Param(p) => {
                params.push(p.clone());
                format!("${}::{}", params.len(), p.cast())
            }
            Expr::Add(l, r) => format!("({} + {})", l.render(params), r.render(params)),
            Expr::Eq(l, r) => format!("{} = {}", l.render(params), r.render(params)),
            Expr::Sum(e) => format!("sum({})", e.render(params)),
            Expr::DateTrunc(field, e) => {
                format!("date_trunc({}, {})", escape_literal(field), e.render(params))
            }
            Expr::Cast(e, ty) => format!("CAST({} AS {})", e.render(params), ty),
        }
    }
}

/// One projected expression, optionally aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct Join {
    table: String,
    on: Expr,
}

/// Structured `SELECT ... FROM ... JOIN ... WHERE ... GROUP BY ... ORDER BY`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    items: Vec<SelectItem>,
    from: Option<String>,
    joins: Vec<Join>,
    filter: Option<Expr>,
    group_by: Vec<Expr>,
    order_by: Vec<Expr>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, expr: Expr) -> Self {
        self.items.push(SelectItem { expr, alias: None });
        self
    }

    pub fn column_as(mut self, expr: Expr, alias: &str) -> Self {
        self.items.push(SelectItem {
            expr,
            alias: Some(alias.to_string()),
        });
        self
    }

    pub fn from(mut self, table: &Table) -> Self {
        self.from = Some(table.to_sql());
        self
    }

    /// Inner join `table` on the given condition.
    pub fn join(mut self, table: &Table, on: Expr) -> Self {
        self.joins.push(Join {
            table: table.to_sql(),
            on,
        });
        self
    }

    /// Set the `WHERE` condition, replacing any previous one.
    pub fn filter(mut self, condition: Expr) -> Self {
        self.filter = Some(condition);
        self
    }

    pub fn group_by(mut self, expr: Expr) -> Self {
        self.group_by.push(expr);
        self
    }

    pub fn order_by(mut self, expr: Expr) -> Self {
        self.order_by.push(expr);
        self
    }

    /// Compile to SQL text and its parameter list.
    pub fn compile(&self) -> CompiledQuery {
        let mut params = Vec::new();
        let mut lines = Vec::new();

        let items: Vec<String> = self
            .items
            .iter()
            .map(|item| {
                let expr = item.expr.render(&mut params);
                match &item.alias {
                    Some(alias) => format!("{} AS {}", expr, quote_ident(alias)),
                    None => expr,
                }
            })
            .collect();
        lines.push(format!("SELECT {}", items.join(", ")));

        if let Some(from) = &self.from {
            lines.push(format!("FROM {}", from));
        }

        for join in &self.joins {
            lines.push(format!("JOIN {} ON {}", join.table, join.on.render(&mut params)));
        }

        if let Some(filter) = &self.filter {
            lines.push(format!("WHERE {}", filter.render(&mut params)));
        }

        if !self.group_by.is_empty() {
            let exprs: Vec<String> = self.group_by.iter().map(|e| e.render(&mut params)).collect();
            lines.push(format!("GROUP BY {}", exprs.join(", ")));
        }

        if !self.order_by.is_empty() {
            let exprs: Vec<String> = self.order_by.iter().map(|e| e.render(&mut params)).collect();
            lines.push(format!("ORDER BY {}", exprs.join(", ")));
        }

        CompiledQuery {
            sql: lines.join("\n"),
            params,
        }
    }
}

/// A compiled query ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Param>,
}

impl CompiledQuery {
    /// Parameters in the form `postgres::Client::query` expects.
    pub fn param_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(Param::as_sql).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Schema;
    use rstest::{fixture, rstest};

    #[fixture]
    fn schema() -> Schema {
        Schema::expected()
    }

    #[rstest]
    fn test_compile_plain_select(schema: Schema) {
        let g = &schema.groups;
        let compiled = SelectQuery::new()
            .column(Expr::col(g.col("id").unwrap()))
            .column(Expr::col(g.col("name").unwrap()))
            .from(g)
            .compile();
        assert_eq!(
            compiled.sql,
            "SELECT \"groups\".\"id\", \"groups\".\"name\"\nFROM \"groups\""
        );
        assert!(compiled.params.is_empty());
    }

    #[rstest]
    fn test_compile_filter_binds_parameter(schema: Schema) {
        let o = &schema.orders;
        let compiled = SelectQuery::new()
            .column(Expr::col(o.col("id").unwrap()))
            .from(o)
            .filter(Expr::col(o.col("id").unwrap()).equals(Expr::int(42)))
            .compile();
        assert_eq!(
            compiled.sql,
            "SELECT \"orders\".\"id\"\nFROM \"orders\"\nWHERE \"orders\".\"id\" = $1::bigint"
        );
        assert_eq!(compiled.params, vec![Param::Int(42)]);
        assert_eq!(compiled.param_refs().len(), 1);
    }

    #[rstest]
    fn test_parameters_numbered_in_order() {
        let mut params = Vec::new();
        let sql = Expr::int(7).equals(Expr::int(1)).render(&mut params);
        assert_eq!(sql, "$1::bigint = $2::bigint");
        assert_eq!(params, vec![Param::Int(7), Param::Int(1)]);
    }

    #[rstest]
    fn test_render_aggregate_and_alias(schema: Schema) {
        let o = &schema.orders;
        let month = Expr::date_trunc("month", Expr::col(o.col("date").unwrap())).cast("date");
        let compiled = SelectQuery::new()
            .column_as(month.clone(), "month")
            .from(o)
            .group_by(month)
            .compile();
        assert_eq!(
            compiled.sql,
            "SELECT CAST(date_trunc('month', \"orders\".\"date\") AS date) AS \"month\"\n\
             FROM \"orders\"\n\
             GROUP BY CAST(date_trunc('month', \"orders\".\"date\") AS date)"
        );
    }

    #[rstest]
    fn test_render_addition(schema: Schema) {
        let o = &schema.orders;
        let mut params = Vec::new();
        let sql = Expr::col(o.col("date").unwrap())
            .add(Expr::col(o.col("time").unwrap()))
            .render(&mut params);
        assert_eq!(sql, "(\"orders\".\"date\" + \"orders\".\"time\")");
    }

    #[rstest]
    fn test_filter_replaces_previous(schema: Schema) {
        let o = &schema.orders;
        let id = || Expr::col(o.col("id").unwrap());
        let compiled = SelectQuery::new()
            .column(id())
            .from(o)
            .filter(id().equals(Expr::int(1)))
            .filter(id().equals(Expr::int(2)))
            .compile();
        assert_eq!(compiled.params, vec![Param::Int(2)]);
    }
}
