//! Cell values decoded from PostgreSQL rows, plus extraction helpers.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use postgres::types::{FromSql, Type};
use postgres::Row;
use rust_decimal::Decimal;
use serde::Serialize;

use super::DbError;

/// A single result cell.
///
/// Serializes untagged, so JSON output carries plain numbers, strings and
/// `null` rather than variant names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Timestamp(_) => "timestamp",
            Value::TimestampTz(_) => "timestamptz",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d),
            Value::Time(t) => write!(f, "{}", t),
            Value::Timestamp(ts) => write!(f, "{}", ts),
            Value::TimestampTz(ts) => write!(f, "{}", ts),
        }
    }
}

/// Decode every column of a row into `Value`s.
pub(crate) fn decode_row(row: &Row) -> Result<Vec<Value>, DbError> {
    (0..row.len()).map(|idx| decode_cell(row, idx)).collect()
}

fn decode_cell(row: &Row, idx: usize) -> Result<Value, DbError> {
    let ty = row.columns()[idx].type_();

    if *ty == Type::BOOL {
        get(row, idx, Value::Bool)
    } else if *ty == Type::INT2 {
        get(row, idx, |v: i16| Value::Int(i64::from(v)))
    } else if *ty == Type::INT4 {
        get(row, idx, |v: i32| Value::Int(i64::from(v)))
    } else if *ty == Type::INT8 {
        get(row, idx, Value::Int)
    } else if *ty == Type::FLOAT4 {
        get(row, idx, |v: f32| Value::Float(f64::from(v)))
    } else if *ty == Type::FLOAT8 {
        get(row, idx, Value::Float)
    } else if *ty == Type::NUMERIC {
        get(row, idx, Value::Decimal)
    } else if *ty == Type::DATE {
        get(row, idx, Value::Date)
    } else if *ty == Type::TIME {
        get(row, idx, Value::Time)
    } else if *ty == Type::TIMESTAMP {
        get(row, idx, Value::Timestamp)
    } else if *ty == Type::TIMESTAMPTZ {
        get(row, idx, Value::TimestampTz)
    } else if <String as FromSql>::accepts(ty) {
        get(row, idx, Value::Text)
    } else {
        Err(DbError::Decode {
            column: row.columns()[idx].name().to_string(),
            type_name: ty.name().to_string(),
            message: "unsupported column type".to_string(),
        })
    }
}

fn get<'a, T, F>(row: &'a Row, idx: usize, wrap: F) -> Result<Value, DbError>
where
    T: FromSql<'a>,
    F: FnOnce(T) -> Value,
{
    let column = &row.columns()[idx];
    row.try_get::<_, Option<T>>(idx)
        .map(|cell| cell.map_or(Value::Null, wrap))
        .map_err(|e| DbError::Decode {
            column: column.name().to_string(),
            type_name: column.type_().name().to_string(),
            message: e.to_string(),
        })
}

// Value extraction helpers

/// Extract a String from a text cell, returning None otherwise
pub fn extract_string(value: &Value) -> Option<String> {
    match value {
        Value::Text(s) => Some(s.clone()),
        _ => None,
    }
}

/// Extract an i64 from an integer cell
pub fn extract_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        _ => None,
    }
}

/// Extract a Decimal from any numeric cell
pub fn extract_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Decimal(d) => Some(*d),
        Value::Int(i) => Some(Decimal::from(*i)),
        Value::Float(f) => Decimal::try_from(*f).ok(),
        _ => None,
    }
}

/// Extract a calendar date; timestamps are cut to their date part
pub fn extract_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Date(d) => Some(*d),
        Value::Timestamp(ts) => Some(ts.date()),
        Value::TimestampTz(ts) => Some(ts.date_naive()),
        _ => None,
    }
}

/// Extract a timestamp; a bare date becomes midnight of that day.
///
/// `timestamptz` arrives as UTC. Queries that need the session's wall-clock
/// time cast to `timestamp` on the server.
pub fn extract_timestamp(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Timestamp(ts) => Some(*ts),
        Value::TimestampTz(ts) => Some(ts.naive_utc()),
        Value::Date(d) => Some(d.and_time(NaiveTime::MIN)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    fn test_extract_string_from_text() {
        let value = Value::Text("Hematology".into());
        assert_eq!(extract_string(&value), Some("Hematology".to_string()));
    }

    #[rstest]
    fn test_extract_string_from_non_text() {
        assert_eq!(extract_string(&Value::Int(42)), None);
    }

    #[rstest]
    fn test_extract_i64_from_null() {
        assert_eq!(extract_i64(&Value::Null), None);
    }

    #[rstest]
    #[case(Value::Int(20), Decimal::from(20))]
    #[case(Value::Decimal(Decimal::new(2050, 2)), Decimal::new(2050, 2))]
    #[case(Value::Float(1.5), Decimal::new(15, 1))]
    fn test_extract_decimal(#[case] value: Value, #[case] expected: Decimal) {
        assert_eq!(extract_decimal(&value), Some(expected));
    }

    #[rstest]
    fn test_extract_decimal_from_text() {
        assert_eq!(extract_decimal(&Value::Text("20".into())), None);
    }

    #[rstest]
    fn test_extract_date_from_timestamp() {
        let ts = date(2024, 1, 10).and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(extract_date(&Value::Timestamp(ts)), Some(date(2024, 1, 10)));
    }

    #[rstest]
    fn test_extract_timestamp_from_date() {
        let ts = extract_timestamp(&Value::Date(date(2024, 1, 1))).unwrap();
        assert_eq!(ts, date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap());
    }

    #[rstest]
    fn test_display_values() {
        let ts = date(2024, 1, 10).and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Date(date(2024, 1, 1)).to_string(), "2024-01-01");
        assert_eq!(Value::Timestamp(ts).to_string(), "2024-01-10 08:30:00");
        assert_eq!(Value::Decimal(Decimal::new(2000, 2)).to_string(), "20.00");
    }

    #[rstest]
    fn test_serialize_untagged() {
        let row = vec![Value::Int(1), Value::Text("CBC".into()), Value::Null];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"[1,"CBC",null]"#);
    }
}
