//! Shared test utilities for query, command and loop tests.

use std::collections::VecDeque;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::db::{DatabaseBackend, DbError, Query, QueryResult, Schema, Value};
use crate::repl::{LineReader, ReadOutcome};

/// Backend returning queued results in order and recording the SQL it saw.
///
/// Once the queue is drained every query returns an empty result.
pub struct MockBackend {
    schema: Schema,
    responses: VecDeque<Result<QueryResult, String>>,
    executed: Vec<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            schema: Schema::expected(),
            responses: VecDeque::new(),
            executed: Vec::new(),
        }
    }

    pub fn with_result(mut self, result: QueryResult) -> Self {
        self.responses.push_back(Ok(result));
        self
    }

    /// Queue a database failure with the given server message.
    pub fn with_error(mut self, message: &str) -> Self {
        self.responses.push_back(Err(message.to_string()));
        self
    }

    /// SQL text of every executed query, oldest first.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }
}

impl DatabaseBackend for MockBackend {
    fn execute_query(&mut self, query: &Query) -> Result<QueryResult, DbError> {
        self.executed.push(query.compile().sql);
        match self.responses.pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(DbError::QueryFailed { message }),
            None => Ok(QueryResult::default()),
        }
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn backend_name(&self) -> &'static str {
        "Mock"
    }
}

/// Line reader fed from a fixed script; reports end of input when drained.
pub struct ScriptedReader {
    lines: VecDeque<ReadOutcome>,
    pub prompts: usize,
}

impl ScriptedReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| ReadOutcome::Line(l.to_string())).collect(),
            prompts: 0,
        }
    }

    /// Insert a Ctrl-C at the current end of the script.
    pub fn interrupt(mut self) -> Self {
        self.lines.push_back(ReadOutcome::Interrupted);
        self
    }

    pub fn then(mut self, line: &str) -> Self {
        self.lines.push_back(ReadOutcome::Line(line.to_string()));
        self
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> std::io::Result<ReadOutcome> {
        self.prompts += 1;
        Ok(self.lines.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

/// The single joined row from the reference scenario:
/// order 1 on 2024-01-10 08:30, analysis "CBC" (20) in group "Hematology".
pub fn cbc_order_row() -> Vec<Value> {
    let ordered_at = NaiveDate::from_ymd_opt(2024, 1, 10)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("valid timestamp");
    vec![
        Value::Int(1),
        Value::Timestamp(ordered_at),
        Value::Text("Hematology".to_string()),
        Value::Text("CBC".to_string()),
        Value::Decimal(Decimal::from(20)),
    ]
}
