//! In-memory executor that remembers every statement it was handed.
//!
//! Write statements are answered with a fixed verdict; read statements
//! are answered from a queue of scripted result sets.

use std::collections::VecDeque;
use crate::types::{Row, SqlError};
use super::{Executor, QuerySource};

#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statements: Vec<String>,
    queries: Vec<String>,
    results: VecDeque<Result<Vec<Row>, String>>,
    fail: bool,
}

impl RecordingExecutor {
    /// Executor that accepts every statement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that rejects every statement, as a broken connection would.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Queue the rows returned by the next read.
    pub fn push_rows(&mut self, rows: Vec<Row>) -> &mut Self {
        self.results.push_back(Ok(rows));
        self
    }

    /// Queue a failing read.
    pub fn push_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.results.push_back(Err(message.into()));
        self
    }

    /// Statements passed to `execute`, in order.
    #[must_use]
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Statements passed to `query`, in order.
    #[must_use]
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn last_statement(&self) -> Option<&str> {
        self.statements.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.statements.clear();
        self.queries.clear();
        self.results.clear();
    }
}

impl Executor for RecordingExecutor {
    fn execute(&mut self, sql: &str) -> bool {
        self.statements.push(sql.to_string());
        !self.fail
    }
}

impl QuerySource for RecordingExecutor {
    fn query(&mut self, sql: &str) -> Result<Vec<Row>, SqlError> {
        self.queries.push(sql.to_string());
        match self.results.pop_front() {
            Some(Ok(rows)) => Ok(rows),
            Some(Err(message)) => Err(SqlError::QueryFailed(message)),
            None => Ok(Vec::new()),
        }
    }
}
