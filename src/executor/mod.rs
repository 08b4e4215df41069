//! Executor seam - where rendered SQL leaves the crate
//!
//! Structure:
//! - `Executor`: write-side collaborator, `execute(sql) -> bool`
//! - `QuerySource`: read-side collaborator returning rows
//! - recording: in-memory executor that records every statement
//! - writer: executor that prints statements to any `io::Write`
//! - read: fetch/count/exists helpers built on `QuerySource`

use crate::types::{Row, SqlError};
use tracing::{debug, warn};

pub mod recording;
pub mod writer;
pub mod read;

pub use recording::RecordingExecutor;
pub use writer::{OutputFormat, WriterExecutor};

/// Sends one statement to the database.
///
/// Implementations must return `false` when the statement could not be
/// prepared or executed and `true` otherwise. Nothing else is inspected.
pub trait Executor {
    fn execute(&mut self, sql: &str) -> bool;
}

impl<F> Executor for F
where
    F: FnMut(&str) -> bool,
{
    fn execute(&mut self, sql: &str) -> bool {
        self(sql)
    }
}

/// Runs a read statement and hands back every row it produced.
pub trait QuerySource {
    fn query(&mut self, sql: &str) -> Result<Vec<Row>, SqlError>;
}

/// Hand a rendered statement to the executor, mapping `false` to
/// `ExecutionFailed`.
pub fn run<E>(executor: &mut E, sql: String) -> Result<(), SqlError>
where
    E: Executor + ?Sized,
{
    debug!(%sql, "executing statement");
    if executor.execute(&sql) {
        Ok(())
    } else {
        warn!(%sql, "executor reported failure");
        Err(SqlError::ExecutionFailed { sql })
    }
}

/// Log a statement that never reached the executor.
pub(crate) fn rejected(err: &SqlError) {
    debug!(error = %err, "statement rejected before execution");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_executor() {
        let mut seen = Vec::new();
        let mut exec = |sql: &str| {
            seen.push(sql.to_string());
            true
        };
        assert!(run(&mut exec, "TRUNCATE `t`".to_string()).is_ok());
        assert_eq!(seen, vec!["TRUNCATE `t`".to_string()]);
    }

    #[test]
    fn test_run_maps_false_to_execution_failed() {
        let mut exec = |_: &str| false;
        let err = run(&mut exec, "DROP TABLE `t`".to_string()).unwrap_err();
        assert_eq!(err, SqlError::ExecutionFailed { sql: "DROP TABLE `t`".to_string() });
        assert!(!err.is_validation());
    }
}
