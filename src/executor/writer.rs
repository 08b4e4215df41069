//! Executor that writes statements out instead of running them.
//!
//! Used by the CLI as a dry-run sink: every statement is printed (as SQL or
//! as a JSON record) and reported as successful unless the write fails.

use std::io::Write;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;
use super::Executor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Sql,
    Json,
}

#[derive(Debug, Serialize)]
struct StatementRecord<'a> {
    statement: &'a str,
    ok: bool,
}

pub struct WriterExecutor<W: Write> {
    out: W,
    format: OutputFormat,
    terminator: String,
    issued: Vec<String>,
}

impl<W: Write> WriterExecutor<W> {
    pub fn new(out: W, format: OutputFormat, terminator: impl Into<String>) -> Self {
        Self {
            out,
            format,
            terminator: terminator.into(),
            issued: Vec::new(),
        }
    }

    /// Statements written so far.
    pub fn issued(&self) -> &[String] {
        &self.issued
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_statement(&mut self, sql: &str) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Sql => writeln!(self.out, "{sql}{}", self.terminator)?,
            OutputFormat::Json => {
                let record = StatementRecord { statement: sql, ok: true };
                let line = serde_json::to_string(&record)?;
                writeln!(self.out, "{line}")?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Executor for WriterExecutor<W> {
    fn execute(&mut self, sql: &str) -> bool {
        match self.write_statement(sql) {
            Ok(()) => {
                self.issued.push(sql.to_string());
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to write statement");
                false
            }
        }
    }
}
