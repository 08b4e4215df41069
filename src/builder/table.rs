//! CREATE TABLE builder

use crate::executor::{self, Executor};
use crate::types::{ColumnSpec, SqlError};
use super::common::{quote_ident, render_column};

#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    table_name: String,
    clauses: Vec<String>,
}

impl TableBuilder {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            clauses: Vec::new(),
        }
    }

    pub fn set_table_name(&mut self, table_name: impl Into<String>) -> &mut Self {
        self.table_name = table_name.into();
        self
    }

    /// Render `spec` and append it as the next column.
    pub fn add_column(&mut self, spec: &ColumnSpec) -> &mut Self {
        self.clauses.push(render_column(spec));
        self
    }

    /// Append `sql` verbatim, for constraints the structured API can't
    /// express (`INDEX (...)`, `FOREIGN KEY ...`).
    pub fn add_raw_column(&mut self, sql: impl Into<String>) -> &mut Self {
        self.clauses.push(sql.into());
        self
    }

    #[must_use]
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn build(&self) -> Result<String, SqlError> {
        let table = self.table_name.trim();
        if table.is_empty() {
            return Err(SqlError::MissingTableName);
        }
        if self.clauses.is_empty() {
            return Err(SqlError::NoColumns { table: table.to_string() });
        }

        Ok(format!(
            "CREATE TABLE {} ({})",
            quote_ident(table),
            self.clauses.join(", ")
        ))
    }

    pub fn execute<E>(&self, executor: &mut E) -> Result<(), SqlError>
    where
        E: Executor + ?Sized,
    {
        let sql = self.build().inspect_err(executor::rejected)?;
        executor::run(executor, sql)
    }
}
