//! UPDATE builder
//!
//! The condition is appended raw and must carry its own `WHERE`. An empty
//! condition updates every row.

use crate::executor::{self, Executor};
use crate::types::SqlError;
use super::common::{quote_ident, quote_value};

#[derive(Debug, Clone, Default)]
pub struct RowUpdate {
    table_name: String,
    column_names: Vec<String>,
    column_values: Vec<String>,
    condition: String,
}

impl RowUpdate {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    pub fn set_table_name(&mut self, table_name: impl Into<String>) -> &mut Self {
        self.table_name = table_name.into();
        self
    }

    pub fn add(&mut self, column: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.column_names.push(column.into());
        self.column_values.push(value.into());
        self
    }

    /// Replace both lists at once. The lengths are checked by `build`.
    pub fn set_columns<N, V>(&mut self, names: N, values: V) -> &mut Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        self.column_names = names.into_iter().map(Into::into).collect();
        self.column_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_condition(&mut self, condition: &str) -> &mut Self {
        self.condition = condition.trim().to_string();
        self
    }

    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn build(&self) -> Result<String, SqlError> {
        if self.table_name.trim().is_empty() {
            return Err(SqlError::MissingTableName);
        }
        if self.column_names.is_empty() || self.column_values.is_empty() {
            return Err(SqlError::NoColumnValues);
        }
        if self.column_names.len() != self.column_values.len() {
            return Err(SqlError::ColumnCountMismatch {
                names: self.column_names.len(),
                values: self.column_values.len(),
            });
        }

        let assignments = self
            .column_names
            .iter()
            .zip(&self.column_values)
            .map(|(name, value)| format!("{}={}", quote_ident(name), quote_value(value)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("UPDATE {} SET {assignments}", quote_ident(&self.table_name));
        if !self.condition.is_empty() {
            sql.push(' ');
            sql.push_str(&self.condition);
        }

        Ok(sql)
    }

    /// Execute the update. A non-blank `condition` replaces the stored one,
    /// and stays in place for later calls.
    pub fn execute<E>(&mut self, executor: &mut E, condition: Option<&str>) -> Result<(), SqlError>
    where
        E: Executor + ?Sized,
    {
        if let Some(condition) = condition.filter(|c| !c.trim().is_empty()) {
            self.set_condition(condition);
        }

        let sql = self.build().inspect_err(executor::rejected)?;
        executor::run(executor, sql)
    }
}
