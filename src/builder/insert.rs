//! INSERT builder
//!
//! Two modes: paired (`add`) and positional (`set_values`, which clears the
//! column names so the table's declared order applies). Name and value
//! counts are not compared; the engine reports a mismatch.

use crate::executor::{self, Executor};
use crate::types::SqlError;
use super::common::{ident_list, quote_ident, value_list};

#[derive(Debug, Clone, Default)]
pub struct RowInsert {
    table_name: String,
    column_names: Vec<String>,
    column_values: Vec<String>,
}

impl RowInsert {
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

    /// Replace every value and drop the column names.
    pub fn set_values<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_values = values.into_iter().map(Into::into).collect();
        self.column_names.clear();
        self
    }

    #[must_use]
    pub fn is_positional(&self) -> bool {
        self.column_names.is_empty()
    }

    pub fn build(&self) -> Result<String, SqlError> {
        if self.table_name.trim().is_empty() {
            return Err(SqlError::MissingTableName);
        }

        let mut sql = format!("INSERT INTO {}", quote_ident(&self.table_name));

        if !self.column_names.is_empty() {
            sql.push_str(&format!(" ({})", ident_list(&self.column_names)));
        }

        // No values renders no VALUES clause at all
        if !self.column_values.is_empty() {
            sql.push_str(&format!(" VALUES ({})", value_list(&self.column_values)));
        }

        Ok(sql)
    }

    pub fn execute<E>(&self, executor: &mut E) -> Result<(), SqlError>
    where
        E: Executor + ?Sized,
    {
        let sql = self.build().inspect_err(executor::rejected)?;
        executor::run(executor, sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::RecordingExecutor;

    #[test]
    fn test_paired_insert() {
        let mut insert = RowInsert::new("users");
        insert.add("email", "a@b.com").add("name", "Ann");
        assert_eq!(
            insert.build().unwrap(),
            "INSERT INTO `users` (`email`, `name`) VALUES ('a@b.com', 'Ann')"
        );
        assert!(!insert.is_positional());
    }

    #[test]
    fn test_positional_insert_clears_names() {
        let mut insert = RowInsert::new("users");
        insert.add("email", "a@b.com").set_values(["1", "a@b.com", "Ann"]);
        assert!(insert.is_positional());
        assert_eq!(
            insert.build().unwrap(),
            "INSERT INTO `users` VALUES ('1', 'a@b.com', 'Ann')"
        );
    }

    #[test]
    fn test_mismatched_counts_pass_through() {
        let mut insert = RowInsert::new("users");
        insert.set_values(["1", "2"]);
        insert.add("email", "x");
        assert_eq!(
            insert.build().unwrap(),
            "INSERT INTO `users` (`email`) VALUES ('1', '2', 'x')"
        );
    }

    #[test]
    fn test_no_values() {
        assert_eq!(RowInsert::new("users").build().unwrap(), "INSERT INTO `users`");
    }

    #[test]
    fn test_blank_table_rejected() {
        let mut exec = RecordingExecutor::new();
        let mut insert = RowInsert::new(" ");
        insert.add("email", "x");
        assert_eq!(insert.execute(&mut exec).unwrap_err(), SqlError::MissingTableName);
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn test_execute_delegates() {
        let mut exec = RecordingExecutor::new();
        let mut insert = RowInsert::default();
        insert.set_table_name("logs").add("msg", "hi");
        insert.execute(&mut exec).unwrap();
        assert_eq!(exec.last_statement(), Some("INSERT INTO `logs` (`msg`) VALUES ('hi')"));
    }
}
