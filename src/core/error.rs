use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    #[error("Table name is required")]
    MissingTableName,
    #[error("Column name is required")]
    MissingColumnName,
    #[error("Data type is required")]
    MissingDataType,
    #[error("No columns defined for table '{table}'")]
    NoColumns { table: String },
    #[error("No column values given")]
    NoColumnValues,
    #[error("Column count mismatch: {names} names, {values} values")]
    ColumnCountMismatch { names: usize, values: usize },
    #[error("No keys given for table '{table}'")]
    NoKeys { table: String },
    #[error("Statement failed: {sql}")]
    ExecutionFailed { sql: String },
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SqlError {
    /// True when the statement was rejected before reaching the executor.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingTableName
                | Self::MissingColumnName
                | Self::MissingDataType
                | Self::NoColumns { .. }
                | Self::NoColumnValues
                | Self::ColumnCountMismatch { .. }
                | Self::NoKeys { .. }
        )
    }
}
