//! Primary and unique key managers
//!
//! The primary variant always drops the existing primary key first. Against
//! a table that has none, MySQL rejects the statement; callers that can't
//! guarantee a key exists should check beforehand.

use crate::executor::{self, Executor};
use crate::types::SqlError;
use super::common::{ident_list, quote_ident};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Primary,
    Unique,
}

#[derive(Debug, Clone)]
pub struct KeySet {
    kind: KeyKind,
    table_name: String,
    keys: Vec<String>,
}

impl KeySet {
    pub fn new(kind: KeyKind, table_name: impl Into<String>) -> Self {
        Self {
            kind,
            table_name: table_name.into(),
            keys: Vec::new(),
        }
    }

    pub fn primary(table_name: impl Into<String>) -> Self {
        Self::new(KeyKind::Primary, table_name)
    }

    pub fn unique(table_name: impl Into<String>) -> Self {
        Self::new(KeyKind::Unique, table_name)
    }

    #[must_use]
    pub const fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn set_table_name(&mut self, table_name: impl Into<String>) -> &mut Self {
        self.table_name = table_name.into();
        self
    }

    /// Duplicates are kept; order of insertion is the order rendered.
    pub fn add_key(&mut self, column: impl Into<String>) -> &mut Self {
        self.keys.push(column.into());
        self
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn build(&self) -> Result<String, SqlError> {
        if self.table_name.trim().is_empty() {
            return Err(SqlError::MissingTableName);
        }
        if self.keys.is_empty() {
            return Err(SqlError::NoKeys { table: self.table_name.clone() });
        }

        let table = quote_ident(&self.table_name);
        let keys = ident_list(&self.keys);
        Ok(match self.kind {
            KeyKind::Primary => {
                format!("ALTER TABLE {table} DROP PRIMARY KEY, ADD PRIMARY KEY({keys})")
            }
            KeyKind::Unique => format!("ALTER TABLE {table} ADD UNIQUE({keys})"),
        })
    }

    pub fn execute<E>(&self, executor: &mut E) -> Result<(), SqlError>
    where
        E: Executor + ?Sized,
    {
        let sql = self.build().inspect_err(executor::rejected)?;
        executor::run(executor, sql)
    }
}
