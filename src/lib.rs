// sqlkit - builders and helpers for MySQL DDL/DML statements
//
// Statements are assembled by string interpolation: identifiers are wrapped
// in backticks and values in single quotes, with no escaping and no
// parameter binding. Never feed untrusted input through this crate.

// Clippy configuration - allow non-critical warnings
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::multiple_crate_versions)]

// Core types (column specs, data types, errors, read-side rows)
pub mod core;

// Short alias used across the crate
pub mod types {
    pub use crate::core::*;
}

// Statement builders (CREATE TABLE, INSERT, UPDATE, keys, schema changes)
pub mod builder;

// Executor seam and read-side helpers
pub mod executor;

// Column definition parser
pub mod parser;

// File upload helper
pub mod upload;

// CLI settings
pub mod config;

// Command-line front end
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::{ColumnSpec, DataType, Position, Row, SqlError, Value};
pub use builder::{KeyKind, KeySet, RowInsert, RowUpdate, TableBuilder};
pub use executor::{Executor, QuerySource, RecordingExecutor, WriterExecutor};
pub use parser::{parse_column_definition, parse_position};
pub use upload::{IncomingFile, UploadError, Uploader};
