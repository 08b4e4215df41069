//! Statement builders
//!
//! - common: identifier/value quoting and column clause rendering
//! - table: CREATE TABLE
//! - insert: INSERT INTO
//! - update: UPDATE ... SET
//! - keys: primary/unique key management
//! - schema: ADD/CHANGE/DROP column, DROP TABLE, TRUNCATE
//!
//! Every builder renders with `build()` (pure) and runs with `execute()`,
//! which is the only place the executor is touched.

pub mod common;
pub mod table;
pub mod insert;
pub mod update;
pub mod keys;
pub mod schema;

pub use table::TableBuilder;
pub use insert::RowInsert;
pub use update::RowUpdate;
pub use keys::{KeyKind, KeySet};
pub use schema::{
    add_column, add_column_sql, alter_column, alter_column_sql, drop_column, drop_column_sql,
    drop_table, drop_table_sql, truncate_table, truncate_table_sql,
};
