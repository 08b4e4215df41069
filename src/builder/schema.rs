//! Schema mutation functions
//!
//! ADD / CHANGE / DROP column, DROP TABLE, TRUNCATE. Each `*_sql` function
//! validates and renders; the executing variant hands the result to the
//! executor. Validation failures never reach the executor.

use crate::executor::{self, Executor};
use crate::types::{ColumnSpec, Position, SqlError};
use super::common::{quote_ident, render_column, render_position, render_type_and_flags};

fn require_table(table: &str) -> Result<(), SqlError> {
    if table.trim().is_empty() {
        return Err(SqlError::MissingTableName);
    }
    Ok(())
}

fn require_column(column: &str) -> Result<(), SqlError> {
    if column.trim().is_empty() {
        return Err(SqlError::MissingColumnName);
    }
    Ok(())
}

fn require_type(spec: &ColumnSpec) -> Result<(), SqlError> {
    if spec.data_type.is_blank() {
        return Err(SqlError::MissingDataType);
    }
    Ok(())
}

fn execute_checked<E>(executor: &mut E, sql: Result<String, SqlError>) -> Result<(), SqlError>
where
    E: Executor + ?Sized,
{
    let sql = sql.inspect_err(executor::rejected)?;
    executor::run(executor, sql)
}

/// `ALTER TABLE `t` ADD <column>[ FIRST| AFTER `c`]`
pub fn add_column_sql(table: &str, spec: &ColumnSpec, position: &Position) -> Result<String, SqlError> {
    require_table(table)?;
    require_column(&spec.name)?;
    require_type(spec)?;

    Ok(format!(
        "ALTER TABLE {} ADD {}{}",
        quote_ident(table.trim()),
        render_column(spec),
        render_position(position)
    ))
}

pub fn add_column<E>(executor: &mut E, table: &str, spec: &ColumnSpec, position: &Position) -> Result<(), SqlError>
where
    E: Executor + ?Sized,
{
    execute_checked(executor, add_column_sql(table, spec, position))
}

/// `ALTER TABLE `t` CHANGE `old` `new` <type and flags>[position]`
///
/// Only the type and flags of `spec` are used; its name is ignored. A blank
/// or missing `new_name` keeps the column's name.
pub fn alter_column_sql(
    table: &str,
    column: &str,
    new_name: Option<&str>,
    spec: &ColumnSpec,
    position: &Position,
) -> Result<String, SqlError> {
    require_table(table)?;
    require_column(column)?;
    require_type(spec)?;

    let new_name = new_name.filter(|n| !n.trim().is_empty()).unwrap_or(column);

    Ok(format!(
        "ALTER TABLE {} CHANGE {} {} {}{}",
        quote_ident(table),
        quote_ident(column),
        quote_ident(new_name),
        render_type_and_flags(spec),
        render_position(position)
    ))
}

pub fn alter_column<E>(
    executor: &mut E,
    table: &str,
    column: &str,
    new_name: Option<&str>,
    spec: &ColumnSpec,
    position: &Position,
) -> Result<(), SqlError>
where
    E: Executor + ?Sized,
{
    execute_checked(executor, alter_column_sql(table, column, new_name, spec, position))
}

/// `ALTER TABLE `t` DROP `c``
pub fn drop_column_sql(table: &str, column: &str) -> Result<String, SqlError> {
    require_table(table)?;
    require_column(column)?;
    Ok(format!("ALTER TABLE {} DROP {}", quote_ident(table), quote_ident(column)))
}

pub fn drop_column<E>(executor: &mut E, table: &str, column: &str) -> Result<(), SqlError>
where
    E: Executor + ?Sized,
{
    execute_checked(executor, drop_column_sql(table, column))
}

/// `DROP TABLE `t``
pub fn drop_table_sql(table: &str) -> Result<String, SqlError> {
    require_table(table)?;
    Ok(format!("DROP TABLE {}", quote_ident(table)))
}

pub fn drop_table<E>(executor: &mut E, table: &str) -> Result<(), SqlError>
where
    E: Executor + ?Sized,
{
    execute_checked(executor, drop_table_sql(table))
}

/// `TRUNCATE `t``
pub fn truncate_table_sql(table: &str) -> Result<String, SqlError> {
    require_table(table)?;
    Ok(format!("TRUNCATE {}", quote_ident(table)))
}

pub fn truncate_table<E>(executor: &mut E, table: &str) -> Result<(), SqlError>
where
    E: Executor + ?Sized,
{
    execute_checked(executor, truncate_table_sql(table))
}
