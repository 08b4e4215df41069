//! Read-side helpers
//!
//! Same trust boundary as the builders: statements and table names are
//! interpolated into the SQL text as given, nothing is bound or escaped.

use crate::builder::common::{quote_ident, quote_value};
use crate::types::{Row, SqlError};
use super::QuerySource;

/// First row of `sql`, or `None` when the query returned nothing.
///
/// With `limit_to_one`, ` LIMIT 1` is appended unless the statement
/// already carries a ` LIMIT ` clause.
pub fn fetch_one_row<S>(source: &mut S, sql: &str, limit_to_one: bool) -> Result<Option<Row>, SqlError>
where
    S: QuerySource + ?Sized,
{
    let sql = if limit_to_one && !has_limit(sql) {
        format!("{} LIMIT 1", sql.trim())
    } else {
        sql.to_string()
    };

    Ok(source.query(&sql)?.into_iter().next())
}

/// Every row of `sql`.
pub fn fetch_rows<S>(source: &mut S, sql: &str) -> Result<Vec<Row>, SqlError>
where
    S: QuerySource + ?Sized,
{
    source.query(sql)
}

/// True when the first row exists and its first cell is not NULL.
pub fn row_exists<S>(source: &mut S, sql: &str, limit_to_one: bool) -> Result<bool, SqlError>
where
    S: QuerySource + ?Sized,
{
    let row = fetch_one_row(source, sql, limit_to_one)?;
    Ok(row
        .as_ref()
        .and_then(Row::first)
        .is_some_and(|v| !v.is_null()))
}

pub fn count_rows<S>(source: &mut S, sql: &str) -> Result<usize, SqlError>
where
    S: QuerySource + ?Sized,
{
    Ok(source.query(sql)?.len())
}

pub fn is_result_empty<S>(source: &mut S, sql: &str) -> Result<bool, SqlError>
where
    S: QuerySource + ?Sized,
{
    Ok(count_rows(source, sql)? == 0)
}

pub fn count_rows_in_table<S>(source: &mut S, table: &str) -> Result<usize, SqlError>
where
    S: QuerySource + ?Sized,
{
    if table.trim().is_empty() {
        return Err(SqlError::MissingTableName);
    }
    count_rows(source, &format!("SELECT * FROM {}", quote_ident(table)))
}

pub fn table_is_empty<S>(source: &mut S, table: &str) -> Result<bool, SqlError>
where
    S: QuerySource + ?Sized,
{
    Ok(count_rows_in_table(source, table)? == 0)
}

/// Looks the table up in `information_schema.tables`, limited to the
/// connection's current database.
pub fn table_exists<S>(source: &mut S, table: &str) -> Result<bool, SqlError>
where
    S: QuerySource + ?Sized,
{
    if table.trim().is_empty() {
        return Err(SqlError::MissingTableName);
    }
    let sql = format!(
        "SELECT * FROM information_schema.tables WHERE table_schema = DATABASE() AND table_name = {}",
        quote_value(table.trim())
    );
    row_exists(source, &sql, true)
}

fn has_limit(sql: &str) -> bool {
    sql.to_ascii_uppercase().contains(" LIMIT ")
}
