//! Statement assembler
//!
//! Pure rendering helpers shared by every builder.
//!
//! **Injection hazard:** identifiers are wrapped in backticks and values in
//! single quotes, and neither is escaped. Callers must never pass untrusted
//! input through these functions.

use crate::types::{ColumnSpec, Position};

/// `` `name` `` - no escaping of embedded backticks.
pub fn quote_ident(name: &str) -> String {
    format!("`{name}`")
}

/// `'value'` - no escaping of embedded quotes.
pub fn quote_value(value: &str) -> String {
    format!("'{value}'")
}

/// Comma-separated list of quoted identifiers, in the given order.
pub fn ident_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| quote_ident(n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated list of quoted values, in the given order.
pub fn value_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| quote_value(v.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Type keyword plus size, nullability, default, auto-increment and key
/// flags, in that order. Everything after the column name.
pub fn render_type_and_flags(spec: &ColumnSpec) -> String {
    let mut sql = spec.data_type.to_string();

    if let Some(size) = spec.effective_size() {
        sql.push_str(&format!("({size})"));
    }

    if !spec.nullable {
        sql.push_str(" NOT NULL");
    }

    if let Some(default) = spec.effective_default() {
        sql.push_str(&format!(" DEFAULT {}", quote_value(default)));
    }

    if spec.auto_increment {
        sql.push_str(" AUTO_INCREMENT");
    }

    if spec.primary_key {
        sql.push_str(" PRIMARY KEY");
    }

    sql
}

/// Full column clause: `` `name` TYPE(size) NOT NULL DEFAULT 'x' AUTO_INCREMENT PRIMARY KEY ``.
pub fn render_column(spec: &ColumnSpec) -> String {
    format!("{} {}", quote_ident(&spec.name), render_type_and_flags(spec))
}

/// Positional suffix for `ALTER TABLE ... ADD/CHANGE`; empty for `Last`.
pub fn render_position(position: &Position) -> String {
    match position {
        Position::Last => String::new(),
        Position::First => " FIRST".to_string(),
        Position::After(column) => format!(" AFTER {}", quote_ident(column)),
    }
}
