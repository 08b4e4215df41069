// Module declarations
pub mod error;
pub mod data_type;
pub mod column;
pub mod value;
pub mod row;

// Re-exports for convenience
pub use error::SqlError;
pub use data_type::DataType;
pub use column::{ColumnSpec, Position};
pub use value::Value;
pub use row::Row;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_keywords() {
        assert_eq!(DataType::Int.to_string(), "INT");
        assert_eq!(DataType::VarChar.to_string(), "VARCHAR");
        assert_eq!(DataType::DateTime.to_string(), "DATETIME");
        assert_eq!(DataType::LongText.to_string(), "LONGTEXT");
        assert_eq!(DataType::Raw("MEDIUMINT".to_string()).to_string(), "MEDIUMINT");
    }

    #[test]
    fn test_data_type_parse_is_case_insensitive() {
        assert_eq!(DataType::from("varchar"), DataType::VarChar);
        assert_eq!(DataType::from(" Text "), DataType::Text);
        assert_eq!(DataType::from("tinyint"), DataType::Raw("tinyint".to_string()));
        assert!(DataType::from("   ").is_blank());
        assert!(!DataType::Int.is_blank());
    }

    #[test]
    fn test_data_type_serde_as_keyword() {
        let json = serde_json::to_string(&DataType::VarChar).unwrap();
        assert_eq!(json, "\"VARCHAR\"");
        let back: DataType = serde_json::from_str("\"bigint\"").unwrap();
        assert_eq!(back, DataType::Raw("bigint".to_string()));
    }

    #[test]
    fn test_column_spec_defaults() {
        let spec = ColumnSpec::new("id", DataType::Int);
        assert!(spec.nullable);
        assert!(!spec.primary_key);
        assert!(!spec.auto_increment);
        assert_eq!(spec.effective_size(), None);
        assert_eq!(spec.effective_default(), None);
    }

    #[test]
    fn test_text_drops_size() {
        let spec = ColumnSpec::new("body", DataType::Text).size(500);
        assert_eq!(spec.size, Some(500));
        assert_eq!(spec.effective_size(), None);

        let spec = ColumnSpec::new("name", DataType::VarChar).size(0);
        assert_eq!(spec.effective_size(), None);
    }

    #[test]
    fn test_blank_default_is_ignored() {
        let spec = ColumnSpec::new("status", DataType::VarChar).default_value("   ");
        assert_eq!(spec.effective_default(), None);
    }

    #[test]
    fn test_column_spec_from_json() {
        let spec: ColumnSpec = serde_json::from_str(
            r#"{"name": "email", "type": "varchar", "size": 255, "nullable": false}"#,
        )
        .unwrap();
        assert_eq!(spec.data_type, DataType::VarChar);
        assert_eq!(spec.size, Some(255));
        assert!(!spec.nullable);
        assert!(!spec.primary_key);

        let spec: ColumnSpec =
            serde_json::from_str(r#"{"name": "note", "data_type": "TEXT"}"#).unwrap();
        assert!(spec.nullable);
    }

    #[test]
    fn test_position_hints() {
        assert_eq!(Position::from_hint("LAST"), Position::Last);
        assert_eq!(Position::from_hint("last"), Position::Last);
        assert_eq!(Position::from_hint(""), Position::Last);
        assert_eq!(Position::from_hint(" First "), Position::First);
        assert_eq!(Position::from_hint("email"), Position::After("email".to_string()));
    }

    #[test]
    fn test_information_schema_row_access() {
        // TABLE_CATALOG, TABLE_SCHEMA, TABLE_NAME, TABLE_TYPE, TABLE_ROWS, AUTO_INCREMENT
        let row = Row::new(vec![
            Value::from("def"),
            Value::from("shop"),
            Value::from("users"),
            Value::from("BASE TABLE"),
            Value::Integer(3),
            Value::Null,
        ]);

        assert_eq!(row.len(), 6);
        assert_eq!(row.first().and_then(Value::as_text), Some("def"));
        assert_eq!(row.get(2).and_then(Value::as_text), Some("users"));
        assert_eq!(row.get(4).and_then(Value::as_int), Some(3));
        assert!(row.get(5).is_some_and(Value::is_null));
        assert_eq!(row.get(5).map(ToString::to_string).as_deref(), Some("NULL"));
        assert!(row.get(6).is_none());

        let cells: Vec<String> = row.values.iter().map(ToString::to_string).collect();
        assert_eq!(cells.join("|"), "def|shop|users|BASE TABLE|3|NULL");
    }

    #[test]
    fn test_error_classes() {
        assert!(SqlError::MissingTableName.is_validation());
        assert!(SqlError::ColumnCountMismatch { names: 1, values: 2 }.is_validation());
        assert!(!SqlError::ExecutionFailed { sql: "DROP TABLE `t`".to_string() }.is_validation());
        assert!(!SqlError::ParseError("x".to_string()).is_validation());
    }
}
