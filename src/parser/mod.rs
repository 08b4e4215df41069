// Module declarations
mod common;
mod column;

use crate::types::{ColumnSpec, Position, SqlError};
use nom::IResult;

fn parse_complete<'a, O>(
    input: &'a str,
    parser: impl FnOnce(&'a str) -> IResult<&'a str, O>,
) -> Result<O, SqlError> {
    let input = input.trim().trim_end_matches(',');

    match parser(input) {
        Ok((remaining, out)) => {
            if remaining.trim().is_empty() {
                Ok(out)
            } else {
                Err(SqlError::ParseError(format!("Unexpected input after definition: {remaining}")))
            }
        }
        Err(e) => Err(SqlError::ParseError(format!("{e:?}"))),
    }
}

/// Parse a column definition such as `email VARCHAR(255) NOT NULL`.
///
/// Accepts the clauses `render_column` produces, so rendered text can be
/// read back.
pub fn parse_column_definition(input: &str) -> Result<ColumnSpec, SqlError> {
    parse_complete(input, column::column_definition)
}

/// Parse `FIRST`, `LAST` or `AFTER column`.
pub fn parse_position(input: &str) -> Result<Position, SqlError> {
    parse_complete(input, column::position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::common::render_column;
    use crate::types::DataType;

    #[test]
    fn test_parse_simple_column() {
        let spec = parse_column_definition("age INT").unwrap();
        assert_eq!(spec, ColumnSpec::new("age", DataType::Int));
    }

    #[test]
    fn test_parse_full_column() {
        let spec = parse_column_definition(
            "`id` int(11) NOT NULL DEFAULT '0' AUTO_INCREMENT PRIMARY KEY",
        )
        .unwrap();
        assert_eq!(spec.name, "id");
        assert_eq!(spec.data_type, DataType::Int);
        assert_eq!(spec.size, Some(11));
        assert!(!spec.nullable);
        assert_eq!(spec.default_value.as_deref(), Some("0"));
        assert!(spec.auto_increment);
        assert!(spec.primary_key);
    }

    #[test]
    fn test_parse_flags_any_order() {
        let spec = parse_column_definition("email varchar ( 255 ) primary key not null").unwrap();
        assert_eq!(spec.data_type, DataType::VarChar);
        assert_eq!(spec.size, Some(255));
        assert!(spec.primary_key);
        assert!(!spec.nullable);
    }

    #[test]
    fn test_parse_bare_default_and_raw_type() {
        let spec = parse_column_definition("n MEDIUMINT DEFAULT 5").unwrap();
        assert_eq!(spec.data_type, DataType::Raw("MEDIUMINT".to_string()));
        assert_eq!(spec.default_value.as_deref(), Some("5"));

        let spec = parse_column_definition("s CHAR(1) DEFAULT ''").unwrap();
        assert_eq!(spec.default_value.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_multi_argument_types() {
        let spec = parse_column_definition("price DECIMAL(10,2) NOT NULL").unwrap();
        assert_eq!(spec.data_type, DataType::Raw("DECIMAL(10,2)".to_string()));
        assert_eq!(spec.size, None);
        assert!(!spec.nullable);
        assert_eq!(render_column(&spec), "`price` DECIMAL(10,2) NOT NULL");

        let spec = parse_column_definition("state ENUM('new', 'paid)') DEFAULT 'new'").unwrap();
        assert_eq!(spec.data_type, DataType::Raw("ENUM('new', 'paid)')".to_string()));
        assert_eq!(spec.default_value.as_deref(), Some("new"));

        assert!(parse_column_definition("price DECIMAL(10,2").is_err());
        assert!(parse_column_definition("price DECIMAL()").is_err());
    }

    #[test]
    fn test_rendered_clause_reads_back() {
        let spec = ColumnSpec::new("email", DataType::VarChar)
            .size(255)
            .not_null()
            .default_value("nobody");
        assert_eq!(parse_column_definition(&render_column(&spec)).unwrap(), spec);

        let spec = ColumnSpec::new("total", DataType::Raw("DECIMAL(12,4)".to_string())).default_value("0");
        assert_eq!(parse_column_definition(&render_column(&spec)).unwrap(), spec);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_column_definition("age"), Err(SqlError::ParseError(_))));
        assert!(matches!(parse_column_definition("age INT garbage"), Err(SqlError::ParseError(_))));
        assert!(matches!(parse_column_definition(""), Err(SqlError::ParseError(_))));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("first").unwrap(), Position::First);
        assert_eq!(parse_position(" LAST ").unwrap(), Position::Last);
        assert_eq!(parse_position("AFTER `email`").unwrap(), Position::After("email".to_string()));
        assert_eq!(parse_position("after id").unwrap(), Position::After("id".to_string()));
        assert!(parse_position("AFTER").is_err());
    }
}
