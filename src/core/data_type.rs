use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Column data types understood by the builders.
///
/// Anything outside the known keywords is carried as `Raw` and emitted
/// verbatim, so engine-specific types (`MEDIUMINT`, `ENUM('a','b')`, ...)
/// still work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    // Numeric types
    Int,
    Decimal,
    Float,
    Double,
    Real,
    Bit,
    Boolean,
    // Date/Time types
    DateTime,
    Date,
    Time,
    Timestamp,
    Year,
    // String types
    Text,
    VarChar,
    Char,
    LongText,
    Raw(String),
}

impl DataType {
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Int => "INT",
            Self::Decimal => "DECIMAL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Real => "REAL",
            Self::Bit => "BIT",
            Self::Boolean => "BOOLEAN",
            Self::DateTime => "DATETIME",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Year => "YEAR",
            Self::Text => "TEXT",
            Self::VarChar => "VARCHAR",
            Self::Char => "CHAR",
            Self::LongText => "LONGTEXT",
            Self::Raw(s) => s,
        }
    }

    /// `TEXT` columns never carry a size suffix.
    #[must_use]
    pub const fn accepts_size(&self) -> bool {
        !matches!(self, Self::Text)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Raw(s) if s.trim().is_empty())
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for DataType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s.trim().to_ascii_uppercase().as_str() {
            "INT" => Self::Int,
            "DECIMAL" => Self::Decimal,
            "FLOAT" => Self::Float,
            "DOUBLE" => Self::Double,
            "REAL" => Self::Real,
            "BIT" => Self::Bit,
            "BOOLEAN" => Self::Boolean,
            "DATETIME" => Self::DateTime,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "TIMESTAMP" => Self::Timestamp,
            "YEAR" => Self::Year,
            "TEXT" => Self::Text,
            "VARCHAR" => Self::VarChar,
            "CHAR" => Self::Char,
            "LONGTEXT" => Self::LongText,
            _ => Self::Raw(s.trim().to_string()),
        };
        Ok(ty)
    }
}

impl From<String> for DataType {
    fn from(s: String) -> Self {
        match s.parse::<Self>() {
            Ok(ty) => ty,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for DataType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<DataType> for String {
    fn from(ty: DataType) -> Self {
        ty.keyword().to_string()
    }
}
