use serde::{Deserialize, Serialize};
use super::data_type::DataType;

/// Structured description of one column, rendered by
/// [`render_column`](crate::builder::common::render_column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(alias = "type")]
    pub data_type: DataType,
    /// `None` and `Some(0)` both mean "no size suffix".
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
}

const fn default_nullable() -> bool {
    true
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            size: None,
            default_value: None,
            nullable: true,
            primary_key: false,
            auto_increment: false,
        }
    }

    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn not_null(self) -> Self {
        self.nullable(false)
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Size that actually gets rendered: dropped for `TEXT` and for zero.
    #[must_use]
    pub fn effective_size(&self) -> Option<u32> {
        if !self.data_type.accepts_size() {
            return None;
        }
        self.size.filter(|s| *s > 0)
    }

    /// Default value as given, `None` when blank.
    #[must_use]
    pub fn effective_default(&self) -> Option<&str> {
        self.default_value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
    }
}

/// Where `ALTER TABLE ... ADD/CHANGE` places the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Last,
    First,
    After(String),
}

impl Position {
    /// Case-insensitive `LAST` / `FIRST`; anything else names the column to
    /// follow. A blank hint means `Last`.
    #[must_use]
    pub fn from_hint(hint: &str) -> Self {
        let trimmed = hint.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("last") {
            Self::Last
        } else if trimmed.eq_ignore_ascii_case("first") {
            Self::First
        } else {
            Self::After(trimmed.to_string())
        }
    }
}

impl From<&str> for Position {
    fn from(hint: &str) -> Self {
        Self::from_hint(hint)
    }
}
