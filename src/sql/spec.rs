//! Logical table, field and row descriptions
//!
//! These are transient: a dialog assembles them, the builder renders them
//! into statement text, and the engine's catalog becomes the source of
//! truth once the statement is executed.

use std::fmt;

/// SQLite column type as offered in the field dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Integer,
    Real,
    Blob,
    Numeric,
}

impl FieldType {
    /// All types, in the order the field dialog lists them.
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Integer,
        FieldType::Real,
        FieldType::Blob,
        FieldType::Numeric,
    ];

    /// Uppercase SQL keyword for this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Integer => "INTEGER",
            FieldType::Real => "REAL",
            FieldType::Blob => "BLOB",
            FieldType::Numeric => "NUMERIC",
        }
    }

    /// Parse a declared type string as returned by `PRAGMA table_info`.
    pub fn from_keyword(s: &str) -> Option<FieldType> {
        match s.trim().to_uppercase().as_str() {
            "TEXT" => Some(FieldType::Text),
            "INTEGER" => Some(FieldType::Integer),
            "REAL" => Some(FieldType::Real),
            "BLOB" => Some(FieldType::Blob),
            "NUMERIC" => Some(FieldType::Numeric),
            _ => None,
        }
    }

    /// Whether default values of this type are rendered string-quoted.
    pub fn quotes_defaults(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::Blob)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One column in a table being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name; letters, digits, `_` and `-` only.
    pub name: String,
    /// Declared type.
    pub field_type: FieldType,
    /// Whether NULL is allowed. A primary-key field is non-nullable
    /// regardless of this flag.
    pub allow_null: bool,
    /// Default value as entered in the dialog; blank or the literal
    /// text `NULL` means no default.
    pub default_value: Option<String>,
    /// Whether the field is part of the primary key.
    pub primary_key: bool,
}

impl FieldSpec {
    /// A plain nullable field with no default.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            allow_null: true,
            default_value: None,
            primary_key: false,
        }
    }

    /// The `id INTEGER` primary key the create-table dialog seeds.
    pub fn id_primary_key() -> Self {
        Self {
            name: "id".to_string(),
            field_type: FieldType::Integer,
            allow_null: false,
            default_value: None,
            primary_key: true,
        }
    }

    /// The default value with blank and literal `NULL` entries filtered out.
    pub fn effective_default(&self) -> Option<&str> {
        self.default_value
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty() && !d.eq_ignore_ascii_case("NULL"))
    }
}

/// A table being assembled in the create-table dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub name: String,
    /// Columns in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl TableSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Names of all primary-key fields, in declaration order.
    pub fn primary_keys(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.primary_key)
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// One logical record for insert or update: column names paired with
/// values, in the table's declared column order. `None` is SQL NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSpec {
    pub columns: Vec<(String, Option<String>)>,
}

impl RowSpec {
    /// Build from parallel column-name and value slices.
    pub fn from_pairs<N: Into<String>, V: Into<Option<String>>>(
        pairs: impl IntoIterator<Item = (N, V)>,
    ) -> Self {
        Self {
            columns: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.columns.iter().map(|(_, v)| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_keywords_roundtrip() {
        for ty in FieldType::ALL {
            assert_eq!(FieldType::from_keyword(ty.keyword()), Some(ty));
        }
        assert_eq!(FieldType::from_keyword(" integer "), Some(FieldType::Integer));
        assert_eq!(FieldType::from_keyword("VARCHAR(20)"), None);
    }

    #[test]
    fn test_effective_default_filters_blank_and_null() {
        let mut field = FieldSpec::new("age", FieldType::Integer);
        assert_eq!(field.effective_default(), None);

        field.default_value = Some("  ".to_string());
        assert_eq!(field.effective_default(), None);

        field.default_value = Some("null".to_string());
        assert_eq!(field.effective_default(), None);

        field.default_value = Some(" 18 ".to_string());
        assert_eq!(field.effective_default(), Some("18"));
    }

    #[test]
    fn test_primary_keys_preserve_order() {
        let spec = TableSpec {
            name: "t".to_string(),
            fields: vec![
                FieldSpec {
                    primary_key: true,
                    ..FieldSpec::new("b", FieldType::Text)
                },
                FieldSpec::new("x", FieldType::Real),
                FieldSpec {
                    primary_key: true,
                    ..FieldSpec::new("a", FieldType::Text)
                },
            ],
        };
        assert_eq!(spec.primary_keys(), vec!["b", "a"]);
    }
}
