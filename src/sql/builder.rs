//! Statement builder
//!
//! Deterministic rendering of CREATE TABLE / INSERT / UPDATE / DELETE text
//! from the logical specs. Validation happens here, before anything reaches
//! the engine: identifier shape, reserved field names, and default literals
//! for numeric types. The checks are a pre-flight guard, not a security
//! boundary; the SQL console bypasses all of this on purpose.

use thiserror::Error;

use super::spec::{FieldType, RowSpec, TableSpec};
use super::{is_reserved_word, is_valid_identifier};

/// Statement construction failure, reported before the engine is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("table has no fields")]
    EmptyTable,

    #[error("invalid identifier '{0}': only letters, digits, _ and - are allowed")]
    BadIdentifier(String),

    #[error("'{0}' is a reserved SQLite keyword")]
    ReservedWord(String),

    #[error("default value '{value}' does not parse as {field_type}")]
    BadDefault { value: String, field_type: FieldType },
}

fn check_identifier(name: &str) -> Result<(), BuildError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(BuildError::BadIdentifier(name.to_string()))
    }
}

fn check_field_name(name: &str) -> Result<(), BuildError> {
    check_identifier(name)?;
    if is_reserved_word(name) {
        return Err(BuildError::ReservedWord(name.to_string()));
    }
    Ok(())
}

fn check_default(value: &str, field_type: FieldType) -> Result<(), BuildError> {
    let bad = match field_type {
        FieldType::Integer => value.parse::<i64>().is_err(),
        FieldType::Real | FieldType::Numeric => value.parse::<f64>().is_err(),
        FieldType::Text | FieldType::Blob => false,
    };
    if bad {
        return Err(BuildError::BadDefault {
            value: value.to_string(),
            field_type,
        });
    }
    Ok(())
}

/// Validate one field on its own, as the field dialog does before the
/// field is accepted into the table spec.
pub fn validate_field(field: &crate::sql::spec::FieldSpec) -> Result<(), BuildError> {
    check_field_name(&field.name)?;
    if let Some(default) = field.effective_default() {
        check_default(default, field.field_type)?;
    }
    Ok(())
}

/// Render a `CREATE TABLE` statement for the spec.
///
/// A single INTEGER primary-key field becomes `PRIMARY KEY AUTOINCREMENT`;
/// two or more primary-key fields become a trailing composite constraint
/// with no inline markers. `NOT NULL` is emitted only for non-key fields
/// that disallow NULL. Field order is preserved, so output is deterministic.
pub fn build_create_table(spec: &TableSpec) -> Result<String, BuildError> {
    check_identifier(&spec.name)?;
    if spec.fields.is_empty() {
        return Err(BuildError::EmptyTable);
    }

    let primary_keys = spec.primary_keys();
    let single_pk = primary_keys.len() == 1;

    let mut defs = Vec::with_capacity(spec.fields.len() + 1);
    for field in &spec.fields {
        check_field_name(&field.name)?;

        let mut def = format!("\"{}\" {}", field.name, field.field_type.keyword());

        if field.primary_key && single_pk {
            if field.field_type == FieldType::Integer {
                def.push_str(" PRIMARY KEY AUTOINCREMENT");
            } else {
                def.push_str(" PRIMARY KEY");
            }
        }

        if !field.allow_null && !field.primary_key {
            def.push_str(" NOT NULL");
        }

        if let Some(default) = field.effective_default() {
            check_default(default, field.field_type)?;
            if field.field_type.quotes_defaults() {
                def.push_str(&format!(" DEFAULT '{}'", default));
            } else {
                def.push_str(&format!(" DEFAULT {}", default));
            }
        }

        defs.push(def);
    }

    if primary_keys.len() > 1 {
        let quoted: Vec<String> = primary_keys.iter().map(|pk| format!("\"{}\"", pk)).collect();
        defs.push(format!("PRIMARY KEY ({})", quoted.join(", ")));
    }

    Ok(format!("CREATE TABLE \"{}\" ({})", spec.name, defs.join(", ")))
}

/// Render an `INSERT` with one `?` placeholder per column.
///
/// Columns follow the row's order, which the dialog fills from the table's
/// declared column order. Absent values become NULL parameters.
pub fn build_insert(
    table: &str,
    row: &RowSpec,
) -> Result<(String, Vec<Option<String>>), BuildError> {
    check_identifier(table)?;
    if row.is_empty() {
        return Err(BuildError::EmptyTable);
    }
    for name in row.names() {
        check_identifier(name)?;
    }

    let columns: Vec<String> = row.names().map(|n| format!("\"{}\"", n)).collect();
    let placeholders: Vec<&str> = row.columns.iter().map(|_| "?").collect();
    let sql = format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    );
    let params = row.values().map(|v| v.map(str::to_string)).collect();
    Ok((sql, params))
}

/// Render an `UPDATE` that sets every column and matches the original row.
///
/// The WHERE clause compares every original column value; NULL originals
/// use `IS NULL` because `column = NULL` never matches under the engine's
/// three-valued logic.
pub fn build_update(
    table: &str,
    row: &RowSpec,
    original: &RowSpec,
) -> Result<(String, Vec<Option<String>>), BuildError> {
    check_identifier(table)?;
    if row.is_empty() {
        return Err(BuildError::EmptyTable);
    }
    for name in row.names().chain(original.names()) {
        check_identifier(name)?;
    }

    let set_parts: Vec<String> = row.names().map(|n| format!("\"{}\" = ?", n)).collect();
    let (where_clause, where_params) = build_where(original);

    let sql = format!(
        "UPDATE \"{}\" SET {} WHERE {}",
        table,
        set_parts.join(", "),
        where_clause
    );

    let mut params: Vec<Option<String>> = row.values().map(|v| v.map(str::to_string)).collect();
    params.extend(where_params);
    Ok((sql, params))
}

/// Render a `DELETE` matching the original row, with the same
/// WHERE-construction rule as update.
pub fn build_delete(
    table: &str,
    original: &RowSpec,
) -> Result<(String, Vec<Option<String>>), BuildError> {
    check_identifier(table)?;
    if original.is_empty() {
        return Err(BuildError::EmptyTable);
    }
    for name in original.names() {
        check_identifier(name)?;
    }

    let (where_clause, params) = build_where(original);
    let sql = format!("DELETE FROM \"{}\" WHERE {}", table, where_clause);
    Ok((sql, params))
}

/// WHERE clause over every column of the original row. Non-null values
/// become `"col" = ?` with a parameter; NULLs become `"col" IS NULL`.
fn build_where(original: &RowSpec) -> (String, Vec<Option<String>>) {
    let mut parts = Vec::with_capacity(original.columns.len());
    let mut params = Vec::new();
    for (name, value) in &original.columns {
        match value {
            Some(v) => {
                parts.push(format!("\"{}\" = ?", name));
                params.push(Some(v.clone()));
            }
            None => parts.push(format!("\"{}\" IS NULL", name)),
        }
    }
    (parts.join(" AND "), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::spec::FieldSpec;

    fn users_spec() -> TableSpec {
        TableSpec {
            name: "users".to_string(),
            fields: vec![
                FieldSpec::id_primary_key(),
                FieldSpec {
                    allow_null: false,
                    ..FieldSpec::new("name", FieldType::Text)
                },
                FieldSpec {
                    default_value: Some("18".to_string()),
                    ..FieldSpec::new("age", FieldType::Integer)
                },
            ],
        }
    }

    #[test]
    fn test_create_table_users() {
        let sql = build_create_table(&users_spec()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \
             \"name\" TEXT NOT NULL, \"age\" INTEGER DEFAULT 18)"
        );
    }

    #[test]
    fn test_single_integer_pk_gets_autoincrement_once() {
        let sql = build_create_table(&users_spec()).unwrap();
        assert_eq!(sql.matches("PRIMARY KEY AUTOINCREMENT").count(), 1);
    }

    #[test]
    fn test_single_non_integer_pk_is_plain_primary_key() {
        let spec = TableSpec {
            name: "tags".to_string(),
            fields: vec![FieldSpec {
                primary_key: true,
                allow_null: false,
                ..FieldSpec::new("label", FieldType::Text)
            }],
        };
        let sql = build_create_table(&spec).unwrap();
        assert_eq!(sql, "CREATE TABLE \"tags\" (\"label\" TEXT PRIMARY KEY)");
        assert!(!sql.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_composite_pk_uses_table_constraint_only() {
        let spec = TableSpec {
            name: "membership".to_string(),
            fields: vec![
                FieldSpec {
                    primary_key: true,
                    ..FieldSpec::new("user_id", FieldType::Integer)
                },
                FieldSpec {
                    primary_key: true,
                    ..FieldSpec::new("group_id", FieldType::Integer)
                },
                FieldSpec::new("role", FieldType::Text),
            ],
        };
        let sql = build_create_table(&spec).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE \"membership\" (\"user_id\" INTEGER, \"group_id\" INTEGER, \
             \"role\" TEXT, PRIMARY KEY (\"user_id\", \"group_id\"))"
        );
        // No inline markers on the individual fields.
        assert_eq!(sql.matches("PRIMARY KEY").count(), 1);
        assert!(!sql.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_pk_suppresses_not_null() {
        let spec = TableSpec {
            name: "t".to_string(),
            fields: vec![FieldSpec {
                primary_key: true,
                allow_null: false,
                ..FieldSpec::new("id", FieldType::Integer)
            }],
        };
        let sql = build_create_table(&spec).unwrap();
        assert!(!sql.contains("NOT NULL"));
    }

    #[test]
    fn test_text_default_is_quoted_numeric_is_not() {
        let spec = TableSpec {
            name: "t".to_string(),
            fields: vec![
                FieldSpec {
                    default_value: Some("guest".to_string()),
                    ..FieldSpec::new("role", FieldType::Text)
                },
                FieldSpec {
                    default_value: Some("1.5".to_string()),
                    ..FieldSpec::new("ratio", FieldType::Real)
                },
            ],
        };
        let sql = build_create_table(&spec).unwrap();
        assert!(sql.contains("\"role\" TEXT DEFAULT 'guest'"));
        assert!(sql.contains("\"ratio\" REAL DEFAULT 1.5"));
    }

    #[test]
    fn test_blank_and_null_defaults_are_skipped() {
        let spec = TableSpec {
            name: "t".to_string(),
            fields: vec![
                FieldSpec {
                    default_value: Some("   ".to_string()),
                    ..FieldSpec::new("a", FieldType::Text)
                },
                FieldSpec {
                    default_value: Some("NULL".to_string()),
                    ..FieldSpec::new("b", FieldType::Integer)
                },
            ],
        };
        let sql = build_create_table(&spec).unwrap();
        assert!(!sql.contains("DEFAULT"));
    }

    #[test]
    fn test_empty_table_rejected() {
        let spec = TableSpec::new("empty");
        assert_eq!(build_create_table(&spec), Err(BuildError::EmptyTable));
    }

    #[test]
    fn test_bad_table_and_field_names_rejected() {
        let mut spec = TableSpec::new("users; DROP TABLE users");
        spec.fields.push(FieldSpec::new("ok", FieldType::Text));
        assert!(matches!(
            build_create_table(&spec),
            Err(BuildError::BadIdentifier(_))
        ));

        let spec = TableSpec {
            name: "users".to_string(),
            fields: vec![FieldSpec::new("bad name", FieldType::Text)],
        };
        assert!(matches!(
            build_create_table(&spec),
            Err(BuildError::BadIdentifier(_))
        ));
    }

    #[test]
    fn test_reserved_field_name_rejected() {
        let spec = TableSpec {
            name: "t".to_string(),
            fields: vec![FieldSpec::new("select", FieldType::Text)],
        };
        assert_eq!(
            build_create_table(&spec),
            Err(BuildError::ReservedWord("select".to_string()))
        );
    }

    #[test]
    fn test_numeric_default_must_parse() {
        let spec = TableSpec {
            name: "t".to_string(),
            fields: vec![FieldSpec {
                default_value: Some("abc".to_string()),
                ..FieldSpec::new("n", FieldType::Integer)
            }],
        };
        assert!(matches!(
            build_create_table(&spec),
            Err(BuildError::BadDefault { .. })
        ));

        // A float literal is not a valid INTEGER default.
        let spec = TableSpec {
            name: "t".to_string(),
            fields: vec![FieldSpec {
                default_value: Some("1.5".to_string()),
                ..FieldSpec::new("n", FieldType::Integer)
            }],
        };
        assert!(matches!(
            build_create_table(&spec),
            Err(BuildError::BadDefault { .. })
        ));
    }

    #[test]
    fn test_deterministic_output() {
        let spec = users_spec();
        assert_eq!(
            build_create_table(&spec).unwrap(),
            build_create_table(&spec).unwrap()
        );
    }

    #[test]
    fn test_insert_preserves_column_order_and_nulls() {
        let row = RowSpec::from_pairs([
            ("id", None),
            ("name", Some("Ann".to_string())),
            ("age", None),
        ]);
        let (sql, params) = build_insert("users", &row).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO \"users\" (\"id\", \"name\", \"age\") VALUES (?, ?, ?)"
        );
        assert_eq!(params, vec![None, Some("Ann".to_string()), None]);
    }

    #[test]
    fn test_update_where_uses_is_null_for_null_originals() {
        let row = RowSpec::from_pairs([
            ("a", Some("1".to_string())),
            ("b", Some("x".to_string())),
            ("c", Some("2".to_string())),
        ]);
        let original = RowSpec::from_pairs([
            ("a", Some("1".to_string())),
            ("b", None),
            ("c", Some("2".to_string())),
        ]);
        let (sql, params) = build_update("t", &row, &original).unwrap();
        assert_eq!(
            sql,
            "UPDATE \"t\" SET \"a\" = ?, \"b\" = ?, \"c\" = ? \
             WHERE \"a\" = ? AND \"b\" IS NULL AND \"c\" = ?"
        );
        // Three SET parameters followed by two WHERE parameters.
        assert_eq!(params.len(), 5);
        assert_eq!(params[3], Some("1".to_string()));
        assert_eq!(params[4], Some("2".to_string()));
    }

    #[test]
    fn test_delete_where_matches_update_rule() {
        let original = RowSpec::from_pairs([
            ("a", Some("1".to_string())),
            ("b", None),
        ]);
        let (sql, params) = build_delete("t", &original).unwrap();
        assert_eq!(sql, "DELETE FROM \"t\" WHERE \"a\" = ? AND \"b\" IS NULL");
        assert_eq!(params, vec![Some("1".to_string())]);
    }

    #[test]
    fn test_dml_rejects_bad_table_name() {
        let row = RowSpec::from_pairs([("a", Some("1".to_string()))]);
        assert!(build_insert("bad table", &row).is_err());
        assert!(build_delete("bad;table", &row).is_err());
    }
}
