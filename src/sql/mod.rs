//! SQL Statement Generation
//!
//! Turns transient table/field/row descriptions collected by the dialogs
//! into SQLite statement text. Identifiers are interpolated (SQLite has no
//! parameter binding for DDL); row values always go through `?` placeholders.

pub mod builder;
pub mod spec;

pub use builder::{build_create_table, build_delete, build_insert, build_update, BuildError};
pub use spec::{FieldSpec, FieldType, RowSpec, TableSpec};

/// Fixed set of SQLite keywords rejected as field names.
///
/// Covers the common collisions, not the engine's full reserved-word list.
pub const RESERVED_WORDS: &[&str] = &[
    "TABLE", "CREATE", "INSERT", "SELECT", "UPDATE", "DELETE", "DROP", "ALTER", "INDEX", "WHERE",
    "ORDER", "GROUP", "HAVING", "UNION", "JOIN", "INNER", "LEFT", "RIGHT", "OUTER", "ON",
];

/// Check whether a table or column name is acceptable for interpolation.
///
/// Letters, digits, `_` and `-` only, with at least one letter or digit.
/// Deliberately conservative; quoted identifiers with arbitrary characters
/// are not supported.
pub fn is_valid_identifier(name: &str) -> bool {
    let stripped: String = name.chars().filter(|c| *c != '_' && *c != '-').collect();
    !stripped.is_empty()
        && stripped.chars().all(char::is_alphanumeric)
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Check whether a field name collides with a reserved keyword.
pub fn is_reserved_word(name: &str) -> bool {
    let upper = name.to_uppercase();
    RESERVED_WORDS.iter().any(|w| *w == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("users"));
        assert!(is_valid_identifier("user_id"));
        assert!(is_valid_identifier("first-name"));
        assert!(is_valid_identifier("col2"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("___"));
        assert!(!is_valid_identifier("user name"));
        assert!(!is_valid_identifier("a;drop"));
        assert!(!is_valid_identifier("name\"quoted"));
    }

    #[test]
    fn test_reserved_word_check_is_case_insensitive() {
        assert!(is_reserved_word("select"));
        assert!(is_reserved_word("Table"));
        assert!(is_reserved_word("WHERE"));
        assert!(!is_reserved_word("username"));
    }
}
