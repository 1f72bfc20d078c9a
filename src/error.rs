//! Error taxonomy
//!
//! Three failure families, handled differently at the surface:
//! validation errors are caught before any statement reaches the engine,
//! engine errors are surfaced verbatim together with the statement text,
//! and filesystem errors block explicit operations but only warn on the
//! opportunistic auto-backup path. Nothing is retried automatically.

use thiserror::Error;

use crate::sql::BuildError;

/// Application-level error.
#[derive(Debug, Error)]
pub enum WorkbenchError {
    /// Malformed identifier, empty field list, non-parsing default literal.
    #[error("{0}")]
    Validation(#[from] BuildError),

    /// Engine rejection not tied to a generated statement (open, pragma).
    #[error("database error: {0}")]
    Engine(#[from] rusqlite::Error),

    /// Engine rejection of a generated statement; the statement text is
    /// kept so it can be shown for diagnosis.
    #[error("statement failed: {source}\n\nSQL:\n{sql}")]
    Statement {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Missing directory, permission denial, copy failure.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkbenchError {
    /// Wrap an engine error together with the statement that caused it.
    pub fn statement(sql: impl Into<String>, source: rusqlite::Error) -> Self {
        WorkbenchError::Statement {
            sql: sql.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_error_includes_sql_text() {
        let err = WorkbenchError::statement(
            "CREATE TABLE \"t\" (\"x\" TEXT)",
            rusqlite::Error::InvalidQuery,
        );
        let message = err.to_string();
        assert!(message.contains("CREATE TABLE \"t\""));
    }

    #[test]
    fn test_validation_error_passes_through_message() {
        let err = WorkbenchError::from(BuildError::EmptyTable);
        assert_eq!(err.to_string(), "table has no fields");
    }
}
