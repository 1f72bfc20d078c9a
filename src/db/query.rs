//! Ad-hoc statement runner
//!
//! Executes exactly one user-supplied statement string verbatim, with no
//! parameterization. This is the power-user escape hatch behind the SQL
//! console, not a safe query API. Statements that produce columns are
//! rendered positionally; everything else reports the affected-row count
//! under the engine's default autocommit behavior.

use crate::error::WorkbenchError;

use super::introspect::value_to_text;
use super::session::Session;

/// Result of running one ad-hoc statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    /// A read query: column names plus rows rendered as text.
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    },
    /// A write statement: number of rows changed.
    Affected(usize),
}

impl Session {
    /// Run one statement as given by the user.
    ///
    /// Whether the statement reads or writes is decided by whether the
    /// prepared statement produces columns, which also covers pragmas
    /// that return rows.
    pub fn run_statement(&self, sql: &str) -> Result<StatementOutcome, WorkbenchError> {
        let mut stmt = self
            .conn()
            .prepare(sql)
            .map_err(|e| WorkbenchError::statement(sql, e))?;

        if stmt.column_count() == 0 {
            let affected = stmt
                .execute([])
                .map_err(|e| WorkbenchError::statement(sql, e))?;
            return Ok(StatementOutcome::Affected(affected));
        }

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let mut rows = Vec::new();
        let mut result = stmt
            .query([])
            .map_err(|e| WorkbenchError::statement(sql, e))?;
        while let Some(row) = result.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for i in 0..columns.len() {
                values.push(value_to_text(row.get_ref(i)?));
            }
            rows.push(values);
        }
        Ok(StatementOutcome::Rows { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_session() -> Session {
        let session = Session::open_in_memory();
        session
            .execute_plain("CREATE TABLE \"t\" (\"a\" INTEGER, \"b\" TEXT)")
            .unwrap();
        session
            .execute_plain("INSERT INTO \"t\" VALUES (1, 'x'), (2, NULL)")
            .unwrap();
        session
    }

    #[test]
    fn test_select_returns_rows_positionally() {
        let session = seeded_session();
        let outcome = session.run_statement("SELECT a, b FROM t ORDER BY a").unwrap();
        match outcome {
            StatementOutcome::Rows { columns, rows } => {
                assert_eq!(columns, vec!["a", "b"]);
                assert_eq!(rows[0], vec![Some("1".to_string()), Some("x".to_string())]);
                assert_eq!(rows[1], vec![Some("2".to_string()), None]);
            }
            StatementOutcome::Affected(_) => panic!("expected rows"),
        }
    }

    #[test]
    fn test_write_reports_affected_count() {
        let session = seeded_session();
        let outcome = session.run_statement("UPDATE t SET b = 'y'").unwrap();
        assert_eq!(outcome, StatementOutcome::Affected(2));
    }

    #[test]
    fn test_pragma_with_result_is_treated_as_read() {
        let session = seeded_session();
        let outcome = session.run_statement("PRAGMA table_info(t)").unwrap();
        assert!(matches!(outcome, StatementOutcome::Rows { .. }));
    }

    #[test]
    fn test_syntax_error_carries_statement_text() {
        let session = seeded_session();
        let err = session.run_statement("SELCT nope").unwrap_err();
        assert!(err.to_string().contains("SELCT nope"));
    }
}
