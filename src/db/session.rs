//! Database session
//!
//! Owns the one open connection handle together with the file path and the
//! currently selected table. The application holds at most one `Session`;
//! switching files drops the old session (closing its handle) before a new
//! one is opened.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::info;

use crate::error::WorkbenchError;

/// The single open database connection plus its context.
pub struct Session {
    conn: Connection,
    path: PathBuf,
    /// Table currently shown in the data grid, if any.
    pub current_table: Option<String>,
}

impl Session {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, WorkbenchError> {
        let path = path.into();
        let conn = Connection::open(&path)?;
        info!("opened database {:?}", path);
        Ok(Self {
            conn,
            path,
            current_table: None,
        })
    }

    /// Path of the open database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the open database, for window titles and status lines.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Raw connection handle for statements this module does not wrap.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute a generated statement with positional parameters.
    ///
    /// Engine rejections carry the statement text for diagnosis.
    pub fn execute(
        &self,
        sql: &str,
        params: &[Option<String>],
    ) -> Result<usize, WorkbenchError> {
        self.conn
            .execute(sql, rusqlite::params_from_iter(params.iter()))
            .map_err(|e| WorkbenchError::statement(sql, e))
    }

    /// Execute a parameterless statement, keeping the text on failure.
    pub fn execute_plain(&self, sql: &str) -> Result<usize, WorkbenchError> {
        self.conn
            .execute(sql, [])
            .map_err(|e| WorkbenchError::statement(sql, e))
    }

    /// Rebuild the database file, reclaiming free pages. Blocks until done.
    pub fn vacuum(&self) -> Result<(), WorkbenchError> {
        self.conn
            .execute_batch("VACUUM")
            .map_err(|e| WorkbenchError::statement("VACUUM", e))?;
        info!("vacuum completed for {:?}", self.path);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Self {
        Self {
            conn: Connection::open_in_memory().unwrap(),
            path: PathBuf::from(":memory:"),
            current_table: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        assert!(!path.exists());

        let session = Session::open(&path).unwrap();
        session
            .execute_plain("CREATE TABLE \"t\" (\"x\" TEXT)")
            .unwrap();
        drop(session);
        assert!(path.exists());
    }

    #[test]
    fn test_execute_reports_statement_text_on_failure() {
        let session = Session::open_in_memory();
        let err = session
            .execute_plain("INSERT INTO missing VALUES (1)")
            .unwrap_err();
        assert!(err.to_string().contains("INSERT INTO missing"));
    }

    #[test]
    fn test_execute_binds_null_parameters() {
        let session = Session::open_in_memory();
        session
            .execute_plain("CREATE TABLE \"t\" (\"a\" TEXT, \"b\" TEXT)")
            .unwrap();
        let changed = session
            .execute(
                "INSERT INTO \"t\" (\"a\", \"b\") VALUES (?, ?)",
                &[Some("x".to_string()), None],
            )
            .unwrap();
        assert_eq!(changed, 1);

        let nulls: i64 = session
            .conn()
            .query_row("SELECT COUNT(*) FROM \"t\" WHERE \"b\" IS NULL", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(nulls, 1);
    }
}
