//! SQL export and import
//!
//! Export writes a script with one statement per line: the catalog's own
//! schema statements followed by literal INSERTs for every user table.
//! Import executes a whole script against the open connection.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use rusqlite::types::ValueRef;
use tracing::info;

use crate::error::WorkbenchError;

use super::session::Session;

/// Render one engine value as a SQL literal for the dump.
fn value_to_literal(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => {
            let text = String::from_utf8_lossy(t);
            format!("'{}'", text.replace('\'', "''"))
        }
        ValueRef::Blob(b) => {
            let mut hex = String::with_capacity(b.len() * 2);
            for byte in b {
                let _ = write!(hex, "{:02X}", byte);
            }
            format!("X'{}'", hex)
        }
    }
}

impl Session {
    /// Produce the full SQL script for the open database.
    pub fn dump_sql(&self) -> Result<String, WorkbenchError> {
        let mut script = String::from("BEGIN TRANSACTION;\n");

        // Schema objects exactly as the catalog stores them.
        let mut stmt = self.conn().prepare(
            "SELECT name, type, sql FROM sqlite_master \
             WHERE sql NOT NULL AND name NOT LIKE 'sqlite_%' \
             ORDER BY CASE type WHEN 'table' THEN 0 ELSE 1 END, name",
        )?;
        let objects = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut tables = Vec::new();
        for (name, object_type, sql) in &objects {
            script.push_str(sql);
            script.push_str(";\n");
            if object_type == "table" {
                tables.push(name.clone());
            }
        }

        for table in tables {
            let query = format!("SELECT * FROM \"{}\"", table);
            let mut stmt = self
                .conn()
                .prepare(&query)
                .map_err(|e| WorkbenchError::statement(&query, e))?;
            let column_count = stmt.column_count();
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                let mut literals = Vec::with_capacity(column_count);
                for i in 0..column_count {
                    literals.push(value_to_literal(row.get_ref(i)?));
                }
                let _ = writeln!(
                    script,
                    "INSERT INTO \"{}\" VALUES ({});",
                    table,
                    literals.join(", ")
                );
            }
        }

        script.push_str("COMMIT;\n");
        Ok(script)
    }

    /// Export the open database as a SQL script file.
    pub fn export_sql(&self, dest: &Path) -> Result<(), WorkbenchError> {
        let script = self.dump_sql()?;
        fs::write(dest, script)?;
        info!("exported database to {:?}", dest);
        Ok(())
    }

    /// Execute a SQL script file as a single batch against the connection.
    pub fn import_sql(&self, source: &Path) -> Result<(), WorkbenchError> {
        let script = fs::read_to_string(source)?;
        self.conn()
            .execute_batch(&script)
            .map_err(|e| WorkbenchError::statement(script, e))?;
        info!("imported SQL script from {:?}", source);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_session() -> Session {
        let session = Session::open_in_memory();
        session
            .execute_plain(
                "CREATE TABLE \"notes\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \
                 \"body\" TEXT, \"score\" REAL)",
            )
            .unwrap();
        session
            .execute_plain(
                "INSERT INTO \"notes\" (\"body\", \"score\") \
                 VALUES ('it''s fine', 1.5), (NULL, NULL)",
            )
            .unwrap();
        session
    }

    #[test]
    fn test_dump_contains_schema_and_data() {
        let script = seeded_session().dump_sql().unwrap();
        assert!(script.starts_with("BEGIN TRANSACTION;\n"));
        assert!(script.ends_with("COMMIT;\n"));
        assert!(script.contains("CREATE TABLE \"notes\""));
        assert!(script.contains("INSERT INTO \"notes\" VALUES (1, 'it''s fine', 1.5);"));
        assert!(script.contains("INSERT INTO \"notes\" VALUES (2, NULL, NULL);"));
    }

    #[test]
    fn test_export_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("dump.sql");
        seeded_session().export_sql(&script_path).unwrap();

        let restored = Session::open_in_memory();
        restored.import_sql(&script_path).unwrap();

        let data = restored.load_rows("notes").unwrap();
        assert_eq!(data.columns, vec!["id", "body", "score"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0][1].as_deref(), Some("it's fine"));
        assert_eq!(data.rows[1][1], None);
    }

    #[test]
    fn test_import_failure_surfaces_script() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("bad.sql");
        fs::write(&script_path, "CREATE TABLE broken (;").unwrap();

        let session = Session::open_in_memory();
        let err = session.import_sql(&script_path).unwrap_err();
        assert!(err.to_string().contains("CREATE TABLE broken"));
    }
}
