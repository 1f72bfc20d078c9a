//! Schema introspection
//!
//! Reads the engine's own catalog (`sqlite_master` and the table/index
//! pragmas) into structured records. The catalog is the source of truth:
//! views reload from here after every committed dialog, never from the
//! dialog's in-memory spec.

use rusqlite::types::ValueRef;

use crate::error::WorkbenchError;
use crate::sql::{self, BuildError};

use super::session::Session;

/// One column as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type text, e.g. `INTEGER`.
    pub declared_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

/// One index as reported by `PRAGMA index_list` / `index_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: String,
    pub unique: bool,
    pub columns: Vec<String>,
}

/// A table's rows loaded for display, values rendered as text.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

fn checked_identifier(name: &str) -> Result<&str, WorkbenchError> {
    if sql::is_valid_identifier(name) {
        Ok(name)
    } else {
        Err(BuildError::BadIdentifier(name.to_string()).into())
    }
}

/// Render an engine value for display and round-tripping through the
/// record dialog. BLOBs are shown as lossy UTF-8.
pub fn value_to_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
    }
}

impl Session {
    /// User tables in name order, excluding the engine's internal tables.
    pub fn list_tables(&self) -> Result<Vec<String>, WorkbenchError> {
        let mut stmt = self.conn().prepare(
            "SELECT name FROM sqlite_master WHERE type='table' \
             AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Column definitions for a table, in declaration order.
    pub fn table_columns(&self, table: &str) -> Result<Vec<ColumnInfo>, WorkbenchError> {
        let table = checked_identifier(table)?;
        let mut stmt = self
            .conn()
            .prepare(&format!("PRAGMA table_info(\"{}\")", table))?;
        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    name: row.get(1)?,
                    declared_type: row.get(2)?,
                    not_null: row.get::<_, i64>(3)? != 0,
                    default_value: row.get(4)?,
                    primary_key: row.get::<_, i64>(5)? != 0,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// The stored `CREATE TABLE` text from the catalog, if present.
    pub fn table_sql(&self, table: &str) -> Result<Option<String>, WorkbenchError> {
        let sql: Option<String> = self
            .conn()
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type='table' AND name = ?",
                [table],
                |row| row.get(0),
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?
            .flatten();
        Ok(sql)
    }

    /// Indexes on a table, each with its column list.
    pub fn table_indexes(&self, table: &str) -> Result<Vec<IndexInfo>, WorkbenchError> {
        let table = checked_identifier(table)?;
        let mut stmt = self
            .conn()
            .prepare(&format!("PRAGMA index_list(\"{}\")", table))?;
        let heads = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(1)?, row.get::<_, i64>(2)? != 0))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut indexes = Vec::with_capacity(heads.len());
        for (name, unique) in heads {
            let mut info_stmt = self
                .conn()
                .prepare(&format!("PRAGMA index_info(\"{}\")", name))?;
            let columns = info_stmt
                .query_map([], |row| row.get::<_, String>(2))?
                .collect::<Result<Vec<_>, _>>()?;
            indexes.push(IndexInfo {
                name,
                unique,
                columns,
            });
        }
        Ok(indexes)
    }

    /// Load every row of a table for the data grid.
    pub fn load_rows(&self, table: &str) -> Result<TableData, WorkbenchError> {
        let table = checked_identifier(table)?;
        let query = format!("SELECT * FROM \"{}\"", table);
        let mut stmt = self
            .conn()
            .prepare(&query)
            .map_err(|e| WorkbenchError::statement(&query, e))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut rows = Vec::new();
        let mut result = stmt
            .query([])
            .map_err(|e| WorkbenchError::statement(&query, e))?;
        while let Some(row) = result.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for i in 0..columns.len() {
                values.push(value_to_text(row.get_ref(i)?));
            }
            rows.push(values);
        }
        Ok(TableData { columns, rows })
    }
}
