//! Add/edit record dialog controller

use crate::db::{ColumnInfo, Session};
use crate::error::WorkbenchError;
use crate::sql::{build_delete, build_insert, build_update, RowSpec};

use super::DialogState;

/// Whether the dialog inserts a new row or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    Insert,
    Edit,
}

/// Collects one text value per column and commits it as an INSERT or
/// UPDATE. Blank input means NULL; the original row values drive the
/// UPDATE's WHERE clause.
#[derive(Debug, Clone)]
pub struct RecordController {
    state: DialogState,
    pub table: String,
    pub columns: Vec<ColumnInfo>,
    /// One text buffer per column, in column order.
    pub inputs: Vec<String>,
    original: Option<Vec<Option<String>>>,
    pub last_error: Option<String>,
}

impl RecordController {
    /// Open the dialog for a new row of `table`.
    pub fn for_insert(session: &Session, table: &str) -> Result<Self, WorkbenchError> {
        let columns = session.table_columns(table)?;
        let inputs = vec![String::new(); columns.len()];
        Ok(Self {
            state: DialogState::Open,
            table: table.to_string(),
            columns,
            inputs,
            original: None,
            last_error: None,
        })
    }

    /// Open the dialog for an existing row, pre-filled with its values.
    pub fn for_edit(
        session: &Session,
        table: &str,
        original: Vec<Option<String>>,
    ) -> Result<Self, WorkbenchError> {
        let columns = session.table_columns(table)?;
        let inputs = columns
            .iter()
            .enumerate()
            .map(|(i, _)| original.get(i).cloned().flatten().unwrap_or_default())
            .collect();
        Ok(Self {
            state: DialogState::Open,
            table: table.to_string(),
            columns,
            inputs,
            original: Some(original),
            last_error: None,
        })
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn mode(&self) -> RecordMode {
        if self.original.is_some() {
            RecordMode::Edit
        } else {
            RecordMode::Insert
        }
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(input) = self.inputs.get_mut(index) {
            *input = value.into();
            self.state = DialogState::Collecting;
        }
    }

    /// The collected row: trimmed inputs in column order, blank as NULL.
    pub fn row_spec(&self) -> RowSpec {
        RowSpec {
            columns: self
                .columns
                .iter()
                .zip(&self.inputs)
                .map(|(column, input)| {
                    let trimmed = input.trim();
                    let value = if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    };
                    (column.name.clone(), value)
                })
                .collect(),
        }
    }

    /// The row an INSERT uses: blank columns are omitted entirely so the
    /// engine applies column defaults and autoincrement instead of
    /// receiving an explicit NULL.
    fn insert_row_spec(&self) -> RowSpec {
        RowSpec {
            columns: self
                .row_spec()
                .columns
                .into_iter()
                .filter(|(_, value)| value.is_some())
                .collect(),
        }
    }

    fn original_row(&self) -> Option<RowSpec> {
        let original = self.original.as_ref()?;
        Some(RowSpec {
            columns: self
                .columns
                .iter()
                .enumerate()
                .map(|(i, column)| (column.name.clone(), original.get(i).cloned().flatten()))
                .collect(),
        })
    }

    /// Build and execute the INSERT or UPDATE for the collected row.
    ///
    /// Engine rejections (constraint violations and the like) return the
    /// dialog to Collecting with the statement text surfaced.
    pub fn commit(&mut self, session: &Session) -> Result<usize, WorkbenchError> {
        debug_assert!(!self.state.is_terminal());
        let built = match self.original_row() {
            Some(original) => build_update(&self.table, &self.row_spec(), &original),
            None => build_insert(&self.table, &self.insert_row_spec()),
        };
        let (sql, params) = match built {
            Ok(built) => built,
            Err(e) => {
                self.state = DialogState::Collecting;
                self.last_error = Some(e.to_string());
                return Err(e.into());
            }
        };

        match session.execute(&sql, &params) {
            Ok(changed) => {
                self.state = DialogState::Committed;
                self.last_error = None;
                Ok(changed)
            }
            Err(e) => {
                self.state = DialogState::Collecting;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.state = DialogState::Cancelled;
        }
    }
}

/// Delete one row identified by its original values.
///
/// Confirmation happens in the UI; this builds the DELETE with the same
/// WHERE rule as update (NULL originals become `IS NULL`) and executes it.
pub fn delete_record(
    session: &Session,
    table: &str,
    columns: &[ColumnInfo],
    original: &[Option<String>],
) -> Result<usize, WorkbenchError> {
    let row = RowSpec {
        columns: columns
            .iter()
            .enumerate()
            .map(|(i, column)| (column.name.clone(), original.get(i).cloned().flatten()))
            .collect(),
    };
    let (sql, params) = build_delete(table, &row)?;
    session.execute(&sql, &params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_session() -> Session {
        let session = Session::open_in_memory();
        session
            .execute_plain(
                "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \
                 \"name\" TEXT NOT NULL, \"age\" INTEGER DEFAULT 18)",
            )
            .unwrap();
        session
    }

    #[test]
    fn test_insert_blank_pk_uses_autoincrement() {
        let session = users_session();
        let mut controller = RecordController::for_insert(&session, "users").unwrap();
        assert_eq!(controller.mode(), RecordMode::Insert);
        assert_eq!(controller.state(), DialogState::Open);

        controller.set_value(1, "Ann");
        assert_eq!(controller.state(), DialogState::Collecting);
        controller.set_value(2, "30");
        controller.commit(&session).unwrap();
        assert_eq!(controller.state(), DialogState::Committed);

        let data = session.load_rows("users").unwrap();
        assert_eq!(data.rows[0][0].as_deref(), Some("1"));
        assert_eq!(data.rows[0][1].as_deref(), Some("Ann"));
    }

    #[test]
    fn test_constraint_violation_returns_to_collecting() {
        let session = users_session();
        let mut controller = RecordController::for_insert(&session, "users").unwrap();
        // "name" is NOT NULL and has no default; leaving it blank must be
        // rejected by the engine.
        controller.set_value(2, "30");
        let err = controller.commit(&session).unwrap_err();
        assert!(err.to_string().contains("INSERT INTO \"users\""));
        assert_eq!(controller.state(), DialogState::Collecting);
        assert!(controller.last_error.is_some());

        // Fix the input and retry in the same dialog instance.
        controller.set_value(1, "Bob");
        controller.commit(&session).unwrap();
        assert_eq!(controller.state(), DialogState::Committed);
    }

    #[test]
    fn test_edit_prefills_and_updates_by_original_values() {
        let session = users_session();
        session
            .execute_plain("INSERT INTO \"users\" (\"name\", \"age\") VALUES ('Ann', 30)")
            .unwrap();

        let original = vec![
            Some("1".to_string()),
            Some("Ann".to_string()),
            Some("30".to_string()),
        ];
        let mut controller =
            RecordController::for_edit(&session, "users", original).unwrap();
        assert_eq!(controller.mode(), RecordMode::Edit);
        assert_eq!(controller.inputs, vec!["1", "Ann", "30"]);

        controller.set_value(2, "31");
        let changed = controller.commit(&session).unwrap();
        assert_eq!(changed, 1);

        let data = session.load_rows("users").unwrap();
        assert_eq!(data.rows[0][2].as_deref(), Some("31"));
    }

    #[test]
    fn test_edit_null_original_matches_with_is_null() {
        let session = users_session();
        session
            .execute_plain("INSERT INTO \"users\" (\"name\", \"age\") VALUES ('Ann', NULL)")
            .unwrap();

        let original = vec![Some("1".to_string()), Some("Ann".to_string()), None];
        let mut controller =
            RecordController::for_edit(&session, "users", original).unwrap();
        controller.set_value(2, "25");
        assert_eq!(controller.commit(&session).unwrap(), 1);

        let data = session.load_rows("users").unwrap();
        assert_eq!(data.rows[0][2].as_deref(), Some("25"));
    }

    #[test]
    fn test_cancel_leaves_table_unchanged() {
        let session = users_session();
        let mut controller = RecordController::for_insert(&session, "users").unwrap();
        controller.set_value(1, "Ghost");
        controller.cancel();
        assert_eq!(controller.state(), DialogState::Cancelled);
        assert!(session.load_rows("users").unwrap().rows.is_empty());
    }

    #[test]
    fn test_delete_row_with_null_column_removes_exactly_one() {
        let session = users_session();
        session
            .execute_plain(
                "INSERT INTO \"users\" (\"name\", \"age\") \
                 VALUES ('Ann', NULL), ('Bob', NULL), ('Cid', 40)",
            )
            .unwrap();

        let columns = session.table_columns("users").unwrap();
        let original = vec![Some("1".to_string()), Some("Ann".to_string()), None];
        let deleted = delete_record(&session, "users", &columns, &original).unwrap();
        assert_eq!(deleted, 1);

        let data = session.load_rows("users").unwrap();
        assert_eq!(data.rows.len(), 2);
        assert!(data
            .rows
            .iter()
            .all(|row| row[1].as_deref() != Some("Ann")));
    }

    #[test]
    fn test_insert_with_omitted_default_reads_back_default() {
        // End-to-end: age left blank on insert, stored age reads back as
        // 18 because the blank column is omitted and the default applies.
        let session = users_session();
        let mut controller = RecordController::for_insert(&session, "users").unwrap();
        controller.set_value(1, "Ann");
        controller.commit(&session).unwrap();

        let data = session.load_rows("users").unwrap();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0][1].as_deref(), Some("Ann"));
        assert_eq!(data.rows[0][2].as_deref(), Some("18"));
    }
}
