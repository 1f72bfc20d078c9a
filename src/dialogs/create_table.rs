//! Create-table dialog controller

use crate::db::Session;
use crate::error::WorkbenchError;
use crate::sql::{build_create_table, builder::validate_field, BuildError, FieldSpec, TableSpec};

use super::DialogState;

/// Collects a table name and field list, then creates the table through
/// the session. Seeded with an `id INTEGER` primary key like the field
/// list a fresh dialog shows.
#[derive(Debug, Clone)]
pub struct CreateTableController {
    state: DialogState,
    pub table_name: String,
    pub fields: Vec<FieldSpec>,
    /// Last engine or validation error, shown inside the dialog.
    pub last_error: Option<String>,
}

impl Default for CreateTableController {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateTableController {
    pub fn new() -> Self {
        Self {
            state: DialogState::Open,
            table_name: String::new(),
            fields: vec![FieldSpec::id_primary_key()],
            last_error: None,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Validate and append a field assembled in the field sub-dialog.
    ///
    /// A primary-key field is forced non-nullable here rather than asking
    /// the user to fix the combination.
    pub fn add_field(&mut self, mut field: FieldSpec) -> Result<(), BuildError> {
        debug_assert!(!self.state.is_terminal());
        validate_field(&field)?;
        if field.primary_key {
            field.allow_null = false;
        }
        self.fields.push(field);
        self.state = DialogState::Collecting;
        Ok(())
    }

    pub fn remove_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.fields.remove(index);
            self.state = DialogState::Collecting;
        }
    }

    pub fn set_table_name(&mut self, name: impl Into<String>) {
        self.table_name = name.into();
        self.state = DialogState::Collecting;
    }

    /// The logical spec as currently collected.
    pub fn spec(&self) -> TableSpec {
        TableSpec {
            name: self.table_name.trim().to_string(),
            fields: self.fields.clone(),
        }
    }

    /// The statement that commit would execute, for the confirmation view.
    pub fn preview_sql(&self) -> Result<String, BuildError> {
        build_create_table(&self.spec())
    }

    /// Build and execute the CREATE TABLE statement.
    ///
    /// Validation failures and engine rejections both leave the dialog in
    /// Collecting with the error surfaced; only an accepted statement
    /// commits. Returns the executed statement text.
    pub fn commit(&mut self, session: &Session) -> Result<String, WorkbenchError> {
        debug_assert!(!self.state.is_terminal());
        let sql = match self.preview_sql() {
            Ok(sql) => sql,
            Err(e) => {
                self.state = DialogState::Collecting;
                self.last_error = Some(e.to_string());
                return Err(e.into());
            }
        };

        match session.execute_plain(&sql) {
            Ok(_) => {
                self.state = DialogState::Committed;
                self.last_error = None;
                Ok(sql)
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
