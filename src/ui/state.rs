//! UI view state
//!
//! Per-window widget state, separate from the shared app state. Dialog
//! windows wrap the headless controllers from `crate::dialogs`; nothing in
//! here talks to the engine directly.

use std::path::PathBuf;

use crate::db::{ColumnInfo, IndexInfo, StatementOutcome};
use crate::dialogs::{CreateTableController, RecordController};
use crate::sql::{FieldSpec, FieldType};

/// All transient window state for the workbench.
#[derive(Default)]
pub struct UiState {
    /// Row filter text above the data grid
    pub search_query: String,
    /// Selected row index into the loaded table data
    pub selected_row: Option<usize>,
    /// Create-table dialog, when open
    pub create_table: Option<CreateTableController>,
    /// Add-field sub-dialog of the create-table dialog
    pub field_draft: Option<FieldDraft>,
    /// Add/edit record dialog, when open
    pub record: Option<RecordController>,
    /// SQL console window, when open
    pub sql_console: Option<SqlConsoleState>,
    /// Table structure window, when open
    pub structure: Option<StructureViewState>,
    /// Settings window open flag
    pub settings_open: bool,
    /// Path text buffer while the settings window edits the backup dir
    pub settings_backup_dir: String,
    /// Path entry window for open/save style actions, when open
    pub file_prompt: Option<FilePrompt>,
    /// Destructive action awaiting confirmation
    pub pending_confirm: Option<PendingAction>,
    /// About window open flag
    pub about_open: bool,
}

/// One field being assembled in the add-field sub-dialog.
pub struct FieldDraft {
    pub name: String,
    pub field_type: FieldType,
    pub allow_null: bool,
    pub default_value: String,
    pub primary_key: bool,
    /// Validation error from the last accept attempt
    pub error: Option<String>,
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            field_type: FieldType::Text,
            allow_null: true,
            default_value: String::new(),
            primary_key: false,
            error: None,
        }
    }
}

impl FieldDraft {
    /// The logical field this draft describes.
    pub fn to_spec(&self) -> FieldSpec {
        FieldSpec {
            name: self.name.trim().to_string(),
            field_type: self.field_type,
            allow_null: self.allow_null,
            default_value: if self.default_value.trim().is_empty() {
                None
            } else {
                Some(self.default_value.trim().to_string())
            },
            primary_key: self.primary_key,
        }
    }
}

/// SQL console window state.
#[derive(Default)]
pub struct SqlConsoleState {
    /// Statement text
    pub query: String,
    /// Result of the last execution
    pub outcome: Option<StatementOutcome>,
    /// Status line inside the console
    pub status: String,
    /// Destination path buffer for saving the result
    pub save_path: String,
}

/// Table structure window contents, loaded once when opened.
pub struct StructureViewState {
    pub table: String,
    pub create_sql: Option<String>,
    pub columns: Vec<ColumnInfo>,
    pub indexes: Vec<IndexInfo>,
}

/// What a path-entry window is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePurpose {
    NewDatabase,
    OpenDatabase,
    ManualBackup,
    Restore,
    ExportSql,
    ImportSql,
}

impl FilePurpose {
    pub fn title(&self) -> &'static str {
        match self {
            FilePurpose::NewDatabase => "New database",
            FilePurpose::OpenDatabase => "Open database",
            FilePurpose::ManualBackup => "Save backup copy",
            FilePurpose::Restore => "Restore from backup",
            FilePurpose::ExportSql => "Export to SQL",
            FilePurpose::ImportSql => "Import from SQL",
        }
    }
}

/// Path-entry window state.
pub struct FilePrompt {
    pub purpose: FilePurpose,
    pub path: String,
}

impl FilePrompt {
    pub fn new(purpose: FilePurpose) -> Self {
        Self {
            purpose,
            path: String::new(),
        }
    }

    pub fn with_path(purpose: FilePurpose, path: impl Into<String>) -> Self {
        Self {
            purpose,
            path: path.into(),
        }
    }
}

/// A destructive action held until the user confirms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DropTable(String),
    DeleteRow { original: Vec<Option<String>> },
    Restore(PathBuf),
    ImportSql(PathBuf),
    Vacuum,
}

impl PendingAction {
    /// Confirmation message shown to the user.
    pub fn message(&self) -> String {
        match self {
            PendingAction::DropTable(table) => format!(
                "Drop table '{}'?\nAll data in it will be lost.",
                table
            ),
            PendingAction::DeleteRow { .. } => "Delete the selected record?".to_string(),
            PendingAction::Restore(path) => format!(
                "The current database will be replaced by the backup\n{:?}.\nContinue?",
                path
            ),
            PendingAction::ImportSql(path) => format!(
                "Importing {:?} may change the structure and data\nof the database. Continue?",
                path
            ),
            PendingAction::Vacuum => {
                "Vacuum the database?\nThis can take a while and blocks the window.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_draft_to_spec_trims_and_drops_blank_default() {
        let draft = FieldDraft {
            name: " age ".to_string(),
            field_type: FieldType::Integer,
            default_value: "  ".to_string(),
            ..FieldDraft::default()
        };
        let spec = draft.to_spec();
        assert_eq!(spec.name, "age");
        assert_eq!(spec.default_value, None);

        let draft = FieldDraft {
            name: "age".to_string(),
            default_value: " 18 ".to_string(),
            ..FieldDraft::default()
        };
        assert_eq!(draft.to_spec().default_value, Some("18".to_string()));
    }

    #[test]
    fn test_pending_action_messages_name_the_target() {
        assert!(PendingAction::DropTable("users".to_string())
            .message()
            .contains("users"));
        assert!(PendingAction::Vacuum.message().contains("Vacuum"));
    }
}
