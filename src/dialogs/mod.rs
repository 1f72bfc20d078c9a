//! CRUD Dialog Controllers
//!
//! Headless state machines behind the modal dialogs. Each controller runs
//! `Open -> Collecting -> {Committed, Cancelled}`: collecting accepts
//! repeated edits, commit succeeds only once the builder validates and the
//! engine accepts the statement, and an engine rejection drops back to
//! Collecting with the error surfaced. The UI layer renders them but owns
//! no transition logic, so they are testable without a window.

pub mod create_table;
pub mod record;

pub use create_table::CreateTableController;
pub use record::{delete_record, RecordController, RecordMode};

/// Lifecycle of one modal dialog instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Just opened, nothing entered yet.
    #[default]
    Open,
    /// User input received, not yet committed.
    Collecting,
    /// Statement accepted by the engine; input is now stale, the parent
    /// view must reload from the engine.
    Committed,
    /// Explicitly cancelled; all collected input is discarded.
    Cancelled,
}

impl DialogState {
    /// Terminal states close the dialog and unblock the parent view.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogState::Committed | DialogState::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!DialogState::Open.is_terminal());
        assert!(!DialogState::Collecting.is_terminal());
        assert!(DialogState::Committed.is_terminal());
        assert!(DialogState::Cancelled.is_terminal());
    }
}
