//! Shared application state
//!
//! Configuration plus runtime status, shared between the UI views behind
//! one lock. The database session itself is not in here; it is owned by
//! the app and passed explicitly to every operation.

use crate::config::AppConfig;

/// Central shared state for the workbench window.
#[derive(Debug, Clone, Default)]
pub struct SharedAppState {
    /// Application configuration
    pub config: AppConfig,
    /// Runtime state (not persisted)
    pub runtime: RuntimeState,
}

impl SharedAppState {
    /// Create a new shared state with the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            runtime: RuntimeState::default(),
        }
    }
}

/// Runtime state that is not persisted
#[derive(Debug, Clone)]
pub struct RuntimeState {
    /// Status line at the bottom of the window
    pub status: String,
    /// Last error message (if any), shown as a blocking dialog
    pub last_error: Option<String>,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            last_error: None,
        }
    }
}

impl RuntimeState {
    /// Set the status line
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Set an error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }

    /// Clear any error state
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
