//! Workbench views
//!
//! Render functions for the panels and modal windows. Views draw widgets
//! and report what the user asked for as small action enums; the app layer
//! owns the session and performs the actions.

pub mod data_grid;
pub mod dialog_windows;
pub mod prompts;
pub mod sql_console;
pub mod table_list;

pub use data_grid::{render_data_grid, GridAction};
pub use dialog_windows::{
    render_create_table_window, render_field_window, render_record_window,
    render_structure_window, CreateTableAction, FieldAction, RecordAction,
};
pub use prompts::{
    render_about_window, render_confirm_window, render_error_window, render_file_prompt,
    render_settings_window, PromptAction, SettingsAction,
};
pub use sql_console::{render_sql_console, SqlConsoleAction};
pub use table_list::{render_table_list, TableAction};
