//! Workbench application
//!
//! Owns the single database session and the loaded table snapshot, renders
//! the panels and windows, and performs the actions the views report.
//! Everything shown in the UI is reloaded from the engine catalog after a
//! committed change; no view mutates state on its own.

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;
use parking_lot::RwLock;
use tracing::warn;

use crate::backup;
use crate::config::save_config;
use crate::db::{Session, StatementOutcome, TableData};
use crate::dialogs::{delete_record, CreateTableController, RecordController, RecordMode};
use crate::error::WorkbenchError;
use crate::shared::SharedAppState;
use crate::storage;
use crate::ui::state::{FieldDraft, FilePrompt, FilePurpose, PendingAction, StructureViewState, UiState};
use crate::ui::theme;
use crate::ui::views::{
    render_about_window, render_confirm_window, render_create_table_window, render_data_grid,
    render_error_window, render_field_window, render_file_prompt, render_record_window,
    render_settings_window, render_sql_console, render_structure_window, render_table_list,
    CreateTableAction, FieldAction, GridAction, PromptAction, RecordAction, SettingsAction,
    SqlConsoleAction, TableAction,
};

/// A menu bar item that was clicked this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    NewDatabase,
    OpenDatabase,
    ManualBackup,
    Restore,
    ExportSql,
    ImportSql,
    Quit,
    SqlConsole,
    Vacuum,
    Settings,
    About,
}

/// The main workbench window.
pub struct WorkbenchApp {
    /// Shared application state
    shared_state: Arc<RwLock<SharedAppState>>,
    /// The open database, if any. At most one handle is ever open.
    session: Option<Session>,
    /// Tables from the catalog, reloaded after every committed change
    tables: Vec<String>,
    /// Rows of the current table, as shown in the grid
    table_data: TableData,
    /// Transient window state
    ui_state: UiState,
    /// Whether theme has been applied
    theme_applied: bool,
}

impl WorkbenchApp {
    /// Create a new workbench window over the shared state.
    pub fn new(shared_state: Arc<RwLock<SharedAppState>>) -> Self {
        Self {
            shared_state,
            session: None,
            tables: Vec::new(),
            table_data: TableData::default(),
            ui_state: UiState::default(),
            theme_applied: false,
        }
    }

    /// Create eframe options for the workbench window.
    pub fn options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 650.0])
                .with_min_inner_size([760.0, 480.0])
                .with_title("SQLite Workbench"),
            ..Default::default()
        }
    }

    /// Open (or create) the database at `path`, replacing any open session.
    ///
    /// The old handle is dropped before the new file is touched, so a
    /// restore of the same path never races an open connection.
    pub fn open_database(&mut self, path: PathBuf) {
        self.session = None;
        self.tables.clear();
        self.table_data = TableData::default();
        self.ui_state.selected_row = None;
        self.ui_state.search_query.clear();

        let existed = path.exists();
        match Session::open(&path) {
            Ok(session) => {
                self.session = Some(session);
                if existed {
                    self.auto_backup_now();
                }
                self.reload();
                {
                    let mut state = self.shared_state.write();
                    state.config.general.last_file = Some(path.clone());
                    state.runtime.set_status(format!("Opened {}", path.display()));
                }
                self.persist_config();
            }
            Err(e) => {
                self.shared_state
                    .write()
                    .runtime
                    .set_error(format!("Cannot open {}: {}", path.display(), e));
            }
        }
    }

    /// Reload the table list and the current table's rows from the catalog.
    fn reload(&mut self) {
        self.ui_state.selected_row = None;
        let Some(session) = self.session.as_mut() else {
            self.tables.clear();
            self.table_data = TableData::default();
            return;
        };

        match session.list_tables() {
            Ok(tables) => self.tables = tables,
            Err(e) => {
                self.shared_state.write().runtime.set_error(e.to_string());
                return;
            }
        }

        if let Some(current) = &session.current_table {
            if !self.tables.contains(current) {
                session.current_table = None;
            }
        }

        match &session.current_table {
            Some(current) => match session.load_rows(current) {
                Ok(data) => self.table_data = data,
                Err(e) => {
                    self.table_data = TableData::default();
                    self.shared_state.write().runtime.set_error(e.to_string());
                }
            },
            None => self.table_data = TableData::default(),
        }
    }

    fn select_table(&mut self, table: String) {
        if let Some(session) = self.session.as_mut() {
            session.current_table = Some(table);
        }
        self.ui_state.search_query.clear();
        self.reload();
    }

    /// Reload and take an automatic backup after a committed change.
    fn after_mutation(&mut self, status: impl Into<String>) {
        self.reload();
        self.auto_backup_now();
        self.shared_state.write().runtime.set_status(status);
    }

    fn auto_backup_now(&self) {
        let (enabled, dir, retain) = {
            let state = self.shared_state.read();
            (
                state.config.backup.auto_backup,
                state.config.backup.dir(),
                state.config.backup.retain,
            )
        };
        if !enabled {
            return;
        }
        if let Some(session) = &self.session {
            backup::auto_backup(&dir, session.path(), retain);
        }
    }

    fn persist_config(&self) {
        let config = self.shared_state.read().config.clone();
        match storage::get_config_dir() {
            Ok(dir) => {
                if let Err(e) = save_config(&config, &dir.join("config.toml")) {
                    warn!("failed to save config: {}", e);
                }
            }
            Err(e) => warn!("no config directory: {}", e),
        }
    }

    fn set_status(&self, status: impl Into<String>) {
        self.shared_state.write().runtime.set_status(status);
    }

    fn set_error(&self, error: impl Into<String>) {
        self.shared_state.write().runtime.set_error(error);
    }

    /// Queue a destructive action behind the confirmation window, or
    /// perform it at once when confirmations are disabled.
    fn request(&mut self, action: PendingAction) {
        if self.shared_state.read().config.general.confirm_destructive {
            self.ui_state.pending_confirm = Some(action);
        } else {
            self.perform(action);
        }
    }

    /// Perform a (confirmed) destructive action.
    fn perform(&mut self, action: PendingAction) {
        match action {
            PendingAction::DropTable(table) => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                let sql = format!("DROP TABLE \"{}\"", table);
                match session.execute_plain(&sql) {
                    Ok(_) => {
                        if session.current_table.as_deref() == Some(table.as_str()) {
                            session.current_table = None;
                        }
                        self.after_mutation(format!("Table '{}' dropped", table));
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            PendingAction::DeleteRow { original } => {
                let result = match &self.session {
                    Some(session) => match &session.current_table {
                        Some(table) => session
                            .table_columns(table)
                            .and_then(|columns| {
                                delete_record(session, table, &columns, &original)
                            }),
                        None => return,
                    },
                    None => return,
                };
                match result {
                    Ok(deleted) => {
                        self.after_mutation(format!("Deleted {} record(s)", deleted))
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            PendingAction::Restore(backup_path) => {
                let Some(session) = self.session.take() else {
                    return;
                };
                // Close the handle before the file is overwritten.
                let active = session.path().to_path_buf();
                drop(session);
                match backup::restore(&backup_path, &active) {
                    Ok(()) => {
                        self.set_status(format!("Restored from {}", backup_path.display()));
                    }
                    Err(e) => self.set_error(format!("Restore failed: {}", e)),
                }
                // Reconnect either way; the file is whatever the copy left.
                self.open_database(active);
            }
            PendingAction::ImportSql(path) => {
                let result = match &self.session {
                    Some(session) => session.import_sql(&path),
                    None => return,
                };
                match result {
                    Ok(()) => self.after_mutation(format!("Imported {}", path.display())),
                    Err(e) => self.set_error(format!("Import failed: {}", e)),
                }
            }
            PendingAction::Vacuum => {
                let result = match &self.session {
                    Some(session) => session.vacuum(),
                    None => return,
                };
                match result {
                    Ok(()) => self.set_status("Vacuum completed"),
                    Err(e) => self.set_error(e.to_string()),
                }
            }
        }
    }

    /// Dispatch an accepted path-entry window.
    fn handle_file_prompt(&mut self, prompt: FilePrompt) {
        let path = PathBuf::from(prompt.path.trim());
        match prompt.purpose {
            FilePurpose::NewDatabase | FilePurpose::OpenDatabase => {
                self.open_database(path);
            }
            FilePurpose::ManualBackup => {
                let result = match &self.session {
                    Some(session) => backup::manual_backup(session.path(), &path),
                    None => return,
                };
                match result {
                    Ok(()) => self.set_status(format!("Backup saved to {}", path.display())),
                    Err(e) => self.set_error(format!("Backup failed: {}", e)),
                }
            }
            FilePurpose::Restore => self.request(PendingAction::Restore(path)),
            FilePurpose::ExportSql => {
                let result = match &self.session {
                    Some(session) => session.export_sql(&path),
                    None => return,
                };
                match result {
                    Ok(()) => self.set_status(format!("Exported to {}", path.display())),
                    Err(e) => self.set_error(format!("Export failed: {}", e)),
                }
            }
            FilePurpose::ImportSql => self.request(PendingAction::ImportSql(path)),
        }
    }

    fn handle_menu_action(&mut self, action: MenuAction, ctx: &egui::Context) {
        match action {
            MenuAction::NewDatabase => {
                self.ui_state.file_prompt = Some(FilePrompt::new(FilePurpose::NewDatabase));
            }
            MenuAction::OpenDatabase => {
                self.ui_state.file_prompt = Some(FilePrompt::new(FilePurpose::OpenDatabase));
            }
            MenuAction::ManualBackup => {
                if let Some(session) = &self.session {
                    let suggested = self
                        .shared_state
                        .read()
                        .config
                        .backup
                        .dir()
                        .join(backup::manual_backup_name(session.path()));
                    self.ui_state.file_prompt = Some(FilePrompt::with_path(
                        FilePurpose::ManualBackup,
                        suggested.display().to_string(),
                    ));
                }
            }
            MenuAction::Restore => {
                self.ui_state.file_prompt = Some(FilePrompt::new(FilePurpose::Restore));
            }
            MenuAction::ExportSql => {
                self.ui_state.file_prompt = Some(FilePrompt::new(FilePurpose::ExportSql));
            }
            MenuAction::ImportSql => {
                self.ui_state.file_prompt = Some(FilePrompt::new(FilePurpose::ImportSql));
            }
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::SqlConsole => {
                self.ui_state.sql_console.get_or_insert_with(Default::default);
            }
            MenuAction::Vacuum => self.request(PendingAction::Vacuum),
            MenuAction::Settings => {
                let backup_dir = self.shared_state.read().config.backup.backup_dir.clone();
                self.ui_state.settings_backup_dir = backup_dir
                    .map(|d| d.display().to_string())
                    .unwrap_or_default();
                self.ui_state.settings_open = true;
            }
            MenuAction::About => self.ui_state.about_open = true,
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        let has_session = self.session.is_some();
        let mut action = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New database...").clicked() {
                        action = Some(MenuAction::NewDatabase);
                        ui.close_menu();
                    }
                    if ui.button("Open database...").clicked() {
                        action = Some(MenuAction::OpenDatabase);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(has_session, egui::Button::new("Backup copy..."))
                        .clicked()
                    {
                        action = Some(MenuAction::ManualBackup);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(has_session, egui::Button::new("Restore from backup..."))
                        .clicked()
                    {
                        action = Some(MenuAction::Restore);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(has_session, egui::Button::new("Export to SQL..."))
                        .clicked()
                    {
                        action = Some(MenuAction::ExportSql);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(has_session, egui::Button::new("Import from SQL..."))
                        .clicked()
                    {
                        action = Some(MenuAction::ImportSql);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        action = Some(MenuAction::Quit);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Tools", |ui| {
                    if ui
                        .add_enabled(has_session, egui::Button::new("SQL console"))
                        .clicked()
                    {
                        action = Some(MenuAction::SqlConsole);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(has_session, egui::Button::new("Vacuum database"))
                        .clicked()
                    {
                        action = Some(MenuAction::Vacuum);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Settings...").clicked() {
                        action = Some(MenuAction::Settings);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        action = Some(MenuAction::About);
                        ui.close_menu();
                    }
                });
            });
        });

        if let Some(action) = action {
            self.handle_menu_action(action, ctx);
        }
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.shared_state.read().runtime.status.clone());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match &self.session {
                        Some(session) => {
                            let table = session
                                .current_table
                                .as_deref()
                                .map(|t| format!("  |  {} ({} rows)", t, self.table_data.rows.len()))
                                .unwrap_or_default();
                            ui.label(format!("{}{}", session.file_name(), table));
                        }
                        None => {
                            ui.label("No database");
                        }
                    }
                });
            });
        });
    }

    fn handle_grid_action(&mut self, action: GridAction) {
        let Some(table) = self
            .session
            .as_ref()
            .and_then(|s| s.current_table.clone())
        else {
            return;
        };

        match action {
            GridAction::AddRecord => {
                let result = match &self.session {
                    Some(session) => RecordController::for_insert(session, &table),
                    None => return,
                };
                match result {
                    Ok(controller) => self.ui_state.record = Some(controller),
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            GridAction::EditRecord => {
                let Some(original) = self
                    .ui_state
                    .selected_row
                    .and_then(|i| self.table_data.rows.get(i).cloned())
                else {
                    return;
                };
                let result = match &self.session {
                    Some(session) => RecordController::for_edit(session, &table, original),
                    None => return,
                };
                match result {
                    Ok(controller) => self.ui_state.record = Some(controller),
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            GridAction::DeleteRecord => {
                if let Some(original) = self
                    .ui_state
                    .selected_row
                    .and_then(|i| self.table_data.rows.get(i).cloned())
                {
                    self.request(PendingAction::DeleteRow { original });
                }
            }
            GridAction::Refresh => {
                self.reload();
                self.set_status("Refreshed");
            }
        }
    }

    fn open_structure(&mut self, table: String) {
        let Some(session) = &self.session else {
            return;
        };
        let loaded = session.table_sql(&table).and_then(|create_sql| {
            Ok(StructureViewState {
                create_sql,
                columns: session.table_columns(&table)?,
                indexes: session.table_indexes(&table)?,
                table,
            })
        });
        match loaded {
            Ok(view) => self.ui_state.structure = Some(view),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn execute_console(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let Some(console) = self.ui_state.sql_console.as_mut() else {
            return;
        };
        let sql = console.query.trim().to_string();
        if sql.is_empty() {
            console.status = "Enter a statement".to_string();
            return;
        }

        let mut mutated = false;
        match session.run_statement(&sql) {
            Ok(StatementOutcome::Rows { columns, rows }) => {
                console.status = format!("{} row(s)", rows.len());
                console.outcome = Some(StatementOutcome::Rows { columns, rows });
            }
            Ok(StatementOutcome::Affected(n)) => {
                console.status = format!("Done, {} row(s) affected", n);
                console.outcome = Some(StatementOutcome::Affected(n));
                mutated = true;
            }
            Err(e) => {
                console.status = format!("Error: {}", e);
            }
        }
        if mutated {
            self.after_mutation("Statement executed");
        }
    }

    fn save_console_result(&mut self) {
        let Some(console) = self.ui_state.sql_console.as_mut() else {
            return;
        };
        let Some(StatementOutcome::Rows { columns, rows }) = &console.outcome else {
            return;
        };
        let path = PathBuf::from(console.save_path.trim());
        if path.as_os_str().is_empty() {
            console.status = "Enter a destination path".to_string();
            return;
        }
        match write_rows_csv(&path, columns, rows) {
            Ok(()) => console.status = format!("Saved to {}", path.display()),
            Err(e) => console.status = format!("Error: {}", e),
        }
    }

    fn render_windows(&mut self, ctx: &egui::Context) {
        // Field sub-dialog feeds the create-table dialog.
        if let Some(mut draft) = self.ui_state.field_draft.take() {
            match render_field_window(ctx, &mut draft) {
                Some(FieldAction::Accept) => {
                    if let Some(controller) = self.ui_state.create_table.as_mut() {
                        if let Err(e) = controller.add_field(draft.to_spec()) {
                            draft.error = Some(e.to_string());
                            self.ui_state.field_draft = Some(draft);
                        }
                    }
                }
                Some(FieldAction::Cancel) => {}
                None => self.ui_state.field_draft = Some(draft),
            }
        }

        let mut created_table = None;
        let mut close_create = false;
        if let Some(controller) = self.ui_state.create_table.as_mut() {
            match render_create_table_window(ctx, controller) {
                Some(CreateTableAction::AddField) => {
                    self.ui_state.field_draft = Some(FieldDraft::default());
                }
                Some(CreateTableAction::RemoveField(i)) => controller.remove_field(i),
                Some(CreateTableAction::Create) => {
                    if let Some(session) = self.session.as_ref() {
                        if controller.commit(session).is_ok() {
                            created_table = Some(controller.spec().name);
                            close_create = true;
                        }
                        // On failure the dialog stays open showing the error.
                    }
                }
                Some(CreateTableAction::Cancel) => {
                    controller.cancel();
                    close_create = true;
                }
                None => {}
            }
        }
        if close_create {
            self.ui_state.create_table = None;
            self.ui_state.field_draft = None;
        }
        if let Some(table) = created_table {
            self.after_mutation(format!("Table '{}' created", table));
            self.select_table(table);
        }

        let mut record_status = None;
        let mut close_record = false;
        if let Some(controller) = self.ui_state.record.as_mut() {
            match render_record_window(ctx, controller) {
                Some(RecordAction::Save) => {
                    if let Some(session) = self.session.as_ref() {
                        let mode = controller.mode();
                        if controller.commit(session).is_ok() {
                            record_status = Some(match mode {
                                RecordMode::Insert => "Record added",
                                RecordMode::Edit => "Record updated",
                            });
                            close_record = true;
                        }
                    }
                }
                Some(RecordAction::Cancel) => {
                    controller.cancel();
                    close_record = true;
                }
                None => {}
            }
        }
        if close_record {
            self.ui_state.record = None;
        }
        if let Some(status) = record_status {
            self.after_mutation(status);
        }

        if let Some(view) = &self.ui_state.structure {
            if render_structure_window(ctx, view) {
                self.ui_state.structure = None;
            }
        }

        let mut console_action = None;
        if let Some(console) = self.ui_state.sql_console.as_mut() {
            console_action = render_sql_console(ctx, console);
        }
        match console_action {
            Some(SqlConsoleAction::Execute) => self.execute_console(),
            Some(SqlConsoleAction::Clear) => {
                if let Some(console) = self.ui_state.sql_console.as_mut() {
                    console.query.clear();
                    console.outcome = None;
                    console.status.clear();
                }
            }
            Some(SqlConsoleAction::SaveResult) => self.save_console_result(),
            Some(SqlConsoleAction::Close) => self.ui_state.sql_console = None,
            None => {}
        }

        if self.ui_state.settings_open {
            let action = {
                let mut state = self.shared_state.write();
                render_settings_window(
                    ctx,
                    &mut state.config,
                    &mut self.ui_state.settings_backup_dir,
                )
            };
            match action {
                Some(SettingsAction::Save) => {
                    {
                        let mut state = self.shared_state.write();
                        let dir = self.ui_state.settings_backup_dir.trim();
                        state.config.backup.backup_dir = if dir.is_empty() {
                            None
                        } else {
                            Some(PathBuf::from(dir))
                        };
                    }
                    self.persist_config();
                    self.ui_state.settings_open = false;
                    self.set_status("Settings saved");
                }
                Some(SettingsAction::Close) => self.ui_state.settings_open = false,
                None => {}
            }
        }

        if let Some(mut prompt) = self.ui_state.file_prompt.take() {
            match render_file_prompt(ctx, &mut prompt) {
                Some(PromptAction::Accept) => self.handle_file_prompt(prompt),
                Some(PromptAction::Cancel) => {}
                None => self.ui_state.file_prompt = Some(prompt),
            }
        }

        if let Some(pending) = self.ui_state.pending_confirm.take() {
            match render_confirm_window(ctx, &pending) {
                Some(true) => self.perform(pending),
                Some(false) => {}
                None => self.ui_state.pending_confirm = Some(pending),
            }
        }

        let error = self.shared_state.read().runtime.last_error.clone();
        if let Some(message) = error {
            if render_error_window(ctx, &message) {
                self.shared_state.write().runtime.clear_error();
            }
        }

        if self.ui_state.about_open && render_about_window(ctx) {
            self.ui_state.about_open = false;
        }
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        if self.session.is_some() {
            let table_action = egui::SidePanel::left("table_panel")
                .resizable(true)
                .default_width(200.0)
                .show(ctx, |ui| {
                    let current = self
                        .session
                        .as_ref()
                        .and_then(|s| s.current_table.as_deref());
                    render_table_list(ui, &self.tables, current)
                })
                .inner;
            match table_action {
                Some(TableAction::Select(table)) => self.select_table(table),
                Some(TableAction::CreateTable) => {
                    self.ui_state.create_table = Some(CreateTableController::new());
                }
                Some(TableAction::DropTable(table)) => {
                    self.request(PendingAction::DropTable(table));
                }
                Some(TableAction::ShowStructure(table)) => self.open_structure(table),
                None => {}
            }
        }

        let grid_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.session.is_none() {
                    ui.centered_and_justified(|ui| {
                        ui.label("Open a database from the File menu");
                    });
                    return None;
                }
                render_data_grid(
                    ui,
                    &self.table_data,
                    &mut self.ui_state.search_query,
                    &mut self.ui_state.selected_row,
                )
            })
            .inner;
        if let Some(action) = grid_action {
            self.handle_grid_action(action);
        }

        self.render_windows(ctx);
    }
}

/// Write a rows result as CSV: header line, then one line per row, with
/// NULL rendered as an empty field.
fn write_rows_csv(
    path: &std::path::Path,
    columns: &[String],
    rows: &[Vec<Option<String>>],
) -> Result<(), WorkbenchError> {
    let mut out = String::new();
    out.push_str(
        &columns
            .iter()
            .map(|c| csv_field(c))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');
    for row in rows {
        let line = row
            .iter()
            .map(|value| value.as_deref().map(csv_field).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    std::fs::write(path, out)?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Run the workbench window, optionally opening `initial` at startup.
pub fn run_workbench(
    shared_state: Arc<RwLock<SharedAppState>>,
    initial: Option<PathBuf>,
) -> Result<(), eframe::Error> {
    let mut app = WorkbenchApp::new(shared_state);
    if let Some(path) = initial {
        app.open_database(path);
    }
    eframe::run_native(
        "SQLite Workbench",
        WorkbenchApp::options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_write_rows_csv_renders_null_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_rows_csv(
            &path,
            &["id".to_string(), "name".to_string()],
            &[
                vec![Some("1".to_string()), Some("Ann".to_string())],
                vec![Some("2".to_string()), None],
            ],
        )
        .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "id,name\n1,Ann\n2,\n"
        );
    }
}
