//! Small auxiliary windows
//!
//! Path entry, destructive-action confirmation, error display, settings
//! and the about box.

use egui::RichText;

use crate::config::AppConfig;
use crate::ui::state::{FilePrompt, PendingAction};
use crate::ui::theme::ThemeColors;

/// Outcome of a path-entry window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Accept,
    Cancel,
}

/// Outcome of the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Save,
    Close,
}

/// Render a path-entry window for open/save style actions.
pub fn render_file_prompt(ctx: &egui::Context, prompt: &mut FilePrompt) -> Option<PromptAction> {
    let mut action = None;

    egui::Window::new(prompt.purpose.title())
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.label("Path:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut prompt.path).desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(PromptAction::Accept);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let ready = !prompt.path.trim().is_empty();
                    if ui.add_enabled(ready, egui::Button::new("OK")).clicked() {
                        action = Some(PromptAction::Accept);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(PromptAction::Cancel);
                    }
                });
            });
        });

    action
}

/// Render the confirmation window for a destructive action. Returns
/// `Some(true)` to proceed, `Some(false)` to abandon it.
pub fn render_confirm_window(ctx: &egui::Context, pending: &PendingAction) -> Option<bool> {
    let mut decision = None;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(pending.message());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Yes").clicked() {
                        decision = Some(true);
                    }
                    if ui.button("No").clicked() {
                        decision = Some(false);
                    }
                });
            });
        });

    decision
}

/// Render the last error in its own window. Returns true when dismissed.
pub fn render_error_window(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.label(RichText::new(message).color(ThemeColors::ACCENT_ERROR));
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    dismissed
}

/// Render the settings window over a working copy of the configuration.
pub fn render_settings_window(
    ctx: &egui::Context,
    config: &mut AppConfig,
    backup_dir_buf: &mut String,
) -> Option<SettingsAction> {
    let mut action = None;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.label(RichText::new("General").color(ThemeColors::TEXT_SECONDARY));
            ui.checkbox(
                &mut config.general.confirm_destructive,
                "Confirm destructive actions",
            );
            ui.checkbox(
                &mut config.general.restore_last_file,
                "Reopen last database on start",
            );

            ui.add_space(8.0);
            ui.label(RichText::new("Backups").color(ThemeColors::TEXT_SECONDARY));
            ui.checkbox(&mut config.backup.auto_backup, "Automatic backups");
            ui.horizontal(|ui| {
                ui.label("Backup directory:");
                ui.add(
                    egui::TextEdit::singleline(backup_dir_buf)
                        .hint_text(config.backup.dir().display().to_string())
                        .desired_width(200.0),
                );
            });
            ui.label(
                RichText::new(format!(
                    "The {} most recent automatic copies are kept",
                    config.backup.retain
                ))
                .size(11.0)
                .color(ThemeColors::TEXT_MUTED),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        action = Some(SettingsAction::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(SettingsAction::Close);
                    }
                });
            });
        });

    action
}

/// Render the about box. Returns true when dismissed.
pub fn render_about_window(ctx: &egui::Context) -> bool {
    let mut dismissed = false;

    egui::Window::new("About")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("SQLite Workbench").size(18.0).strong());
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Browse, edit and back up SQLite databases")
                        .color(ThemeColors::TEXT_SECONDARY),
                );
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed
}
