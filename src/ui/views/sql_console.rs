//! Ad-hoc SQL console window

use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::db::StatementOutcome;
use crate::ui::state::SqlConsoleState;
use crate::ui::theme::ThemeColors;

/// What the user asked for in the SQL console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlConsoleAction {
    Execute,
    Clear,
    SaveResult,
    Close,
}

/// Render the SQL console: statement editor, result area and status line.
pub fn render_sql_console(
    ctx: &egui::Context,
    console: &mut SqlConsoleState,
) -> Option<SqlConsoleAction> {
    let mut action = None;
    let mut open = true;

    egui::Window::new("SQL console")
        .open(&mut open)
        .resizable(true)
        .default_width(640.0)
        .default_height(480.0)
        .show(ctx, |ui| {
            ui.label(RichText::new("Statement").color(ThemeColors::TEXT_SECONDARY));
            ui.add(
                egui::TextEdit::multiline(&mut console.query)
                    .code_editor()
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                if ui.button("Execute").clicked() {
                    action = Some(SqlConsoleAction::Execute);
                }
                if ui.button("Clear").clicked() {
                    action = Some(SqlConsoleAction::Clear);
                }
                let has_rows = matches!(console.outcome, Some(StatementOutcome::Rows { .. }));
                ui.add_enabled_ui(has_rows, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut console.save_path)
                            .hint_text("result.csv")
                            .desired_width(200.0),
                    );
                    if ui.button("Save result").clicked() {
                        action = Some(SqlConsoleAction::SaveResult);
                    }
                });
            });

            ui.separator();

            match &console.outcome {
                Some(StatementOutcome::Rows { columns, rows }) => {
                    egui::ScrollArea::both()
                        .id_salt("sql_console_result")
                        .max_height(260.0)
                        .show(ui, |ui| {
                            TableBuilder::new(ui)
                                .striped(true)
                                .columns(
                                    Column::auto().resizable(true).at_least(60.0),
                                    columns.len(),
                                )
                                .header(22.0, |mut header| {
                                    for column in columns {
                                        header.col(|ui| {
                                            ui.label(RichText::new(column).strong());
                                        });
                                    }
                                })
                                .body(|body| {
                                    body.rows(20.0, rows.len(), |mut row| {
                                        for value in &rows[row.index()] {
                                            row.col(|ui| {
                                                match value {
                                                    Some(text) => ui.label(text),
                                                    None => ui.label(
                                                        RichText::new("NULL")
                                                            .italics()
                                                            .color(ThemeColors::TEXT_MUTED),
                                                    ),
                                                };
                                            });
                                        }
                                    });
                                });
                        });
                }
                Some(StatementOutcome::Affected(_)) | None => {
                    ui.label(RichText::new("No result rows").color(ThemeColors::TEXT_MUTED));
                }
            }

            ui.separator();
            let color = if console.status.starts_with("Error") {
                ThemeColors::ACCENT_ERROR
            } else {
                ThemeColors::TEXT_SECONDARY
            };
            ui.label(RichText::new(&console.status).color(color));
        });

    if !open {
        action = Some(SqlConsoleAction::Close);
    }
    action
}
