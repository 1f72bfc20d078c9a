//! Modal dialog windows
//!
//! Windows around the headless dialog controllers: create table, add
//! field, add/edit record, and the read-only table structure view. One
//! dialog is active at a time; the app layer keeps the parent view
//! blocked until the controller reaches a terminal state.

use egui::RichText;

use crate::dialogs::{CreateTableController, RecordController, RecordMode};
use crate::sql::FieldType;
use crate::ui::state::{FieldDraft, StructureViewState};
use crate::ui::theme::ThemeColors;

/// Button presses inside the create-table window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTableAction {
    AddField,
    RemoveField(usize),
    Create,
    Cancel,
}

/// Button presses inside the add-field window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    Accept,
    Cancel,
}

/// Button presses inside the record window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Save,
    Cancel,
}

/// Render the create-table dialog.
pub fn render_create_table_window(
    ctx: &egui::Context,
    controller: &mut CreateTableController,
) -> Option<CreateTableAction> {
    let mut action = None;

    egui::Window::new("Create table")
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Table name:");
                let mut name = controller.table_name.clone();
                if ui.text_edit_singleline(&mut name).changed() {
                    controller.set_table_name(name);
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new("Fields").color(ThemeColors::TEXT_SECONDARY));
            ui.separator();

            let mut remove_index = None;
            egui::Grid::new("create_table_fields")
                .num_columns(6)
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").strong());
                    ui.label(RichText::new("Type").strong());
                    ui.label(RichText::new("NULL").strong());
                    ui.label(RichText::new("Default").strong());
                    ui.label(RichText::new("PK").strong());
                    ui.label("");
                    ui.end_row();

                    for (i, field) in controller.fields.iter().enumerate() {
                        ui.label(&field.name);
                        ui.label(field.field_type.keyword());
                        ui.label(if field.allow_null { "YES" } else { "NO" });
                        ui.label(field.default_value.as_deref().unwrap_or(""));
                        ui.label(if field.primary_key { "YES" } else { "NO" });
                        if ui.small_button("Remove").clicked() {
                            remove_index = Some(i);
                        }
                        ui.end_row();
                    }
                });
            if let Some(i) = remove_index {
                action = Some(CreateTableAction::RemoveField(i));
            }

            ui.add_space(4.0);
            if ui.button("Add field").clicked() {
                action = Some(CreateTableAction::AddField);
            }

            // Live statement preview, or the reason it cannot be built.
            ui.add_space(8.0);
            match controller.preview_sql() {
                Ok(sql) => {
                    ui.label(
                        RichText::new(sql)
                            .monospace()
                            .color(ThemeColors::TEXT_SECONDARY),
                    );
                }
                Err(e) => {
                    ui.label(
                        RichText::new(e.to_string()).color(ThemeColors::ACCENT_WARNING),
                    );
                }
            }

            if let Some(error) = &controller.last_error {
                ui.add_space(4.0);
                ui.label(RichText::new(error).color(ThemeColors::ACCENT_ERROR));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Create").clicked() {
                        action = Some(CreateTableAction::Create);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(CreateTableAction::Cancel);
                    }
                });
            });
        });

    action
}

/// Render the add-field sub-dialog.
pub fn render_field_window(ctx: &egui::Context, draft: &mut FieldDraft) -> Option<FieldAction> {
    let mut action = None;

    egui::Window::new("Add field")
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Field name:");
                ui.text_edit_singleline(&mut draft.name);
            });

            ui.horizontal(|ui| {
                ui.label("Type:");
                egui::ComboBox::from_id_salt("field_type")
                    .selected_text(draft.field_type.keyword())
                    .show_ui(ui, |ui| {
                        for ty in FieldType::ALL {
                            ui.selectable_value(&mut draft.field_type, ty, ty.keyword());
                        }
                    });
            });

            ui.label(
                RichText::new(
                    "TEXT: strings  INTEGER: whole numbers (autoincrement capable)\n\
                     REAL: floating point  BLOB: binary  NUMERIC: converting numeric",
                )
                .size(11.0)
                .color(ThemeColors::TEXT_MUTED),
            );

            ui.add_space(4.0);
            ui.checkbox(&mut draft.allow_null, "Allow NULL");
            ui.checkbox(&mut draft.primary_key, "Primary key");

            ui.horizontal(|ui| {
                ui.label("Default:");
                ui.text_edit_singleline(&mut draft.default_value);
            });

            if let Some(error) = &draft.error {
                ui.add_space(4.0);
                ui.label(RichText::new(error).color(ThemeColors::ACCENT_ERROR));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        action = Some(FieldAction::Accept);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(FieldAction::Cancel);
                    }
                });
            });
        });

    action
}

/// Render the add/edit record dialog.
pub fn render_record_window(
    ctx: &egui::Context,
    controller: &mut RecordController,
) -> Option<RecordAction> {
    let mut action = None;
    let title = match controller.mode() {
        RecordMode::Insert => format!("Add record - {}", controller.table),
        RecordMode::Edit => format!("Edit record - {}", controller.table),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(360.0)
                .show(ui, |ui| {
                    for i in 0..controller.columns.len() {
                        let column = controller.columns[i].clone();
                        ui.horizontal(|ui| {
                            let mut label = column.name.clone();
                            if column.not_null {
                                label.push_str(" *");
                            }
                            if column.primary_key {
                                label.push_str(" (PK)");
                            }
                            ui.label(label);

                            let mut value = controller.inputs[i].clone();
                            // Multi-line entry for the string-like types.
                            let multiline = FieldType::from_keyword(&column.declared_type)
                                .is_some_and(|ty| ty.quotes_defaults());
                            let changed = if multiline {
                                ui.add(
                                    egui::TextEdit::multiline(&mut value)
                                        .desired_rows(2)
                                        .desired_width(220.0),
                                )
                                .changed()
                            } else {
                                ui.add(
                                    egui::TextEdit::singleline(&mut value).desired_width(220.0),
                                )
                                .changed()
                            };
                            if changed {
                                controller.set_value(i, value);
                            }

                            ui.label(
                                RichText::new(&column.declared_type)
                                    .color(ThemeColors::TEXT_MUTED),
                            );
                        });
                    }
                });

            ui.label(
                RichText::new("Blank fields are stored as NULL (or the column default on insert)")
                    .size(11.0)
                    .color(ThemeColors::TEXT_MUTED),
            );

            if let Some(error) = &controller.last_error {
                ui.add_space(4.0);
                ui.label(RichText::new(error).color(ThemeColors::ACCENT_ERROR));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        action = Some(RecordAction::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(RecordAction::Cancel);
                    }
                });
            });
        });

    action
}

/// Render the read-only table structure window. Returns true when the
/// user closed it.
pub fn render_structure_window(ctx: &egui::Context, view: &StructureViewState) -> bool {
    let mut close = false;

    egui::Window::new(format!("Table structure: {}", view.table))
        .collapsible(false)
        .resizable(true)
        .default_width(520.0)
        .show(ctx, |ui| {
            if let Some(sql) = &view.create_sql {
                ui.label(RichText::new("Definition").color(ThemeColors::TEXT_SECONDARY));
                ui.label(RichText::new(sql).monospace());
                ui.separator();
            }

            ui.label(RichText::new("Fields").color(ThemeColors::TEXT_SECONDARY));
            egui::Grid::new("structure_fields")
                .num_columns(5)
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Field").strong());
                    ui.label(RichText::new("Type").strong());
                    ui.label(RichText::new("NULL").strong());
                    ui.label(RichText::new("Default").strong());
                    ui.label(RichText::new("PK").strong());
                    ui.end_row();

                    for column in &view.columns {
                        ui.label(&column.name);
                        ui.label(&column.declared_type);
                        ui.label(if column.not_null { "NO" } else { "YES" });
                        ui.label(column.default_value.as_deref().unwrap_or(""));
                        ui.label(if column.primary_key { "YES" } else { "NO" });
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.label(RichText::new("Indexes").color(ThemeColors::TEXT_SECONDARY));
            if view.indexes.is_empty() {
                ui.label(RichText::new("No indexes").color(ThemeColors::TEXT_MUTED));
            }
            for index in &view.indexes {
                let unique = if index.unique { " (unique)" } else { "" };
                ui.label(format!(
                    "{}{}: {}",
                    index.name,
                    unique,
                    index.columns.join(", ")
                ));
            }

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    close
}
