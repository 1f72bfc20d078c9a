//! Table list side panel

use egui::RichText;

use crate::ui::theme::ThemeColors;

/// What the user asked for in the table list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Select(String),
    CreateTable,
    DropTable(String),
    ShowStructure(String),
}

/// Render the database structure panel: table list plus table-level
/// actions. Drop and structure act on the selected table.
pub fn render_table_list(
    ui: &mut egui::Ui,
    tables: &[String],
    current_table: Option<&str>,
) -> Option<TableAction> {
    let mut action = None;

    ui.add_space(8.0);
    ui.label(
        RichText::new("Tables")
            .size(14.0)
            .color(ThemeColors::TEXT_SECONDARY),
    );
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("table_list")
        .show(ui, |ui| {
            if tables.is_empty() {
                ui.label(RichText::new("No tables").color(ThemeColors::TEXT_MUTED));
            }
            for table in tables {
                let selected = current_table == Some(table.as_str());
                if ui.selectable_label(selected, table).clicked() {
                    action = Some(TableAction::Select(table.clone()));
                }
            }
        });

    ui.separator();
    ui.add_space(4.0);

    if ui.button("Create table").clicked() {
        action = Some(TableAction::CreateTable);
    }
    let has_selection = current_table.is_some();
    if ui
        .add_enabled(has_selection, egui::Button::new("Drop table"))
        .clicked()
    {
        if let Some(table) = current_table {
            action = Some(TableAction::DropTable(table.to_string()));
        }
    }
    if ui
        .add_enabled(has_selection, egui::Button::new("Table structure"))
        .clicked()
    {
        if let Some(table) = current_table {
            action = Some(TableAction::ShowStructure(table.to_string()));
        }
    }

    action
}
