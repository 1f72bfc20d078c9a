//! Table data grid

use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::db::TableData;
use crate::ui::theme::ThemeColors;

/// What the user asked for in the data toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    AddRecord,
    EditRecord,
    DeleteRecord,
    Refresh,
}

/// Case-insensitive substring match across a row's rendered values,
/// mirroring the search box behavior.
pub fn row_matches(row: &[Option<String>], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    row.iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Render the toolbar, search box and row grid for the current table.
///
/// `selected_row` indexes into `data.rows`; filtering hides rows from the
/// display without touching the loaded data.
pub fn render_data_grid(
    ui: &mut egui::Ui,
    data: &TableData,
    search_query: &mut String,
    selected_row: &mut Option<usize>,
) -> Option<GridAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Add record").clicked() {
            action = Some(GridAction::AddRecord);
        }
        let has_selection = selected_row.is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("Edit record"))
            .clicked()
        {
            action = Some(GridAction::EditRecord);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete record"))
            .clicked()
        {
            action = Some(GridAction::DeleteRecord);
        }
        if ui.button("Refresh").clicked() {
            action = Some(GridAction::Refresh);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                search_query.clear();
            }
            ui.add(
                egui::TextEdit::singleline(search_query)
                    .hint_text("Search")
                    .desired_width(160.0),
            );
            ui.label(RichText::new("Search:").color(ThemeColors::TEXT_SECONDARY));
        });
    });

    ui.add_space(4.0);

    if data.columns.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Select a table").color(ThemeColors::TEXT_MUTED));
        });
        return action;
    }

    let visible: Vec<usize> = data
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, search_query))
        .map(|(i, _)| i)
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .columns(Column::auto().resizable(true).at_least(60.0), data.columns.len())
        .header(22.0, |mut header| {
            for column in &data.columns {
                header.col(|ui| {
                    ui.label(RichText::new(column).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, visible.len(), |mut row| {
                let data_index = visible[row.index()];
                row.set_selected(*selected_row == Some(data_index));
                for value in &data.rows[data_index] {
                    row.col(|ui| {
                        match value {
                            Some(text) => ui.label(text),
                            None => ui.label(
                                RichText::new("NULL").italics().color(ThemeColors::TEXT_MUTED),
                            ),
                        };
                    });
                }
                if row.response().clicked() {
                    *selected_row = Some(data_index);
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_row_matches_is_case_insensitive_substring() {
        let r = row(&[Some("Ann"), Some("42"), None]);
        assert!(row_matches(&r, ""));
        assert!(row_matches(&r, "ann"));
        assert!(row_matches(&r, "AN"));
        assert!(row_matches(&r, "4"));
        assert!(!row_matches(&r, "bob"));
    }

    #[test]
    fn test_row_matches_ignores_null_cells() {
        let r = row(&[None, None]);
        assert!(row_matches(&r, ""));
        assert!(!row_matches(&r, "null"));
    }
}
