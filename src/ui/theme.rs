//! Workbench theme and styling

use egui::{Color32, Rounding, Stroke, Visuals};

/// Dark color palette for the workbench
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_DARK: Color32 = Color32::from_rgb(24, 26, 30);
    pub const BG_MEDIUM: Color32 = Color32::from_rgb(32, 35, 40);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(42, 46, 52);
    pub const BG_HOVER: Color32 = Color32::from_rgb(52, 57, 64);

    // Accent colors
    pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(96, 160, 255);
    pub const ACCENT_ERROR: Color32 = Color32::from_rgb(231, 76, 60);
    pub const ACCENT_WARNING: Color32 = Color32::from_rgb(255, 193, 7);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 237, 240);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(105, 110, 120);
}

/// Apply the workbench theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = ThemeColors::BG_MEDIUM;
    visuals.panel_fill = ThemeColors::BG_DARK;
    visuals.faint_bg_color = ThemeColors::BG_LIGHT;
    visuals.extreme_bg_color = ThemeColors::BG_DARK;

    visuals.widgets.noninteractive.bg_fill = ThemeColors::BG_MEDIUM;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = ThemeColors::BG_LIGHT;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);

    visuals.widgets.active.bg_fill = ThemeColors::ACCENT_PRIMARY;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);

    visuals.selection.bg_fill = ThemeColors::ACCENT_PRIMARY.linear_multiply(0.4);

    ctx.set_visuals(visuals);
}
