use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub success: Color32,
    pub failure: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub results_table_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 215, 0), // Gold, obviously
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 35),
        side_panel: Color32::from_rgb(25, 25, 25),
        success: Color32::from_rgb(130, 200, 140),
        failure: Color32::from_rgb(220, 120, 120),
    },
    results_table_height: 220.0,
};
