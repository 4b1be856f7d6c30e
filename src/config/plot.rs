//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub adf_line_color: Color32,
    pub kpss_line_color: Color32,
    pub threshold_line_color: Color32,
    /// Width of the two p-value series lines
    pub series_line_width: f32,
    /// Width of the significance threshold line
    pub threshold_line_width: f32,
    /// Radius of the per-window markers on each series
    pub marker_radius: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    adf_line_color: Color32::from_rgb(255, 215, 0), // Gold
    kpss_line_color: Color32::from_rgb(0, 191, 255), // Deep sky blue
    threshold_line_color: Color32::from_rgb(200, 0, 0), // Red
    series_line_width: 2.0,
    threshold_line_width: 1.5,
    marker_radius: 3.0,
};
