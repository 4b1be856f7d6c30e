use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui_plot::{AxisHints, Corner, HLine, HPlacement, Legend, Line, Plot, PlotPoints, Points};

use crate::config::{ANALYSIS, PLOT_CONFIG};
use crate::models::ResultTable;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::time_utils::format_date;

/// The p-value evolution chart: one line per test, plus the significance
/// threshold as a dashed reference line. KPSS rows with a failed test simply
/// leave a gap in that series.
#[derive(Default)]
pub struct PValuePlotView;

impl PValuePlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, table: &ResultTable) {
        let adf_points: Vec<[f64; 2]> = table
            .rows
            .iter()
            .map(|row| [date_to_x(row.window_start), row.adf_p_value])
            .collect();
        let kpss_points: Vec<[f64; 2]> = table
            .rows
            .iter()
            .filter_map(|row| {
                row.kpss
                    .p_value()
                    .map(|p| [date_to_x(row.window_start), p])
            })
            .collect();

        let legend = Legend::default().position(Corner::RightTop);

        Plot::new("p_value_plot")
            .legend(legend)
            .height(320.0)
            .include_y(0.0)
            .include_y(1.0)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(UI_TEXT.adf_series_label, PlotPoints::new(adf_points.clone()))
                        .color(PLOT_CONFIG.adf_line_color)
                        .width(PLOT_CONFIG.series_line_width),
                );
                plot_ui.points(
                    Points::new(UI_TEXT.adf_series_label, PlotPoints::new(adf_points))
                        .color(PLOT_CONFIG.adf_line_color)
                        .radius(PLOT_CONFIG.marker_radius),
                );

                plot_ui.line(
                    Line::new(UI_TEXT.kpss_series_label, PlotPoints::new(kpss_points.clone()))
                        .color(PLOT_CONFIG.kpss_line_color)
                        .width(PLOT_CONFIG.series_line_width),
                );
                plot_ui.points(
                    Points::new(UI_TEXT.kpss_series_label, PlotPoints::new(kpss_points))
                        .color(PLOT_CONFIG.kpss_line_color)
                        .radius(PLOT_CONFIG.marker_radius),
                );

                plot_ui.hline(
                    HLine::new(UI_TEXT.threshold_label, ANALYSIS.thresholds.alpha)
                        .color(PLOT_CONFIG.threshold_line_color)
                        .width(PLOT_CONFIG.threshold_line_width)
                        .style(egui_plot::LineStyle::dashed_loose()),
                );
            });
    }
}

// Plot x-values are days since the common era so the axis formatter can
// round-trip back to a calendar date.
fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| {
            x_to_date(grid_mark.value)
                .map(format_date)
                .unwrap_or_default()
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_axis_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(x_to_date(date_to_x(date)), Some(date));
    }
}
