use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, RichText, ScrollArea, SidePanel, TopBottomPanel,
    Ui,
};

use crate::config::FETCH;
use crate::models::{PriceSeries, ResultTable};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_panels::{ControlsEventChanged, ControlsPanel, Panel, SummaryPanel};
use crate::ui::utils::{format_p_value, format_price, section_heading, spaced_separator};
use crate::utils::time_utils::{epoch_ms_to_utc_minutes, format_date};

use super::app::{AppError, GoldScopeApp};

impl GoldScopeApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
            ui.label(UI_TEXT.app_description);

            if self.is_fetching() {
                ui.colored_label(UI_CONFIG.colors.label, UI_TEXT.fetching_status);
            } else if let Some(series) = &self.data_state.series {
                ui.colored_label(
                    UI_CONFIG.colors.success,
                    format!(
                        "{} bars of {} at {} across {} sessions",
                        series.len(),
                        series.symbol,
                        series.interval,
                        series.distinct_dates().len()
                    ),
                );
            }
            ui.add_space(6.0);
        });
    }

    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(220.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let mut controls = ControlsPanel::new(
                    self.interval,
                    self.period,
                    self.window_days,
                    self.is_fetching(),
                );
                let events = controls.render(ui);

                for event in events {
                    match event {
                        ControlsEventChanged::Interval(interval) => {
                            self.interval = interval;
                            self.start_fetch();
                        }
                        ControlsEventChanged::Period(period) => {
                            self.period = period;
                            self.start_fetch();
                        }
                        ControlsEventChanged::WindowDays(days) => {
                            // refresh_analysis picks this up on the next frame
                            self.window_days = days;
                        }
                        ControlsEventChanged::RefetchRequested => {
                            self.start_fetch();
                        }
                    }
                }

                spaced_separator(ui);
                let mut summary = SummaryPanel::new(self.data_state.summary.as_deref());
                summary.render(ui);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                let last_error = self.data_state.last_error.clone();
                if let Some(error) = last_error {
                    self.render_error_state(ui, &error);
                    return;
                }

                if self.data_state.series.is_none() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.add_space(12.0);
                        ui.heading(UI_TEXT.fetching_status);
                    });
                    return;
                }

                ScrollArea::vertical().id_salt("central_scroll").show(ui, |ui| {
                    if let Some(table) = &self.data_state.result_table {
                        section_heading(ui, UI_TEXT.plot_heading);
                        self.plot_view.show(ui, table);
                        spaced_separator(ui);
                        render_result_table(ui, table);
                    }

                    if let Some(series) = &self.data_state.series {
                        spaced_separator(ui);
                        render_raw_preview(ui, series);
                    }
                });
            });
    }

    fn render_error_state(&mut self, ui: &mut Ui, error: &AppError) {
        let heading = match error {
            AppError::FetchFailed(_) | AppError::DataNotAvailable => UI_TEXT.fetch_failed_heading,
            AppError::AnalysisFailed(_) => UI_TEXT.analysis_failed_heading,
        };

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(RichText::new(heading).color(UI_CONFIG.colors.failure));
            ui.add_space(10.0);
            ui.label(format!("{}", error));
            ui.add_space(20.0);
            ui.label(UI_TEXT.fetch_retry_hint);
            ui.add_space(10.0);
            if ui.button(UI_TEXT.refetch_button).clicked() {
                self.start_fetch();
            }
        });
    }
}

fn render_result_table(ui: &mut Ui, table: &ResultTable) {
    section_heading(ui, UI_TEXT.results_heading);

    if table.is_empty() {
        ui.label(
            RichText::new("Every window was skipped; try a wider window or a longer period.")
                .color(Color32::GRAY),
        );
        return;
    }

    ScrollArea::vertical()
        .max_height(UI_CONFIG.results_table_height)
        .id_salt("results_table")
        .show(ui, |ui| {
            Grid::new("results_grid").striped(true).show(ui, |ui| {
                for header in [
                    UI_TEXT.col_window_start,
                    UI_TEXT.col_window_end,
                    UI_TEXT.col_adf_p,
                    UI_TEXT.col_kpss_p,
                    UI_TEXT.col_hurst,
                    UI_TEXT.col_volatility,
                ] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for row in &table.rows {
                    ui.label(format_date(row.window_start));
                    ui.label(format_date(row.window_end));
                    ui.label(format_p_value(row.adf_p_value));

                    match (row.kpss.p_value(), row.kpss.failure_reason()) {
                        (Some(p), _) => {
                            ui.label(format_p_value(p));
                        }
                        (None, reason) => {
                            ui.label(
                                RichText::new(UI_TEXT.null_cell)
                                    .color(UI_CONFIG.colors.failure),
                            )
                            .on_hover_text(reason.unwrap_or_default());
                        }
                    }

                    match row.hurst {
                        Some(h) => ui.label(format!("{:.3}", h)),
                        None => ui.label(RichText::new(UI_TEXT.null_cell).color(Color32::GRAY)),
                    };

                    match row.volatility {
                        Some(vol) => ui.label(format!("{:.5}", vol)),
                        None => ui.label(RichText::new(UI_TEXT.null_cell).color(Color32::GRAY)),
                    };

                    ui.end_row();
                }
            });
        });
}

fn render_raw_preview(ui: &mut Ui, series: &PriceSeries) {
    section_heading(ui, UI_TEXT.raw_data_heading);

    Grid::new("raw_preview_grid").striped(true).show(ui, |ui| {
        for header in ["Time (UTC)", "Open", "High", "Low", "Close", "Volume"] {
            ui.label(RichText::new(header).strong());
        }
        ui.end_row();

        for bar in series.bars().iter().take(FETCH.preview_rows) {
            ui.label(epoch_ms_to_utc_minutes(bar.timestamp_ms));
            for price in [bar.open, bar.high, bar.low, bar.close] {
                match price {
                    Some(value) => ui.label(format_price(value)),
                    None => ui.label(RichText::new(UI_TEXT.null_cell).color(Color32::GRAY)),
                };
            }
            match bar.volume {
                Some(volume) => ui.label(format!("{:.0}", volume)),
                None => ui.label(RichText::new(UI_TEXT.null_cell).color(Color32::GRAY)),
            };
            ui.end_row();
        }
    });
}
