use eframe::egui::{Button, Color32, ComboBox, RichText, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::ANALYSIS;
use crate::domain::{BarInterval, LookbackPeriod};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

// ============================================================================
// Controls: interval, period, window size, refetch
// ============================================================================

pub struct ControlsPanel {
    interval: BarInterval,
    period: LookbackPeriod,
    window_days: u64,
    fetch_in_flight: bool,
}

#[derive(Debug)]
pub enum ControlsEventChanged {
    Interval(BarInterval),
    Period(LookbackPeriod),
    WindowDays(u64),
    RefetchRequested,
}

impl ControlsPanel {
    pub fn new(
        interval: BarInterval,
        period: LookbackPeriod,
        window_days: u64,
        fetch_in_flight: bool,
    ) -> Self {
        Self {
            interval,
            period,
            window_days,
            fetch_in_flight,
        }
    }

    fn render_interval_selector(&mut self, ui: &mut Ui) -> Option<BarInterval> {
        let mut changed = None;
        ui.label(colored_subsection_heading(UI_TEXT.interval_heading));
        ComboBox::from_id_salt("interval_selector")
            .selected_text(self.interval.to_string())
            .show_ui(ui, |ui| {
                for variant in BarInterval::iter() {
                    if ui
                        .selectable_value(&mut self.interval, variant, variant.to_string())
                        .clicked()
                    {
                        changed = Some(variant);
                    }
                }
            });
        changed
    }

    fn render_period_selector(&mut self, ui: &mut Ui) -> Option<LookbackPeriod> {
        let mut changed = None;
        ui.label(colored_subsection_heading(UI_TEXT.period_heading));
        ComboBox::from_id_salt("period_selector")
            .selected_text(self.period.to_string())
            .show_ui(ui, |ui| {
                for variant in LookbackPeriod::iter() {
                    if ui
                        .selectable_value(&mut self.period, variant, variant.to_string())
                        .clicked()
                    {
                        changed = Some(variant);
                    }
                }
            });
        changed
    }

    fn render_window_slider(&mut self, ui: &mut Ui) -> Option<u64> {
        let mut changed = None;

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.window_heading));

        let mut days = self.window_days as f64;
        let response = ui.add(
            Slider::new(
                &mut days,
                ANALYSIS.window.min_days as f64..=ANALYSIS.window.max_days as f64,
            )
            .integer()
            .suffix(" days"),
        );

        let new_value = days.round() as u64;
        self.window_days = new_value;

        if response.changed() {
            changed = Some(new_value);
        }

        let helper_text = format!(
            "{}{}{}",
            UI_TEXT.window_helper_prefix, new_value, UI_TEXT.window_helper_suffix
        );
        ui.label(RichText::new(helper_text).small().color(Color32::GRAY));

        changed
    }
}

impl Panel for ControlsPanel {
    type Event = ControlsEventChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        if let Some(interval) = self.render_interval_selector(ui) {
            events.push(ControlsEventChanged::Interval(interval));
        }
        ui.add_space(5.0);
        if let Some(period) = self.render_period_selector(ui) {
            events.push(ControlsEventChanged::Period(period));
        }
        spaced_separator(ui);

        if let Some(days) = self.render_window_slider(ui) {
            events.push(ControlsEventChanged::WindowDays(days));
        }
        spaced_separator(ui);

        let refetch = ui.add_enabled(!self.fetch_in_flight, Button::new(UI_TEXT.refetch_button));
        if refetch.clicked() {
            events.push(ControlsEventChanged::RefetchRequested);
        }
        if self.fetch_in_flight {
            ui.label(
                RichText::new(UI_TEXT.fetching_status)
                    .small()
                    .color(Color32::GRAY),
            );
        }

        ui.add_space(20.0);
        events
    }
}

// ============================================================================
// Summary: the rendered report text
// ============================================================================

pub struct SummaryPanel<'a> {
    summary: Option<&'a str>,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: Option<&'a str>) -> Self {
        Self { summary }
    }
}

impl<'a> Panel for SummaryPanel<'a> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.summary_heading);

        match self.summary {
            Some(text) => {
                for line in text.lines() {
                    ui.label(line);
                }
            }
            None => {
                ui.label(
                    RichText::new("Waiting for results")
                        .small()
                        .color(Color32::GRAY),
                );
            }
        }

        ui.add_space(10.0);
        Vec::new()
    }
}
