use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Cli;
use crate::analysis::{run_window_analysis, summary_text};
use crate::config::{ANALYSIS, FETCH};
use crate::domain::{BarInterval, LookbackPeriod};
use crate::models::{PriceSeries, ResultTable};
use crate::ui::app_async::FetchOutcome;
use crate::ui::ui_plot_view::PValuePlotView;
use crate::ui::utils::setup_custom_visuals;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// No data is available for the operation
    DataNotAvailable,
    /// The market data download failed or came back empty
    FetchFailed(String),
    /// The pipeline hit an unrecoverable numeric fault
    AnalysisFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DataNotAvailable => write!(f, "No data available"),
            AppError::FetchFailed(msg) => write!(f, "Download failed: {}", msg),
            AppError::AnalysisFailed(msg) => write!(f, "Analysis failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Runtime-only data: the fetched series and everything derived from it.
#[derive(Default)]
pub struct DataState {
    pub series: Option<PriceSeries>,
    pub result_table: Option<ResultTable>,
    pub summary: Option<String>,
    pub last_error: Option<AppError>,
}

/// Parameters of one pipeline run. PartialEq enables cheap change detection:
/// the pipeline only re-runs when these actually differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    pub interval: BarInterval,
    pub period: LookbackPeriod,
    pub window_days: u64,
}

#[derive(Deserialize, Serialize)]
pub struct GoldScopeApp {
    // UI state (persisted between sessions)
    #[serde(default = "default_interval")]
    pub(super) interval: BarInterval,
    #[serde(default = "default_period")]
    pub(super) period: LookbackPeriod,
    #[serde(default = "default_window_days")]
    pub(super) window_days: u64,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) plot_view: PValuePlotView,

    // In-flight background fetch, if any
    #[serde(skip)]
    pub(super) fetch_promise: Option<Promise<FetchOutcome>>,

    // Track the last analyzed params to detect real changes
    #[serde(skip)]
    pub(super) last_analyzed: Option<AnalysisParams>,
}

fn default_interval() -> BarInterval {
    FETCH.default_interval
}

fn default_period() -> LookbackPeriod {
    FETCH.default_period
}

fn default_window_days() -> u64 {
    ANALYSIS.window.default_days
}

impl Default for GoldScopeApp {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            period: default_period(),
            window_days: default_window_days(),
            data_state: DataState::default(),
            plot_view: PValuePlotView::default(),
            fetch_promise: None,
            last_analyzed: None,
        }
    }
}

impl GoldScopeApp {
    pub fn new(
        cc: &eframe::CreationContext,
        args: &Cli,
        initial_fetch: anyhow::Result<PriceSeries>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut app: GoldScopeApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // Explicit CLI flags win over whatever the last session left behind
        if let Some(interval) = args.interval {
            app.interval = interval;
        }
        if let Some(period) = args.period {
            app.period = period;
        }
        if let Some(days) = args.window_days {
            app.window_days = days;
        }
        app.window_days = app
            .window_days
            .clamp(ANALYSIS.window.min_days, ANALYSIS.window.max_days);

        match initial_fetch {
            Ok(series) => app.data_state.series = Some(series),
            Err(e) => {
                app.data_state.last_error = Some(AppError::FetchFailed(format!("{e:#}")));
            }
        }

        app
    }

    pub(super) fn current_params(&self) -> AnalysisParams {
        AnalysisParams {
            interval: self.interval,
            period: self.period,
            window_days: self.window_days,
        }
    }

    /// Re-run the pipeline when the effective parameters changed.
    /// The run either completes into a fresh table + summary, or aborts into
    /// a visible error; there is no partial-results mode.
    pub(super) fn refresh_analysis(&mut self) {
        let Some(series) = &self.data_state.series else {
            return;
        };
        let params = self.current_params();
        if self.last_analyzed == Some(params) {
            return;
        }

        match run_window_analysis(series, params.window_days as usize) {
            Ok(table) => {
                self.data_state.summary = Some(summary_text(&table));
                self.data_state.result_table = Some(table);
                self.data_state.last_error = None;
            }
            Err(e) => {
                log::error!("Analysis run aborted: {e:#}");
                self.data_state.result_table = None;
                self.data_state.summary = None;
                self.data_state.last_error = Some(AppError::AnalysisFailed(format!("{e:#}")));
            }
        }
        self.last_analyzed = Some(params);
    }
}

impl eframe::App for GoldScopeApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_fetch(ctx);
        self.refresh_analysis();

        self.render_top_panel(ctx);
        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
    }
}
