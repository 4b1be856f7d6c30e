#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{SummaryReport, run_window_analysis, summary_text};
pub use data::fetch_gold_bars;
pub use domain::{Bar, BarInterval, LookbackPeriod};
pub use models::{DateWindow, PriceSeries, ResultTable, WindowResult, segment_windows};
pub use ui::GoldScopeApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sampling granularity of the fetched bars (1m, 5m, 15m, 30m, 1h, 1d)
    #[arg(long)]
    pub interval: Option<BarInterval>,

    /// Total lookback span to download (1d, 5d, 1mo, 3mo)
    #[arg(long)]
    pub period: Option<LookbackPeriod>,

    /// Number of calendar days per evaluation window
    #[arg(long)]
    pub window_days: Option<u64>,
}

impl Cli {
    // Flags fall back to the compiled-in defaults; an explicit flag also
    // overrides whatever UI state the last session persisted.
    pub fn interval(&self) -> BarInterval {
        self.interval.unwrap_or(config::FETCH.default_interval)
    }

    pub fn period(&self) -> LookbackPeriod {
        self.period.unwrap_or(config::FETCH.default_period)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    args: &Cli,
    initial_fetch: anyhow::Result<PriceSeries>,
) -> Box<dyn eframe::App> {
    let app = ui::GoldScopeApp::new(cc, args, initial_fetch);
    Box::new(app)
}
