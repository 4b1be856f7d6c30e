// The stationarity pipeline: per-window test battery and aggregation
pub mod adf;
pub mod evaluator;
pub mod hurst;
pub mod kpss;
pub mod report;

// Re-export commonly used items
pub use adf::{AdfOutcome, adf_test};
pub use evaluator::{evaluate_window, run_window_analysis};
pub use hurst::hurst_exponent;
pub use kpss::{KpssOutcome, kpss_test};
pub use report::{INSUFFICIENT_DATA_MESSAGE, SummaryReport, summary_text};
