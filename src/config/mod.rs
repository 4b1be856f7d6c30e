//! Configuration module for the gold-scope application.

pub mod analysis;
pub mod fetch;
pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use fetch::{FETCH, FetchConfig};
pub use plot::PLOT_CONFIG;
