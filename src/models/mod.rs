// Pipeline data model: fetched series, date windows, per-window results
pub mod price_series;
pub mod results;
pub mod window;

// Re-export commonly used types
pub use price_series::PriceSeries;
pub use results::{ResultTable, TestOutcome, WindowResult};
pub use window::{DateWindow, segment_windows};
