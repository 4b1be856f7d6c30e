// Domain types and value objects
pub mod bar;
pub mod intervals;

// Re-export commonly used types
pub use bar::Bar;
pub use intervals::{BarInterval, LookbackPeriod};
