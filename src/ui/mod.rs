// Dashboard: egui app, panels, and the p-value plot
pub mod app;
pub mod app_async;
pub mod config;
pub mod ui_panels;
pub mod ui_plot_view;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export commonly used types
pub use app::GoldScopeApp;
