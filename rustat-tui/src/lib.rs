//! RuStat TUI - terminal dashboard for macroeconomic indicator series.
//!
//! Provides interactive exploration of precomputed indicator data with:
//! - Summary cards (current value, previous month, trailing average, forecast)
//! - Chart with trailing-window zoom and SARIMA forecast overlay
//! - Paginated, year-filterable data table with month-over-month deltas
//! - Forecast and yearly-statistics tables

pub mod app;
pub mod config;
pub mod data_loader;
pub mod format;
pub mod navigation;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use navigation::handle_key_event;
pub use theme::Theme;
