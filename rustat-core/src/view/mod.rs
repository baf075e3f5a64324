//! Derived, render-ready views over raw series.
//!
//! Both pipelines are pure: same series + parameters, same output. View
//! parameters (year, page, window, forecast flag) are owned by the
//! presentation layer and passed in on every call.

pub mod chart;
pub mod table;

pub use chart::{chart_series, ChartPoint, Window};
pub use table::{available_years, table_view, RowView, TableView, YearFilter, PAGE_SIZE};
