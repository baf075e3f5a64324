//! Domain types for RuStat.

pub mod indicator;
pub mod point;
pub mod series;

pub use indicator::Indicator;
pub use point::{parse_month_date, ForecastPoint, ObservedPoint};
pub use series::{ForecastSeries, Series};
