//! Data boundary: JSON ingest, CSV export, typed errors.
//!
//! All I/O lives here. The view pipelines above this layer are pure and never
//! touch the filesystem.

pub mod export;
pub mod ingest;

pub use export::{write_forecast_csv, write_series_csv};
pub use ingest::{load_catalog, load_indicator, DataError, LoadedIndicator};
