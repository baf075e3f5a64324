//! RuStat Core — indicator domain types and the table/chart view pipelines.
//!
//! This crate contains everything beneath the presentation layer:
//! - Domain types (observed/forecast points, series, indicator records)
//! - The table pipeline: sort, year-filter, delta-annotate, paginate
//! - The chart pipeline: trailing-window selection and the
//!   historical/forecast merge with join-point synthesis
//! - Descriptive statistics for the summary cards and yearly table
//! - JSON ingest, CSV export, and dataset fingerprinting

pub mod data;
pub mod domain;
pub mod fingerprint;
pub mod stats;
pub mod view;
