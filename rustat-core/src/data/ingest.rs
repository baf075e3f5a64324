//! Indicator ingest from static JSON files.

use std::path::{Path, PathBuf};

use crate::domain::Indicator;
use crate::fingerprint::DatasetHash;

/// Errors raised while loading or exporting indicator files.
///
/// The view pipelines are total and never produce these; everything here is
/// an ingest/export-boundary failure.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("read failed: {0}")]
    Read(String),

    #[error("parse failed: {0}")]
    Parse(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("write failed: {0}")]
    Write(String),
}

/// An indicator together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedIndicator {
    pub indicator: Indicator,
    /// blake3 of the raw file bytes; shown in the UI and stamped on exports.
    pub dataset_hash: DatasetHash,
    pub path: PathBuf,
}

/// Loads a single indicator JSON file.
///
/// Forecast bounds are validated here (`lower <= value <= upper`) because the
/// pipelines deliberately do not: the bound invariant is a producer contract
/// and this is the boundary where the producer's output enters the process.
pub fn load_indicator(path: &Path) -> Result<LoadedIndicator, DataError> {
    let bytes = std::fs::read(path)
        .map_err(|e| DataError::Read(format!("{}: {e}", path.display())))?;

    let indicator: Indicator = serde_json::from_slice(&bytes)
        .map_err(|e| DataError::Parse(format!("{}: {e}", path.display())))?;

    if let Some(forecast) = indicator.forecast() {
        for f in forecast.iter() {
            if !f.is_sane() {
                return Err(DataError::Validation(format!(
                    "{}: forecast point {} violates lower <= value <= upper",
                    path.display(),
                    f.date
                )));
            }
        }
    }

    Ok(LoadedIndicator {
        dataset_hash: DatasetHash::from_bytes(&bytes),
        indicator,
        path: path.to_path_buf(),
    })
}

/// Loads every `*.json` file in a directory, sorted by indicator code.
///
/// A missing directory is an empty catalog, not an error; a malformed file
/// inside an existing directory is.
pub fn load_catalog(dir: &Path) -> Result<Vec<LoadedIndicator>, DataError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| DataError::Read(format!("{}: {e}", dir.display())))?;

    let mut catalog = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DataError::Read(format!("{}: {e}", dir.display())))?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            catalog.push(load_indicator(&path)?);
        }
    }

    catalog.sort_by(|a, b| a.indicator.code.cmp(&b.indicator.code));
    Ok(catalog)
}
