//! Load the indicator catalog from disk for the TUI.
//!
//! Files are independent, so the directory scan fans out with rayon and the
//! results are re-sorted by code. Falls back to the embedded sample when the
//! data directory yields nothing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use rustat_core::data::{load_indicator, LoadedIndicator};

use crate::sample_data;

/// Catalog plus a one-line note for the status bar.
pub struct LoadOutcome {
    pub indicators: Vec<LoadedIndicator>,
    pub note: String,
}

pub fn load_or_sample(data_dir: &Path) -> Result<LoadOutcome> {
    let files = json_files(data_dir)?;

    if files.is_empty() {
        return Ok(LoadOutcome {
            indicators: sample_data::sample_catalog(),
            note: format!(
                "Нет данных в {} — показан встроенный образец",
                data_dir.display()
            ),
        });
    }

    let mut indicators = files
        .par_iter()
        .map(|path| load_indicator(path))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to load indicator catalog")?;

    indicators.sort_by(|a, b| a.indicator.code.cmp(&b.indicator.code));

    Ok(LoadOutcome {
        note: format!("Загружено индикаторов: {}", indicators.len()),
        indicators,
    })
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read data directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
