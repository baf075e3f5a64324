//! TOML configuration for the dashboard.
//!
//! Search order: `./rustat.toml`, then `<config dir>/rustat/rustat.toml`.
//! A missing or unreadable file falls back to defaults; a present but
//! malformed file is an error the user should see.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rustat_core::view::Window;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Directory of indicator JSON files.
    pub data_dir: PathBuf,
    /// Initial chart window: `1y`, `5y`, `10y`, or `all`.
    pub default_window: String,
    /// Whether the forecast overlay starts enabled.
    pub show_forecast: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            default_window: "5y".to_string(),
            show_forecast: true,
        }
    }
}

impl UiConfig {
    pub fn window(&self) -> Window {
        self.default_window.parse().unwrap_or(Window::FiveYears)
    }
}

/// Loads the config from the standard locations.
pub fn load() -> Result<UiConfig> {
    for path in candidate_paths() {
        if path.is_file() {
            return load_from(&path);
        }
    }
    Ok(UiConfig::default())
}

fn load_from(path: &Path) -> Result<UiConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("rustat.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("rustat").join("rustat.toml"));
    }
    paths
}
