//! Dashboard configuration. CLI flags override whatever the file sets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var naming the config file when `--config` is not given.
pub const CONFIG_PATH_ENV: &str = "SECUREGRAPH_CONFIG_PATH";
pub const DEFAULT_CONFIG_FILE: &str = "securegraph.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset location
    pub data: DataConfig,
    /// Graph layout parameters
    pub layout: LayoutConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV with source, destination, latency_ms, attack_flag, segment
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Seed for the initial node placement
    pub seed: u64,
    /// Optimal distance between nodes
    pub k: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/network_data.csv"),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            k: 0.5,
            iterations: 50,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl DashboardConfig {
    /// Load from JSON file if present; otherwise return default.
    ///
    /// A file that exists but does not parse is reported on stderr and
    /// ignored, since logging is not installed yet at this point.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|data| serde_json::from_str::<DashboardConfig>(&data).map_err(|e| e.to_string()))
        {
            Ok(c) => c,
            Err(e) => {
                eprintln!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Config path from the explicit argument, then the env var, then the default file.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}
