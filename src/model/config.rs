use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override for the tasks file location
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name, e.g. `text = "#B0AAFF"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
