use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::model::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Location of config.toml in the platform config directory
pub fn config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "stackz")?;
    Some(dirs.config_dir().join("config.toml"))
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Load the user config, falling back to defaults when the file is missing
/// or malformed.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => read_config(&path).unwrap_or_default(),
        _ => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_file = \"/tmp/t.json\"\n").unwrap();
        let config = read_config(&path).unwrap();
        assert!(config.data_file.is_some());
    }

    #[test]
    fn read_missing_config_errors() {
        let dir = TempDir::new().unwrap();
        let err = read_config(&dir.path().join("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn read_malformed_config_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_file = [not toml").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
