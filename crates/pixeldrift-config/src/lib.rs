//! Configuration file loading for pixeldrift.
//!
//! The field configuration lives in `config.toml` under the platform
//! config directory. Every key is optional; an absent file means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pixeldrift_core::FieldConfig;
use thiserror::Error;

/// Why the configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The platform-specific path of the config file, if one can be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pixeldrift").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the field configuration from the platform config path.
///
/// An absent file (or an undeterminable config directory) yields defaults;
/// an unreadable or invalid file is an error.
pub fn load() -> Result<FieldConfig, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(FieldConfig::default()),
    }
}

/// Load the field configuration from an explicit file path.
pub fn load_from(path: &Path) -> Result<FieldConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
