use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use liblogger::{LogConfig, LogType};
use serde::Deserialize;

use crate::error::{ConfigError, PathError};
use crate::loader_paths::{LoaderPaths, DEFAULT_LOG_FILE};

/// Optional `loader_config.toml`, read from the managed side's folder.
///
/// ```toml
/// [logging]
/// type = "file"
/// threshold = "info"
///
/// [loader]
/// nethost_library = "C:\\dotnet\\nethost.dll"
/// log_file_name = "loader.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoaderConfig {
    #[serde(default)]
    pub logging: Option<LogConfig>,

    #[serde(default)]
    pub loader: LoaderSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoaderSettings {
    /// Path of the `nethost` library. Defaults to `nethost.dll` next to the
    /// loader module.
    #[serde(default)]
    pub nethost_library: Option<String>,

    /// Name of the side-channel log, created in the managed side's folder.
    #[serde(default)]
    pub log_file_name: Option<String>,
}

impl LoaderConfig {
    /// Reads the configuration file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                eprintln!("Config file {} not found, using default loader settings", path.display());
                return Ok(LoaderConfig::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn log_file_name(&self) -> &str {
        self.loader.log_file_name.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }

    /// The logger configuration to install before bootstrapping.
    ///
    /// File output without an explicit `file_path` goes to the side-channel
    /// log in the managed side's folder.
    pub fn logging_for(&self, paths: &LoaderPaths) -> Result<LogConfig, PathError> {
        let log_file = paths.log_file(self.log_file_name())?;

        Ok(match &self.logging {
            Some(config) => {
                let mut config = config.clone();
                if config.log_type == LogType::File && config.file_path.is_none() {
                    config.file_path = Some(log_file);
                }
                config
            }
            None => LogConfig::file(log_file),
        })
    }

    pub fn nethost_library(&self, paths: &LoaderPaths) -> String {
        self.loader
            .nethost_library
            .clone()
            .unwrap_or_else(|| paths.default_nethost().to_string())
    }
}
