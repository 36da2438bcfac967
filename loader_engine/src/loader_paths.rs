use loader_core::{PlatformString, MAX_PATH};

use crate::error::PathError;

/// Folder, under the host's base directory, holding the managed side.
pub const DOTNET_FOLDER: &str = "MQ2DotNetCore";
pub const ENTRY_ASSEMBLY_FILE: &str = "MQ2DotNetCore.dll";
pub const RUNTIME_CONFIG_FILE: &str = "MQ2DotNetCore.runtimeconfig.json";
pub const LOADER_MODULE_FILE: &str = "MQ2DotNetCoreLoader.dll";
pub const DEFAULT_LOG_FILE: &str = "debug_plugin.log";
pub const CONFIG_FILE: &str = "loader_config.toml";
pub const NETHOST_FILE: &str = "nethost.dll";

/// Separator used when joining onto the host's base directory.
#[cfg(windows)]
pub const SEPARATOR: char = '\\';
#[cfg(not(windows))]
pub const SEPARATOR: char = '/';

/// Every file location the loader needs, derived from the host's base
/// directory.
///
/// Paths are joined with the platform separator (a backslash inside the game
/// host). An empty base directory means the module was loaded outside the
/// game host, and every path collapses to a bare file name resolved against
/// the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderPaths {
    separator: char,
    base_dir: String,
    entry_assembly: String,
    runtime_config: String,
    loader_module: String,
    config_file: String,
    default_nethost: String,
}

impl LoaderPaths {
    pub fn from_base_dir(base_dir: &str) -> Result<Self, PathError> {
        Self::with_separator(base_dir, SEPARATOR)
    }

    pub fn with_separator(base_dir: &str, separator: char) -> Result<Self, PathError> {
        // A root directory keeps its separator, so it never reads as "no base".
        let trimmed = base_dir.trim_end_matches(['\\', '/']);
        let base_dir = if trimmed.is_empty() { &base_dir[..base_dir.len().min(1)] } else { trimmed };
        let join = |parts: &[&str]| -> Result<String, PathError> {
            let mut path = base_dir.to_string();
            for part in parts {
                if !path.ends_with(['\\', '/']) {
                    path.push(separator);
                }
                path.push_str(part);
            }
            checked(path)
        };

        let paths = if base_dir.is_empty() {
            LoaderPaths {
                separator,
                base_dir: String::new(),
                entry_assembly: ENTRY_ASSEMBLY_FILE.to_string(),
                runtime_config: RUNTIME_CONFIG_FILE.to_string(),
                loader_module: LOADER_MODULE_FILE.to_string(),
                config_file: CONFIG_FILE.to_string(),
                default_nethost: NETHOST_FILE.to_string(),
            }
        } else {
            LoaderPaths {
                separator,
                base_dir: base_dir.to_string(),
                entry_assembly: join(&[DOTNET_FOLDER, ENTRY_ASSEMBLY_FILE])?,
                runtime_config: join(&[DOTNET_FOLDER, RUNTIME_CONFIG_FILE])?,
                loader_module: join(&[LOADER_MODULE_FILE])?,
                config_file: join(&[DOTNET_FOLDER, CONFIG_FILE])?,
                default_nethost: join(&[NETHOST_FILE])?,
            }
        };

        Ok(paths)
    }

    pub fn is_standalone(&self) -> bool {
        self.base_dir.is_empty()
    }

    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    pub fn entry_assembly(&self) -> &str {
        &self.entry_assembly
    }

    pub fn runtime_config(&self) -> &str {
        &self.runtime_config
    }

    pub fn loader_module(&self) -> &str {
        &self.loader_module
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn default_nethost(&self) -> &str {
        &self.default_nethost
    }

    /// Location of a log file with the given name, next to the managed side.
    pub fn log_file(&self, file_name: &str) -> Result<String, PathError> {
        if self.is_standalone() {
            return checked(file_name.to_string());
        }

        let mut path = self.base_dir.clone();
        for part in [DOTNET_FOLDER, file_name] {
            if !path.ends_with(['\\', '/']) {
                path.push(self.separator);
            }
            path.push_str(part);
        }
        checked(path)
    }
}

/// Encodes `path` for the hosting APIs, enforcing `MAX_PATH`.
pub fn to_platform_string(path: &str) -> Result<PlatformString, PathError> {
    let encoded = PlatformString::new(path).ok_or_else(|| PathError::InteriorNul(path.to_string()))?;
    if encoded.len() >= MAX_PATH {
        return Err(PathError::TooLong {
            path: path.to_string(),
            length: encoded.len(),
            limit: MAX_PATH - 1,
        });
    }

    Ok(encoded)
}

fn checked(path: String) -> Result<String, PathError> {
    to_platform_string(&path)?;
    Ok(path)
}
