/*
 * Configuration for the loader's side-channel logger
 *
 * This module handles:
 * - Defining the LogType enum for output destinations (Console, File)
 * - Defining the LogLevel enum for severity levels (Debug, Info, Warn, Error)
 * - Case-insensitive deserialization of both enums from TOML
 * - Default configuration values
 *
 * The configuration is embedded in the loader's own configuration file as a
 * [logging] section; the loader fills in the file path when none is given.
 */

 use serde::{Deserialize, Serialize};

 /// Log severity levels
 #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
 pub enum LogLevel {
     Debug,
     Info,
     Warn,
     Error,
 }

 // Separate implementation of Deserialize to handle case-insensitive values
 impl<'de> Deserialize<'de> for LogLevel {
     fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
     where
         D: serde::Deserializer<'de>,
     {
         let s = String::deserialize(deserializer)?;
         match s.to_lowercase().as_str() {
             "debug" => Ok(LogLevel::Debug),
             "info" => Ok(LogLevel::Info),
             "warn" | "warning" => Ok(LogLevel::Warn),
             "error" => Ok(LogLevel::Error),
             _ => Err(serde::de::Error::unknown_variant(
                 &s,
                 &["debug", "info", "warn", "warning", "error"],
             )),
         }
     }
 }

 impl LogLevel {
     pub fn as_str(&self) -> &'static str {
         match self {
             LogLevel::Debug => "DEBUG",
             LogLevel::Info => "INFO",
             LogLevel::Warn => "WARN",
             LogLevel::Error => "ERROR",
         }
     }
 }

 /// Supported output types for logging
 #[derive(Debug, Clone, PartialEq, Serialize)]
 pub enum LogType {
     Console,
     File,
 }

 // Separate implementation of Deserialize to handle case-insensitive values
 impl<'de> Deserialize<'de> for LogType {
     fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
     where
         D: serde::Deserializer<'de>,
     {
         let s = String::deserialize(deserializer)?;
         match s.to_lowercase().as_str() {
             "console" => Ok(LogType::Console),
             "file" => Ok(LogType::File),
             _ => Err(serde::de::Error::unknown_variant(
                 &s,
                 &["console", "file"],
             )),
         }
     }
 }

 /// Configuration for the logger
 #[derive(Debug, Clone, Serialize, Deserialize)]
 pub struct LogConfig {
     /// Type of output (console, file)
     #[serde(rename = "type", default = "default_log_type")]
     pub log_type: LogType,

     /// Minimum log level to record
     #[serde(default = "default_threshold")]
     pub threshold: LogLevel,

     /// File path for file-based logging
     #[serde(default)]
     pub file_path: Option<String>,

     /// Folder for log files, joined in front of `file_path` when set
     #[serde(default)]
     pub log_folder: Option<String>,

     /// Whether to flush after every write (default: true)
     #[serde(default = "default_force_flush")]
     pub force_flush: bool,
 }

 fn default_log_type() -> LogType {
     LogType::Console
 }

 fn default_threshold() -> LogLevel {
     LogLevel::Info
 }

 fn default_force_flush() -> bool {
     // The host may terminate the process without warning
     true
 }

 impl Default for LogConfig {
     fn default() -> Self {
         LogConfig {
             log_type: default_log_type(),
             threshold: default_threshold(),
             file_path: None,
             log_folder: None,
             force_flush: default_force_flush(),
         }
     }
 }

 impl LogConfig {
     /// Configuration writing every level to the given file.
     pub fn file(file_path: impl Into<String>) -> Self {
         LogConfig {
             log_type: LogType::File,
             threshold: LogLevel::Debug,
             file_path: Some(file_path.into()),
             ..LogConfig::default()
         }
     }

     /// Whether a message at `level` passes the configured threshold.
     pub fn accepts(&self, level: LogLevel) -> bool {
         level >= self.threshold
     }
 }

 #[cfg(test)]
 mod tests {
     use super::*;

     #[derive(Deserialize)]
     struct Wrapper {
         logging: LogConfig,
     }

     #[test]
     fn parses_case_insensitive_values() {
         let parsed: Wrapper = toml::from_str(
             "[logging]\ntype = \"FILE\"\nthreshold = \"Warning\"\nfile_path = \"debug_plugin.log\"\n",
         )
         .unwrap();

         assert_eq!(parsed.logging.log_type, LogType::File);
         assert_eq!(parsed.logging.threshold, LogLevel::Warn);
         assert_eq!(parsed.logging.file_path.as_deref(), Some("debug_plugin.log"));
         assert!(parsed.logging.force_flush);
     }

     #[test]
     fn rejects_unknown_output_type() {
         let parsed = toml::from_str::<Wrapper>("[logging]\ntype = \"http\"\n");
         assert!(parsed.is_err());
     }

     #[test]
     fn threshold_filters_lower_levels() {
         let config = LogConfig {
             threshold: LogLevel::Warn,
             ..LogConfig::default()
         };

         assert!(!config.accepts(LogLevel::Debug));
         assert!(!config.accepts(LogLevel::Info));
         assert!(config.accepts(LogLevel::Warn));
         assert!(config.accepts(LogLevel::Error));
     }
 }
