/*
 * Log output implementations
 *
 * This module defines the logging backends:
 * - ConsoleOutput: Writes logs to stdout
 * - FileOutput: Appends logs to a file, creating its folder when needed
 *
 * Each output implements the LogOutput trait. The factory function picks the
 * output matching the configuration.
 */

 use std::fs::{File, OpenOptions};
 use std::io::{self, Write};
 use std::path::{Path, PathBuf};
 use crate::config::{LogConfig, LogType};

 pub trait LogOutput: Send + Sync {
     fn write_log(&mut self, formatted_message: &str) -> Result<(), String>;

     fn flush(&mut self) -> Result<(), String> {
         Ok(())
     }
 }

 // Console output implementation
 pub struct ConsoleOutput;

 impl ConsoleOutput {
     pub fn new() -> Self {
         ConsoleOutput {}
     }
 }

 impl LogOutput for ConsoleOutput {
     fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
         if let Err(e) = writeln!(io::stdout(), "{}", formatted_message) {
             return Err(format!("Failed to write to console: {}", e));
         }

         Ok(())
     }
 }

 pub struct FileOutput {
     file: File,
     force_flush: bool,
 }

 impl FileOutput {
     pub fn new(file_path: &Path, force_flush: bool) -> Result<Self, String> {
         // Create directory if it doesn't exist
         if let Some(parent) = file_path.parent() {
             if !parent.as_os_str().is_empty() && !parent.exists() {
                 std::fs::create_dir_all(parent).map_err(|e| format!("Failed to create log directory: {}", e))?;
             }
         }

         // Open the file once with append mode
         let file = OpenOptions::new()
             .create(true)
             .append(true)
             .open(file_path)
             .map_err(|e| format!("Failed to open log file '{}': {}", file_path.display(), e))?;

         Ok(FileOutput {
             file,
             force_flush,
         })
     }
 }

 impl LogOutput for FileOutput {
     fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
         self.file.write_all(formatted_message.as_bytes())
             .map_err(|e| format!("Failed to write to log file: {}", e))?;
         self.file.write_all(b"\n")
             .map_err(|e| format!("Failed to write newline to log file: {}", e))?;

         // Only flush immediately if force_flush is true
         if self.force_flush {
             self.flush()?;
         }

         Ok(())
     }

     fn flush(&mut self) -> Result<(), String> {
         self.file.flush()
             .map_err(|e| format!("Failed to flush log file: {}", e))
     }
 }

 /// Resolves the configured file path, joining it onto `log_folder` when one is set.
 pub fn resolve_file_path(config: &LogConfig) -> Result<PathBuf, String> {
     let file_path = config.file_path.as_ref()
         .ok_or_else(|| "File path not specified in configuration".to_string())?;

     Ok(match &config.log_folder {
         Some(folder) => Path::new(folder).join(file_path),
         None => PathBuf::from(file_path),
     })
 }

 /// Creates the log output based on configuration
 pub fn create_log_output(config: &LogConfig) -> Result<Box<dyn LogOutput>, String> {
     match config.log_type {
         LogType::Console => Ok(Box::new(ConsoleOutput::new())),
         LogType::File => {
             let full_path = resolve_file_path(config)?;
             Ok(Box::new(FileOutput::new(&full_path, config.force_flush)?))
         },
     }
 }
