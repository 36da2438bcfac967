/*
 * Logger implementation module
 *
 * This file implements the core Logger functionality which includes:
 * - Creation and initialization of the global logger instance
 * - Configuration of the logger programmatically
 * - Synchronous, thread-safe writes through a mutex-guarded output
 * - A stderr fallback while no output is configured
 *
 * The Logger uses a singleton pattern with lazy initialization via OnceCell
 * to ensure there's only one logger instance in the host process.
 */

 use once_cell::sync::OnceCell;
 use std::sync::Mutex;
 use std::path::Path;
 use chrono::Local;
 use std::io::{self, Write};

 use crate::config::{LogConfig, LogLevel};
 use crate::outputs::{LogOutput, create_log_output};

 // Global logger instance
 static LOGGER_INSTANCE: OnceCell<Mutex<LoggerInner>> = OnceCell::new();

 struct LoggerInner {
     config: Option<LogConfig>,
     output: Option<Box<dyn LogOutput>>,
 }

 impl LoggerInner {
     /// Creates a new uninitialized logger inner structure
     fn new() -> Self {
         LoggerInner {
             config: None,
             output: None,
         }
     }

     /// Initializes the logger with the provided configuration
     fn init_with_config(&mut self, config: LogConfig) -> Result<(), String> {
         // Create the appropriate log output based on configuration
         let output = create_log_output(&config)?;
         self.output = Some(output);
         self.config = Some(config);

         Ok(())
     }

     /// Log a message with the configured output
     fn log(&mut self, level: LogLevel, message: &str, context: Option<&str>, file: &str, line: u32, module: &str) {
         // Skip logging if level is below threshold
         if let Some(ref config) = self.config {
             if !config.accepts(level) {
                 return;
             }
         }

         let timestamp = timestamp();
         let formatted_message = format_log_message(&timestamp, level, message, context, file, line, module);

         if let Some(ref mut output) = self.output {
             if let Err(e) = output.write_log(&formatted_message) {
                 eprintln!("Failed to write log: {}", e);
             }
         } else {
             // No output configured, write to stderr
             let _ = writeln!(io::stderr(), "{}", formatted_message);
         }
     }
 }

 fn timestamp() -> String {
     Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
 }

 // Format a log message for output
 pub(crate) fn format_log_message(timestamp: &str, level: LogLevel, message: &str,
                     context: Option<&str>, file: &str, line: u32, module: &str) -> String {
     let level_str = level.as_str();
     match context {
         Some(ctx) => format!("{} [{}] [{}:{}] [{}] {} | {}",
             timestamp, level_str, file, line, module, message, ctx),
         None => format!("{} [{}] [{}:{}] [{}] {}",
             timestamp, level_str, file, line, module, message),
     }
 }

 pub struct Logger;

 impl Logger {
     /// Initialize the logger with a LogConfig struct. Calling it again swaps the output.
     pub fn init_with_config(config: LogConfig) -> Result<(), String> {
         let logger = LOGGER_INSTANCE.get_or_init(|| Mutex::new(LoggerInner::new()));
         let mut logger_guard = match logger.lock() {
             Ok(guard) => guard,
             Err(poisoned) => poisoned.into_inner(),
         };

         logger_guard.init_with_config(config)
     }

     /// Whether an output has been configured
     pub fn is_initialized() -> bool {
         LOGGER_INSTANCE
             .get()
             .and_then(|logger| logger.lock().ok().map(|guard| guard.output.is_some()))
             .unwrap_or(false)
     }

     /// Log a debug message
     pub fn debug(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Debug, message, context, file, line, module)
     }

     /// Log an info message
     pub fn info(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Info, message, context, file, line, module)
     }

     /// Log a warning message
     pub fn warn(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Warn, message, context, file, line, module)
     }

     /// Log an error message
     pub fn error(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Error, message, context, file, line, module)
     }

     fn log_with_metadata(level: LogLevel, message: &str, context: Option<String>, file: &str, line: u32, module: &str) {
         // Extract just the filename from the path
         let file_name = Path::new(file)
             .file_name()
             .and_then(|n| n.to_str())
             .unwrap_or(file);

         let logger = LOGGER_INSTANCE.get_or_init(|| Mutex::new(LoggerInner::new()));

         if let Ok(mut logger) = logger.lock() {
             logger.log(level, message, context.as_deref(), file_name, line, module);
         } else {
             // If the mutex is poisoned, log to stderr
             let log_line = format_log_message(&timestamp(), level, message, Some("MUTEX POISONED"), file_name, line, module);
             let _ = writeln!(io::stderr(), "{}", log_line);
         }
     }

     /// Flushes the configured output. The logger stays usable afterwards.
     pub fn shutdown() -> Result<(), String> {
         match LOGGER_INSTANCE.get() {
             Some(logger) => {
                 let mut guard = logger.lock().map_err(|_| "Logger mutex was poisoned".to_string())?;
                 match guard.output.as_mut() {
                     Some(output) => output.flush(),
                     None => Ok(()),
                 }
             }
             None => Ok(()),
         }
     }
 }
