//! Side-channel logging for the MQ2DotNetCore loader.
//!
//! The loader writes its bring-up trace to `debug_plugin.log` before the
//! game host's own output can be trusted, so every macro here writes
//! synchronously on the caller's thread, tagging each line with file, line
//! and module. `Logger::init_with_config` points the output at the console
//! or at a file; until then lines go to stderr.

mod config;
mod outputs;
mod logger;

pub use logger::Logger;
pub use config::LogConfig;
pub use config::LogLevel;
pub use config::LogType;

#[cfg(feature = "proc_macros")]
pub use liblogger_macros::*;

#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        $crate::Logger::debug($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::debug($message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::Logger::info($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::info($message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::Logger::warn($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::warn($message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        $crate::Logger::error($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::error($message, $context, file!(), line!(), module_path!())
    };
}
