use std::env;

/// Environment variable naming the base directory when the loader runs
/// outside the game host.
pub const BASE_PATH_ENV: &str = "MQ2DOTNETCORE_BASE_PATH";

/// Services the loader needs from the process hosting it.
pub trait HostEnvironment {
    /// The host's base directory. Empty when there is none.
    fn base_dir(&self) -> String;

    /// Shows one line to the user.
    fn write_chat(&self, line: &str);
}

/// Host used when the loader is not running inside the game host (a test
/// program loaded it). Chat lines go to stdout.
#[derive(Debug, Clone, Default)]
pub struct StandaloneHost {
    base_dir: String,
}

impl StandaloneHost {
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Reads the base directory from `MQ2DOTNETCORE_BASE_PATH`, defaulting to
    /// none.
    pub fn from_env() -> Self {
        Self::new(env::var(BASE_PATH_ENV).unwrap_or_default())
    }
}

impl HostEnvironment for StandaloneHost {
    fn base_dir(&self) -> String {
        self.base_dir.clone()
    }

    fn write_chat(&self, line: &str) {
        println!("{}", line);
    }
}
