use thiserror::Error;

/// Hosting status codes are HRESULT-style values, best read in hex.
fn hex(code: &i32) -> String {
    format!("{:#010x}", *code as u32)
}

/// Errors raised while building the loader's file paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path `{path}` is {length} characters long, the limit is {limit}")]
    TooLong { path: String, length: usize, limit: usize },

    #[error("path `{0}` contains an interior NUL character")]
    InteriorNul(String),
}

/// Errors raised while reading `loader_config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Why bringing up the managed runtime failed. Every kind is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("the nethost library could not be loaded: {0}")]
    LocatorUnavailable(String),

    #[error("get_hostfxr_path failed with {}", hex(.0))]
    ResolverNotFound(i32),

    #[error("the hostfxr library could not be loaded: {0}")]
    ResolverLoadFailed(String),

    #[error("hostfxr does not export `{0}`")]
    ResolverExportMissing(String),

    #[error("hostfxr_initialize_for_runtime_config failed with {}", hex(.0))]
    RuntimeInitFailed(i32),

    #[error("hostfxr_get_runtime_delegate failed with {}", hex(.0))]
    DelegateAcquisitionFailed(i32),

    #[error("load_assembly_and_get_function_pointer failed with {}", hex(.0))]
    EntryPointResolutionFailed(i32),

    #[error("the managed entry point returned {}", hex(.0))]
    EntryPointInvocationFailed(i32),

    #[error(transparent)]
    Path(#[from] PathError),
}
