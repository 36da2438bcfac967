//! Brings up the .NET runtime for MQ2DotNetCore and forwards host events to
//! the managed side.

pub mod bootstrap;
pub mod bootstrap_state;
pub mod dispatcher;
pub mod error;
pub mod host_environment;
pub mod loader_config;
pub mod loader_paths;
pub mod resolver_binding;
pub mod resolver_loader;
pub mod runtime_context;
pub mod session;

pub use bootstrap::{bootstrap, BootstrapOutcome, ResidentResolver};
pub use bootstrap_state::BootstrapState;
pub use dispatcher::Dispatcher;
pub use error::{BootstrapError, ConfigError, PathError};
pub use host_environment::{HostEnvironment, StandaloneHost, BASE_PATH_ENV};
pub use loader_config::{LoaderConfig, LoaderSettings};
pub use loader_paths::LoaderPaths;
pub use resolver_binding::ResolverBinding;
pub use resolver_loader::{NethostResolverProvider, ResolverProvider, SymbolSource};
pub use runtime_context::RuntimeContext;
pub use session::LoaderSession;
