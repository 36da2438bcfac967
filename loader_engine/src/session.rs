use std::ffi::{CStr, CString};

use liblogger::{log_warn, Logger};

use crate::bootstrap_state::BootstrapState;
use crate::dispatcher::Dispatcher;
use crate::host_environment::HostEnvironment;
use crate::loader_config::LoaderConfig;
use crate::loader_paths::LoaderPaths;
use crate::resolver_loader::{NethostResolverProvider, ResolverProvider};
use loader_core::CallbackTable;

pub const LOADING_MESSAGE: &str = "Loading .net core runtime and entry point...";
pub const LOADED_MESSAGE: &str = "[MQ2DotNetCoreLoader] Successfully loaded the .net core CLR.";
pub const FAILED_MESSAGE: &str = "[MQ2DotNetCoreLoader] Failed to load .net CLR and/or execute the entry point method!";

/// Everything the loader keeps after the host's `InitializePlugin` event.
#[derive(Debug)]
pub struct LoaderSession {
    state: BootstrapState,
    ini_path: CString,
}

impl LoaderSession {
    /// Starts a session that finds `hostfxr` through `nethost`.
    pub fn start_with_nethost(host: &dyn HostEnvironment) -> Self {
        Self::start(host, |paths, config| {
            NethostResolverProvider::new(config.nethost_library(paths))
        })
    }

    /// Configures logging, bootstraps the runtime once and reports the
    /// outcome in the host's chat.
    pub fn start<P, F>(host: &dyn HostEnvironment, make_provider: F) -> Self
    where
        P: ResolverProvider,
        F: FnOnce(&LoaderPaths, &LoaderConfig) -> P,
    {
        let base_dir = host.base_dir();
        let ini_path = CString::new(base_dir.clone()).unwrap_or_default();

        let paths = match LoaderPaths::from_base_dir(&base_dir) {
            Ok(paths) => paths,
            Err(e) => {
                let state = BootstrapState::aborted(e.into());
                report(host, &state);
                return LoaderSession { state, ini_path };
            }
        };

        let config = match LoaderConfig::load(paths.config_file()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}, using default loader settings", e);
                LoaderConfig::default()
            }
        };

        match config.logging_for(&paths) {
            Ok(logging) => {
                if let Err(e) = Logger::init_with_config(logging) {
                    eprintln!("Failed to initialize logger: {}", e);
                }
            }
            Err(e) => eprintln!("Failed to configure the loader log: {}", e),
        }
        if !Logger::is_initialized() {
            eprintln!("Loader log is not configured, writing to stderr");
        }

        host.write_chat(LOADING_MESSAGE);

        let provider = make_provider(&paths, &config);
        let state = BootstrapState::initialize(paths, &provider);
        report(host, &state);

        LoaderSession { state, ini_path }
    }

    pub fn state(&self) -> &BootstrapState {
        &self.state
    }

    /// The host's base directory, as handed back through `GetIniPath`.
    pub fn ini_path(&self) -> &CStr {
        &self.ini_path
    }

    pub fn dispatcher<'a>(&self, table: CallbackTable<'a>) -> Dispatcher<'a> {
        Dispatcher::new(&self.state, table)
    }
}

fn report(host: &dyn HostEnvironment, state: &BootstrapState) {
    match state.failure() {
        None => host.write_chat(LOADED_MESSAGE),
        Some(e) => {
            log_warn!("Dispatch stays disabled for this process");
            host.write_chat(FAILED_MESSAGE);
            host.write_chat(&format!("[MQ2DotNetCoreLoader] {}", e));
        }
    }
}
