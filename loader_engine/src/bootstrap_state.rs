use liblogger::{log_error, log_info};

use crate::bootstrap::{bootstrap, BootstrapOutcome, ResidentResolver};
use crate::error::BootstrapError;
use crate::loader_paths::LoaderPaths;
use crate::resolver_loader::ResolverProvider;

/// Outcome of the one bootstrap attempt made in this process.
///
/// Built once and never modified; `is_loaded()` is what gates every
/// callback dispatch.
#[derive(Debug)]
pub struct BootstrapState {
    paths: Option<LoaderPaths>,
    resolver: Option<ResidentResolver>,
    outcome: Result<(), BootstrapError>,
}

impl BootstrapState {
    /// Runs the bootstrap and records its outcome.
    pub fn initialize(paths: LoaderPaths, provider: &dyn ResolverProvider) -> Self {
        let BootstrapOutcome { resolver, result: outcome } = bootstrap(&paths, provider);
        match &outcome {
            Ok(_) => log_info!("Managed runtime loaded"),
            Err(e) => log_error!("Managed runtime failed to load", Some(e.to_string())),
        }

        BootstrapState {
            paths: Some(paths),
            resolver,
            outcome,
        }
    }

    /// A state for a bootstrap that could not even start.
    pub fn aborted(error: BootstrapError) -> Self {
        log_error!("Bootstrap aborted", Some(error.to_string()));
        BootstrapState {
            paths: None,
            resolver: None,
            outcome: Err(error),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Why the bootstrap failed, if it did.
    pub fn failure(&self) -> Option<&BootstrapError> {
        self.outcome.as_ref().err()
    }

    /// Whether the resolver library was opened. Once opened it stays loaded,
    /// even when a later step failed.
    pub fn has_resident_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    pub fn paths(&self) -> Option<&LoaderPaths> {
        self.paths.as_ref()
    }
}
