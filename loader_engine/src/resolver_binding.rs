use std::os::raw::c_void;

use liblogger::{log_debug, log_error};
use liblogger_macros::log_entry_exit;
use loader_core::hostfxr::{HOSTFXR_CLOSE_EXPORT, HOSTFXR_GET_RUNTIME_DELEGATE_EXPORT, HOSTFXR_INITIALIZE_EXPORT};
use loader_core::{HostfxrCloseFn, HostfxrGetRuntimeDelegateFn, HostfxrInitializeForRuntimeConfigFn};

use crate::error::BootstrapError;
use crate::resolver_loader::SymbolSource;

/// The three `hostfxr` exports the bootstrap needs, all present.
#[derive(Clone, Copy)]
pub struct ResolverBinding {
    pub initialize_for_runtime_config: HostfxrInitializeForRuntimeConfigFn,
    pub get_runtime_delegate: HostfxrGetRuntimeDelegateFn,
    pub close: HostfxrCloseFn,
}

impl ResolverBinding {
    /// Binds every required export. Each missing export is logged and the
    /// first one is reported; a partial binding is never returned.
    #[log_entry_exit]
    pub fn bind(source: &dyn SymbolSource) -> Result<Self, BootstrapError> {
        let initialize = lookup::<HostfxrInitializeForRuntimeConfigFn>(source, HOSTFXR_INITIALIZE_EXPORT);
        let get_runtime_delegate = lookup::<HostfxrGetRuntimeDelegateFn>(source, HOSTFXR_GET_RUNTIME_DELEGATE_EXPORT);
        let close = lookup::<HostfxrCloseFn>(source, HOSTFXR_CLOSE_EXPORT);

        let missing: Vec<&str> = [
            (initialize.is_none(), HOSTFXR_INITIALIZE_EXPORT),
            (get_runtime_delegate.is_none(), HOSTFXR_GET_RUNTIME_DELEGATE_EXPORT),
            (close.is_none(), HOSTFXR_CLOSE_EXPORT),
        ]
        .into_iter()
        .filter_map(|(is_missing, name)| is_missing.then_some(name))
        .collect();

        for name in &missing {
            log_error!("Failed to bind hostfxr export", Some(name.to_string()));
        }

        match (initialize, get_runtime_delegate, close) {
            (Some(initialize_for_runtime_config), Some(get_runtime_delegate), Some(close)) => {
                log_debug!("Bound hostfxr exports");
                Ok(ResolverBinding {
                    initialize_for_runtime_config,
                    get_runtime_delegate,
                    close,
                })
            }
            _ => Err(BootstrapError::ResolverExportMissing(missing[0].to_string())),
        }
    }
}

/// Looks up `name` and reinterprets its address as the function type `F`.
///
/// `F` must be a function pointer type matching the export's real signature.
pub(crate) fn lookup<F: Copy>(source: &dyn SymbolSource, name: &str) -> Option<F> {
    debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*mut c_void>());

    source
        .symbol(name)
        .map(|address| unsafe { std::mem::transmute_copy::<*mut c_void, F>(&address) })
}
