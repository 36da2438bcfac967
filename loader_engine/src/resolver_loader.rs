use std::ffi::OsString;
use std::os::raw::c_void;

use libloading::Library;
use liblogger::{log_debug, log_info};
use loader_core::{GetHostfxrPathFn, PlatformChar, PlatformString, MAX_PATH};

use crate::error::BootstrapError;
use crate::resolver_binding::lookup;

/// A loaded module whose exports can be looked up by name.
pub trait SymbolSource: Send + Sync {
    /// Address of the export `name`, if present.
    fn symbol(&self, name: &str) -> Option<*mut c_void>;
}

impl SymbolSource for Library {
    fn symbol(&self, name: &str) -> Option<*mut c_void> {
        let mut symbol_name = name.as_bytes().to_vec();
        symbol_name.push(0);

        unsafe {
            self.get::<*mut c_void>(&symbol_name)
                .ok()
                .map(|symbol| *symbol)
                .filter(|address| !address.is_null())
        }
    }
}

/// Finds and opens the runtime resolver (`hostfxr`).
pub trait ResolverProvider {
    /// Full path of the resolver library.
    fn locate_resolver(&self) -> Result<OsString, BootstrapError>;

    /// Opens the resolver library at `path`. The returned module is kept
    /// loaded for the rest of the process.
    fn load_resolver(&self, path: &OsString) -> Result<Box<dyn SymbolSource>, BootstrapError>;
}

/// Locates `hostfxr` through the `nethost` library and opens it with
/// `libloading`.
pub struct NethostResolverProvider {
    nethost_library: String,
}

impl NethostResolverProvider {
    pub fn new(nethost_library: impl Into<String>) -> Self {
        Self {
            nethost_library: nethost_library.into(),
        }
    }

    pub fn nethost_library(&self) -> &str {
        &self.nethost_library
    }
}

impl ResolverProvider for NethostResolverProvider {
    fn locate_resolver(&self) -> Result<OsString, BootstrapError> {
        log_debug!("Using nethost library to locate the hostfxr path", Some(self.nethost_library.clone()));

        let nethost = unsafe { Library::new(&self.nethost_library) }
            .map_err(|e| BootstrapError::LocatorUnavailable(e.to_string()))?;

        let get_hostfxr_path: GetHostfxrPathFn = lookup(&nethost, loader_core::hostfxr::GET_HOSTFXR_PATH_EXPORT)
            .ok_or_else(|| {
                BootstrapError::LocatorUnavailable(format!(
                    "{} does not export {}",
                    self.nethost_library,
                    loader_core::hostfxr::GET_HOSTFXR_PATH_EXPORT
                ))
            })?;

        query_resolver_path(get_hostfxr_path)
    }

    fn load_resolver(&self, path: &OsString) -> Result<Box<dyn SymbolSource>, BootstrapError> {
        log_info!("Loading hostfxr", Some(path.to_string_lossy().into_owned()));

        let library = unsafe { Library::new(path) }.map_err(|e| BootstrapError::ResolverLoadFailed(e.to_string()))?;
        Ok(Box::new(library))
    }
}

/// Asks the locator for the resolver path using a `MAX_PATH` buffer.
pub fn query_resolver_path(get_hostfxr_path: GetHostfxrPathFn) -> Result<OsString, BootstrapError> {
    let mut buffer = [0 as PlatformChar; MAX_PATH];
    let mut buffer_size = buffer.len();

    let rc = unsafe { get_hostfxr_path(buffer.as_mut_ptr(), &mut buffer_size, std::ptr::null()) };
    if rc != 0 {
        return Err(BootstrapError::ResolverNotFound(rc));
    }

    let path = PlatformString::decode(&buffer);
    log_debug!("Located hostfxr", Some(path.to_string_lossy().into_owned()));
    Ok(path)
}
