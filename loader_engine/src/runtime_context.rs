use std::os::raw::c_void;

use liblogger::{log_debug, log_warn};
use loader_core::{HostfxrDelegateType, HostfxrHandle, LoadAssemblyAndGetFunctionPointerFn, PlatformString};

use crate::error::BootstrapError;
use crate::resolver_binding::ResolverBinding;

/// An initialized `hostfxr` context.
///
/// The handle is closed exactly once, when the context is dropped, whether or
/// not initialization succeeded. It never outlives the bootstrap.
pub struct RuntimeContext<'a> {
    binding: &'a ResolverBinding,
    handle: HostfxrHandle,
}

impl<'a> RuntimeContext<'a> {
    pub fn initialize(binding: &'a ResolverBinding, runtime_config: &PlatformString) -> Result<Self, BootstrapError> {
        let mut handle: HostfxrHandle = std::ptr::null_mut();
        let rc = unsafe {
            (binding.initialize_for_runtime_config)(runtime_config.as_ptr(), std::ptr::null(), &mut handle)
        };

        // Whatever handle came back gets closed, even a null one.
        let context = RuntimeContext { binding, handle };

        if rc != 0 || handle.is_null() {
            return Err(BootstrapError::RuntimeInitFailed(rc));
        }

        log_debug!("Initialized runtime context");
        Ok(context)
    }

    pub fn handle(&self) -> HostfxrHandle {
        self.handle
    }

    /// Requests the "load assembly and get function pointer" delegate.
    pub fn load_assembly_delegate(&self) -> Result<LoadAssemblyAndGetFunctionPointerFn, BootstrapError> {
        let mut delegate: *mut c_void = std::ptr::null_mut();
        let rc = unsafe {
            (self.binding.get_runtime_delegate)(
                self.handle,
                HostfxrDelegateType::LoadAssemblyAndGetFunctionPointer,
                &mut delegate,
            )
        };

        if rc != 0 || delegate.is_null() {
            return Err(BootstrapError::DelegateAcquisitionFailed(rc));
        }

        Ok(unsafe { std::mem::transmute::<*mut c_void, LoadAssemblyAndGetFunctionPointerFn>(delegate) })
    }
}

impl Drop for RuntimeContext<'_> {
    fn drop(&mut self) {
        let rc = unsafe { (self.binding.close)(self.handle) };
        if rc != 0 {
            log_warn!(&format!("hostfxr_close returned {:#010x}", rc as u32));
        } else {
            log_debug!("Closed runtime context");
        }
    }
}
