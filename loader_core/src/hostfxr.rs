//! Signatures of the .NET hosting layer: the `nethost` locator, the three
//! `hostfxr` exports the loader binds, and the runtime delegate used to load
//! the managed entry point.

use std::os::raw::c_void;

use crate::PlatformChar;

/// Export of the `nethost` library that reports where `hostfxr` lives.
pub const GET_HOSTFXR_PATH_EXPORT: &str = "get_hostfxr_path";

pub const HOSTFXR_INITIALIZE_EXPORT: &str = "hostfxr_initialize_for_runtime_config";
pub const HOSTFXR_GET_RUNTIME_DELEGATE_EXPORT: &str = "hostfxr_get_runtime_delegate";
pub const HOSTFXR_CLOSE_EXPORT: &str = "hostfxr_close";

/// Opaque `hostfxr_handle`.
pub type HostfxrHandle = *mut c_void;

/// Runtime delegate kinds understood by `hostfxr_get_runtime_delegate`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostfxrDelegateType {
    ComActivation = 0,
    LoadInMemoryAssembly = 1,
    WinrtActivation = 2,
    ComRegister = 3,
    ComUnregister = 4,
    LoadAssemblyAndGetFunctionPointer = 5,
    GetFunctionPointer = 6,
}

/// Optional parameters of `get_hostfxr_path`.
#[repr(C)]
pub struct GetHostfxrParameters {
    pub size: usize,
    pub assembly_path: *const PlatformChar,
    pub dotnet_root: *const PlatformChar,
}

/// Optional parameters of `hostfxr_initialize_for_runtime_config`.
#[repr(C)]
pub struct HostfxrInitializeParameters {
    pub size: usize,
    pub host_path: *const PlatformChar,
    pub dotnet_root: *const PlatformChar,
}

pub type GetHostfxrPathFn = unsafe extern "system" fn(
    buffer: *mut PlatformChar,
    buffer_size: *mut usize,
    parameters: *const GetHostfxrParameters,
) -> i32;

pub type HostfxrInitializeForRuntimeConfigFn = unsafe extern "C" fn(
    runtime_config_path: *const PlatformChar,
    parameters: *const HostfxrInitializeParameters,
    host_context_handle: *mut HostfxrHandle,
) -> i32;

pub type HostfxrGetRuntimeDelegateFn = unsafe extern "C" fn(
    host_context_handle: HostfxrHandle,
    delegate_type: HostfxrDelegateType,
    delegate: *mut *mut c_void,
) -> i32;

pub type HostfxrCloseFn = unsafe extern "C" fn(host_context_handle: HostfxrHandle) -> i32;

/// `load_assembly_and_get_function_pointer_fn`. A null `delegate_type_name`
/// selects the default `ComponentEntryPointFn` signature.
pub type LoadAssemblyAndGetFunctionPointerFn = unsafe extern "system" fn(
    assembly_path: *const PlatformChar,
    type_name: *const PlatformChar,
    method_name: *const PlatformChar,
    delegate_type_name: *const PlatformChar,
    reserved: *mut c_void,
    delegate: *mut *mut c_void,
) -> i32;
