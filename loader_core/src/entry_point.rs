use std::os::raw::c_void;

use crate::PlatformChar;

/// Assembly-qualified name of the managed type holding the entry point.
pub const ENTRY_POINT_TYPE_NAME: &str = "MQ2DotNetCore.LoaderEntryPoint, MQ2DotNetCore";

/// Managed method invoked once to hand control to the managed side.
pub const ENTRY_POINT_METHOD_NAME: &str = "InitializePlugin";

/// Default managed delegate signature (`component_entry_point_fn`).
/// Returns 0 on success.
pub type ComponentEntryPointFn = unsafe extern "system" fn(arg: *mut c_void, arg_size_in_bytes: i32) -> i32;

/// Argument record passed to the managed entry point.
///
/// ### Safety
/// - `loader_path` points to a NUL-terminated string owned by the loader and
///   valid only for the duration of the entry-point call.
/// - The managed side must copy the path if it keeps it.
#[repr(C)]
pub struct EntryPointArgs {
    /// Full path of the loader module, so the managed side can find the
    /// exported callback slots.
    pub loader_path: *const PlatformChar,
}

impl EntryPointArgs {
    /// Size of the record as reported to the entry point.
    pub const SIZE: i32 = std::mem::size_of::<EntryPointArgs>() as i32;
}
