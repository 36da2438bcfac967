use std::os::raw::c_void;

use liblogger::{log_debug, log_info};
use liblogger_macros::measure_time;
use loader_core::{
    ComponentEntryPointFn, EntryPointArgs, LoadAssemblyAndGetFunctionPointerFn, PlatformString,
    ENTRY_POINT_METHOD_NAME, ENTRY_POINT_TYPE_NAME,
};

use crate::error::BootstrapError;
use crate::loader_paths::{to_platform_string, LoaderPaths};
use crate::resolver_binding::ResolverBinding;
use crate::resolver_loader::{ResolverProvider, SymbolSource};
use crate::runtime_context::RuntimeContext;

/// The resolver library, kept loaded from the moment it is opened, whatever
/// the bootstrap's outcome. The managed runtime it hosts cannot be unloaded.
pub struct ResidentResolver {
    library: Box<dyn SymbolSource>,
}

/// What one bootstrap attempt leaves behind.
#[derive(Debug)]
pub struct BootstrapOutcome {
    /// Set as soon as the resolver library was opened.
    pub resolver: Option<ResidentResolver>,
    pub result: Result<(), BootstrapError>,
}

impl std::fmt::Debug for ResidentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ResidentResolver")
    }
}

/// Brings up the managed runtime and runs the managed entry point once.
///
/// Steps, none of them retried:
/// 1. locate `hostfxr` through the provider,
/// 2. load it and bind its exports,
/// 3. initialize a runtime context from the runtime config,
/// 4. get the load-assembly delegate, then close the context,
/// 5. resolve `InitializePlugin` on the managed entry type,
/// 6. call it with the loader module path.
#[measure_time]
pub fn bootstrap(paths: &LoaderPaths, provider: &dyn ResolverProvider) -> BootstrapOutcome {
    let mut resolver = None;
    let result = bring_up(paths, provider, &mut resolver);
    BootstrapOutcome { resolver, result }
}

fn bring_up(
    paths: &LoaderPaths,
    provider: &dyn ResolverProvider,
    resident: &mut Option<ResidentResolver>,
) -> Result<(), BootstrapError> {
    log_info!("Entry assembly path", Some(paths.entry_assembly().to_string()));
    log_info!("Entry type", Some(ENTRY_POINT_TYPE_NAME.to_string()));
    log_info!("Entry method", Some(ENTRY_POINT_METHOD_NAME.to_string()));

    let entry_assembly = to_platform_string(paths.entry_assembly())?;
    let runtime_config = to_platform_string(paths.runtime_config())?;
    let loader_module = to_platform_string(paths.loader_module())?;

    let resolver_path = provider.locate_resolver()?;
    let library = provider.load_resolver(&resolver_path)?;
    let resolver = resident.insert(ResidentResolver { library });
    let binding = ResolverBinding::bind(&*resolver.library)?;

    let load_assembly = {
        let context = RuntimeContext::initialize(&binding, &runtime_config)?;
        let delegate = context.load_assembly_delegate();
        drop(context);
        delegate?
    };
    log_debug!("Acquired load_assembly_and_get_function_pointer delegate");

    let entry_point = resolve_entry_point(load_assembly, &entry_assembly)?;
    log_debug!("Resolved managed entry point, invoking it");

    let mut args = EntryPointArgs {
        loader_path: loader_module.as_ptr(),
    };
    let rc = unsafe { entry_point(&mut args as *mut EntryPointArgs as *mut c_void, EntryPointArgs::SIZE) };
    if rc != 0 {
        return Err(BootstrapError::EntryPointInvocationFailed(rc));
    }

    log_info!("Managed entry point returned successfully");
    Ok(())
}

fn resolve_entry_point(
    load_assembly: LoadAssemblyAndGetFunctionPointerFn,
    entry_assembly: &PlatformString,
) -> Result<ComponentEntryPointFn, BootstrapError> {
    let type_name = to_platform_string(ENTRY_POINT_TYPE_NAME)?;
    let method_name = to_platform_string(ENTRY_POINT_METHOD_NAME)?;

    let mut function: *mut c_void = std::ptr::null_mut();
    let rc = unsafe {
        load_assembly(
            entry_assembly.as_ptr(),
            type_name.as_ptr(),
            method_name.as_ptr(),
            std::ptr::null(),
            std::ptr::null_mut(),
            &mut function,
        )
    };

    if rc != 0 || function.is_null() {
        return Err(BootstrapError::EntryPointResolutionFailed(rc));
    }

    Ok(unsafe { std::mem::transmute::<*mut c_void, ComponentEntryPointFn>(function) })
}

