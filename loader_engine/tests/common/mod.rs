//! Mock `hostfxr` exports and a mock managed side, written as real `extern`
//! functions so the bootstrap drives them exactly as it drives the runtime.

#![allow(dead_code)]

use std::ffi::{CStr, OsString};
use std::os::raw::{c_char, c_void};
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use loader_core::hostfxr::{
    HostfxrInitializeParameters, HOSTFXR_CLOSE_EXPORT, HOSTFXR_GET_RUNTIME_DELEGATE_EXPORT,
    HOSTFXR_INITIALIZE_EXPORT,
};
use loader_core::{
    CallbackSlots, EntryPointArgs, HostfxrDelegateType, HostfxrHandle, PlatformChar, PlatformString,
};
use loader_engine::{BootstrapError, HostEnvironment, ResolverProvider, SymbolSource};

pub const ALL_EXPORTS: [&str; 3] = [
    HOSTFXR_INITIALIZE_EXPORT,
    HOSTFXR_GET_RUNTIME_DELEGATE_EXPORT,
    HOSTFXR_CLOSE_EXPORT,
];

pub const CONTEXT_HANDLE: usize = 0xC0DE;

static SERIAL: Mutex<()> = Mutex::new(());

pub static INIT_RC: AtomicI32 = AtomicI32::new(0);
pub static INIT_GIVES_HANDLE: AtomicBool = AtomicBool::new(true);
pub static DELEGATE_RC: AtomicI32 = AtomicI32::new(0);
pub static RESOLVE_RC: AtomicI32 = AtomicI32::new(0);
pub static ENTRY_RC: AtomicI32 = AtomicI32::new(0);

pub static INIT_CALLS: AtomicUsize = AtomicUsize::new(0);
pub static CLOSE_CALLS: AtomicUsize = AtomicUsize::new(0);
pub static LAST_CLOSED: AtomicUsize = AtomicUsize::new(usize::MAX);
pub static DELEGATE_KIND: AtomicI32 = AtomicI32::new(-1);
/// Times a mock resolver library was dropped, i.e. unloaded.
pub static RESOLVER_UNLOADS: AtomicUsize = AtomicUsize::new(0);
pub static ENTRY_CALLS: AtomicUsize = AtomicUsize::new(0);
pub static ENTRY_ARG_SIZE: AtomicI32 = AtomicI32::new(-1);
/// Number of contexts open when the entry point ran.
pub static OPEN_AT_ENTRY: AtomicUsize = AtomicUsize::new(usize::MAX);

pub static RESOLVED_NAMES: Mutex<Vec<OsString>> = Mutex::new(Vec::new());
pub static ENTRY_LOADER_PATH: Mutex<Option<OsString>> = Mutex::new(None);

/// Slots the mock managed side fills in, standing in for the loader's
/// exported symbols.
pub static MANAGED_SLOTS: CallbackSlots = CallbackSlots::new();
pub static EVENTS: Mutex<Vec<Event>> = Mutex::new(Vec::new());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Shutdown,
    CleanUi,
    ReloadUi,
    DrawHud,
    SetGameState(u32),
    Pulse,
    IncomingChat(String, u32),
    WriteChatColor(String, u32, u32),
    AddSpawn(usize),
    RemoveSpawn(usize),
    AddGroundItem(usize),
    RemoveGroundItem(usize),
    BeginZone,
    EndZone,
    Zoned,
}

/// Serializes tests sharing the mock state and resets it to a successful
/// bring-up.
pub fn reset() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());

    INIT_RC.store(0, Ordering::SeqCst);
    INIT_GIVES_HANDLE.store(true, Ordering::SeqCst);
    DELEGATE_RC.store(0, Ordering::SeqCst);
    RESOLVE_RC.store(0, Ordering::SeqCst);
    ENTRY_RC.store(0, Ordering::SeqCst);
    INIT_CALLS.store(0, Ordering::SeqCst);
    CLOSE_CALLS.store(0, Ordering::SeqCst);
    LAST_CLOSED.store(usize::MAX, Ordering::SeqCst);
    DELEGATE_KIND.store(-1, Ordering::SeqCst);
    ENTRY_CALLS.store(0, Ordering::SeqCst);
    RESOLVER_UNLOADS.store(0, Ordering::SeqCst);
    ENTRY_ARG_SIZE.store(-1, Ordering::SeqCst);
    OPEN_AT_ENTRY.store(usize::MAX, Ordering::SeqCst);
    RESOLVED_NAMES.lock().unwrap().clear();
    *ENTRY_LOADER_PATH.lock().unwrap() = None;
    MANAGED_SLOTS.clear();
    EVENTS.lock().unwrap().clear();

    guard
}

pub fn events() -> Vec<Event> {
    EVENTS.lock().unwrap().clone()
}

fn record(event: Event) {
    EVENTS.lock().unwrap().push(event);
}

unsafe fn text(line: *const c_char) -> String {
    if line.is_null() {
        String::new()
    } else {
        CStr::from_ptr(line).to_string_lossy().into_owned()
    }
}

// Mock hostfxr exports

unsafe extern "C" fn mock_initialize(
    _runtime_config_path: *const PlatformChar,
    parameters: *const HostfxrInitializeParameters,
    handle: *mut HostfxrHandle,
) -> i32 {
    assert!(parameters.is_null());
    INIT_CALLS.fetch_add(1, Ordering::SeqCst);
    if INIT_GIVES_HANDLE.load(Ordering::SeqCst) {
        *handle = CONTEXT_HANDLE as HostfxrHandle;
    }
    INIT_RC.load(Ordering::SeqCst)
}

unsafe extern "C" fn mock_get_runtime_delegate(
    _handle: HostfxrHandle,
    delegate_type: HostfxrDelegateType,
    delegate: *mut *mut c_void,
) -> i32 {
    DELEGATE_KIND.store(delegate_type as i32, Ordering::SeqCst);
    let rc = DELEGATE_RC.load(Ordering::SeqCst);
    if rc == 0 {
        *delegate = mock_load_assembly as usize as *mut c_void;
    }
    rc
}

unsafe extern "C" fn mock_close(handle: HostfxrHandle) -> i32 {
    CLOSE_CALLS.fetch_add(1, Ordering::SeqCst);
    LAST_CLOSED.store(handle as usize, Ordering::SeqCst);
    0
}

unsafe extern "system" fn mock_load_assembly(
    assembly_path: *const PlatformChar,
    type_name: *const PlatformChar,
    method_name: *const PlatformChar,
    delegate_type_name: *const PlatformChar,
    reserved: *mut c_void,
    delegate: *mut *mut c_void,
) -> i32 {
    assert!(delegate_type_name.is_null());
    assert!(reserved.is_null());

    let mut names = RESOLVED_NAMES.lock().unwrap();
    for name in [assembly_path, type_name, method_name] {
        names.push(PlatformString::read_terminated(name).unwrap_or_default());
    }

    let rc = RESOLVE_RC.load(Ordering::SeqCst);
    if rc == 0 {
        *delegate = mock_managed_entry as usize as *mut c_void;
    }
    rc
}

// Mock managed side

unsafe extern "system" fn mock_managed_entry(arg: *mut c_void, arg_size: i32) -> i32 {
    ENTRY_CALLS.fetch_add(1, Ordering::SeqCst);
    ENTRY_ARG_SIZE.store(arg_size, Ordering::SeqCst);
    OPEN_AT_ENTRY.store(INIT_CALLS.load(Ordering::SeqCst) - CLOSE_CALLS.load(Ordering::SeqCst), Ordering::SeqCst);

    let args = &*(arg as *const EntryPointArgs);
    *ENTRY_LOADER_PATH.lock().unwrap() = PlatformString::read_terminated(args.loader_path);

    register_managed_callbacks();
    ENTRY_RC.load(Ordering::SeqCst)
}

pub fn register_managed_callbacks() {
    MANAGED_SLOTS.shutdown.register(on_shutdown);
    MANAGED_SLOTS.clean_ui.register(on_clean_ui);
    MANAGED_SLOTS.reload_ui.register(on_reload_ui);
    MANAGED_SLOTS.draw_hud.register(on_draw_hud);
    MANAGED_SLOTS.set_game_state.register(on_set_game_state);
    MANAGED_SLOTS.pulse.register(on_pulse);
    MANAGED_SLOTS.incoming_chat.register(on_incoming_chat);
    MANAGED_SLOTS.write_chat_color.register(on_write_chat_color);
    MANAGED_SLOTS.add_spawn.register(on_add_spawn);
    MANAGED_SLOTS.remove_spawn.register(on_remove_spawn);
    MANAGED_SLOTS.add_ground_item.register(on_add_ground_item);
    MANAGED_SLOTS.remove_ground_item.register(on_remove_ground_item);
    MANAGED_SLOTS.begin_zone.register(on_begin_zone);
    MANAGED_SLOTS.end_zone.register(on_end_zone);
    MANAGED_SLOTS.zoned.register(on_zoned);
}

unsafe extern "C" fn on_shutdown() {
    record(Event::Shutdown);
}

unsafe extern "C" fn on_clean_ui() {
    record(Event::CleanUi);
}

unsafe extern "C" fn on_reload_ui() {
    record(Event::ReloadUi);
}

unsafe extern "C" fn on_draw_hud() {
    record(Event::DrawHud);
}

unsafe extern "C" fn on_set_game_state(game_state: u32) {
    record(Event::SetGameState(game_state));
}

unsafe extern "C" fn on_pulse() {
    record(Event::Pulse);
}

/// Returns the color plus one, so tests can tell the value came back.
unsafe extern "C" fn on_incoming_chat(line: *const c_char, color: u32) -> u32 {
    record(Event::IncomingChat(text(line), color));
    color + 1
}

/// Returns the filter, so tests can tell the value came back.
unsafe extern "C" fn on_write_chat_color(line: *const c_char, color: u32, filter: u32) -> u32 {
    record(Event::WriteChatColor(text(line), color, filter));
    filter
}

unsafe extern "C" fn on_add_spawn(spawn: *mut c_void) {
    record(Event::AddSpawn(spawn as usize));
}

unsafe extern "C" fn on_remove_spawn(spawn: *mut c_void) {
    record(Event::RemoveSpawn(spawn as usize));
}

unsafe extern "C" fn on_add_ground_item(ground_item: *mut c_void) {
    record(Event::AddGroundItem(ground_item as usize));
}

unsafe extern "C" fn on_remove_ground_item(ground_item: *mut c_void) {
    record(Event::RemoveGroundItem(ground_item as usize));
}

unsafe extern "C" fn on_begin_zone() {
    record(Event::BeginZone);
}

unsafe extern "C" fn on_end_zone() {
    record(Event::EndZone);
}

unsafe extern "C" fn on_zoned() {
    record(Event::Zoned);
}

// Resolver provider and host

struct MockExports(Vec<&'static str>);

impl Drop for MockExports {
    fn drop(&mut self) {
        RESOLVER_UNLOADS.fetch_add(1, Ordering::SeqCst);
    }
}

impl SymbolSource for MockExports {
    fn symbol(&self, name: &str) -> Option<*mut c_void> {
        if !self.0.iter().any(|export| *export == name) {
            return None;
        }

        let address = match name {
            HOSTFXR_INITIALIZE_EXPORT => mock_initialize as usize,
            HOSTFXR_GET_RUNTIME_DELEGATE_EXPORT => mock_get_runtime_delegate as usize,
            HOSTFXR_CLOSE_EXPORT => mock_close as usize,
            _ => return None,
        };
        Some(address as *mut c_void)
    }
}

pub struct MockProvider {
    pub locate: Result<OsString, BootstrapError>,
    pub exports: Vec<&'static str>,
    pub load: Option<BootstrapError>,
}

impl MockProvider {
    pub fn working() -> Self {
        MockProvider {
            locate: Ok(OsString::from("C:\\dotnet\\host\\fxr\\8.0.0\\hostfxr.dll")),
            exports: ALL_EXPORTS.to_vec(),
            load: None,
        }
    }

    pub fn with_exports(exports: &[&'static str]) -> Self {
        MockProvider {
            exports: exports.to_vec(),
            ..MockProvider::working()
        }
    }
}

impl ResolverProvider for MockProvider {
    fn locate_resolver(&self) -> Result<OsString, BootstrapError> {
        self.locate.clone()
    }

    fn load_resolver(&self, _path: &OsString) -> Result<Box<dyn SymbolSource>, BootstrapError> {
        match &self.load {
            Some(error) => Err(error.clone()),
            None => Ok(Box::new(MockExports(self.exports.clone()))),
        }
    }
}

/// Host that remembers every chat line.
#[derive(Default)]
pub struct RecordingHost {
    pub base_dir: String,
    pub chat: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new(base_dir: impl Into<String>) -> Self {
        RecordingHost {
            base_dir: base_dir.into(),
            chat: Mutex::new(Vec::new()),
        }
    }

    pub fn chat(&self) -> Vec<String> {
        self.chat.lock().unwrap().clone()
    }
}

impl HostEnvironment for RecordingHost {
    fn base_dir(&self) -> String {
        self.base_dir.clone()
    }

    fn write_chat(&self, line: &str) {
        self.chat.lock().unwrap().push(line.to_string());
    }
}
