//! `MQ2DotNetCoreLoader.dll`: the native plugin the game host loads. It
//! brings up the .NET runtime once and forwards the host's plugin callbacks
//! to the managed side.

#![allow(non_snake_case)]

use std::os::raw::{c_char, c_void};

use liblogger::{log_debug, log_info, log_warn, Logger};
use liblogger_macros::catch_panic;
use loader_core::declare_callback_slots;
use loader_engine::{Dispatcher, HostEnvironment, LoaderSession};
use once_cell::sync::OnceCell;

mod mq2_host;

// Slots the managed side looks up by name and fills in.
declare_callback_slots! {
    shutdown: ShutdownPluginFn => g_pfShutdownPlugin,
    clean_ui: CleanUiFn => g_pfOnCleanUI,
    reload_ui: ReloadUiFn => g_pfOnReloadUI,
    draw_hud: DrawHudFn => g_pfOnDrawHUD,
    set_game_state: SetGameStateFn => g_pfSetGameState,
    pulse: PulseFn => g_pfOnPulse,
    incoming_chat: IncomingChatFn => g_pfOnIncomingChat,
    write_chat_color: WriteChatColorFn => g_pfOnWriteChatColor,
    add_spawn: SpawnFn => g_pfOnAddSpawn,
    remove_spawn: SpawnFn => g_pfOnRemoveSpawn,
    add_ground_item: GroundItemFn => g_pfOnAddGroundItem,
    remove_ground_item: GroundItemFn => g_pfOnRemoveGroundItem,
    begin_zone: BeginZoneFn => g_pfBeginZone,
    end_zone: EndZoneFn => g_pfEndZone,
    zoned: ZonedFn => g_pfOnZoned,
}

/// Plugin interface version the host checks before accepting the module.
#[no_mangle]
#[allow(non_upper_case_globals)]
pub static MQ2Version: f32 = 0.1;

static SESSION: OnceCell<LoaderSession> = OnceCell::new();

/// The session started by `InitializePlugin`, if it ran.
pub fn session() -> Option<&'static LoaderSession> {
    SESSION.get()
}

/// Starts the session on the first call. Later calls return the existing
/// session without bootstrapping again.
pub fn initialize_with(host: &dyn HostEnvironment) -> &'static LoaderSession {
    let mut started = false;
    let session = SESSION.get_or_init(|| {
        started = true;
        LoaderSession::start_with_nethost(host)
    });

    if !started {
        log_warn!("InitializePlugin called again, the runtime is already bootstrapped");
    }
    session
}

fn dispatcher() -> Dispatcher<'static> {
    match SESSION.get() {
        Some(session) => session.dispatcher(callback_table()),
        None => Dispatcher::inactive(callback_table()),
    }
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn InitializePlugin() {
    let host = mq2_host::detect();
    initialize_with(host.as_ref());
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn ShutdownPlugin() {
    dispatcher().shutdown();

    log_info!("Shutting down; the .NET runtime stays loaded until the process exits");
    if let Err(e) = Logger::shutdown() {
        eprintln!("Failed to flush the loader log: {}", e);
    }
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnCleanUI() {
    dispatcher().clean_ui();
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnReloadUI() {
    dispatcher().reload_ui();
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnDrawHUD() {
    dispatcher().draw_hud();
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn SetGameState(game_state: u32) {
    log_debug!(&format!("SetGameState({})", game_state));
    dispatcher().set_game_state(game_state);
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnPulse() {
    dispatcher().pulse();
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnIncomingChat(line: *const c_char, color: u32) -> u32 {
    dispatcher().incoming_chat(line, color)
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnWriteChatColor(line: *const c_char, color: u32, filter: u32) -> u32 {
    dispatcher().write_chat_color(line, color, filter)
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnAddSpawn(spawn: *mut c_void) {
    dispatcher().add_spawn(spawn);
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnRemoveSpawn(spawn: *mut c_void) {
    dispatcher().remove_spawn(spawn);
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnAddGroundItem(ground_item: *mut c_void) {
    dispatcher().add_ground_item(ground_item);
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnRemoveGroundItem(ground_item: *mut c_void) {
    dispatcher().remove_ground_item(ground_item);
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn BeginZone() {
    dispatcher().begin_zone();
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn EndZone() {
    dispatcher().end_zone();
}

#[catch_panic]
#[no_mangle]
pub extern "C" fn OnZoned() {
    dispatcher().zoned();
}

/// The host's base directory, for the managed side. Empty until
/// `InitializePlugin` ran.
#[no_mangle]
pub extern "system" fn GetIniPath() -> *const c_char {
    match SESSION.get() {
        Some(session) => session.ini_path().as_ptr(),
        None => b"\0".as_ptr().cast(),
    }
}
