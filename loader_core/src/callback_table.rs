use std::os::raw::{c_char, c_void};

use crate::CallbackSlot;

pub type ShutdownPluginFn = unsafe extern "C" fn();
pub type CleanUiFn = unsafe extern "C" fn();
pub type ReloadUiFn = unsafe extern "C" fn();
pub type DrawHudFn = unsafe extern "C" fn();
pub type SetGameStateFn = unsafe extern "C" fn(game_state: u32);
pub type PulseFn = unsafe extern "C" fn();
pub type IncomingChatFn = unsafe extern "C" fn(line: *const c_char, color: u32) -> u32;
pub type WriteChatColorFn = unsafe extern "C" fn(line: *const c_char, color: u32, filter: u32) -> u32;
/// `spawn` is the host's `PSPAWNINFO`, passed through untouched.
pub type SpawnFn = unsafe extern "C" fn(spawn: *mut c_void);
/// `ground_item` is the host's `PGROUNDITEM`, passed through untouched.
pub type GroundItemFn = unsafe extern "C" fn(ground_item: *mut c_void);
pub type BeginZoneFn = unsafe extern "C" fn();
pub type EndZoneFn = unsafe extern "C" fn();
pub type ZonedFn = unsafe extern "C" fn();

/// The closed set of host lifecycle events forwarded to the managed side,
/// one slot per event.
#[derive(Clone, Copy)]
pub struct CallbackTable<'a> {
    pub shutdown: &'a CallbackSlot<ShutdownPluginFn>,
    pub clean_ui: &'a CallbackSlot<CleanUiFn>,
    pub reload_ui: &'a CallbackSlot<ReloadUiFn>,
    pub draw_hud: &'a CallbackSlot<DrawHudFn>,
    pub set_game_state: &'a CallbackSlot<SetGameStateFn>,
    pub pulse: &'a CallbackSlot<PulseFn>,
    pub incoming_chat: &'a CallbackSlot<IncomingChatFn>,
    pub write_chat_color: &'a CallbackSlot<WriteChatColorFn>,
    pub add_spawn: &'a CallbackSlot<SpawnFn>,
    pub remove_spawn: &'a CallbackSlot<SpawnFn>,
    pub add_ground_item: &'a CallbackSlot<GroundItemFn>,
    pub remove_ground_item: &'a CallbackSlot<GroundItemFn>,
    pub begin_zone: &'a CallbackSlot<BeginZoneFn>,
    pub end_zone: &'a CallbackSlot<EndZoneFn>,
    pub zoned: &'a CallbackSlot<ZonedFn>,
}

impl CallbackTable<'_> {
    /// Number of slots that currently hold a callback.
    pub fn registered_count(&self) -> usize {
        [
            self.shutdown.is_registered(),
            self.clean_ui.is_registered(),
            self.reload_ui.is_registered(),
            self.draw_hud.is_registered(),
            self.set_game_state.is_registered(),
            self.pulse.is_registered(),
            self.incoming_chat.is_registered(),
            self.write_chat_color.is_registered(),
            self.add_spawn.is_registered(),
            self.remove_spawn.is_registered(),
            self.add_ground_item.is_registered(),
            self.remove_ground_item.is_registered(),
            self.begin_zone.is_registered(),
            self.end_zone.is_registered(),
            self.zoned.is_registered(),
        ]
        .iter()
        .filter(|registered| **registered)
        .count()
    }
}

/// Owned storage for a full set of slots, for embedders that do not export
/// them as individual symbols.
#[derive(Default)]
pub struct CallbackSlots {
    pub shutdown: CallbackSlot<ShutdownPluginFn>,
    pub clean_ui: CallbackSlot<CleanUiFn>,
    pub reload_ui: CallbackSlot<ReloadUiFn>,
    pub draw_hud: CallbackSlot<DrawHudFn>,
    pub set_game_state: CallbackSlot<SetGameStateFn>,
    pub pulse: CallbackSlot<PulseFn>,
    pub incoming_chat: CallbackSlot<IncomingChatFn>,
    pub write_chat_color: CallbackSlot<WriteChatColorFn>,
    pub add_spawn: CallbackSlot<SpawnFn>,
    pub remove_spawn: CallbackSlot<SpawnFn>,
    pub add_ground_item: CallbackSlot<GroundItemFn>,
    pub remove_ground_item: CallbackSlot<GroundItemFn>,
    pub begin_zone: CallbackSlot<BeginZoneFn>,
    pub end_zone: CallbackSlot<EndZoneFn>,
    pub zoned: CallbackSlot<ZonedFn>,
}

impl CallbackSlots {
    pub const fn new() -> Self {
        Self {
            shutdown: CallbackSlot::empty(),
            clean_ui: CallbackSlot::empty(),
            reload_ui: CallbackSlot::empty(),
            draw_hud: CallbackSlot::empty(),
            set_game_state: CallbackSlot::empty(),
            pulse: CallbackSlot::empty(),
            incoming_chat: CallbackSlot::empty(),
            write_chat_color: CallbackSlot::empty(),
            add_spawn: CallbackSlot::empty(),
            remove_spawn: CallbackSlot::empty(),
            add_ground_item: CallbackSlot::empty(),
            remove_ground_item: CallbackSlot::empty(),
            begin_zone: CallbackSlot::empty(),
            end_zone: CallbackSlot::empty(),
            zoned: CallbackSlot::empty(),
        }
    }

    pub fn table(&self) -> CallbackTable<'_> {
        CallbackTable {
            shutdown: &self.shutdown,
            clean_ui: &self.clean_ui,
            reload_ui: &self.reload_ui,
            draw_hud: &self.draw_hud,
            set_game_state: &self.set_game_state,
            pulse: &self.pulse,
            incoming_chat: &self.incoming_chat,
            write_chat_color: &self.write_chat_color,
            add_spawn: &self.add_spawn,
            remove_spawn: &self.remove_spawn,
            add_ground_item: &self.add_ground_item,
            remove_ground_item: &self.remove_ground_item,
            begin_zone: &self.begin_zone,
            end_zone: &self.end_zone,
            zoned: &self.zoned,
        }
    }

    /// Empties every slot.
    pub fn clear(&self) {
        self.shutdown.clear();
        self.clean_ui.clear();
        self.reload_ui.clear();
        self.draw_hud.clear();
        self.set_game_state.clear();
        self.pulse.clear();
        self.incoming_chat.clear();
        self.write_chat_color.clear();
        self.add_spawn.clear();
        self.remove_spawn.clear();
        self.add_ground_item.clear();
        self.remove_ground_item.clear();
        self.begin_zone.clear();
        self.end_zone.clear();
        self.zoned.clear();
    }
}
