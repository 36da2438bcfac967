use std::os::raw::{c_char, c_void};

use loader_core::{CallbackSlot, CallbackTable, SlotSignature};

use crate::bootstrap_state::BootstrapState;

/// Forwards host events to the callbacks the managed side registered.
///
/// Every event goes through `gate`: nothing is called unless the runtime
/// loaded and the slot holds a pointer. Gated events are no-ops, and the two
/// chat events return 0.
#[derive(Clone, Copy)]
pub struct Dispatcher<'a> {
    loaded: bool,
    table: CallbackTable<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(state: &BootstrapState, table: CallbackTable<'a>) -> Self {
        Dispatcher {
            loaded: state.is_loaded(),
            table,
        }
    }

    /// A dispatcher that forwards nothing, used before any bootstrap ran.
    pub fn inactive(table: CallbackTable<'a>) -> Self {
        Dispatcher { loaded: false, table }
    }

    pub fn is_active(&self) -> bool {
        self.loaded
    }

    pub fn gate<F: SlotSignature>(&self, slot: &CallbackSlot<F>) -> Option<F> {
        if !self.loaded {
            return None;
        }
        slot.get()
    }

    pub fn shutdown(&self) {
        if let Some(callback) = self.gate(self.table.shutdown) {
            unsafe { callback() }
        }
    }

    pub fn clean_ui(&self) {
        if let Some(callback) = self.gate(self.table.clean_ui) {
            unsafe { callback() }
        }
    }

    pub fn reload_ui(&self) {
        if let Some(callback) = self.gate(self.table.reload_ui) {
            unsafe { callback() }
        }
    }

    pub fn draw_hud(&self) {
        if let Some(callback) = self.gate(self.table.draw_hud) {
            unsafe { callback() }
        }
    }

    pub fn set_game_state(&self, game_state: u32) {
        if let Some(callback) = self.gate(self.table.set_game_state) {
            unsafe { callback(game_state) }
        }
    }

    pub fn pulse(&self) {
        if let Some(callback) = self.gate(self.table.pulse) {
            unsafe { callback() }
        }
    }

    pub fn incoming_chat(&self, line: *const c_char, color: u32) -> u32 {
        match self.gate(self.table.incoming_chat) {
            Some(callback) => unsafe { callback(line, color) },
            None => 0,
        }
    }

    pub fn write_chat_color(&self, line: *const c_char, color: u32, filter: u32) -> u32 {
        match self.gate(self.table.write_chat_color) {
            Some(callback) => unsafe { callback(line, color, filter) },
            None => 0,
        }
    }

    pub fn add_spawn(&self, spawn: *mut c_void) {
        if let Some(callback) = self.gate(self.table.add_spawn) {
            unsafe { callback(spawn) }
        }
    }

    pub fn remove_spawn(&self, spawn: *mut c_void) {
        if let Some(callback) = self.gate(self.table.remove_spawn) {
            unsafe { callback(spawn) }
        }
    }

    pub fn add_ground_item(&self, ground_item: *mut c_void) {
        if let Some(callback) = self.gate(self.table.add_ground_item) {
            unsafe { callback(ground_item) }
        }
    }

    pub fn remove_ground_item(&self, ground_item: *mut c_void) {
        if let Some(callback) = self.gate(self.table.remove_ground_item) {
            unsafe { callback(ground_item) }
        }
    }

    pub fn begin_zone(&self) {
        if let Some(callback) = self.gate(self.table.begin_zone) {
            unsafe { callback() }
        }
    }

    pub fn end_zone(&self) {
        if let Some(callback) = self.gate(self.table.end_zone) {
            unsafe { callback() }
        }
    }

    pub fn zoned(&self) {
        if let Some(callback) = self.gate(self.table.zoned) {
            unsafe { callback() }
        }
    }
}
