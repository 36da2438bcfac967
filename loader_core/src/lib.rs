//! Shared ABI of the MQ2DotNetCore loader: .NET hosting signatures, the
//! managed entry-point contract and the callback slots the managed side
//! fills in.

pub mod callback_macros;
pub mod callback_slot;
pub mod callback_table;
pub mod entry_point;
pub mod hostfxr;
pub mod platform_string;

pub use callback_slot::{CallbackSlot, SlotSignature};
pub use callback_table::{
    BeginZoneFn, CallbackSlots, CallbackTable, CleanUiFn, DrawHudFn, EndZoneFn, GroundItemFn,
    IncomingChatFn, PulseFn, ReloadUiFn, SetGameStateFn, ShutdownPluginFn, SpawnFn,
    WriteChatColorFn, ZonedFn,
};
pub use entry_point::{ComponentEntryPointFn, EntryPointArgs, ENTRY_POINT_METHOD_NAME, ENTRY_POINT_TYPE_NAME};
pub use hostfxr::{
    GetHostfxrPathFn, HostfxrCloseFn, HostfxrDelegateType, HostfxrGetRuntimeDelegateFn, HostfxrHandle,
    HostfxrInitializeForRuntimeConfigFn, LoadAssemblyAndGetFunctionPointerFn,
};
pub use platform_string::{PlatformChar, PlatformString, MAX_PATH};
