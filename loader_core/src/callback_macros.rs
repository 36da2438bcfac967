/// Declares one exported `CallbackSlot` static per host event and a
/// `callback_table()` accessor over them.
///
/// Each static is exported unmangled under `$symbol`, so the managed side can
/// resolve it by name in the loader module and store its own function
/// pointer there.
///
/// ```ignore
/// loader_core::declare_callback_slots! {
///     shutdown: ShutdownPluginFn => g_pfShutdownPlugin,
///     clean_ui: CleanUiFn => g_pfOnCleanUI,
///     // ... one line per `CallbackTable` field
/// }
/// ```
#[macro_export]
macro_rules! declare_callback_slots {
    ( $( $field:ident : $signature:ident => $symbol:ident ),+ $(,)? ) => {
        $(
            #[no_mangle]
            #[allow(non_upper_case_globals)]
            pub static $symbol: $crate::CallbackSlot<$crate::$signature> = $crate::CallbackSlot::empty();
        )+

        /// The exported slots, viewed as one table.
        pub fn callback_table() -> $crate::CallbackTable<'static> {
            $crate::CallbackTable {
                $( $field: &$symbol, )+
            }
        }
    };
}
