use std::marker::PhantomData;
use std::os::raw::{c_char, c_void};
use std::sync::atomic::{AtomicPtr, Ordering};

/// Function-pointer types a `CallbackSlot` may hold.
///
/// # Safety
/// Implementors must be plain function pointers, so that they round-trip
/// losslessly through `*mut c_void`.
pub unsafe trait SlotSignature: Copy + 'static {}

macro_rules! impl_slot_signature {
    ($($signature:ty),+ $(,)?) => {
        $( unsafe impl SlotSignature for $signature {} )+
    };
}

impl_slot_signature!(
    unsafe extern "C" fn(),
    unsafe extern "C" fn(u32),
    unsafe extern "C" fn(*mut c_void),
    unsafe extern "C" fn(*const c_char, u32) -> u32,
    unsafe extern "C" fn(*const c_char, u32, u32) -> u32,
);

/// A nullable function pointer written by the managed side.
///
/// The layout is exactly one pointer, so a slot exported under a symbol name
/// can be filled in by anyone holding its address (the managed side resolves
/// the symbol and writes its delegate pointer into it).
#[repr(transparent)]
pub struct CallbackSlot<F> {
    pointer: AtomicPtr<c_void>,
    _signature: PhantomData<F>,
}

impl<F: SlotSignature> CallbackSlot<F> {
    pub const fn empty() -> Self {
        Self {
            pointer: AtomicPtr::new(std::ptr::null_mut()),
            _signature: PhantomData,
        }
    }

    /// The registered callback, if any.
    pub fn get(&self) -> Option<F> {
        let raw = self.pointer.load(Ordering::Acquire);
        if raw.is_null() {
            None
        } else {
            Some(unsafe { std::mem::transmute_copy::<*mut c_void, F>(&raw) })
        }
    }

    pub fn register(&self, callback: F) {
        let raw = unsafe { std::mem::transmute_copy::<F, *mut c_void>(&callback) };
        self.pointer.store(raw, Ordering::Release);
    }

    pub fn clear(&self) {
        self.pointer.store(std::ptr::null_mut(), Ordering::Release);
    }

    pub fn is_registered(&self) -> bool {
        !self.pointer.load(Ordering::Acquire).is_null()
    }
}

impl<F: SlotSignature> Default for CallbackSlot<F> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    static LAST_STATE: AtomicU32 = AtomicU32::new(0);

    unsafe extern "C" fn record_state(state: u32) {
        LAST_STATE.store(state, Ordering::SeqCst);
    }

    #[test]
    fn starts_empty_and_round_trips_pointer() {
        let slot: CallbackSlot<unsafe extern "C" fn(u32)> = CallbackSlot::empty();
        assert!(slot.get().is_none());

        slot.register(record_state);
        assert!(slot.is_registered());

        let callback = slot.get().unwrap();
        unsafe { callback(5) };
        assert_eq!(LAST_STATE.load(Ordering::SeqCst), 5);

        slot.clear();
        assert!(slot.get().is_none());
    }

    #[test]
    fn is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<CallbackSlot<unsafe extern "C" fn()>>(),
            std::mem::size_of::<*mut c_void>()
        );
    }
}
