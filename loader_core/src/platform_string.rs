use std::ffi::{OsStr, OsString};

/// Character type of the .NET hosting APIs: UTF-16 on Windows, bytes elsewhere.
#[cfg(windows)]
pub type PlatformChar = u16;

/// Character type of the .NET hosting APIs: UTF-16 on Windows, bytes elsewhere.
#[cfg(not(windows))]
pub type PlatformChar = std::os::raw::c_char;

/// Maximum path length, in characters, including the terminator.
pub const MAX_PATH: usize = 260;

/// An owned, NUL-terminated string in the hosting APIs' character type.
///
/// The buffer is never empty: it always ends with the terminator, so
/// `as_ptr()` can be handed straight to `hostfxr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformString {
    buffer: Vec<PlatformChar>,
}

impl PlatformString {
    /// Encodes `value`, returning `None` when it contains an interior NUL.
    pub fn new(value: impl AsRef<OsStr>) -> Option<Self> {
        let mut buffer = encode(value.as_ref());
        if buffer.contains(&0) {
            return None;
        }

        buffer.push(0);
        Some(Self { buffer })
    }

    pub fn as_ptr(&self) -> *const PlatformChar {
        self.buffer.as_ptr()
    }

    /// Length in characters, excluding the terminator.
    pub fn len(&self) -> usize {
        self.buffer.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes the characters up to the first NUL (or the whole slice when
    /// there is none).
    pub fn decode(buffer: &[PlatformChar]) -> OsString {
        let end = buffer.iter().position(|c| *c == 0).unwrap_or(buffer.len());
        decode(&buffer[..end])
    }

    /// Decodes a NUL-terminated string owned by someone else.
    ///
    /// # Safety
    /// `ptr` must be null or point to a readable, NUL-terminated sequence.
    pub unsafe fn read_terminated(ptr: *const PlatformChar) -> Option<OsString> {
        if ptr.is_null() {
            return None;
        }

        let mut len = 0usize;
        while *ptr.add(len) != 0 {
            len += 1;
        }

        Some(decode(std::slice::from_raw_parts(ptr, len)))
    }
}

#[cfg(windows)]
fn encode(value: &OsStr) -> Vec<PlatformChar> {
    use std::os::windows::ffi::OsStrExt;
    value.encode_wide().collect()
}

#[cfg(windows)]
fn decode(chars: &[PlatformChar]) -> OsString {
    use std::os::windows::ffi::OsStringExt;
    OsString::from_wide(chars)
}

#[cfg(unix)]
fn encode(value: &OsStr) -> Vec<PlatformChar> {
    use std::os::unix::ffi::OsStrExt;
    value.as_bytes().iter().map(|b| *b as PlatformChar).collect()
}

#[cfg(unix)]
fn decode(chars: &[PlatformChar]) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(chars.iter().map(|c| *c as u8).collect())
}
