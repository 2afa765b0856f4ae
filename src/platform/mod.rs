// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface the rest of the codebase uses to talk to
// the OS window manager.  No `unsafe` lives here; all Win32 FFI is confined to
// the `win32` sub-module and never leaks outward.

// The buffer helpers only have callers on Windows (and in tests).
#![cfg_attr(not(windows), allow(dead_code))]

use std::{fmt, ops::ControlFlow};

use serde::Serialize;

use crate::error::{Result, WinTitleError};

#[cfg(windows)]
pub mod win32;

#[cfg(test)]
pub(crate) mod memory;

// ── Title buffer ──────────────────────────────────────────────────────────────

/// Size of the title read buffer in UTF-16 code units, including the NUL the
/// OS writes.  Titles longer than `TITLE_BUF_LEN - 1` units are truncated.
pub(crate) const TITLE_BUF_LEN: usize = 200;

/// Decode a UTF-16 title buffer, stopping at the first NUL.
pub(crate) fn title_from_buf(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

/// Encode `title` as a NUL-terminated UTF-16 string for the OS.
pub(crate) fn encode_title(title: &str) -> Result<Vec<u16>> {
    if title.contains('\0') {
        return Err(WinTitleError::InvalidTitle {
            reason: "title contains a NUL character",
        });
    }
    Ok(title.encode_utf16().chain(std::iter::once(0)).collect())
}

// ── Window handle ─────────────────────────────────────────────────────────────

/// Opaque identifier of a top-level window.
///
/// Owned by the OS and valid for the window's lifetime; this program never
/// frees it.  Zero means "no window".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub(crate) struct WindowHandle(pub(crate) isize);

impl WindowHandle {
    pub(crate) const NULL: Self = Self(0);

    pub(crate) fn is_null(self) -> bool {
        self == Self::NULL
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

// ── Window system ─────────────────────────────────────────────────────────────

/// The three window-manager operations the tool is built on.
pub(crate) trait WindowSystem {
    /// Visit every top-level window in OS order until `visit` breaks.
    ///
    /// Returns an error only if the enumeration itself fails; stopping early
    /// through `ControlFlow::Break` is a success.
    fn for_each_window(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<()>;

    /// Read the current title of `handle` through a `TITLE_BUF_LEN` buffer.
    ///
    /// An empty title is reported as an error, like a vanished window.
    fn window_title(&self, handle: WindowHandle) -> Result<String>;

    /// Replace the title of `handle`.
    fn set_window_title(&self, handle: WindowHandle, title: &str) -> Result<()>;
}

/// The window system of the host OS.
#[cfg(windows)]
pub(crate) fn native() -> Result<Box<dyn WindowSystem>> {
    Ok(Box::new(win32::Win32Windows))
}

/// The window system of the host OS.
#[cfg(not(windows))]
pub(crate) fn native() -> Result<Box<dyn WindowSystem>> {
    Err(WinTitleError::Unsupported)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn title_stops_at_first_nul() {
        let mut buf = wide("Notepad");
        buf.extend_from_slice(&[0, b'x' as u16, 0]);
        assert_eq!(title_from_buf(&buf), "Notepad");
    }

    #[test]
    fn title_without_nul_uses_whole_buffer() {
        assert_eq!(title_from_buf(&wide("Calculator")), "Calculator");
    }

    #[test]
    fn unpaired_surrogate_is_replaced() {
        let buf = [b'a' as u16, 0xD800, b'b' as u16, 0];
        assert_eq!(title_from_buf(&buf), "a\u{FFFD}b");
    }

    #[test]
    fn encode_appends_terminator() {
        assert_eq!(encode_title("Hi").expect("encode"), vec![b'H' as u16, b'i' as u16, 0]);
    }

    #[test]
    fn encode_rejects_interior_nul() {
        assert!(matches!(
            encode_title("a\0b"),
            Err(WinTitleError::InvalidTitle { .. })
        ));
    }

    #[test]
    fn handle_displays_as_hex() {
        assert_eq!(WindowHandle(0x1a2b).to_string(), "0x00001a2b");
        assert!(WindowHandle::NULL.is_null());
        assert!(!WindowHandle(1).is_null());
    }
}
