// ── Top-level window access ───────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Drive `EnumWindows` with a Rust visitor passed through the LPARAM.
//   • Read a window title through a fixed `TITLE_BUF_LEN` buffer.
//   • Replace a window title with `SetWindowTextW`.

#![allow(unsafe_code)]

use std::ops::ControlFlow;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{GetLastError, SetLastError, BOOL, ERROR_SUCCESS, HWND, LPARAM},
        UI::WindowsAndMessaging::{EnumWindows, GetWindowTextW, SetWindowTextW},
    },
};

use crate::{
    error::{Result, WinTitleError},
    platform::{encode_title, title_from_buf, WindowHandle, WindowSystem, TITLE_BUF_LEN},
};

/// The desktop's top-level windows, reached through `user32`.
pub(crate) struct Win32Windows;

impl WindowSystem for Win32Windows {
    fn for_each_window(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<()> {
        let mut state = EnumState {
            visit,
            stopped: false,
        };

        // SAFETY: `state` lives on this stack frame for the whole EnumWindows
        // call, which invokes `enum_proc` synchronously and never after it
        // returns.  `enum_proc` is the only reader of the pointer.
        let result = unsafe {
            EnumWindows(
                Some(enum_proc),
                LPARAM(&mut state as *mut EnumState<'_> as isize),
            )
        };

        match result {
            Ok(()) => Ok(()),
            // EnumWindows reports FALSE when the callback stops it early.
            Err(_) if state.stopped => Ok(()),
            Err(e) => Err(win32_error("EnumWindows", &e)),
        }
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String> {
        let mut buf = [0u16; TITLE_BUF_LEN];

        // SAFETY: SetLastError only writes thread-local state.  GetWindowTextW
        // writes at most `buf.len()` units (NUL included) into `buf`, which
        // outlives the call; a stale or foreign `hwnd` makes it return 0.
        let copied = unsafe {
            SetLastError(ERROR_SUCCESS);
            GetWindowTextW(to_hwnd(handle), &mut buf)
        };

        // Zero means an error or an empty title; both count as unreadable.
        if copied <= 0 {
            return Err(last_error("GetWindowTextW"));
        }

        Ok(title_from_buf(&buf[..copied as usize]))
    }

    fn set_window_title(&self, handle: WindowHandle, title: &str) -> Result<()> {
        let title_wide = encode_title(title)?;

        // SAFETY: title_wide is a valid null-terminated UTF-16 string that
        // remains allocated for the duration of the SetWindowTextW call.
        unsafe { SetWindowTextW(to_hwnd(handle), PCWSTR(title_wide.as_ptr())) }
            .map_err(|e| win32_error("SetWindowTextW", &e))
    }
}

// ── Enumeration callback ──────────────────────────────────────────────────────

/// Visitor and early-stop flag shared with `enum_proc` through the LPARAM.
struct EnumState<'a> {
    visit: &'a mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    stopped: bool,
}

// SAFETY: enum_proc is only ever passed to EnumWindows by `for_each_window`,
// with an LPARAM that points at a live `EnumState` for the duration of the
// call.  Windows invokes it on the calling thread, one window at a time.
unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let state = &mut *(lparam.0 as *mut EnumState<'_>);

    match (state.visit)(WindowHandle(hwnd.0 as isize)) {
        ControlFlow::Continue(()) => BOOL::from(true),
        ControlFlow::Break(()) => {
            state.stopped = true;
            BOOL::from(false)
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut std::ffi::c_void)
}

/// Wrap a windows-crate error, keeping the name of the failing function.
fn win32_error(function: &'static str, e: &windows::core::Error) -> WinTitleError {
    WinTitleError::Win32 {
        function,
        code: e.code().0 as u32,
    }
}

/// Capture the current Win32 last-error code and wrap it in a `WinTitleError`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
fn last_error(function: &'static str) -> WinTitleError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    WinTitleError::Win32 {
        function,
        code: code.0,
    }
}
