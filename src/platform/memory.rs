// ── In-memory window system ───────────────────────────────────────────────────
//
// Test double for `WindowSystem`.  Mirrors the Win32 behaviour the locator
// depends on: OS-ordered enumeration with early stop, the fixed title buffer,
// empty or vanished windows failing to read.

use std::{cell::RefCell, ops::ControlFlow};

use crate::{
    error::{Result, WinTitleError},
    platform::{encode_title, title_from_buf, WindowHandle, WindowSystem, TITLE_BUF_LEN},
};

struct FakeWindow {
    handle: WindowHandle,
    title: String,
    destroyed: bool,
}

/// A scripted set of top-level windows, visited in insertion order.
#[derive(Default)]
pub(crate) struct MemoryWindows {
    windows: RefCell<Vec<FakeWindow>>,
    visited: RefCell<Vec<WindowHandle>>,
    fail_enumeration: bool,
    fail_rename: bool,
}

impl MemoryWindows {
    pub(crate) fn with_titles(titles: &[&str]) -> Self {
        let sys = Self::default();
        for title in titles {
            sys.add(title);
        }
        sys
    }

    /// Add a window at the bottom of the z-order and return its handle.
    pub(crate) fn add(&self, title: &str) -> WindowHandle {
        let mut windows = self.windows.borrow_mut();
        let handle = WindowHandle(0x1000 + windows.len() as isize * 0x10);
        windows.push(FakeWindow {
            handle,
            title: title.to_owned(),
            destroyed: false,
        });
        handle
    }

    /// Keep the window in the enumeration but make title reads fail.
    pub(crate) fn destroy(&self, handle: WindowHandle) {
        self.find_mut(handle, |w| w.destroyed = true);
    }

    pub(crate) fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    pub(crate) fn failing_rename(mut self) -> Self {
        self.fail_rename = true;
        self
    }

    /// Full stored title, bypassing the read buffer.
    pub(crate) fn stored_title(&self, handle: WindowHandle) -> Option<String> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.handle == handle)
            .map(|w| w.title.clone())
    }

    /// Handles handed to the visitor so far, in order.
    pub(crate) fn visited(&self) -> Vec<WindowHandle> {
        self.visited.borrow().clone()
    }

    fn find_mut<R>(&self, handle: WindowHandle, f: impl FnOnce(&mut FakeWindow) -> R) -> Option<R> {
        self.windows
            .borrow_mut()
            .iter_mut()
            .find(|w| w.handle == handle)
            .map(f)
    }
}

impl WindowSystem for MemoryWindows {
    fn for_each_window(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<()> {
        if self.fail_enumeration {
            return Err(WinTitleError::Win32 {
                function: "EnumWindows",
                code: 0x8007_0005,
            });
        }

        // Snapshot so the visitor may rename windows while enumerating.
        let handles: Vec<WindowHandle> = self.windows.borrow().iter().map(|w| w.handle).collect();
        for handle in handles {
            self.visited.borrow_mut().push(handle);
            if visit(handle).is_break() {
                break;
            }
        }
        Ok(())
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String> {
        let windows = self.windows.borrow();
        let window = windows
            .iter()
            .find(|w| w.handle == handle && !w.destroyed)
            .ok_or(WinTitleError::Win32 {
                function: "GetWindowTextW",
                code: 1400, // ERROR_INVALID_WINDOW_HANDLE
            })?;

        // Same contract as GetWindowTextW: copy what fits, leave room for NUL.
        let mut buf = [0u16; TITLE_BUF_LEN];
        let mut copied = 0;
        for (slot, unit) in buf[..TITLE_BUF_LEN - 1].iter_mut().zip(window.title.encode_utf16()) {
            *slot = unit;
            copied += 1;
        }
        if copied == 0 {
            return Err(WinTitleError::Win32 {
                function: "GetWindowTextW",
                code: 0,
            });
        }
        Ok(title_from_buf(&buf[..copied]))
    }

    fn set_window_title(&self, handle: WindowHandle, title: &str) -> Result<()> {
        encode_title(title)?;
        if self.fail_rename {
            return Err(WinTitleError::Win32 {
                function: "SetWindowTextW",
                code: 5, // ERROR_ACCESS_DENIED
            });
        }
        self.find_mut(handle, |w| {
            if w.destroyed {
                None
            } else {
                w.title = title.to_owned();
                Some(())
            }
        })
        .flatten()
        .ok_or(WinTitleError::Win32 {
            function: "SetWindowTextW",
            code: 1400,
        })
    }
}
