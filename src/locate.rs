// ── Window locator / renamer ──────────────────────────────────────────────────
//
// Pure logic over `WindowSystem`; no `unsafe` and no Win32 imports, so every
// path here is exercised against `platform::memory` in the tests below.

use std::ops::ControlFlow;

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::{
    error::{Result, WinTitleError},
    platform::{WindowHandle, WindowSystem},
};

/// One readable top-level window, as printed by `--list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct WindowEntry {
    pub(crate) handle: WindowHandle,
    pub(crate) title: String,
}

/// Find the first top-level window whose title is exactly `title`.
///
/// Windows are visited in OS order and enumeration stops at the first match.
/// Windows whose title cannot be read are treated as non-matches.
pub(crate) fn find_window(sys: &dyn WindowSystem, title: &str) -> Result<WindowHandle> {
    info!(event = "core.window.find_started", title = title);

    let mut found: Option<WindowHandle> = None;
    let mut skipped = 0usize;

    sys.for_each_window(&mut |handle| match sys.window_title(handle) {
        Ok(current) if current == title => {
            found = Some(handle);
            ControlFlow::Break(())
        }
        Ok(_) => ControlFlow::Continue(()),
        Err(e) => {
            trace!(event = "core.window.title_read_failed", handle = %handle, error = %e);
            skipped += 1;
            ControlFlow::Continue(())
        }
    })
    .inspect_err(|e| warn!(event = "core.window.enumeration_failed", error = %e))?;

    match found {
        Some(handle) if !handle.is_null() => {
            info!(event = "core.window.find_completed", handle = %handle, skipped = skipped);
            Ok(handle)
        }
        _ => {
            debug!(event = "core.window.not_found", title = title, skipped = skipped);
            Err(WinTitleError::NotFound {
                title: title.to_owned(),
            })
        }
    }
}

/// Replace the title of `handle` with `new_title`.  One OS call, no retry.
pub(crate) fn rename_window(sys: &dyn WindowSystem, handle: WindowHandle, new_title: &str) -> Result<()> {
    info!(event = "core.window.rename_started", handle = %handle, new_title = new_title);

    sys.set_window_title(handle, new_title)
        .inspect(|()| info!(event = "core.window.rename_completed", handle = %handle))
        .inspect_err(|e| warn!(event = "core.window.rename_failed", handle = %handle, error = %e))
}

/// Every top-level window with a readable title, in OS order.
pub(crate) fn list_windows(sys: &dyn WindowSystem) -> Result<Vec<WindowEntry>> {
    info!(event = "core.window.list_started");

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    sys.for_each_window(&mut |handle| {
        match sys.window_title(handle) {
            Ok(title) => entries.push(WindowEntry { handle, title }),
            Err(_) => skipped += 1,
        }
        ControlFlow::Continue(())
    })?;

    debug!(event = "core.window.list_completed", count = entries.len(), skipped = skipped);
    Ok(entries)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
