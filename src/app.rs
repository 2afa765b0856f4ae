// ── CLI flow ──────────────────────────────────────────────────────────────────
//
// Turns a parsed `Cli` into user-facing output and a process exit code.
// Output goes through a `Write` so the whole flow runs against
// `platform::memory` in tests; logs go to stderr via tracing.

use std::io::Write;

use tracing::{error, info, warn};

use crate::{
    cli::Cli,
    error::Result,
    locate::{find_window, list_windows, rename_window},
    platform::WindowSystem,
};

// ── Exit codes ────────────────────────────────────────────────────────────────

pub(crate) const EXIT_OK: u8 = 0;
/// No window matched, the window list could not be read, or no native
/// window system is available.
pub(crate) const EXIT_NOT_FOUND: u8 = 1;
/// Rename failed under `--strict`.
pub(crate) const EXIT_RENAME_FAILED: u8 = 2;

// ── Messages ──────────────────────────────────────────────────────────────────

const MSG_NOT_FOUND: &str = "Window not found";
const MSG_REPLACED: &str = "Window title replaced successfully";
const MSG_REPLACE_FAILED: &str = "Can't replace the window title";
const MSG_LIST_FAILED: &str = "Can't list windows";

// ── Action ────────────────────────────────────────────────────────────────────

/// What a command line asks for, once help has been ruled out.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action<'a> {
    List { json: bool },
    Rename { old_title: &'a str, new_title: &'a str, strict: bool },
}

impl<'a> Action<'a> {
    /// `None` means the invocation is too short and help should be shown.
    pub(crate) fn from_cli(cli: &'a Cli) -> Option<Self> {
        if cli.list {
            return Some(Self::List { json: cli.json });
        }
        let (old_title, new_title) = cli.titles()?;
        Some(Self::Rename {
            old_title,
            new_title,
            strict: cli.strict,
        })
    }
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Run one invocation.  `connect` is only called once help has been ruled
/// out, so help works on hosts without a window system.
///
/// The returned `Err` covers failures to write output; every window-system
/// outcome is folded into the exit code.
pub(crate) fn run(
    cli: &Cli,
    out: &mut dyn Write,
    connect: impl FnOnce() -> Result<Box<dyn WindowSystem>>,
) -> Result<u8> {
    let Some(action) = Action::from_cli(cli) else {
        info!(event = "cli.help_shown");
        write!(out, "{}", Cli::help_text())?;
        return Ok(EXIT_OK);
    };

    let sys = match connect() {
        Ok(sys) => sys,
        Err(e) => {
            error!(event = "cli.window_system_unavailable", error = %e);
            eprintln!("error: {e}");
            return Ok(EXIT_NOT_FOUND);
        }
    };

    execute(&action, &*sys, out)
}

/// Carry out `action` against `sys`.
pub(crate) fn execute(action: &Action<'_>, sys: &dyn WindowSystem, out: &mut dyn Write) -> Result<u8> {
    match *action {
        Action::List { json } => handle_list(sys, json, out),
        Action::Rename {
            old_title,
            new_title,
            strict,
        } => handle_rename(sys, old_title, new_title, strict, out),
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

fn handle_rename(
    sys: &dyn WindowSystem,
    old_title: &str,
    new_title: &str,
    strict: bool,
    out: &mut dyn Write,
) -> Result<u8> {
    let handle = match find_window(sys, old_title) {
        Ok(handle) => handle,
        Err(e) => {
            info!(event = "cli.rename_window_missing", error = %e);
            writeln!(out, "{MSG_NOT_FOUND}")?;
            return Ok(EXIT_NOT_FOUND);
        }
    };

    if strict {
        return match rename_window(sys, handle, new_title) {
            Ok(()) => {
                writeln!(out, "{MSG_REPLACED}")?;
                Ok(EXIT_OK)
            }
            Err(_) => {
                writeln!(out, "{MSG_REPLACE_FAILED}")?;
                Ok(EXIT_RENAME_FAILED)
            }
        };
    }

    // Historical behaviour: the success line precedes the attempt and a
    // failed rename still exits 0.  `--strict` is the checked variant.
    writeln!(out, "{MSG_REPLACED}")?;
    if rename_window(sys, handle, new_title).is_err() {
        warn!(event = "cli.rename_failed_after_success_message");
        writeln!(out, "{MSG_REPLACE_FAILED}")?;
    }
    Ok(EXIT_OK)
}

fn handle_list(sys: &dyn WindowSystem, json: bool, out: &mut dyn Write) -> Result<u8> {
    let entries = match list_windows(sys) {
        Ok(entries) => entries,
        Err(e) => {
            error!(event = "cli.list_windows_failed", error = %e);
            writeln!(out, "{MSG_LIST_FAILED}")?;
            return Ok(EXIT_NOT_FOUND);
        }
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}  {}", entry.handle, entry.title)?;
        }
    }

    info!(event = "cli.list_windows_completed", count = entries.len());
    Ok(EXIT_OK)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
