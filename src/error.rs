// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations return `error::Result<T>`.  No panics in production
// paths; `app` turns errors into the user-facing messages and exit codes.

/// Every error that winchangetitle can produce.
#[cfg_attr(not(windows), allow(dead_code))] // `Win32` needs the Win32 backend
#[derive(Debug, thiserror::Error)]
pub enum WinTitleError {
    /// A Win32 API call returned a failure code.
    #[error("{function} failed (error {code:#010x})")]
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },

    /// No top-level window carries the requested title.
    #[error("no window with title '{title}' found")]
    NotFound { title: String },

    /// A title that cannot be handed to the OS (e.g. interior NUL).
    #[error("invalid window title: {reason}")]
    InvalidTitle { reason: &'static str },

    /// The host has no native window system backend.
    #[error("window titles can only be changed on Windows")]
    Unsupported,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error (writing to stdout, …).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WinTitleError>;
