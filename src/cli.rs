// ── Command-line interface ────────────────────────────────────────────────────
//
// Pure clap model; no I/O.  `app` decides what to do with a parsed `Cli`.

use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "winchangetitle",
    version,
    about = "WinChangeTitle - Tool for changing a Win32 app title at runtime, (c) 2023",
    override_usage = "winchangetitle <old-title> <new-title>",
    after_help = "Note: Use quotes if a title contains space characters."
)]
pub(crate) struct Cli {
    /// Exact, case-sensitive title of the window to rename
    #[arg(allow_hyphen_values = true)]
    pub(crate) old_title: Option<String>,

    /// Title to give the window
    #[arg(allow_hyphen_values = true)]
    pub(crate) new_title: Option<String>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub(crate) extra: Vec<String>,

    /// List the titles of all top-level windows instead of renaming
    #[arg(short, long)]
    pub(crate) list: bool,

    /// Print the window list as JSON
    #[arg(long, requires = "list")]
    pub(crate) json: bool,

    /// Report success only after the rename has happened; exit 2 if it fails
    #[arg(long)]
    pub(crate) strict: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    /// The rename request, if both titles were given.
    pub(crate) fn titles(&self) -> Option<(&str, &str)> {
        Some((self.old_title.as_deref()?, self.new_title.as_deref()?))
    }

    /// Rendered help text, as printed for a short invocation.
    pub(crate) fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
