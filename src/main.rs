// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32`, the Win32 FFI
// boundary.  Each unsafe block there MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;
mod error;
mod locate;
mod logging;
mod platform;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match app::run(&cli, &mut stdout, platform::native) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Only output failures reach here (closed pipe, …).
            eprintln!("error: {e}");
            ExitCode::from(app::EXIT_NOT_FOUND)
        }
    }
}
