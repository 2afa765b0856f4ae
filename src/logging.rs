use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging to stderr.
///
/// Only warnings and errors are emitted unless `verbose` is set, which adds
/// the debug-level window events.  A non-empty `RUST_LOG` replaces that
/// default entirely.  Stdout is left to the user-facing messages.
pub(crate) fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(verbose, rust_log.as_deref());

    // An unparsable RUST_LOG falls back to the built-in default.
    let filter = EnvFilter::try_new(&directives)
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose, None)));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

fn filter_directives(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(env) if !env.is_empty() => env.to_owned(),
        _ if verbose => "winchangetitle=debug".to_owned(),
        _ => "winchangetitle=warn".to_owned(),
    }
}
