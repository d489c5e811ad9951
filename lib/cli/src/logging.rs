//! Diagnostic logging.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The crates whose events `-v` turns on.
const OWN_TARGETS: &[&str] = &["ugo_runtime", "ugo_cli"];

/// Initialize logging on stderr, leaving stdout to the guest.
///
/// Without `-v`, filtering follows `$RUST_LOG`. Each `-v` raises this
/// tool's own events to `debug` and then `trace`, regardless of `$RUST_LOG`.
pub fn set_up_logging(verbose: u8) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_ansi(should_emit_colors())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt_layer)
        .init();
}

fn filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => return EnvFilter::builder().from_env_lossy(),
        1 => "debug",
        _ => "trace",
    };

    let directives = OWN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::builder().parse_lossy(directives)
}

/// Check whether we should emit ANSI escape codes for log formatting.
fn should_emit_colors() -> bool {
    isatty::stderr_isatty() && std::env::var_os("NO_COLOR").is_none()
}
