//! Logging infrastructure for the stitch CLI.
//!
//! Structured logging via the `tracing` ecosystem with verbosity
//! controlled by the global CLI flags and overridable through the
//! `RUST_LOG` environment variable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at startup, before any logging occurs.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for stitch crates
/// 2. `--quiet` flag: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for stitch crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("stitch=debug,stitch_core=debug,stitch_cli=debug")
    } else if quiet {
        EnvFilter::new("stitch=error,stitch_core=error,stitch_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("stitch=info,stitch_core=info,stitch_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
