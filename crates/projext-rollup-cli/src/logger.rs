//! Logging for the CLI.
//!
//! Everything is written to stderr so the JSON on stdout stays parseable.
//!
//! # Example
//!
//! ```rust,no_run
//! use projext_rollup_cli::logger::init_logger;
//!
//! init_logger(false, false, false, None);
//! tracing::info!("loading project");
//! ```

use projext_rollup::LogLevel;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 3] = ["projext_rollup", "projext_rollup_config", "projext_rollup_cli"];

/// Initialize the tracing subscriber.
///
/// The level is chosen in this order:
/// 1. `--verbose`: debug
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. `log_level` from the CLI settings, when it's a valid level
/// 5. info
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, log_level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new(crate_filter("debug"))
    } else if quiet {
        EnvFilter::new(crate_filter("error"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = log_level
                .and_then(|level| level.parse::<LogLevel>().ok())
                .unwrap_or_default();
            EnvFilter::new(crate_filter(&level.to_string()))
        })
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    // A subscriber may already be installed when commands run in-process
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Directive enabling `level` for the projext crates only
fn crate_filter(level: &str) -> String {
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_covers_every_crate() {
        assert_eq!(
            crate_filter("warn"),
            "projext_rollup=warn,projext_rollup_config=warn,projext_rollup_cli=warn"
        );
    }

    #[test]
    fn filters_parse() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            assert!(EnvFilter::try_new(crate_filter(level)).is_ok());
        }
    }
}
