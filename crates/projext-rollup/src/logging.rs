//! Subscriber setup for tools embedding projext-rollup.
//!
//! Only available with the `logging` feature. Without it the crate emits
//! tracing events and leaves the subscriber to the host.
//!
//! The filter only covers the projext crates, so a host's own dependencies
//! stay quiet unless `RUST_LOG` says otherwise.

use projext_rollup_config::GlobalSettings;
use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

const CRATES: [&str; 2] = ["projext_rollup", "projext_rollup_config"];

/// Verbosity of the configuration layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    /// Selected configuration files, output modes, definitions and overrides
    Debug,
    /// Every reducer call
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// The `log_level` of a project's `[settings]` table, or the default
    /// when it's missing or unreadable
    pub fn from_settings(settings: &GlobalSettings) -> Self {
        settings
            .log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or_default()
    }

    fn filter(self) -> EnvFilter {
        let directives = CRATES
            .iter()
            .map(|name| format!("{name}={}", self.directive()))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(directives)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "off" | "none" => LogLevel::Silent,
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            other => return Err(format!("unknown log level `{other}`")),
        };
        Ok(level)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.directive())
    }
}

/// Install a stderr subscriber at `level`.
///
/// `RUST_LOG` directives are added on top. Only the first call in a process
/// has an effect, and a subscriber installed by the host is left alone.
///
/// ```rust,no_run
/// use projext_rollup::logging::{LogLevel, init_logging};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let mut filter = level.filter();
        if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV) {
            for directive in directives.split(',').filter_map(|d| d.parse().ok()) {
                filter = filter.add_directive(directive);
            }
        }
        install(filter);
    });
}

/// Install a subscriber configured only by `RUST_LOG`, at info level when
/// it's unset or invalid
pub fn init_logging_from_env() {
    INIT.call_once(|| {
        install(EnvFilter::try_from_default_env().unwrap_or_else(|_| LogLevel::Info.filter()));
    });
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
