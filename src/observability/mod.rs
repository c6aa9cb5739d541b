//! Observability and telemetry.
//!
//! Service code emits structured `tracing` events and `metrics` facade
//! counters/histograms; this module owns subscriber initialization for
//! the binary. Library consumers install their own subscriber and
//! recorder instead.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// Newline-delimited JSON for log shippers.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingConfig {
    /// Lower the default filter from `info` to `debug`.
    pub verbose: bool,
    /// Output format.
    pub format: LogFormat,
}

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `info` (or `debug`
/// with `verbose`). Safe to call more than once; only the first call
/// installs a subscriber.
pub fn init_logging(config: LoggingConfig) {
    LOGGING_INIT.get_or_init(|| {
        let default_directive = if config.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let registry = tracing_subscriber::registry().with(filter);
        match config.format {
            LogFormat::Json => {
                let _ = registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                    .try_init();
            }
            LogFormat::Text => {
                let _ = registry
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                    .try_init();
            }
        }
    });
}
