//! Logging for faultline services
//!
//! [`init`] installs the process-wide `tracing` subscriber. [`Logger`] is the
//! leveled, attribute-carrying facade that error producers log through.

mod attribute;
mod logger;

use faultline_config::{LogFormat, LoggingConfig};

pub use attribute::{Attribute, ERROR_MESSAGE_KEY};
pub use logger::{ContextFieldExtractor, FATAL_EXIT_CODE, Level, Logger, LoggerOptions};

/// Telemetry errors
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Level name not recognized by [`Logger::set_level`]
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),
}

/// Install the global `tracing` subscriber
///
/// Events are filtered by the configured `EnvFilter` directive and written to
/// stdout as JSON lines or plain text.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a global
/// subscriber has already been installed
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| anyhow::anyhow!("invalid log filter `{}`: {e}", config.filter))?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_current_span(false),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
