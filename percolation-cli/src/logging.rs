//! Logging initialisation for the percolation CLI.
//!
//! Diagnostics go to `stderr` so summaries on `stdout` stay clean. The level
//! comes from `RUST_LOG` and the encoding from `PERCOLATION_LOG_FORMAT`.

use std::{env, str::FromStr};

use thiserror::Error;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
};

const LOG_FORMAT_ENV: &str = "PERCOLATION_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

/// Output encoding for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum LogFormat {
    #[default]
    Human,
    Json,
}

impl LogFormat {
    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `PERCOLATION_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing`.
        #[source]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

/// Installs the process-wide subscriber and the `log` bridge.
///
/// Call once, before any command runs.
///
/// # Errors
/// Returns [`LoggingError`] if `PERCOLATION_LOG_FORMAT` is not valid Unicode
/// or names an unknown format, or if a global subscriber already exists.
pub fn init_logging() -> Result<(), LoggingError> {
    let format = LogFormat::from_env()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // Best-effort: a logger installed by an embedding process wins.
    let _ = LogTracer::init();

    tracing::subscriber::set_global_default(subscriber(format, filter, std::io::stderr))
        .map_err(|source| LoggingError::InstallFailed { source })
}

fn subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.with_ansi(false).boxed(),
    };

    tracing_subscriber::registry().with(filter).with(fmt_layer)
}
