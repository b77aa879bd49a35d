//! Tracing/logging initialization.
//!
//! Output goes to stderr so it never mixes with command feedback on stdout.
//! `RHRH_LOG_FORMAT` picks the format (`json`, `pretty` or `compact`);
//! `RUST_LOG` sets the filter.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const FORMAT_VAR: &str = "RHRH_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format {0:?}; expected json, pretty or compact")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(UnknownLogFormat(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives, e.g. `info,rhrh_model=debug`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: DEFAULT_FILTER.to_owned(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(FORMAT_VAR).ok().as_deref(),
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        )
    }

    /// An unrecognised format falls back to the default (and is reported once
    /// logging is up).
    fn from_vars(format: Option<&str>, filter: Option<&str>) -> Self {
        Self {
            format: format
                .and_then(|f| f.parse().ok())
                .unwrap_or_default(),
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(DEFAULT_FILTER)
                .to_owned(),
        }
    }
}

/// Install the global subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Ok(raw) = std::env::var(FORMAT_VAR) {
        if let Err(e) = raw.parse::<LogFormat>() {
            ::tracing::warn!(error = %e, "using default log format");
        }
    }
}
