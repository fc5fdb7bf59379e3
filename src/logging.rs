//! Tracing subscriber setup for the binary. The library only emits events.

use std::env;
use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// `level` as the fallback; `LOG_FORMAT` picks the output format.
    pub fn from_env(level: &str) -> Self {
        let format = env::var("LOG_FORMAT")
            .map(|v| LogFormat::from_env_value(&v))
            .unwrap_or(LogFormat::Pretty);

        Self {
            level: level.to_string(),
            format,
        }
    }

    /// Install the global subscriber, writing to stderr.
    ///
    /// A second call is a no-op.
    pub fn init(&self) {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
                .try_init(),
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .try_init(),
        };

        if result.is_ok() {
            tracing::debug!(level = %self.level, format = ?self.format, "logging initialized");
        }
    }
}
