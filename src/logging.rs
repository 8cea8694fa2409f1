//! Logging configuration and initialization

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use crate::error::{GameError, GameResult};

/// Logging output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Human,
    Json,
}

/// Logging output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stdout,
    Stderr,
}

/// Logging configuration
///
/// Stdout carries the game itself, so logs default to stderr at `warn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Human,
            output: LogOutput::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Parsed tracing level
    pub fn level(&self) -> GameResult<Level> {
        self.level.parse::<Level>().map_err(|_| {
            GameError::configuration(
                format!("Unknown log level '{}'", self.level),
                "logging.level",
            )
        })
    }
}

/// Initialize structured logging with the given configuration
///
/// `RUST_LOG` directives, when present, take precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> GameResult<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level()?.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            match config.output {
                LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init(),
                LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init(),
            }
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(fmt::format::FmtSpan::CLOSE);

            match config.output {
                LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init(),
                LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init(),
            }
        }
    };

    result.map_err(|e| GameError::configuration(
        format!("Failed to initialize logging: {}", e),
        "logging",
    ))
}
