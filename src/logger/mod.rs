//! Logger initialization built on tracing-subscriber
//!
//! Console output is either human-readable (pretty) or JSON, selected by
//! the `[logger]` section of the configuration.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggerSettings};

/// Initialize the global tracing subscriber from logger settings.
///
/// The configured level acts as the default directive; `RUST_LOG` still
/// overrides it when set.
///
/// # Errors
/// Returns an error if the level string is not a valid filter directive
/// or a global subscriber is already installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", settings.level, e))?;

    let registry = tracing_subscriber::registry().with(filter);

    match settings.format {
        LogFormat::Json => {
            registry
                .with(fmt::layer().json().with_current_span(true))
                .try_init()?;
        }
        LogFormat::Pretty => {
            registry
                .with(fmt::layer().with_ansi(std::io::stdout().is_terminal()))
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_rejects_invalid_level() {
        let settings = LoggerSettings {
            level: "not-a-level=".to_string(),
            format: LogFormat::Pretty,
        };
        // RUST_LOG may be set in the environment, in which case the invalid
        // configured level is never parsed.
        if std::env::var("RUST_LOG").is_err() {
            assert!(init_logger(&settings).is_err());
        }
    }
}
