#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Logging setup shared by the native Postview binaries.
//!
//! # Design
//! - One entry point installs the global subscriber (pretty, compact, or JSON).
//! - `RUST_LOG` wins over the configured level when present.
//! - Output goes to stderr so command output on stdout stays machine-readable.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Default level when neither `RUST_LOG` nor a configured level is supplied.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Log level or filter directive (e.g., `info`, `postview_cli=debug`).
    pub level: &'a str,
    /// Output format selection for the tracing subscriber.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
        }
    }
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable, multi-line logs.
    Pretty,
    /// Emit single-line human-readable logs.
    Compact,
}

impl LogFormat {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Build the filter used by [`init_logging`].
///
/// # Errors
///
/// Returns an error when neither `RUST_LOG` nor the configured level is a
/// valid filter directive.
pub fn build_filter(config: &LoggingConfig<'_>) -> Result<EnvFilter> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(from_env.as_deref(), config.level)
}

/// A valid `RUST_LOG` directive wins; otherwise the configured level must parse.
fn resolve_filter(from_env: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(filter) = from_env.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|err| anyhow!("invalid log level '{level}': {err}"))
}

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or the subscriber cannot be
/// installed (for example, because another subscriber is already set).
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!(level = config.level, format = ?config.format, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_format_parses_known_names() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("COMPACT".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn default_config_uses_quiet_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.format, LogFormat::infer());
    }

    #[test]
    fn configured_level_accepts_target_directives() {
        let filter = resolve_filter(None, "postview_cli=debug").expect("directive parses");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_configured_level_is_rejected() {
        let err = resolve_filter(None, "not==valid").expect_err("directive is invalid");
        assert!(err.to_string().contains("invalid log level 'not==valid'"));
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        let filter = resolve_filter(Some("trace"), "not==valid").expect("env filter wins");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_rust_log_falls_back_to_configured_level() {
        let filter = resolve_filter(Some("not==valid"), "info").expect("configured level used");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn second_install_reports_error() {
        let config = LoggingConfig {
            level: "info",
            format: LogFormat::Compact,
        };
        init_logging(&config).expect("first install succeeds");
        assert!(init_logging(&config).is_err());
    }
}
