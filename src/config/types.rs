//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    ATTEMPT_PACING_MS, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROVIDER_BASE_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration, parsed from the command line.
///
/// Can also be constructed programmatically (e.g. in tests) via `Default`.
///
/// # Examples
///
/// ```no_run
/// use vessel_status::Config;
///
/// let config = Config {
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vessel_status",
    about = "Vessel position lookup service (AIS provider proxy with fingerprint fallback)"
)]
pub struct Config {
    /// Address to bind the HTTP service to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the HTTP service to
    #[arg(long, short, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// AIS provider base URL (override for testing against a mock server)
    #[arg(long, default_value = DEFAULT_PROVIDER_BASE_URL)]
    pub provider_base_url: String,

    /// Delay between profile attempts in milliseconds
    #[arg(long, default_value_t = ATTEMPT_PACING_MS)]
    pub pacing_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            provider_base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            pacing_ms: ATTEMPT_PACING_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.provider_base_url, DEFAULT_PROVIDER_BASE_URL);
        assert_eq!(config.pacing_ms, ATTEMPT_PACING_MS);
    }

    #[test]
    fn test_cli_parsing_overrides() {
        let config = Config::parse_from([
            "vessel_status",
            "--port",
            "8080",
            "--provider-base-url",
            "http://127.0.0.1:9999",
            "--pacing-ms",
            "0",
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.provider_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.pacing_ms, 0);
    }

    #[test]
    fn test_cli_defaults_match_struct_defaults() {
        let parsed = Config::parse_from(["vessel_status"]);
        let default = Config::default();
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.provider_base_url, default.provider_base_url);
        assert_eq!(parsed.pacing_ms, default.pacing_ms);
    }
}
