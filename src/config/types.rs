//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DEFAULT_ALLOWED_PREFIXES, DEFAULT_BIND_ADDR, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
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

/// Service configuration.
///
/// Parsed from the command line by the binary, or constructed directly by
/// library users and tests.
///
/// # Examples
///
/// ```no_run
/// use link_resolver::Config;
///
/// let config = Config {
///     bind: "0.0.0.0:9000".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "link_resolver", version, about)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LINK_RESOLVER_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value sent on every hop
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// URL prefix accepted as a resolution input (repeatable)
    #[arg(long = "allow-prefix", default_values_t = default_prefixes())]
    pub allowed_prefixes: Vec<String>,
}

fn default_prefixes() -> Vec<String> {
    DEFAULT_ALLOWED_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allowed_prefixes: default_prefixes(),
        }
    }
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

impl Config {
    /// Checks the configuration for values the service cannot run with.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_prefixes.is_empty() {
            return Err(ConfigError {
                field: "allowed_prefixes",
                message: "at least one prefix is required, otherwise every URL is blocked"
                    .to_string(),
            });
        }
        if self.allowed_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError {
                field: "allowed_prefixes",
                message: "an empty prefix would allow every URL".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
