//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (hop limit, timeouts, allow-list)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigError, LogFormat, LogLevel};
