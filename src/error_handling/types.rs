//! Error type definitions.
//!
//! This module defines the error and outcome types used throughout the service.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a resolution request was refused or could not finish.
///
/// These are the only failures visible to callers. Transport details are
/// folded into `TooManyRedirects`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// No URL was supplied.
    #[error("missing url")]
    MissingUrl,

    /// The URL does not start with an allow-listed prefix.
    #[error("blocked url")]
    BlockedUrl,

    /// The chain did not reach a terminal response: hop limit exhausted,
    /// a hop timed out, or a hop failed at the transport level.
    #[error("too many redirects")]
    TooManyRedirects,
}

impl ResolveError {
    /// Machine-readable reason string returned to clients.
    pub fn reason(&self) -> &'static str {
        match self {
            ResolveError::MissingUrl => "missing url",
            ResolveError::BlockedUrl => "blocked url",
            ResolveError::TooManyRedirects => "too many redirects",
        }
    }

    /// The outcome this error is counted as.
    pub fn outcome(&self) -> Outcome {
        match self {
            ResolveError::MissingUrl => Outcome::MissingUrl,
            ResolveError::BlockedUrl => Outcome::BlockedUrl,
            ResolveError::TooManyRedirects => Outcome::TooManyRedirects,
        }
    }
}

/// Failure of a single hop at the transport level.
///
/// Never shown to clients; the resolver logs it and reports `TooManyRedirects`.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP client failed (connect, TLS, protocol, client-side timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Final outcome of one resolution request, used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Outcome {
    /// A terminal URL was returned
    Resolved,
    /// Rejected: no URL supplied
    MissingUrl,
    /// Rejected: URL not allow-listed
    BlockedUrl,
    /// Chain exhausted, timed out, or failed in transport
    TooManyRedirects,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    /// Snake-case label, used as the metric name suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Resolved => "resolved",
            Outcome::MissingUrl => "missing_url",
            Outcome::BlockedUrl => "blocked_url",
            Outcome::TooManyRedirects => "too_many_redirects",
        }
    }
}
