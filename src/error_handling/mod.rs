//! Error handling and outcome statistics.
//!
//! This module provides:
//! - Error type definitions (resolution, transport, initialization)
//! - Outcome statistics tracking for the metrics endpoint

mod stats;
mod types;

// Re-export public API
pub use stats::ResolverStats;
pub use types::{InitializationError, Outcome, ResolveError, TransportError};
