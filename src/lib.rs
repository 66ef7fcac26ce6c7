//! link_resolver library: unmasking of allow-listed redirect wrappers
//!
//! Given a URL that starts with an allow-listed prefix (by default the
//! search-engine grounding redirect), the resolver follows HTTP redirects one
//! hop at a time and returns the first URL that does not redirect. Hops are
//! capped at `MAX_HOPS` and each one is cancelled after `HOP_TIMEOUT`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use link_resolver::initialization::init_redirect_client;
//! use link_resolver::{RedirectResolver, ReqwestTransport, ResolverSettings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_redirect_client("my-app/1.0", Duration::from_secs(8))?;
//! let resolver = RedirectResolver::new(ResolverSettings::default(), ReqwestTransport::new(client));
//!
//! let resolved = resolver
//!     .resolve("https://vertexaisearch.cloud.google.com/grounding-api-redirect/abc")
//!     .await?;
//! println!("{}", resolved.final_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod resolve;
pub mod server;

// Re-export public API
pub use config::{Config, ConfigError, LogFormat, LogLevel, HOP_TIMEOUT, MAX_HOPS};
pub use error_handling::{
    InitializationError, Outcome, ResolveError, ResolverStats, TransportError,
};
pub use resolve::{
    AllowList, HopResponse, HopTransport, RedirectResolver, Resolved, ReqwestTransport,
    ResolverSettings,
};
pub use server::{build_router, run_server, serve, AppState};
