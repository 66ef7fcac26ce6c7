//! Configuration constants.
//!
//! This module defines the fixed operational parameters of the resolver:
//! hop limit, per-hop timeout, default allow-list and the request identity.

use std::time::Duration;

// Redirect handling
/// Maximum number of redirect hops to follow.
/// Every hop is one outbound request, so this also caps the requests per resolution.
pub const MAX_HOPS: usize = 5;

/// Per-hop timeout (8 seconds).
/// A hop still in flight after this is cancelled and the resolution fails.
pub const HOP_TIMEOUT: Duration = Duration::from_millis(8000);

/// URL prefixes accepted as resolution inputs.
///
/// Only the search-engine grounding redirect wrapper is allowed. Anything else is
/// rejected before a single request is made, so the service cannot be used as an
/// open fetch proxy.
pub const DEFAULT_ALLOWED_PREFIXES: &[&str] =
    &["https://vertexaisearch.cloud.google.com/grounding-api-redirect/"];

/// Default User-Agent string for outbound hops.
///
/// Some redirect wrappers answer non-browser clients with an interstitial page
/// instead of a 3xx, so hops identify as a desktop Chrome.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Server
/// Default listen address for the HTTP server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
