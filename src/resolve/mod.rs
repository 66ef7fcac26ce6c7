//! HTTP redirect chain resolution.
//!
//! This module follows a redirect chain manually, one hop at a time, from an
//! allow-listed start URL to the first response that is not a redirect.
//!
//! Guarantees:
//! - inputs outside the allow-list never cause a request
//! - at most `max_hops` requests per resolution
//! - each hop is cancelled after `hop_timeout`
//! - relative `Location` values resolve against the hop that returned them

mod allow_list;
mod request;
mod transport;


use std::time::Duration;

use log::{debug, info, warn};
use url::Url;

use crate::config::{HOP_TIMEOUT, MAX_HOPS};
use crate::error_handling::ResolveError;

pub use allow_list::AllowList;
pub use transport::{HopResponse, HopTransport, ReqwestTransport};

/// Limits and allow-list for a resolver.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Prefixes accepted as start URLs
    pub allow_list: AllowList,
    /// Maximum number of hops (requests) per resolution
    pub max_hops: usize,
    /// Deadline for a single hop
    pub hop_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            allow_list: AllowList::default(),
            max_hops: MAX_HOPS,
            hop_timeout: HOP_TIMEOUT,
        }
    }
}

/// A successfully resolved chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// URL of the first non-redirect response
    pub final_url: String,
    /// Number of redirects followed to get there
    pub hops: usize,
}

/// Follows redirect chains over a `HopTransport`.
///
/// Holds no per-request state, so one resolver can serve any number of
/// concurrent resolutions.
pub struct RedirectResolver<T> {
    settings: ResolverSettings,
    transport: T,
}

impl<T: HopTransport> RedirectResolver<T> {
    /// Creates a resolver from settings and a transport.
    pub fn new(settings: ResolverSettings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    /// The settings this resolver enforces.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolves `url` to the URL of the first non-redirect response.
    ///
    /// # Errors
    ///
    /// - `MissingUrl` if `url` is empty after trimming
    /// - `BlockedUrl` if `url` is not allow-listed (no request is made)
    /// - `TooManyRedirects` if the hop limit is reached, a hop times out, or a
    ///   hop fails at the transport level
    pub async fn resolve(&self, url: &str) -> Result<Resolved, ResolveError> {
        let start = url.trim();
        if start.is_empty() {
            debug!("Rejecting resolution request without a URL");
            return Err(ResolveError::MissingUrl);
        }
        if !self.settings.allow_list.permits(start) {
            info!("Blocked resolution of non-allow-listed URL: {}", start);
            return Err(ResolveError::BlockedUrl);
        }

        let mut current = start.to_string();
        let mut hops = 0;

        while hops < self.settings.max_hops {
            // Dropping the fetch future on timeout aborts the in-flight request
            let hop = match tokio::time::timeout(
                self.settings.hop_timeout,
                self.transport.fetch(&current),
            )
            .await
            {
                Ok(Ok(hop)) => hop,
                Ok(Err(e)) => {
                    warn!("Hop {} to {} failed: {}", hops + 1, current, e);
                    return Err(ResolveError::TooManyRedirects);
                }
                Err(_) => {
                    warn!(
                        "Hop {} to {} timed out after {:?}",
                        hops + 1,
                        current,
                        self.settings.hop_timeout
                    );
                    return Err(ResolveError::TooManyRedirects);
                }
            };

            match usable_location(&hop) {
                Some(location) if hop.is_redirect() => {
                    let next = next_hop_url(&current, location);
                    debug!(
                        "Hop {}: {} -> {} ({})",
                        hops + 1,
                        current,
                        next,
                        hop.status
                    );
                    current = next;
                    hops += 1;
                }
                _ => {
                    if hop.is_redirect() {
                        warn!(
                            "Redirect status {} for {} but no usable Location header",
                            hop.status, current
                        );
                    }
                    debug!("Resolved {} to {} in {} hops", start, current, hops);
                    return Ok(Resolved {
                        final_url: current,
                        hops,
                    });
                }
            }
        }

        warn!(
            "Giving up on {} after {} redirects (last: {})",
            start, hops, current
        );
        Err(ResolveError::TooManyRedirects)
    }
}

/// `Location` value worth following: present and not blank.
///
/// The raw value is returned untouched so the verbatim fallback in
/// `next_hop_url` sees exactly what the server sent.
fn usable_location(hop: &HopResponse) -> Option<&str> {
    hop.location
        .as_deref()
        .filter(|loc| !loc.trim().is_empty())
}

/// Resolves `location` against the URL of the hop that returned it.
///
/// Falls back to the raw `location` if `current` is not a valid base or the
/// join fails.
fn next_hop_url(current: &str, location: &str) -> String {
    Url::parse(current)
        .and_then(|base| base.join(location))
        .map(String::from)
        .unwrap_or_else(|_| location.to_string())
}
