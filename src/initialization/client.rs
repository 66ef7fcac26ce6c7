//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client used for hop requests.
///
/// Creates a `reqwest::Client` with redirects disabled so every 3xx reaches
/// the resolver unfollowed. The client-level timeout matches the per-hop
/// timeout as a backstop for the resolver's own cancellation.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails,
/// e.g. when `user_agent` is not a valid header value.
pub fn init_redirect_client(
    user_agent: &str,
    hop_timeout: Duration,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(hop_timeout)
        .connect_timeout(hop_timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(Arc::new(client))
}
