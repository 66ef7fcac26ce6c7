//! Hop transport abstraction.
//!
//! The resolver never talks to reqwest directly. It asks a `HopTransport` for
//! one raw response per hop, which lets tests script redirect chains without a
//! network.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error_handling::TransportError;
use crate::resolve::request::RequestHeaders;

/// The parts of a hop response the resolver looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw `Location` header, if present and valid UTF-8
    pub location: Option<String>,
}

impl HopResponse {
    /// True for any status in `[300, 400)`.
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

/// Issues a single GET for one hop.
///
/// Implementations must not follow redirects themselves: a 3xx has to come
/// back as a `HopResponse` so the resolver can count and resolve it.
#[async_trait]
pub trait HopTransport: Send + Sync {
    /// Fetches `url` once and reports status and `Location`.
    async fn fetch(&self, url: &str) -> Result<HopResponse, TransportError>;
}

#[async_trait]
impl<T: HopTransport + ?Sized> HopTransport for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<HopResponse, TransportError> {
        (**self).fetch(url).await
    }
}

/// `HopTransport` backed by a shared `reqwest::Client`.
///
/// The client must be built with `redirect::Policy::none()`; see
/// `initialization::init_redirect_client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Arc<reqwest::Client>,
}

impl ReqwestTransport {
    /// Wraps a client that has redirect following disabled.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HopTransport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<HopResponse, TransportError> {
        let resp = RequestHeaders::apply_to_request_builder(self.client.get(url))
            .send()
            .await?;

        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|loc| loc.to_str().ok())
            .map(str::to_string);

        // Body is never read; dropping the response releases the connection
        Ok(HopResponse {
            status: resp.status().as_u16(),
            location,
        })
    }
}
