//! Browser-like request headers for hop requests.

/// Request headers sent on every hop in addition to the client's User-Agent.
///
/// Redirect wrappers sometimes answer requests that do not look like a browser
/// navigation with an HTML interstitial instead of a 3xx. Mimicking a Chrome
/// top-level navigation keeps the redirect on the wire where we can read it.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Headers as (name, value) pairs.
    pub(crate) fn as_vec() -> Vec<(&'static str, &'static str)> {
        vec![
            (
                "accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
            ("accept-language", "en-US,en;q=0.9"),
            ("sec-fetch-dest", "document"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-site", "none"),
            ("upgrade-insecure-requests", "1"),
        ]
    }

    /// Applies the headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        Self::as_vec()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }
}
