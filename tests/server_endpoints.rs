//! HTTP contract tests for the resolver server.
//!
//! A real axum server is bound to an ephemeral port with a counting fake
//! transport, and queried with reqwest.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use link_resolver::{
    serve, AppState, HopResponse, HopTransport, Outcome, ResolverSettings, TransportError,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const START: &str = "https://vertexaisearch.cloud.google.com/grounding-api-redirect/abc";

/// Fake transport answering from a fixed table and counting calls.
struct FakeTransport {
    responses: HashMap<String, HopResponse>,
    calls: AtomicUsize,
}

impl FakeTransport {
    fn new(responses: &[(&str, u16, Option<&str>)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(url, status, location)| {
                    (
                        url.to_string(),
                        HopResponse {
                            status: *status,
                            location: location.map(str::to_string),
                        },
                    )
                })
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HopTransport for FakeTransport {
    async fn fetch(&self, url: &str) -> Result<HopResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Other(format!("no route to {}", url)))
    }
}

struct TestServer {
    base: String,
    state: AppState,
    shutdown: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

async fn start_server(transport: Arc<FakeTransport>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let state = AppState::new(ResolverSettings::default(), transport);
    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(serve(listener, state.clone(), shutdown.clone()));

    TestServer {
        base: format!("http://{}", addr),
        state,
        shutdown,
        handle,
    }
}

async fn get_resolve(base: &str, url: Option<&str>) -> (u16, Value) {
    let client = reqwest::Client::new();
    let mut request = client.get(format!("{}/resolve", base));
    if let Some(url) = url {
        request = request.query(&[("url", url)]);
    }
    let resp = request.send().await.expect("request failed");
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.expect("body should be JSON");
    (status, body)
}

#[tokio::test]
async fn test_resolve_success_returns_final_url() {
    let transport = Arc::new(FakeTransport::new(&[
        (START, 302, Some("https://news.example.com/article")),
        ("https://news.example.com/article", 200, None),
    ]));
    let server = start_server(transport.clone()).await;

    let (status, body) = get_resolve(&server.base, Some(START)).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        serde_json::json!({ "finalUrl": "https://news.example.com/article" })
    );
    assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    assert_eq!(server.state.stats.count(Outcome::Resolved), 1);
}

#[tokio::test]
async fn test_blocked_url_is_400_without_fetch() {
    let transport = Arc::new(FakeTransport::new(&[]));
    let server = start_server(transport.clone()).await;

    let (status, body) = get_resolve(&server.base, Some("https://evil.example.com/phish")).await;

    assert_eq!(status, 400);
    assert_eq!(body, serde_json::json!({ "error": "blocked url" }));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    assert_eq!(server.state.stats.count(Outcome::BlockedUrl), 1);
}

#[tokio::test]
async fn test_missing_url_is_400() {
    let transport = Arc::new(FakeTransport::new(&[]));
    let server = start_server(transport.clone()).await;

    let (status, body) = get_resolve(&server.base, None).await;
    assert_eq!(status, 400);
    assert_eq!(body, serde_json::json!({ "error": "missing url" }));

    let (status, body) = get_resolve(&server.base, Some("")).await;
    assert_eq!(status, 400);
    assert_eq!(body, serde_json::json!({ "error": "missing url" }));

    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    assert_eq!(server.state.stats.count(Outcome::MissingUrl), 2);
}

#[tokio::test]
async fn test_malformed_query_is_json_400() {
    let transport = Arc::new(FakeTransport::new(&[(START, 200, None)]));
    let server = start_server(transport.clone()).await;

    let resp = reqwest::get(format!("{}/resolve?url=a&url=b", server.base))
        .await
        .expect("request failed");

    assert_eq!(resp.status().as_u16(), 400);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type {}",
        content_type
    );
    let body: Value = resp.json().await.expect("body should be JSON");
    assert_eq!(body, serde_json::json!({ "error": "invalid query" }));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_redirect_loop_is_400_too_many_redirects() {
    let transport = Arc::new(FakeTransport::new(&[(START, 302, Some(START))]));
    let server = start_server(transport.clone()).await;

    let (status, body) = get_resolve(&server.base, Some(START)).await;

    assert_eq!(status, 400);
    assert_eq!(body, serde_json::json!({ "error": "too many redirects" }));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_transport_failure_hides_details() {
    let transport = Arc::new(FakeTransport::new(&[(
        START,
        302,
        Some("https://unreachable.example/"),
    )]));
    let server = start_server(transport).await;

    let (status, body) = get_resolve(&server.base, Some(START)).await;

    assert_eq!(status, 400);
    // Only the reason string, no transport error text
    assert_eq!(body, serde_json::json!({ "error": "too many redirects" }));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = start_server(Arc::new(FakeTransport::new(&[]))).await;

    let resp = reqwest::get(format!("{}/health", server.base))
        .await
        .expect("request failed");
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.expect("body should be JSON");
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_metrics_reflect_outcomes() {
    let transport = Arc::new(FakeTransport::new(&[(START, 200, None)]));
    let server = start_server(transport).await;

    get_resolve(&server.base, Some(START)).await;
    get_resolve(&server.base, Some("https://evil.example.com/")).await;
    get_resolve(&server.base, None).await;

    let metrics = reqwest::get(format!("{}/metrics", server.base))
        .await
        .expect("request failed")
        .text()
        .await
        .expect("metrics body");

    assert!(metrics.contains("link_resolver_requests_total 3"));
    assert!(metrics.contains("link_resolver_outcomes_total{outcome=\"resolved\"} 1"));
    assert!(metrics.contains("link_resolver_outcomes_total{outcome=\"blocked_url\"} 1"));
    assert!(metrics.contains("link_resolver_outcomes_total{outcome=\"missing_url\"} 1"));
    assert!(metrics.contains("link_resolver_outcomes_total{outcome=\"too_many_redirects\"} 0"));
}

#[tokio::test]
async fn test_cancellation_stops_server() {
    let server = start_server(Arc::new(FakeTransport::new(&[]))).await;

    server.shutdown.cancel();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server should stop after cancellation")
        .expect("server task panicked");

    assert!(result.is_ok());
}
