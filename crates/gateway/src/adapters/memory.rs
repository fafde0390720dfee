//! In-memory adapter - serves JSON fixtures without any network
//!
//! Responses are keyed by the request's display form (`route?k=v`), with a
//! fallback on the bare route. Every request is counted per route, which
//! makes duplicate fetches observable in tests.

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use log::debug;
use serde_json::Value;
use std::time::Duration;
use tsosi_ports::{FetchError, FetchGateway, FetchRequest, FetchResult};

#[derive(Default)]
pub struct InMemoryGateway {
    responses: DashMap<String, Value>,
    failures: DashSet<String>,
    calls: DashMap<String, usize>,
    latency: Option<Duration>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response, so concurrent callers overlap
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Serve `value` for `key` (a route, or a route with query string)
    pub fn with_response(self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Fail every request for `key` with a transport error
    pub fn with_failure(self, key: impl Into<String>) -> Self {
        self.failures.insert(key.into());
        self
    }

    pub fn insert(&self, key: impl Into<String>, value: Value) {
        self.responses.insert(key.into(), value);
    }

    /// Number of requests received for a route (query string ignored)
    pub fn calls(&self, route: &str) -> usize {
        self.calls.get(route).map(|count| *count).unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.iter().map(|entry| *entry.value()).sum()
    }

    fn record_call(&self, route: &str) {
        *self.calls.entry(route.to_string()).or_insert(0) += 1;
    }

    fn lookup(&self, full_key: &str, route: &str) -> FetchResult {
        if self.failures.contains(full_key) || self.failures.contains(route) {
            return Err(FetchError::Transport {
                url: full_key.to_string(),
                message: "connection refused".to_string(),
            });
        }
        self.responses
            .get(full_key)
            .or_else(|| self.responses.get(route))
            .map(|value| value.clone())
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: full_key.to_string(),
            })
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl FetchGateway for InMemoryGateway {
    async fn get(&self, request: &FetchRequest) -> FetchResult {
        let full_key = request.to_string();
        debug!("in-memory fetch: \"{}\"", full_key);
        self.record_call(&request.route);
        self.simulate_latency().await;
        self.lookup(&full_key, &request.route)
    }

    async fn fetch_url(&self, url: &str) -> FetchResult {
        debug!("in-memory fetch: \"{}\"", url);
        self.record_call(url);
        self.simulate_latency().await;
        self.lookup(url, url)
    }

    fn name(&self) -> &str {
        "InMemoryGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_serves_and_counts() {
        let gateway = InMemoryGateway::new().with_response("currencies/", json!([]));

        let value = gateway.get(&FetchRequest::api("currencies/")).await.unwrap();
        assert_eq!(value, json!([]));
        gateway.get(&FetchRequest::api("currencies/")).await.unwrap();

        assert_eq!(gateway.calls("currencies/"), 2);
        assert_eq!(gateway.total_calls(), 2);
    }

    #[tokio::test]
    async fn test_query_specific_response() {
        let gateway = InMemoryGateway::new()
            .with_response("transfers/all/", json!(["all"]))
            .with_response("transfers/all/?entity_id=e1", json!(["e1"]));

        let filtered = FetchRequest::api("transfers/all/").with_query("entity_id", "e1");
        assert_eq!(gateway.get(&filtered).await.unwrap(), json!(["e1"]));

        let other = FetchRequest::api("transfers/all/").with_query("entity_id", "e2");
        assert_eq!(gateway.get(&other).await.unwrap(), json!(["all"]));

        assert_eq!(gateway.calls("transfers/all/"), 2);
    }

    #[tokio::test]
    async fn test_missing_and_failing_routes() {
        let gateway = InMemoryGateway::new().with_failure("currencies/");

        let err = gateway.get(&FetchRequest::api("entities/all/")).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));

        let err = gateway.get(&FetchRequest::api("currencies/")).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency() {
        let gateway = InMemoryGateway::new()
            .with_latency(Duration::from_millis(50))
            .with_response("currencies/", json!([]));

        let start = tokio::time::Instant::now();
        gateway.get(&FetchRequest::api("currencies/")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
