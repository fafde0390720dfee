//! Integration test: adapters used through the fetch port
//!
//! The reference-data store only ever sees `Arc<dyn FetchGateway>`; these
//! tests drive the adapters the same way.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tsosi_gateway::{
    FetchError, FetchGateway, GatewayConfig, HttpGateway, InMemoryGateway, Routes,
};

#[tokio::test(start_paused = true)]
async fn test_concurrent_requests_are_all_counted() {
    let _ = env_logger::try_init();

    let memory = Arc::new(
        InMemoryGateway::new()
            .with_latency(Duration::from_millis(20))
            .with_response(Routes::CURRENCIES, json!([{"id": "EUR", "name": "Euro"}])),
    );
    let gateway: Arc<dyn FetchGateway> = memory.clone();

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let gateway = gateway.clone();
            tokio::spawn(async move { gateway.get(&Routes::currencies()).await })
        })
        .collect();

    for handle in handles {
        let value = handle.await.unwrap().unwrap();
        assert_eq!(value[0]["id"], "EUR");
    }

    // The adapter itself does no deduplication
    assert_eq!(memory.calls(Routes::CURRENCIES), 5);
    assert_eq!(gateway.name(), "InMemoryGateway");
}

#[tokio::test]
async fn test_pagination_links_through_fetch_url() {
    let next = "https://tsosi.org/api/entities/?page=2&search=open";
    let memory = InMemoryGateway::new().with_response(
        next,
        json!({"count": 3, "next": null, "previous": null, "results": []}),
    );

    let page = memory.fetch_url(next).await.unwrap();
    assert_eq!(page["count"], 3);
    assert_eq!(memory.calls(next), 1);
}

#[tokio::test]
async fn test_http_gateway_reports_transport_failure() {
    let _ = env_logger::try_init();

    // Nothing listens on port 9 (discard) on loopback in the test environment
    let gateway = HttpGateway::new(&GatewayConfig {
        api_root: "http://127.0.0.1:9/api/".to_string(),
        static_root: "http://127.0.0.1:9/".to_string(),
    })
    .unwrap();

    let err = gateway.get(&Routes::entities_all()).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
