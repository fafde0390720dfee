use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::error::{FetchError, FetchResult};

/// Which root a route is relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchTarget {
    /// The TSOSI JSON API
    Api,
    /// Static files served next to the client (e.g. the country list)
    Static,
}

/// A read-only request for a JSON resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    pub target: FetchTarget,
    /// Route relative to the target root, without leading slash
    pub route: String,
    pub query: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn api(route: impl AsRef<str>) -> Self {
        Self::new(FetchTarget::Api, route)
    }

    pub fn static_file(route: impl AsRef<str>) -> Self {
        Self::new(FetchTarget::Static, route)
    }

    fn new(target: FetchTarget, route: impl AsRef<str>) -> Self {
        Self {
            target,
            route: route.as_ref().trim_start_matches('/').to_string(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for FetchRequest {
    /// `route?k=v&...`, query pairs in insertion order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// Port for fetching JSON resources
///
/// Implementations convert every transport, status and parse failure into
/// a `FetchError`; they never panic and never retry.
#[async_trait]
pub trait FetchGateway: Send + Sync {
    /// Fetch a resource relative to one of the configured roots
    async fn get(&self, request: &FetchRequest) -> FetchResult;

    /// Fetch an absolute URL (e.g. a pagination link handed out by the API)
    async fn fetch_url(&self, url: &str) -> FetchResult;

    /// Gateway name for logging
    fn name(&self) -> &str {
        "FetchGateway"
    }
}

/// Decode a fetched JSON value into a typed payload
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> FetchResult<T> {
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    // Ensure the port is object-safe
    fn _assert_gateway_object_safe(_: &dyn FetchGateway) {}

    #[test]
    fn test_request_display() {
        let request = FetchRequest::api("/transfers/all/").with_query("entity_id", "abc");
        assert_eq!(request.route, "transfers/all/");
        assert_eq!(request.to_string(), "transfers/all/?entity_id=abc");

        let request = FetchRequest::static_file("static_data/country.json");
        assert_eq!(request.target, FetchTarget::Static);
        assert_eq!(request.to_string(), "static_data/country.json");
    }

    #[test]
    fn test_decode_error() {
        #[derive(Debug, Deserialize)]
        struct Named {
            name: String,
        }

        let ok: Named = decode(serde_json::json!({"name": "x"})).unwrap();
        assert_eq!(ok.name, "x");

        let err = decode::<Named>(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
