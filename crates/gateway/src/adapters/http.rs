//! HTTP adapter - fetches JSON from the TSOSI API with reqwest

use crate::config::GatewayConfig;
use crate::error::ConfigError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use tsosi_ports::{FetchError, FetchGateway, FetchRequest, FetchResult, FetchTarget};
use url::Url;

/// Gateway backed by a shared reqwest client
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    api_root: Url,
    static_root: Url,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: Client::new(),
            api_root: config.api_url()?,
            static_root: config.static_url()?,
        })
    }

    /// Absolute URL of a request. API requests always ask for JSON.
    pub fn url_for(&self, request: &FetchRequest) -> FetchResult<Url> {
        let root = match request.target {
            FetchTarget::Api => &self.api_root,
            FetchTarget::Static => &self.static_root,
        };
        let mut url = root
            .join(&request.route)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", request.route, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
            if request.target == FetchTarget::Api {
                pairs.append_pair("format", "json");
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> FetchResult {
        debug!("querying URL: \"{}\"", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!("Error while querying API with url: {}", url);
                FetchError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} while querying {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json().await.map_err(|e| {
            warn!("Invalid JSON body from {}", url);
            FetchError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl FetchGateway for HttpGateway {
    async fn get(&self, request: &FetchRequest) -> FetchResult {
        let url = self.url_for(request)?;
        self.fetch(url).await
    }

    async fn fetch_url(&self, url: &str) -> FetchResult {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        self.fetch(url).await
    }

    fn name(&self) -> &str {
        "HttpGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Routes;

    fn gateway() -> HttpGateway {
        HttpGateway::new(&GatewayConfig {
            api_root: "https://tsosi.org/api".to_string(),
            static_root: "https://tsosi.org/".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_api_url_asks_for_json() {
        let url = gateway().url_for(&Routes::entities_all()).unwrap();
        assert_eq!(url.as_str(), "https://tsosi.org/api/entities/all/?format=json");
    }

    #[test]
    fn test_api_url_keeps_query_order() {
        let url = gateway()
            .url_for(&Routes::transfers(Some("6f1c2b8e")))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://tsosi.org/api/transfers/all/?entity_id=6f1c2b8e&format=json"
        );
    }

    #[test]
    fn test_static_url_has_no_query() {
        let url = gateway().url_for(&Routes::countries()).unwrap();
        assert_eq!(url.as_str(), "https://tsosi.org/static_data/country.json");
    }

    #[tokio::test]
    async fn test_invalid_absolute_url() {
        let err = gateway().fetch_url("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
