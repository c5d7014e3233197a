use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{EndpointDataStore, EndpointSet, InterfaceDocument};
use crate::pipeline::keys::transform_path;

/// Outcome of one collection pass.
#[derive(Debug, Default)]
pub struct Collection {
    pub store: EndpointDataStore,
    pub failed: Vec<String>,
}

pub struct TigerTagScraper {
    spec_url: String,
    token: String,
    api_base: String,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

impl TigerTagScraper {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            spec_url: config.spec_url.clone(),
            token: config.token.clone(),
            api_base: config.api_base.clone(),
            bearer_token: config.bearer_token.clone(),
            client,
        }
    }

    /// Data URL for an endpoint path: the base followed by the path as
    /// declared, leading `/` included.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Downloads and parses the interface description.
    #[instrument(skip(self))]
    pub async fn fetch_interface_document(&self) -> Result<InterfaceDocument, FetchError> {
        debug!(url = %self.spec_url, "Fetching interface description");

        let request = self
            .client
            .get(&self.spec_url)
            .query(&[("token", self.token.as_str())]);

        let document: InterfaceDocument = self.fetch_json(request, &self.spec_url).await?;
        info!(
            paths = document.paths.as_ref().map(|p| p.len()).unwrap_or(0),
            "Interface description loaded"
        );
        Ok(document)
    }

    /// Downloads the JSON payload of one endpoint.
    pub async fn fetch_endpoint(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.endpoint_url(path);
        debug!(url = %url, "Fetching endpoint data");

        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.bearer_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        self.fetch_json(request, &url).await
    }

    /// Fetches every endpoint in order, one request at a time.
    ///
    /// Failures are logged per path and skipped. Each payload is stored
    /// under its transformed key; a later path mapping to the same key
    /// replaces the earlier payload.
    pub async fn collect(&self, endpoints: &EndpointSet) -> Collection {
        let mut collection = Collection::default();

        for path in endpoints.paths() {
            let data = match self.fetch_endpoint(path).await {
                Ok(data) => data,
                Err(FetchError::Status { status, .. }) => {
                    warn!(path = %path, status = status.as_u16(), "Failed to fetch data");
                    collection.failed.push(path.to_string());
                    continue;
                }
                Err(err) => {
                    error!(path = %path, error = %err, "Error fetching data");
                    collection.failed.push(path.to_string());
                    continue;
                }
            };

            let key = transform_path(path);
            if collection.store.insert(key.clone(), data).is_some() {
                warn!(path = %path, key = %key, "Key collision, replacing earlier data");
            }
        }

        collection
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, FetchError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base: Option<&str>) -> Config {
        let base = base.map(str::to_string);
        Config::from_lookup(move |key| match key {
            "TIGERTAG_API_BASE" => base.clone(),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn endpoint_url_keeps_default_double_slash() {
        let scraper = TigerTagScraper::new(&config_with_base(None)).unwrap();
        assert_eq!(
            scraper.endpoint_url("/brand/get/all"),
            "https://api.tigertag.io/api:tigertag//brand/get/all"
        );
    }

    #[test]
    fn endpoint_url_appends_path_verbatim() {
        let config = config_with_base(Some("http://localhost:9000/api:tigertag"));
        let scraper = TigerTagScraper::new(&config).unwrap();
        assert_eq!(
            scraper.endpoint_url("/tag/get/all_by_group"),
            "http://localhost:9000/api:tigertag/tag/get/all_by_group"
        );
    }
}
