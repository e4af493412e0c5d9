use super::{parse_payload, CatalogSource};
use crate::config::ViewerConfig;
use crate::error::{EverydogError, Result};
use crate::model::BreedRecord;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-api-key";

/// The Dog API breed list over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: None,
        })
    }

    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        let source = Self::new(config.endpoint.clone(), config.timeout())?;
        Ok(match &config.api_key {
            Some(key) => source.with_api_key(key.clone()),
            None => source,
        })
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into()).filter(|k: &String| !k.is_empty());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<BreedRecord>> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, endpoint = %self.endpoint, "catalog request rejected");
            return Err(EverydogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "catalog response received");
        parse_payload(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
