use async_trait::async_trait;
use merchant_core::{BoxError, ProductSubmitter, TaxonomySource};
use merchant_shared::Masked;
use merchant_store::app_config::GoogleConfig;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ClientError;

const MAX_ERROR_BODY: usize = 512;

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

async fn read_success_body(resp: reqwest::Response) -> Result<String, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            body: truncate_body(&text),
        });
    }
    Ok(text)
}

/// Content API client for the `products` collection of one merchant
pub struct ContentApiClient {
    http: reqwest::Client,
    products_url: String,
    access_token: Masked<String>,
}

impl ContentApiClient {
    pub fn new(config: &GoogleConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &GoogleConfig) -> Self {
        Self {
            http,
            products_url: config.products_url(),
            access_token: config.access_token.clone(),
        }
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    async fn insert_product(&self, payload: &Value) -> Result<Value, ClientError> {
        if self.access_token.expose().trim().is_empty() {
            return Err(ClientError::MissingToken);
        }

        debug!("POST {} (token {})", self.products_url, self.access_token);
        let resp = self
            .http
            .post(&self.products_url)
            .bearer_auth(self.access_token.expose())
            .json(payload)
            .send()
            .await?;

        let text = read_success_body(resp).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ProductSubmitter for ContentApiClient {
    async fn submit_product(&self, payload: &Value) -> Result<Value, BoxError> {
        Ok(self.insert_product(payload).await?)
    }
}

/// Downloads the plain-text taxonomy published by Google
pub struct HttpTaxonomySource {
    http: reqwest::Client,
    url: String,
}

impl HttpTaxonomySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    async fn download(&self) -> Result<String, ClientError> {
        info!("Fetching Google taxonomy from {}", self.url);
        let resp = self.http.get(&self.url).send().await?;
        read_success_body(resp).await
    }
}

#[async_trait]
impl TaxonomySource for HttpTaxonomySource {
    async fn fetch_taxonomy(&self) -> Result<String, BoxError> {
        Ok(self.download().await?)
    }
}
