use std::time::Duration;

use reqwest::{Client, IntoUrl, header::HeaderMap};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::{Serialize, de::DeserializeOwned};

use crate::{RequestBuilder, Result};

const DEFAULT_MAX_RETRIES: u32 = 2;

/// Client with request tracing and retries of transient failures.
#[derive(Debug, Clone)]
pub struct HttpClient(ClientWithMiddleware);

#[derive(Debug)]
pub struct HttpClientBuilder {
    client: reqwest::ClientBuilder,
    max_retries: u32,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::new_with(Client::new(), DEFAULT_MAX_RETRIES)
    }

    fn new_with(inner: Client, max_retries: u32) -> Self {
        let client = ClientBuilder::new(inner)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(max_retries),
            ))
            .build();

        Self(client)
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn get(&self, url: impl IntoUrl) -> RequestBuilder {
        RequestBuilder(self.0.get(url))
    }

    /// GETs `url` and deserializes the JSON body, failing on non success statuses.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: impl IntoUrl,
        query: &impl Serialize,
    ) -> Result<T> {
        self.get(url).query(query).send().await?.json().await
    }
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self {
            client: reqwest::ClientBuilder::new(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.client = self.client.default_headers(headers);
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let inner = self.client.build()?;
        Ok(HttpClient::new_with(inner, self.max_retries))
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
