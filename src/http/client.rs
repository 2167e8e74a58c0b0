// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::response::Response;
use super::{PageFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::{Error, ErrorContext, Result};

/// Redirects followed before the last response is returned as is
const MAX_REDIRECTS: usize = 10;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            "accept",
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        default_headers.insert(
            "accept-language",
            HeaderValue::from_static("en-US,en;q=0.5"),
        );

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers,
        }
    }
}

/// HTTP client used to fetch the page under analysis
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        if config.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .default_headers(config.default_headers.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Execute a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        let budget_ms = self.config.timeout.as_millis() as u64;
        let start = Instant::now();

        let response = self.client.get(url).send().await.with_url(url, budget_ms)?;

        let final_url = response.url().clone();
        if Url::parse(url).map_or(true, |u| u != final_url) {
            debug!(url, final_url = %final_url, "Followed redirect");
        }
        let status = response.status();
        let headers = response.headers().clone();
        // Decodes with the Content-Type charset, UTF-8 when absent
        let body = response.text().await.with_url(url, budget_ms)?;

        debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(Response::new(status, headers, body, final_url))
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?.error_for_status()?;
        if !response.is_html() {
            debug!(url, content_type = ?response.content_type(), "Response is not HTML");
        }
        Ok(response.into_text())
    }
}
