// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Single-page scan: fetch, parse, analyze

use tracing::{debug, error};

use crate::analyzer::{FieldAnalyzer, FormField};
use crate::config::ScanConfig;
use crate::dom::parse_html;
use crate::error::{Error, Result};
use crate::http::{HttpClient, PageFetcher};

/// Runs the analysis pipeline for one URL
pub struct Scanner<F: PageFetcher = HttpClient> {
    fetcher: F,
    analyzer: FieldAnalyzer,
}

impl Scanner<HttpClient> {
    /// Build a scanner with an HTTP client configured from `config`
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::with_config(config.http_config())?))
    }
}

impl<F: PageFetcher> Scanner<F> {
    /// Create a scanner with the standard rules
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            analyzer: FieldAnalyzer::new(),
        }
    }

    /// Fetch `url` and analyze every form input on it
    ///
    /// Fetch failures are logged here and returned; no analysis is done.
    pub async fn scan(&self, url: &str) -> Result<Vec<FormField>> {
        let html = self.fetch(url).await.map_err(|e| {
            error!(url, error = %e, "Error fetching URL {}: {}", url, e);
            e
        })?;

        let doc = parse_html(&html).map_err(|e| {
            error!(url, error = %e, "Error parsing HTML from {}: {}", url, e);
            e
        })?;

        debug!(url, forms = doc.forms().len(), title = doc.title(), "Parsed page");

        Ok(self.analyzer.analyze_document(&doc, url))
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let html = self.fetcher.fetch_html(url).await?;
        if html.is_empty() {
            return Err(Error::navigation_failed(url, None, "empty response body"));
        }
        Ok(html)
    }
}
