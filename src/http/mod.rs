// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer
//!
//! Fetches the single page under analysis.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

mod client;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetch budget for one page
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of page HTML
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page body, failing on transport errors and 4xx/5xx statuses
    async fn fetch_html(&self, url: &str) -> Result<String>;
}
