// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};

/// HTTP response representation
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body, decoded using the charset of the Content-Type header
    pub body: String,
    /// Final URL (after redirects)
    pub url: Url,
}

impl Response {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: String, url: Url) -> Self {
        Self {
            status,
            headers,
            body,
            url,
        }
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Fail with `NavigationFailed` on a 4xx or 5xx status
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_client_error() || self.is_server_error() {
            let reason = self
                .status
                .canonical_reason()
                .unwrap_or("HTTP error")
                .to_string();
            return Err(Error::navigation_failed(
                self.url.as_str(),
                Some(self.status_code()),
                format!("{} {}", self.status_code(), reason),
            ));
        }
        Ok(self)
    }

    /// Take the decoded body
    pub fn into_text(self) -> String {
        self.body
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Check if content type is HTML
    pub fn is_html(&self) -> bool {
        self.content_type()
            .map(|ct| ct.contains("text/html") || ct.contains("application/xhtml"))
            .unwrap_or(false)
    }
}
