// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the form field analyzer
//!
//! Every failure carries the URL or path it concerns so that the top-level
//! run can report it without extra bookkeeping.

use thiserror::Error;

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Target URL does not use http:// or https://
    #[error("URL must start with http:// or https://")]
    InvalidUrlScheme { url: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Timeout error
    #[error("Operation timed out after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
        url: Option<String>,
    },

    /// Page could not be retrieved
    #[error("Navigation failed to {url}: {reason}")]
    NavigationFailed {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    /// Saving results failed
    #[error("Failed to save results to {path}: {reason}")]
    Persist { path: String, reason: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid scheme error
    pub fn invalid_url_scheme(url: impl Into<String>) -> Self {
        Error::InvalidUrlScheme { url: url.into() }
    }

    /// Create a navigation error with full context
    pub fn navigation_failed(
        url: impl Into<String>,
        status: Option<u16>,
        reason: impl Into<String>,
    ) -> Self {
        Error::NavigationFailed {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Create a timeout error with URL
    pub fn timeout_with_url(
        operation: impl Into<String>,
        duration_ms: u64,
        url: impl Into<String>,
    ) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration_ms,
            url: Some(url.into()),
        }
    }

    /// Create a persistence error
    pub fn persist(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::Persist {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this error means the page could not be fetched
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Timeout { .. } | Error::NavigationFailed { .. }
        )
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::NavigationFailed { status, .. } => *status,
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::InvalidUrlScheme { url } => Some(url),
            Error::NavigationFailed { url, .. } => Some(url),
            Error::Timeout { url: Some(u), .. } => Some(u),
            _ => None,
        }
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Attach the URL being fetched, turning transport timeouts into `Timeout`
    fn with_url(self, url: &str, budget_ms: u64) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn with_url(self, url: &str, budget_ms: u64) -> Result<T> {
        self.map_err(|e| match e.into() {
            Error::Http(err) if err.is_timeout() => {
                Error::timeout_with_url("fetch", budget_ms, url)
            }
            Error::Timeout {
                operation,
                duration_ms,
                ..
            } => Error::Timeout {
                operation,
                duration_ms,
                url: Some(url.to_string()),
            },
            other => other,
        })
    }
}
