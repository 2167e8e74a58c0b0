// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scan configuration

use std::path::PathBuf;
use std::time::Duration;

use tracing::Level;

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Configuration for a single-page scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Page to analyze
    pub url: String,
    /// Where to save JSON results, if anywhere
    pub output: Option<PathBuf>,
    /// Raise log detail to DEBUG
    pub verbose: bool,
    /// Fetch timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            output: None,
            verbose: false,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScanConfig {
    /// Create a config for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set output path
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Enable/disable verbose logging
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reject URLs that are not http(s) before any network activity
    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(Error::invalid_url_scheme(&self.url));
        }
        Ok(())
    }

    /// Log level implied by the verbose flag
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Default filter directive for this crate
    pub fn log_directive(&self) -> String {
        format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            self.log_level().as_str().to_lowercase()
        )
    }

    /// HTTP client settings for the fetch
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
            ..Default::default()
        }
    }
}
