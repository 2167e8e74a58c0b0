// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Form Field Analyzer
//!
//! Fetches a single page, extracts the `<input>` elements of every `<form>`
//! and flags risky field configurations:
//!
//! - Email values that do not look like an address
//! - Number/tel values that are not all digits
//! - Autocomplete enabled on password, credit-card and cvv fields
//! - Fields missing the `required` attribute
//!
//! ## Example
//!
//! ```rust,no_run
//! use form_field_analyzer::{ScanConfig, Scanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScanConfig::new("https://example.com/login");
//!     config.validate()?;
//!
//!     let scanner = Scanner::from_config(&config)?;
//!     for field in scanner.scan(&config.url).await? {
//!         println!("{}: {:?}", field.name, field.vulnerabilities);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod config;
pub mod dom;
pub mod error;
pub mod http;
pub mod report;
pub mod scanner;

// Analysis
pub use analyzer::{FieldAnalyzer, FieldAttribute, Finding, FormField, InputAttributes};

// Configuration
pub use config::ScanConfig;

// DOM
pub use dom::{parse_html, Document, Element, FormElement};

// Errors
pub use error::{Error, ErrorContext, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, PageFetcher, Response};

// Reporting
pub use report::{render_report, save_results, write_report};

// Scanning
pub use scanner::Scanner;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
