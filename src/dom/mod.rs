// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML extraction for form analysis
//!
//! Parses a page with html5ever and keeps only what the analyzer reads:
//! the forms on the page and the `<input>` elements inside each of them.

mod document;
mod element;
mod parser;

pub use document::{Document, FormElement};
pub use element::Element;
pub use parser::parse_html;
