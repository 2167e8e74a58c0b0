// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Form field analysis
//!
//! - Attribute access with per-attribute defaults
//! - Field normalization
//! - Heuristic rules producing findings

mod attributes;
mod field;
mod finding;
mod rules;

pub use attributes::{FieldAttribute, InputAttributes};
pub use field::FormField;
pub use finding::Finding;
pub use rules::FieldAnalyzer;
