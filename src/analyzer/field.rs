// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Normalized form field

use serde::Serialize;

use super::attributes::{FieldAttribute, InputAttributes};
use super::finding::Finding;

/// One `<input>` found inside a `<form>`, with defaults applied
///
/// Field order matches the keys of the saved JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub autocomplete: String,
    pub required: bool,
    pub readonly: bool,
    pub disabled: bool,
    /// `"N/A"` when the input has no value attribute
    pub value: String,
    pub placeholder: String,
    pub vulnerabilities: Vec<Finding>,
}

impl FormField {
    /// Sentinel for a missing name, value or placeholder
    pub const NOT_AVAILABLE: &'static str = "N/A";

    /// Normalize an input tag, with no findings yet
    pub fn from_input<A: InputAttributes + ?Sized>(input: &A) -> Self {
        Self {
            name: input.attribute_or_default(FieldAttribute::Name),
            field_type: input.attribute_or_default(FieldAttribute::Type),
            autocomplete: input.attribute_or_default(FieldAttribute::Autocomplete),
            required: input.has_attribute("required"),
            readonly: input.has_attribute("readonly"),
            disabled: input.has_attribute("disabled"),
            value: input.attribute_or_default(FieldAttribute::Value),
            placeholder: input.attribute_or_default(FieldAttribute::Placeholder),
            vulnerabilities: Vec::new(),
        }
    }

    /// Whether the input carried a value attribute
    pub fn has_value(&self) -> bool {
        self.value != Self::NOT_AVAILABLE
    }

    /// Whether any finding was raised
    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }
}
