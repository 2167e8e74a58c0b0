// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Findings raised against a form field

use std::fmt;

use serde::{Serialize, Serializer};

/// Heuristic finding on a single field
///
/// Serializes as its display text so that saved reports carry the
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Finding {
    /// Email field whose value does not look like an address
    MissingEmailValidation,
    /// Number or tel field whose value is not all digits
    MissingNumericValidation,
    /// Autocomplete left on for a sensitive field type
    SensitiveAutocomplete { field_type: String },
    /// Field without the `required` attribute
    MissingRequired,
}

impl Finding {
    /// Short identifier for the finding kind
    pub fn kind(&self) -> &'static str {
        match self {
            Finding::MissingEmailValidation => "missing-email-validation",
            Finding::MissingNumericValidation => "missing-numeric-validation",
            Finding::SensitiveAutocomplete { .. } => "sensitive-autocomplete",
            Finding::MissingRequired => "missing-required",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MissingEmailValidation => f.write_str("Potential missing email validation."),
            Finding::MissingNumericValidation => {
                f.write_str("Potential missing numerical validation.")
            }
            Finding::SensitiveAutocomplete { field_type } => write!(
                f,
                "Autocomplete is enabled for sensitive field of type '{}'.  This is generally discouraged",
                field_type
            ),
            Finding::MissingRequired => f.write_str(
                "Missing 'required' attribute. Consider adding for important fields",
            ),
        }
    }
}

impl Serialize for Finding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
