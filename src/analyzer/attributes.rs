// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Input attribute access
//!
//! The analyzer only needs two things from a parsed `<input>`: the value of a
//! named attribute and whether a boolean attribute is present. Defaults for
//! missing attributes are spelled out per attribute in [`FieldAttribute`].

use std::collections::HashMap;

use super::field::FormField;
use crate::dom::Element;

/// Attribute lookup on an input-like tag
pub trait InputAttributes {
    /// Value of the attribute, `None` when absent
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Whether the attribute is present, regardless of its value
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Value of a string attribute, falling back to its default
    fn attribute_or_default(&self, attr: FieldAttribute) -> String {
        self.attribute(attr.name())
            .unwrap_or_else(|| attr.default_value())
            .to_string()
    }
}

impl InputAttributes for Element {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        Element::has_attribute(self, name)
    }
}

impl InputAttributes for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// String attributes read from an input, each with its default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAttribute {
    Name,
    Type,
    Autocomplete,
    Value,
    Placeholder,
}

impl FieldAttribute {
    /// HTML attribute name
    pub fn name(&self) -> &'static str {
        match self {
            FieldAttribute::Name => "name",
            FieldAttribute::Type => "type",
            FieldAttribute::Autocomplete => "autocomplete",
            FieldAttribute::Value => "value",
            FieldAttribute::Placeholder => "placeholder",
        }
    }

    /// Value used when the attribute is absent
    pub fn default_value(&self) -> &'static str {
        match self {
            FieldAttribute::Type => "text",
            FieldAttribute::Autocomplete => "off",
            FieldAttribute::Name | FieldAttribute::Value | FieldAttribute::Placeholder => {
                FormField::NOT_AVAILABLE
            }
        }
    }
}
