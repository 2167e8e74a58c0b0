// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use super::element::Element;

/// A `<form>` and the `<input>` elements it contains, in document order
#[derive(Debug, Clone)]
pub struct FormElement {
    /// The form element itself
    pub element: Element,
    /// Descendant input elements
    pub inputs: Vec<Element>,
}

impl FormElement {
    /// Create a form with no inputs
    pub fn new(element: Element) -> Self {
        Self {
            element,
            inputs: Vec::new(),
        }
    }

    /// Form action attribute
    pub fn action(&self) -> Option<&str> {
        self.element.get_attribute("action")
    }

    /// HTTP method, uppercased, GET when absent
    pub fn method(&self) -> String {
        self.element
            .get_attribute("method")
            .unwrap_or("GET")
            .to_uppercase()
    }
}

/// Parsed page reduced to its forms
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Document title
    title: String,
    /// Forms in document order
    forms: Vec<FormElement>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Get document title
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn push_form(&mut self, form: FormElement) {
        self.forms.push(form);
    }

    /// Get all forms
    pub fn forms(&self) -> &[FormElement] {
        &self.forms
    }

    /// All inputs across all forms, flattened in document order
    pub fn inputs(&self) -> impl Iterator<Item = &Element> {
        self.forms.iter().flat_map(|f| f.inputs.iter())
    }
}
