// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Field-level heuristic rules
//!
//! Each input is normalized into a [`FormField`] and checked, in order, for:
//!
//! 1. an email value that does not look like an address
//! 2. otherwise, a number/tel value that is not all digits
//! 3. autocomplete left on for a sensitive type
//! 4. a missing `required` attribute

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::attributes::InputAttributes;
use super::field::FormField;
use super::finding::Finding;
use crate::dom::{Document, FormElement};

lazy_static! {
    /// Anchored at the start only; trailing text after the domain is accepted
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap();

    /// Decimal digits (`Nd`) plus the Numeric_Type=Digit code points:
    /// superscripts, subscripts, circled and parenthesized digits
    static ref DIGITS_PATTERN: Regex = Regex::new(concat!(
        r"\A[\p{Nd}",
        r"\x{B2}-\x{B3}\x{B9}\x{1369}-\x{1371}\x{19DA}",
        r"\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}",
        r"\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}",
        r"\x{24EA}\x{24F5}-\x{24FD}\x{24FF}",
        r"\x{2776}-\x{277E}\x{2780}-\x{2788}\x{278A}-\x{2792}",
        r"\x{10A40}-\x{10A43}\x{10E60}-\x{10E68}\x{11052}-\x{1105A}\x{1F100}-\x{1F10A}",
        r"]+\z"
    ))
    .unwrap();
}

/// Heuristic analyzer for form inputs
#[derive(Debug, Clone)]
pub struct FieldAnalyzer {
    /// Types checked against the email pattern
    email_types: Vec<String>,
    /// Types whose value must be all digits
    numeric_types: Vec<String>,
    /// Types where autocomplete should be off
    sensitive_types: Vec<String>,
    /// Types that never need `required`
    required_exempt_types: Vec<String>,
}

impl Default for FieldAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldAnalyzer {
    /// Create an analyzer with the standard rule tables
    pub fn new() -> Self {
        Self {
            email_types: vec!["email".to_string()],
            numeric_types: vec!["number".to_string(), "tel".to_string()],
            sensitive_types: vec![
                "password".to_string(),
                "credit-card".to_string(),
                "cvv".to_string(),
            ],
            required_exempt_types: vec![
                "hidden".to_string(),
                "submit".to_string(),
                "button".to_string(),
            ],
        }
    }

    /// Analyze every input of a parsed document
    pub fn analyze_document(&self, doc: &Document, source_url: &str) -> Vec<FormField> {
        self.analyze(doc.forms(), source_url)
    }

    /// Analyze the inputs of each form, flattened in document order
    ///
    /// Returns an empty list, with a warning, when there are no forms.
    pub fn analyze(&self, forms: &[FormElement], source_url: &str) -> Vec<FormField> {
        if forms.is_empty() {
            warn!(url = source_url, "No forms found on {}", source_url);
            return Vec::new();
        }

        debug!(url = source_url, forms = forms.len(), "Analyzing forms");

        forms
            .iter()
            .flat_map(|form| {
                debug!(
                    url = source_url,
                    action = form.action().unwrap_or_default(),
                    method = %form.method(),
                    inputs = form.inputs.len(),
                    "Form"
                );
                form.inputs.iter()
            })
            .map(|input| self.analyze_input(input, source_url))
            .collect()
    }

    /// Normalize and check a single input
    pub fn analyze_input<A: InputAttributes + ?Sized>(
        &self,
        input: &A,
        source_url: &str,
    ) -> FormField {
        let mut field = FormField::from_input(input);
        field.vulnerabilities = self.check(&field);

        if field.is_vulnerable() {
            debug!(
                field = %field.name,
                findings = ?field.vulnerabilities.iter().map(Finding::kind).collect::<Vec<_>>(),
                "Field findings"
            );
            warn!(
                url = source_url,
                field = %field.name,
                "Potential vulnerabilities found in field '{}' on {}",
                field.name,
                source_url
            );
        }

        field
    }

    /// Run the rules against a normalized field, in rule order
    pub fn check(&self, field: &FormField) -> Vec<Finding> {
        let mut findings = Vec::new();
        let ty = field.field_type.as_str();

        if is_one_of(&self.email_types, ty)
            && field.has_value()
            && !EMAIL_PATTERN.is_match(&field.value)
        {
            findings.push(Finding::MissingEmailValidation);
        } else if is_one_of(&self.numeric_types, ty)
            && field.has_value()
            && !is_all_digits(&field.value)
        {
            findings.push(Finding::MissingNumericValidation);
        }

        if is_one_of(&self.sensitive_types, ty) && field.autocomplete != "off" {
            findings.push(Finding::SensitiveAutocomplete {
                field_type: field.field_type.clone(),
            });
        }

        if !is_one_of(&self.required_exempt_types, ty) && !field.required {
            findings.push(Finding::MissingRequired);
        }

        findings
    }
}

fn is_one_of(types: &[String], ty: &str) -> bool {
    types.iter().any(|t| t == ty)
}

/// Non-empty and every character a Unicode digit
fn is_all_digits(value: &str) -> bool {
    DIGITS_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse_html, Element};

    fn input(attrs: &[(&str, &str)]) -> Element {
        attrs
            .iter()
            .fold(Element::new(), |el, (k, v)| el.with_attribute(*k, *v))
    }

    fn findings(attrs: &[(&str, &str)]) -> Vec<String> {
        FieldAnalyzer::new()
            .analyze_input(&input(attrs), "https://example.com")
            .vulnerabilities
            .iter()
            .map(|f| f.to_string())
            .collect()
    }

    const EMAIL: &str = "Potential missing email validation.";
    const NUMERIC: &str = "Potential missing numerical validation.";
    const REQUIRED: &str = "Missing 'required' attribute. Consider adding for important fields";

    #[test]
    fn test_password_autocomplete_on() {
        assert_eq!(
            findings(&[("type", "password"), ("autocomplete", "on"), ("required", "")]),
            vec!["Autocomplete is enabled for sensitive field of type 'password'.  This is generally discouraged"]
        );
    }

    #[test]
    fn test_bad_email_not_required() {
        assert_eq!(
            findings(&[("type", "email"), ("value", "bad-email")]),
            vec![EMAIL, REQUIRED]
        );
    }

    #[test]
    fn test_hidden_is_exempt() {
        assert!(findings(&[("type", "hidden")]).is_empty());
    }

    #[test]
    fn test_tel_with_letters() {
        assert_eq!(
            findings(&[("type", "tel"), ("value", "12a3"), ("autocomplete", "off"), ("required", "")]),
            vec![NUMERIC]
        );
    }

    #[test]
    fn test_email_without_value_skips_format_check() {
        assert_eq!(findings(&[("type", "email"), ("required", "")]), Vec::<String>::new());
        // The literal sentinel counts as "no value" too
        assert_eq!(
            findings(&[("type", "email"), ("value", "N/A"), ("required", "")]),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_empty_number_value_triggers() {
        assert_eq!(
            findings(&[("type", "number"), ("value", ""), ("required", "")]),
            vec![NUMERIC]
        );
    }

    #[test]
    fn test_valid_values_pass() {
        assert!(findings(&[("type", "email"), ("value", "a@b.io"), ("required", "")]).is_empty());
        assert!(findings(&[("type", "number"), ("value", "0042"), ("required", "")]).is_empty());
        assert!(findings(&[("type", "tel"), ("value", "5551234"), ("required", "")]).is_empty());
    }

    #[test]
    fn test_email_pattern_anchored_at_start_only() {
        let analyzer = FieldAnalyzer::new();
        let field = |v: &str| {
            let mut f = FormField::from_input(&input(&[("type", "email"), ("required", "")]));
            f.value = v.to_string();
            analyzer.check(&f)
        };

        assert!(field("user@example.com trailing").is_empty());
        assert_eq!(field("@user@example.com"), vec![Finding::MissingEmailValidation]);
        assert_eq!(field("user@localhost"), vec![Finding::MissingEmailValidation]);
    }

    #[test]
    fn test_unicode_digits_accepted() {
        assert!(findings(&[("type", "number"), ("value", "١٢٣"), ("required", "")]).is_empty());
        assert!(findings(&[("type", "tel"), ("value", "²"), ("required", "")]).is_empty());
        assert!(findings(&[("type", "tel"), ("value", "①⑵⒊"), ("required", "")]).is_empty());
    }

    #[test]
    fn test_numeric_but_not_digit_rejected() {
        assert_eq!(
            findings(&[("type", "number"), ("value", "½"), ("required", "")]),
            vec![NUMERIC]
        );
        assert_eq!(
            findings(&[("type", "number"), ("value", "Ⅻ"), ("required", "")]),
            vec![NUMERIC]
        );
        assert_eq!(
            findings(&[("type", "number"), ("value", "12 3"), ("required", "")]),
            vec![NUMERIC]
        );
    }

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits("0042"));
        assert!(is_all_digits("٣"));
        assert!(is_all_digits("🄀"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("-1"));
        assert!(!is_all_digits("1.5"));
        assert!(!is_all_digits("123\n"));
    }

    #[test]
    fn test_all_rules_in_order() {
        let analyzer = FieldAnalyzer::new();
        let mut field = FormField::from_input(&input(&[("type", "cvv"), ("autocomplete", "cc-csc")]));
        field.vulnerabilities = analyzer.check(&field);

        assert_eq!(
            field.vulnerabilities,
            vec![
                Finding::SensitiveAutocomplete {
                    field_type: "cvv".to_string()
                },
                Finding::MissingRequired,
            ]
        );
    }

    #[test]
    fn test_default_type_is_text() {
        assert_eq!(findings(&[("name", "q")]), vec![REQUIRED]);
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        assert_eq!(
            findings(&[("type", "PASSWORD"), ("autocomplete", "on"), ("required", "")]),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_fixed_sensitive_types() {
        for ty in ["password", "credit-card", "cvv"] {
            assert_eq!(
                findings(&[("type", ty), ("required", "")]),
                Vec::<String>::new(),
                "{ty} with autocomplete defaulted to off"
            );
            assert_eq!(findings(&[("type", ty), ("autocomplete", "on"), ("required", "")]).len(), 1);
        }
        assert!(findings(&[("type", "text"), ("autocomplete", "on"), ("required", "")]).is_empty());
    }

    #[test]
    fn test_submit_and_button_exempt() {
        assert!(findings(&[("type", "submit")]).is_empty());
        assert!(findings(&[("type", "button")]).is_empty());
    }

    #[test]
    fn test_no_forms() {
        let doc = parse_html("<html><body><input name=\"q\"></body></html>").unwrap();
        let results = FieldAnalyzer::new().analyze_document(&doc, "https://example.com");
        assert!(results.is_empty());
    }

    #[test]
    fn test_document_order_and_idempotence() {
        let html = r#"
            <form>
                <input type="email" name="email" value="nope">
                <input type="hidden" name="csrf" value="x">
            </form>
            <form>
                <input type="password" name="pw" autocomplete="on" required>
            </form>
        "#;
        let doc = parse_html(html).unwrap();
        let analyzer = FieldAnalyzer::new();

        let first = analyzer.analyze_document(&doc, "https://example.com");
        let second = analyzer.analyze_document(&doc, "https://example.com");

        let names: Vec<_> = first.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["email", "csrf", "pw"]);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
