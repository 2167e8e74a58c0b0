// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Human-readable console output

use std::io::{self, Write};

use crate::analyzer::FormField;

/// Line printed between fields
pub const SEPARATOR: &str = "--------------------";

/// Printed when the page yielded no fields
pub const NO_RESULTS_MESSAGE: &str = "No vulnerable form fields found.";

/// Render one field block, separator included
pub fn render_field(field: &FormField) -> String {
    let vulnerabilities = if field.vulnerabilities.is_empty() {
        "None".to_string()
    } else {
        let messages: Vec<String> = field
            .vulnerabilities
            .iter()
            .map(|f| quote(&f.to_string()))
            .collect();
        format!("[{}]", messages.join(", "))
    };

    format!(
        "  Field Name: {}\n    Type: {}\n    Autocomplete: {}\n    Required: {}\n    Vulnerabilities: {}\n{}\n",
        field.name,
        field.field_type,
        field.autocomplete,
        if field.required { "True" } else { "False" },
        vulnerabilities,
        SEPARATOR
    )
}

/// Quote a list item: single quotes, or double quotes when the text
/// contains a single quote and no double quote
fn quote(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Render the full report
pub fn render_report(results: &[FormField]) -> String {
    if results.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let mut out = String::from("Form field analysis results:\n");
    for field in results {
        out.push_str(&render_field(field));
    }
    out
}

/// Write the full report to `out`
pub fn write_report<W: Write>(out: &mut W, results: &[FormField]) -> io::Result<()> {
    out.write_all(render_report(results).as_bytes())?;
    out.flush()
}
