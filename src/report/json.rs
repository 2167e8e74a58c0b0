// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JSON persistence

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::analyzer::FormField;
use crate::error::{Error, Result};

/// Serialize results as a JSON array indented with four spaces
pub fn to_json(results: &[FormField]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut ser)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write results to `path`, replacing any existing file
pub fn save_results(results: &[FormField], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(results)?;

    fs::write(path, json).map_err(|e| Error::persist(path.display().to_string(), e))?;

    info!(path = %path.display(), fields = results.len(), "Results saved to {}", path.display());
    Ok(())
}
