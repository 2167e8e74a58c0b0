// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Result reporting
//!
//! - Console rendering
//! - JSON persistence

mod console;
mod json;

pub use console::{render_field, render_report, write_report, NO_RESULTS_MESSAGE, SEPARATOR};
pub use json::{save_results, to_json};
