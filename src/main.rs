// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Form Field Analyzer CLI
//!
//! Fetches one page and reports risky form field configurations.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use form_field_analyzer::report::{self, NO_RESULTS_MESSAGE};
use form_field_analyzer::{ScanConfig, Scanner};

/// Identifies and analyzes HTML form fields for potential vulnerabilities.
#[derive(Parser)]
#[command(name = "form-field-analyzer")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version)]
#[command(about = "Identifies and analyzes HTML form fields for potential vulnerabilities.", long_about = None)]
struct Cli {
    /// The URL to analyze
    url: String,

    /// Output file to save the results (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> ScanConfig {
        let config = ScanConfig::new(self.url).verbose(self.verbose);
        match self.output {
            Some(path) => config.output(path),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    if let Err(e) = config.validate() {
        println!("Error: {}", e);
        return ExitCode::from(1);
    }

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialize logging: {:#}", e);
        return ExitCode::from(1);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to start runtime");
            return ExitCode::from(1);
        }
    };

    runtime.block_on(run(&config))
}

fn init_logging(config: &ScanConfig) -> anyhow::Result<()> {
    let directive: Directive = config
        .log_directive()
        .parse()
        .context("invalid log directive")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
}

async fn run(config: &ScanConfig) -> ExitCode {
    let scanner = match Scanner::from_config(config) {
        Ok(s) => s,
        Err(e) => {
            error!(url = %config.url, error = %e, "Failed to create HTTP client");
            return ExitCode::from(1);
        }
    };

    let results = match scanner.scan(&config.url).await {
        Ok(results) => results,
        Err(_) => {
            // Already logged by the scanner
            println!("Failed to fetch HTML content. Check the URL and your network connection.");
            return ExitCode::SUCCESS;
        }
    };

    if results.is_empty() {
        println!("{}", NO_RESULTS_MESSAGE);
        return ExitCode::SUCCESS;
    }

    if let Err(e) = report::write_report(&mut io::stdout().lock(), &results) {
        error!(url = %config.url, error = %e, "Failed to write report");
    }

    if let Some(ref path) = config.output {
        if let Err(e) = report::save_results(&results, path) {
            error!(url = %config.url, error = %e, "Error saving results to {}: {}", path.display(), e);
        }
    }

    ExitCode::SUCCESS
}
