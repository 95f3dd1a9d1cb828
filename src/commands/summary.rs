//! Summary subcommand handler

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use aex::jobs;

/// Print the summary of the events stored in a target file.
#[cfg(not(tarpaulin_include))]
pub fn handle_summary(target_file: &Path) -> Result<ExitCode> {
    let result = jobs::run_summary(target_file);

    if !result.success {
        eprintln!(
            "Error getting summary: {}",
            result.error.unwrap_or_else(|| "unknown error".to_string())
        );
        return Ok(ExitCode::FAILURE);
    }

    println!("Summary of {}", target_file.display());
    if let Some(summary) = &result.summary {
        super::print_summary(summary);
    }

    Ok(ExitCode::SUCCESS)
}
