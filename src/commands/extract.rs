//! Extract subcommand handler

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use aex::jobs;
use aex::Config;

/// Run the extraction job and render its result.
///
/// Job failures are rendered to stderr and mapped to a failure exit code;
/// they are not propagated as errors.
#[cfg(not(tarpaulin_include))]
pub fn handle_extract(abi_file: &Path, target_file: &Path, force: bool) -> Result<ExitCode> {
    let config = Config::load()?;

    println!(
        "Extracting events from {} to {}...",
        abi_file.display(),
        target_file.display()
    );

    let result = jobs::run_extraction(abi_file, target_file, force, config.pretty_json);

    if !result.success {
        eprintln!(
            "Error extracting events: {}",
            result.error.unwrap_or_else(|| "unknown error".to_string())
        );
        return Ok(ExitCode::FAILURE);
    }

    println!("Successfully processed events!");
    if force {
        println!("Events replaced: {}", result.added.unwrap_or(0));
    } else {
        println!("New events added: {}", result.added.unwrap_or(0));
    }
    if let Some(summary) = &result.summary {
        super::print_summary(summary);
    }

    Ok(ExitCode::SUCCESS)
}
