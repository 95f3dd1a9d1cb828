//! The ABI events extraction job.
//!
//! One invocation performs exactly one read of the source, at most one
//! write of a temporary normalized copy, one read-or-create of the target,
//! and one full overwrite of the target. The pipeline is synchronous and
//! assumes at most one concurrent invocation per target file; concurrent
//! runs against the same target can race on the read-modify-write cycle.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::abi::{self, NormalizedSource};
use crate::error::ExtractError;
use crate::merge::{extract_events, merge, summarize, Summary};
use crate::target::TargetDocument;

/// Outcome of one extraction or summary invocation, as handed to the
/// rendering layer. Failures are carried as a message, never a panic.
#[derive(Debug, Serialize)]
pub struct JobResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Newly added events (merge mode) or replaced events (force mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
    pub target_path: PathBuf,
}

/// Extract events from `source_path` into the document at `target_path`.
///
/// With `force` set, the stored events are replaced wholesale with the
/// extraction result; otherwise new events are merged in with signature
/// uniqueness. The updated document is persisted and summarized.
pub fn run_extraction(
    source_path: &Path,
    target_path: &Path,
    force: bool,
    pretty: bool,
) -> JobResult {
    info!(
        "extracting events from {} to {}",
        source_path.display(),
        target_path.display()
    );

    match try_extraction(source_path, target_path, force, pretty) {
        Ok((summary, added)) => JobResult {
            success: true,
            summary: Some(summary),
            error: None,
            added: Some(added),
            source_path: Some(source_path.to_path_buf()),
            target_path: target_path.to_path_buf(),
        },
        Err(e) => {
            error!("error extracting events: {}", e);
            JobResult {
                success: false,
                summary: None,
                error: Some(e.to_string()),
                added: None,
                source_path: Some(source_path.to_path_buf()),
                target_path: target_path.to_path_buf(),
            }
        }
    }
}

/// Summarize the events stored at `target_path` without touching it.
///
/// A missing target is not an error; it summarizes as empty.
pub fn run_summary(target_path: &Path) -> JobResult {
    match TargetDocument::load_or_create(target_path) {
        Ok(document) => JobResult {
            success: true,
            summary: Some(summarize(&document.event_abi)),
            error: None,
            added: None,
            source_path: None,
            target_path: target_path.to_path_buf(),
        },
        Err(e) => {
            error!("error getting summary: {}", e);
            JobResult {
                success: false,
                summary: None,
                error: Some(e.to_string()),
                added: None,
                source_path: None,
                target_path: target_path.to_path_buf(),
            }
        }
    }
}

fn try_extraction(
    source_path: &Path,
    target_path: &Path,
    force: bool,
    pretty: bool,
) -> Result<(Summary, usize), ExtractError> {
    let raw = fs::read_to_string(source_path).map_err(|source| ExtractError::Read {
        path: source_path.to_path_buf(),
        source,
    })?;

    // Best-effort recovery of concatenated compiler outputs. The merged
    // text is staged in a temp file and read back like any other source;
    // a staging failure falls back to the original content.
    let content = match abi::normalize(&raw) {
        NormalizedSource::Original => raw,
        NormalizedSource::Merged(text) => match stage_normalized(&text) {
            Ok(content) => content,
            Err(e) => {
                warn!("normalization skipped due to error: {}", e);
                raw
            }
        },
    };

    let entries = abi::parse_str(&content).map_err(|source| ExtractError::Decode {
        path: source_path.to_path_buf(),
        source,
    })?;
    let incoming = extract_events(&entries);

    let mut document = TargetDocument::load_or_create(target_path)?;
    let added = if force {
        info!("force mode: unique check disabled");
        let replaced = incoming.len();
        document.event_abi = incoming;
        replaced
    } else {
        let existing_len = document.event_abi.len();
        document.event_abi = merge(&document.event_abi, incoming);
        document.event_abi.len() - existing_len
    };

    document.save(target_path, pretty)?;
    Ok((summarize(&document.event_abi), added))
}

/// Write merged array text to a named temp file and read it back, as the
/// downstream parser would read the original file.
fn stage_normalized(text: &str) -> std::io::Result<String> {
    let mut staged = tempfile::Builder::new().suffix(".json").tempfile()?;
    staged.write_all(text.as_bytes())?;
    let content = fs::read_to_string(staged.path())?;
    info!(
        "normalized adjacent arrays into a single array: {}",
        staged.path().display()
    );
    Ok(content)
}
