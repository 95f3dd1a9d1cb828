//! Extraction pipeline errors.

use std::path::PathBuf;

/// Errors that can occur while extracting events into a target file.
///
/// Every variant carries the offending path so failures identify which
/// file and which stage failed. All variants are converted into a
/// `success = false` job result at the orchestration boundary; none of
/// them terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read ABI file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in ABI file {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read target file {path}: {source}")]
    TargetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in target file {path}: {source}")]
    TargetDecode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write target file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
