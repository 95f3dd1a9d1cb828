//! The persisted target document.
//!
//! A target file accumulates deduplicated events across extraction runs:
//! `{ "_id": ..., "addresses": {...}, "event_abi": [...] }`. A missing file
//! is not an error; the document is synthesized in memory with an `_id`
//! derived from the filename and empty collections. Persistence is a full
//! overwrite, staged through a temp file in the target's directory and
//! renamed into place so an interrupted write never truncates a valid
//! document.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::abi::EventRecord;
use crate::error::ExtractError;

/// The on-disk document shape.
///
/// `addresses` and any fields beyond the known three are carried through a
/// read-modify-write cycle untouched; only `event_abi` is ever replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDocument {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub addresses: Map<String, Value>,
    // Empty sequence when the stored document has no event_abi field
    #[serde(default)]
    pub event_abi: Vec<EventRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TargetDocument {
    /// Empty document whose `_id` is the target filename without extension.
    pub fn new_for_path(path: &Path) -> Self {
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            id,
            addresses: Map::new(),
            event_abi: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Load the document at `path`, or synthesize an empty one if the file
    /// does not exist. A file that exists but holds invalid JSON is an
    /// error, distinct from absence.
    pub fn load_or_create(path: &Path) -> Result<Self, ExtractError> {
        if !path.exists() {
            warn!("target file not found: {}. Creating new structure.", path.display());
            return Ok(Self::new_for_path(path));
        }

        let content = fs::read_to_string(path).map_err(|source| ExtractError::TargetRead {
            path: path.to_path_buf(),
            source,
        })?;
        let document =
            serde_json::from_str(&content).map_err(|source| ExtractError::TargetDecode {
                path: path.to_path_buf(),
                source,
            })?;

        info!("loaded target file: {}", path.display());
        Ok(document)
    }

    /// Overwrite `path` with the full serialization of this document.
    ///
    /// The write goes to a temp file in the same directory first and is
    /// renamed over the target, so the caller observes either the old or
    /// the new document, never a partial one.
    pub fn save(&self, path: &Path, pretty: bool) -> Result<(), ExtractError> {
        let write_error = |source: std::io::Error| ExtractError::Write {
            path: path.to_path_buf(),
            source,
        };

        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(|source| write_error(source.into()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        staged.write_all(json.as_bytes()).map_err(write_error)?;
        staged
            .persist(path)
            .map_err(|persist| write_error(persist.error))?;

        info!(
            "saved {} events to {}",
            self.event_abi.len(),
            path.display()
        );
        Ok(())
    }
}
