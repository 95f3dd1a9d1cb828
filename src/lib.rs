//! aex - ABI Event Extractor
//!
//! Extracts event entries from smart-contract ABI JSON files and merges
//! them into a persisted target document without introducing duplicates.
//! Tolerates malformed inputs made of multiple concatenated top-level JSON
//! arrays by normalizing them into a single array before parsing.
//!
//! The pipeline: raw bytes → normalize → parse → extract events → merge
//! against the stored set → persist → summarize.

pub mod abi;
pub mod cli;
pub mod config;
pub mod error;
pub mod jobs;
pub mod merge;
pub mod target;
pub mod version;

pub use config::Config;
pub use error::ExtractError;
