//! Extraction and summary jobs.
//!
//! Jobs sit between the CLI and the pure pipeline modules: they own the
//! file-system side effects (source read, temp staging, target
//! read-modify-write) and convert every taxonomy error into a structured
//! [`JobResult`] instead of letting it terminate the process.

mod extract;

pub use extract::{run_extraction, run_summary, JobResult};
