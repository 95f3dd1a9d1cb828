//! Normalization of adjacent top-level JSON values.
//!
//! ABI exports are sometimes produced by naively concatenating multiple
//! compiler outputs (`[...][...]`), which is not valid JSON as a whole but
//! is recoverable by decoding one value at a time. Normalization is a
//! best-effort convenience: it never fails, and anything it cannot recover
//! is handed to the downstream parser unchanged.

use serde_json::{Deserializer, Value};
use tracing::debug;

/// Decision produced by [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedSource {
    /// The input is usable as-is: well-formed, unrecoverable, or not made
    /// of top-level arrays.
    Original,
    /// Use this newly materialized array text instead of the input.
    Merged(String),
}

/// Collapse multiple adjacent top-level JSON arrays into a single array.
///
/// The fast path accepts any input that already parses as one complete
/// JSON value, without inspecting its shape. Otherwise the input is
/// decoded value-at-a-time; if that yields two or more values and every
/// one of them is an array, their elements are concatenated in decode
/// order into one flat array.
pub fn normalize(raw: &str) -> NormalizedSource {
    // Fast path: already a single valid JSON value
    if serde_json::from_str::<Value>(raw).is_ok() {
        return NormalizedSource::Original;
    }

    // Streaming parse of multiple top-level JSON values, skipping
    // whitespace between them
    let mut values = Vec::new();
    for item in Deserializer::from_str(raw).into_iter::<Value>() {
        match item {
            Ok(value) => values.push(value),
            // A failed decode aborts normalization; the downstream parser
            // reports the error against the original content
            Err(e) => {
                debug!("normalization aborted mid-stream: {}", e);
                return NormalizedSource::Original;
            }
        }
    }

    if values.len() < 2 || !values.iter().all(Value::is_array) {
        return NormalizedSource::Original;
    }

    let fragments = values.len();
    let mut merged = Vec::new();
    for value in values {
        if let Value::Array(items) = value {
            merged.extend(items);
        }
    }
    debug!(
        "merged {} adjacent top-level arrays into {} elements",
        fragments,
        merged.len()
    );

    match serde_json::to_string(&Value::Array(merged)) {
        Ok(text) => NormalizedSource::Merged(text),
        Err(e) => {
            tracing::warn!("normalization skipped due to error: {}", e);
            NormalizedSource::Original
        }
    }
}
