//! Event extraction, signature-based merging, and summaries.
//!
//! Everything here is a pure function over its inputs: extraction filters a
//! parsed ABI array down to its event entries, merging appends only events
//! whose signature is not already present, and summarizing derives counts
//! and names from a stored event set. Statelessness keeps the merge
//! idempotent, so re-running extraction with the same or overlapping source
//! files never creates duplicate or lost events.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::abi::{EventRecord, EVENT_ENTRY_TYPE};

/// Placeholder shown in summaries for events that carry no name.
const UNKNOWN_NAME: &str = "Unknown";

/// Filter a parsed ABI array down to its event entries.
///
/// Keeps entries whose `type` equals exactly `"event"`, preserving original
/// relative order and original field content. Entries of any other type are
/// dropped, not reported as errors. An event entry that cannot be converted
/// to a typed record (e.g. a non-string `name`) is skipped with a warning.
pub fn extract_events(abi: &[Value]) -> Vec<EventRecord> {
    let mut events = Vec::new();

    for entry in abi {
        if entry.get("type").and_then(Value::as_str) != Some(EVENT_ENTRY_TYPE) {
            continue;
        }
        match serde_json::from_value::<EventRecord>(entry.clone()) {
            Ok(event) => {
                debug!("found event: {}", event.name.as_deref().unwrap_or(UNKNOWN_NAME));
                events.push(event);
            }
            Err(e) => tracing::warn!("skipping malformed event entry: {}", e),
        }
    }

    info!("extracted {} events from ABI", events.len());
    events
}

/// Merge new events into an existing set, ensuring signature uniqueness.
///
/// Returns a new sequence preserving every entry of `existing` in its
/// original order, followed by every entry of `incoming` whose signature is
/// not already present among `existing` (computed once, up front) and not
/// added earlier in the same call. Duplicates within `incoming` itself
/// collapse to first occurrence.
pub fn merge(existing: &[EventRecord], incoming: Vec<EventRecord>) -> Vec<EventRecord> {
    let mut seen: HashSet<String> = existing.iter().map(EventRecord::signature).collect();

    let mut merged = existing.to_vec();
    let mut added = 0;

    for event in incoming {
        let name = event.name.clone().unwrap_or_else(|| UNKNOWN_NAME.to_string());
        if seen.insert(event.signature()) {
            merged.push(event);
            added += 1;
            debug!("added new event: {}", name);
        } else {
            debug!("skipped duplicate event: {}", name);
        }
    }

    info!("added {} new unique events. Total events: {}", added, merged.len());
    merged
}

/// Deterministic summary of a stored event set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_events: usize,
    pub event_names: Vec<String>,
    pub unique_signatures: usize,
}

/// Derive a [`Summary`] from a stored event set.
///
/// `unique_signatures` is the true distinct count, which can be lower than
/// `total_events` for documents produced outside the merge invariant (e.g.
/// hand-edited files).
pub fn summarize(events: &[EventRecord]) -> Summary {
    let signatures: HashSet<String> = events.iter().map(EventRecord::signature).collect();

    Summary {
        total_events: events.len(),
        event_names: events
            .iter()
            .map(|event| event.name.clone().unwrap_or_else(|| UNKNOWN_NAME.to_string()))
            .collect(),
        unique_signatures: signatures.len(),
    }
}
