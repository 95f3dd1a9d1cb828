//! ABI document parsing and event data model.
//!
//! A contract ABI is a JSON array of entry objects discriminated by their
//! `type` field (`"event"`, `"function"`, `"constructor"`, ...). This module
//! holds the typed representation of event entries and the canonical
//! signature derivation used for deduplication.
//!
//! Entries are permissive by construction: `name` and `inputs` are optional
//! and default rather than fail, and every field not interpreted here is
//! preserved verbatim through a flattened remainder map, so stored events
//! round-trip with their original content.

mod normalize;

pub use normalize::{normalize, NormalizedSource};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `type` discriminator value marking an event entry.
pub const EVENT_ENTRY_TYPE: &str = "event";

/// One parameter descriptor of an event's `inputs` list.
///
/// Only the parameter type participates in signature computation; all other
/// fields (`name`, `indexed`, ...) are carried in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ABI entry whose `type` is `"event"`.
///
/// Immutable once extracted. `name` and the ordered `inputs[].type` sequence
/// define the event's identity; everything else (including the `type` tag
/// itself) lives in `extra` and is stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<EventInput>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventRecord {
    /// Canonical identity string: `name(type1,type2,...)`.
    ///
    /// Absent `name` is treated as the empty string and absent `inputs` as
    /// an empty sequence, so a fully anonymous degenerate event yields
    /// `"()"`. Deterministic: depends on nothing but `name` and the ordered
    /// input types.
    pub fn signature(&self) -> String {
        let name = self.name.as_deref().unwrap_or("");
        let types: Vec<&str> = self
            .inputs
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|input| input.param_type.as_deref().unwrap_or(""))
            .collect();
        format!("{}({})", name, types.join(","))
    }
}

/// Parse ABI text into its array of entry values.
///
/// This is the one place where malformed-beyond-recovery input surfaces as
/// a hard error; a top-level value that is not an array fails here too.
pub fn parse_str(content: &str) -> Result<Vec<Value>, serde_json::Error> {
    serde_json::from_str(content)
}
