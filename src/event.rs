//! Prompt-submission event model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single prompt-submission event as delivered by the host editor.
///
/// Only `prompt` is meaningful to the hook; every other key is host-defined
/// metadata (request ids, workspace info, nested structures, nulls) and is
/// flattened through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The user-authored text to augment. Kept as a raw `Value` so a
    /// non-string payload survives a pass-through round-trip unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,

    /// Host-defined fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
