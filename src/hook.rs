//! The augmentation pipeline and its two-tier fallback.
//!
//! One invocation reads one event, prepends [`PROMPT_PREFIX`] to its
//! `prompt` field, and writes the result back. Failures select one of two
//! recovery tiers instead of propagating: a processing failure after a
//! successful parse re-emits the original event, and a parse failure emits
//! an empty object.

use std::io::{Read, Write};

use serde_json::{Value, json};

use crate::error::HookError;
use crate::event::Event;

/// Instruction prepended to every prompt before the host submits it.
pub const PROMPT_PREFIX: &str = "运行php和docker和mysql都必须通过mcp执行。 ";

/// What one invocation decided to write back.
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    /// The prompt was prefixed; emit the augmented event.
    Augmented(Event),
    /// Parse succeeded but the prompt could not be augmented; emit the
    /// original event unchanged.
    PassThrough(Event),
    /// The input never became an event; emit an empty object.
    Empty,
}

/// Read one event from `reader` and decide the outcome.
///
/// Infallible by contract: a read or parse failure collapses to
/// [`HookOutcome::Empty`], and an event whose `prompt` is present but not a
/// string passes through unchanged.
pub fn process(reader: &mut impl Read) -> HookOutcome {
    match read_event(reader) {
        Ok(event) => augment(event),
        Err(_) => HookOutcome::Empty,
    }
}

fn read_event(reader: &mut impl Read) -> Result<Event, HookError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Prefix the prompt, treating an absent prompt as empty text.
///
/// A present-but-non-string prompt cannot be prefixed; the event is handed
/// back as-is rather than coerced, matching what the host would have sent
/// without the hook installed.
fn augment(mut event: Event) -> HookOutcome {
    let original = match &event.prompt {
        None => "",
        Some(Value::String(text)) => text.as_str(),
        Some(_) => return HookOutcome::PassThrough(event),
    };

    let augmented = format!("{PROMPT_PREFIX}{original}");
    event.prompt = Some(Value::String(augmented));
    HookOutcome::Augmented(event)
}

/// Serialize the outcome to `writer` as a single compact JSON document.
pub fn write_outcome(outcome: &HookOutcome, writer: &mut impl Write) -> Result<(), HookError> {
    match outcome {
        HookOutcome::Augmented(event) | HookOutcome::PassThrough(event) => {
            serde_json::to_writer(writer, event)?;
        }
        HookOutcome::Empty => {
            serde_json::to_writer(writer, &json!({}))?;
        }
    }
    Ok(())
}

/// Run the whole pipeline: read, augment, write.
///
/// Even a write-side failure is swallowed after one last attempt to hand the
/// host an empty object, so the process can always exit 0.
pub fn run(reader: &mut impl Read, writer: &mut impl Write) -> HookOutcome {
    let outcome = process(reader);
    if write_outcome(&outcome, writer).is_err() {
        let _ = writer.write_all(b"{}");
    }
    outcome
}
