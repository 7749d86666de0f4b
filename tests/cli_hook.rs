//! End-to-end tests driving the compiled hook binary over stdin/stdout.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

use hish_hook::PROMPT_PREFIX;

/// Feed `input` to the hook and return its stdout parsed as JSON.
fn run_hook(input: &str) -> Value {
    let assert = hook_cmd().write_stdin(input).assert().success();
    serde_json::from_slice(&assert.get_output().stdout).expect("hook emitted invalid JSON")
}

fn hook_cmd() -> Command {
    Command::cargo_bin("before-submit-prompt").expect("Failed to locate hook binary")
}

#[test]
fn augments_prompt_and_stays_silent_on_stderr() {
    hook_cmd()
        .write_stdin(r#"{"prompt":"hello"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(PROMPT_PREFIX).and(predicate::str::contains("hello")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn passes_host_metadata_through() {
    let output = run_hook(r#"{"prompt":"x","id":42,"meta":{"a":1}}"#);
    assert_eq!(
        output,
        json!({
            "prompt": format!("{PROMPT_PREFIX}x"),
            "id": 42,
            "meta": {"a": 1},
        })
    );
}

#[test]
fn adds_prompt_when_event_has_none() {
    let output = run_hook(r#"{"id":1}"#);
    assert_eq!(output, json!({"id": 1, "prompt": PROMPT_PREFIX}));
}

#[test]
fn malformed_input_exits_zero_with_empty_object() {
    hook_cmd()
        .write_stdin("not json at all")
        .assert()
        .success()
        .stdout("{}");
}

#[test]
fn empty_stdin_exits_zero_with_empty_object() {
    hook_cmd().assert().success().stdout("{}");
}

#[test]
fn double_invocation_double_prefixes() {
    let first = run_hook(r#"{"prompt":"p"}"#);
    let second = run_hook(&first.to_string());
    assert_eq!(
        second,
        json!({"prompt": format!("{PROMPT_PREFIX}{PROMPT_PREFIX}p")})
    );
}

#[test]
fn non_string_prompt_is_passed_through() {
    let output = run_hook(r#"{"prompt":5,"id":1}"#);
    assert_eq!(output, json!({"prompt": 5, "id": 1}));
}

#[test]
fn top_level_array_yields_empty_object() {
    assert_eq!(run_hook("[1,2]"), json!({}));
}
