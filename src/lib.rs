//! hish-hook: inject build instructions into editor prompt-submission events.
//!
//! The host editor invokes the `before-submit-prompt` binary with a single
//! JSON event on stdin and reads the (possibly augmented) event back from
//! stdout. The contract is "never fail visibly": whatever happens, the hook
//! writes one parsable JSON document and exits 0, so the host's submission
//! flow is never blocked by a hook malfunction.

pub mod error;
pub mod event;
pub mod hook;

pub use error::HookError;
pub use event::Event;
pub use hook::{HookOutcome, PROMPT_PREFIX, run};
