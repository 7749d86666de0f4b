use std::io;

use thiserror::Error;

/// Library-wide error type for hook operations.
///
/// Every variant is absorbed into a recovery tier before the process exits;
/// nothing here ever reaches the host as a non-zero status.
#[derive(Debug, Error)]
pub enum HookError {
    /// Underlying I/O failure while reading or writing the event stream.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Malformed JSON on the way in, or an unserializable value on the way out.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
