use std::path::PathBuf;
use thiserror::Error;

/// Fatal setup errors raised by the dispatcher itself.
///
/// Per-item operation failures never take this form; they are recorded in the
/// batch report and the shard keeps going. A `DispatchError` means a shard
/// (or a whole dispatch call) could not be set up at all.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Login kept failing until the attempt bound was spent.
    ///
    /// Aborts the owning shard before it processes any item; other shards
    /// keep running on their own sessions.
    #[error("Login failed after {attempts} attempts: {reason}")]
    LoginExhausted { attempts: usize, reason: String },

    /// A directory listing for directory-based upload could not be read.
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for dispatcher operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
