use thiserror::Error;

/// Errors surfaced by remote service implementations.
///
/// This is the whole error vocabulary the engine understands at the service
/// boundary. Login failures feed the session factory's retry loop; operation
/// failures feed the per-item failure policy of the owning shard worker.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service rejected the supplied credentials.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    /// A single upload or delete operation failed.
    #[error("Operation failed: {reason}")]
    OperationFailed { reason: String },

    /// The service throttled the request.
    #[error("Rate limit exceeded: retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    /// The underlying connection dropped mid-session.
    #[error("Connection lost: {reason}")]
    ConnectionLost { reason: String },
}

impl ServiceError {
    /// Create an authentication failure with a descriptive reason.
    pub fn auth(reason: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            reason: reason.into(),
        }
    }

    /// Create an operation failure with a descriptive reason.
    pub fn operation(reason: impl Into<String>) -> Self {
        Self::OperationFailed {
            reason: reason.into(),
        }
    }
}
