use super::errors::ServiceError;
use crate::auth::Credentials;
use async_trait::async_trait;
use std::path::Path;

/// Trait for remote API clients that can open authenticated sessions.
///
/// Implementations own connection details (endpoints, HTTP client, protocol
/// version) and hand out one [`RemoteSession`] per successful login. The
/// engine shares the service handle across workers behind an `Arc`, but every
/// worker logs in on its own and never shares the resulting session.
///
/// # Examples
///
/// ```no_run
/// use engine::auth::Credentials;
/// use engine::remote::{RemoteService, RemoteSession, ServiceError};
/// use async_trait::async_trait;
/// use std::path::Path;
///
/// struct MyClient;
/// struct MySession;
///
/// #[async_trait]
/// impl RemoteService for MyClient {
///     type Session = MySession;
///
///     async fn login(&self, credentials: &Credentials) -> Result<MySession, ServiceError> {
///         // Protocol-specific login handshake
///         let _ = credentials.username();
///         Ok(MySession)
///     }
/// }
///
/// #[async_trait]
/// impl RemoteSession for MySession {
///     async fn upload(
///         &mut self,
///         _path: &Path,
///         _target_name: &str,
///         _description: &str,
///     ) -> Result<(), ServiceError> {
///         Ok(())
///     }
///
///     async fn delete(&mut self, _target: &str, _reason: &str) -> Result<(), ServiceError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait RemoteService: Send + Sync + 'static {
    /// The session type produced by a successful login.
    type Session: RemoteSession + 'static;

    /// Performs a single login attempt and returns an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AuthenticationFailed`] (or a transport error)
    /// when the handshake does not complete. Retrying is the caller's
    /// responsibility; the engine retries via its session factory.
    async fn login(&self, credentials: &Credentials) -> Result<Self::Session, ServiceError>;
}

/// An authenticated handle through which remote operations are performed.
///
/// A session is exclusively owned by one shard worker for that worker's
/// lifetime and is released by dropping it.
#[async_trait]
pub trait RemoteSession: Send {
    /// Uploads the file at `path` under `target_name` with a description.
    async fn upload(
        &mut self,
        path: &Path,
        target_name: &str,
        description: &str,
    ) -> Result<(), ServiceError>;

    /// Deletes the remote resource identified by `target`, recording `reason`.
    async fn delete(&mut self, target: &str, reason: &str) -> Result<(), ServiceError>;
}
