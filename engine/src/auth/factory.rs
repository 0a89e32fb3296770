use super::credentials::Credentials;
use crate::common::DispatchError;
use crate::remote::RemoteService;

/// Establishes authenticated sessions with a bounded number of login attempts.
///
/// Each shard worker calls [`establish`](Self::establish) exactly once, at
/// startup, before it processes any item. Login is never re-attempted per
/// item. When the attempt bound is exhausted the worker's whole shard is
/// abandoned as a setup failure; sibling workers are unaffected because each
/// holds its own factory-produced session.
#[derive(Debug, Clone, Copy)]
pub struct SessionFactory {
    max_attempts: usize,
}

impl SessionFactory {
    /// Creates a factory allowing up to `max_attempts` logins (clamped to ≥1).
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Logs in, retrying immediately on failure up to the attempt bound.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LoginExhausted`] carrying the attempt count
    /// and the last failure reason once all attempts are spent.
    pub async fn establish<S: RemoteService>(
        &self,
        service: &S,
        credentials: &Credentials,
    ) -> Result<S::Session, DispatchError> {
        let mut last_reason = String::new();

        for attempt in 1..=self.max_attempts {
            match service.login(credentials).await {
                Ok(session) => {
                    if attempt > 1 {
                        log::info!(
                            "Login for '{}' succeeded on attempt {attempt}/{}",
                            credentials.username(),
                            self.max_attempts
                        );
                    }
                    return Ok(session);
                }
                Err(e) => {
                    log::warn!(
                        "Login attempt {attempt}/{} for '{}' on {} failed: {e}",
                        self.max_attempts,
                        credentials.username(),
                        credentials.domain()
                    );
                    last_reason = e.to_string();
                }
            }
        }

        Err(DispatchError::LoginExhausted {
            attempts: self.max_attempts,
            reason: last_reason,
        })
    }
}
