//! Credentials and session establishment.
//!
//! Credentials are plain values owned by the dispatcher that created them;
//! there is no process-wide credential state. The [`SessionFactory`] turns a
//! credential set into an authenticated session with a bounded number of
//! login attempts, once per worker.

pub mod credentials;
pub mod factory;

pub use credentials::Credentials;
pub use factory::SessionFactory;
