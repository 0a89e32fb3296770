//! The remote service boundary.
//!
//! The engine never speaks a wire protocol itself. Callers supply an API
//! client implementing [`RemoteService`], which produces one authenticated
//! [`RemoteSession`] per worker. Sessions are exclusively owned by the worker
//! they were created for and are dropped when the worker finishes its shard.

pub mod errors;
pub mod filter;
pub mod service;

pub use errors::ServiceError;
pub use filter::{ExtensionFilter, UploadFilter};
pub use service::{RemoteService, RemoteSession};
