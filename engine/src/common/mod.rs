//! Common types shared across the engine.

pub mod errors;

pub use errors::{DispatchError, DispatchResult};
