//! # Convoy Engine
//!
//! Core library for running large batches of independent remote operations
//! (file uploads, resource deletions) against a session-authenticated remote
//! service. Work is split into balanced shards and each shard runs on its own
//! worker with its own authenticated session, so throughput scales with the
//! requested worker count while the number of simultaneous connections stays
//! bounded by it.
//!
//! ## Modules
//!
//! - [`auth`] - Credentials and bounded-retry session establishment
//! - [`batch`] - Batch dispatch: partitioning, shard workers, result reporting
//! - [`common`] - Common error types
//! - [`remote`] - The remote service boundary (traits implemented by API clients)

pub mod auth;
pub mod batch;
pub mod common;
pub mod remote;
