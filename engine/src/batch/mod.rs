//! Batch dispatch module — the concurrent core of the engine.
//!
//! A dispatch call partitions its items into balanced contiguous shards,
//! spawns one worker per shard, and hands back a [`BatchHandle`]. Each worker
//! opens its own authenticated session and runs its shard strictly in order,
//! applying the failure policy of the operation kind:
//!
//! - `types`: work items, failure policies, configuration, and reports
//! - `partition`: balanced contiguous sharding
//! - `worker`: per-shard execution with the pluggable failure policy
//! - `dispatcher`: the caller-owned entry point and the join handle

pub mod dispatcher;
pub mod partition;
pub mod types;
pub mod worker;

pub use dispatcher::{BatchDispatcher, BatchHandle};
pub use partition::partition;
pub use types::{
    BatchReport, DeleteItem, DispatchConfig, FailurePolicy, ItemOutcome, ItemStatus, ShardOutcome,
    UploadItem,
};
