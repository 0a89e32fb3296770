//! Types and data structures for batch dispatch.

use crate::common::DispatchError;
use serde::Deserialize;
use std::path::PathBuf;

/// One file to upload: a local path plus the name it takes remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadItem {
    pub path: PathBuf,
    pub target_name: String,
}

impl UploadItem {
    pub fn new(path: impl Into<PathBuf>, target_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target_name: target_name.into(),
        }
    }

    /// Builds an item whose remote name is the file name component of `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let target_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, target_name }
    }
}

/// One remote resource to delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeleteItem {
    pub target: String,
}

impl DeleteItem {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl From<String> for DeleteItem {
    fn from(target: String) -> Self {
        Self { target }
    }
}

impl From<&str> for DeleteItem {
    fn from(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

/// Internal item representation so one worker loop serves both operations.
#[derive(Debug, Clone)]
pub(crate) enum WorkItem {
    Upload(UploadItem),
    Delete(DeleteItem),
}

impl WorkItem {
    /// Human-readable identifier used in logs and reports.
    pub(crate) fn label(&self) -> &str {
        match self {
            WorkItem::Upload(item) => &item.target_name,
            WorkItem::Delete(item) => &item.target,
        }
    }
}

/// What a shard worker does when an item fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and move to the next item. Used for uploads.
    ContinueOnError,
    /// Retry the same item up to the given attempt count before recording it
    /// as permanently failed and moving on. Used for deletions.
    RetryToBound(usize),
}

impl FailurePolicy {
    /// Total attempts a single item gets under this policy (always ≥1).
    pub fn attempt_bound(&self) -> usize {
        match self {
            FailurePolicy::ContinueOnError => 1,
            FailurePolicy::RetryToBound(bound) => (*bound).max(1),
        }
    }
}

/// Final state of one work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// The operation succeeded within the attempt bound.
    Completed,
    /// All attempts failed; `error` is the last failure reason.
    Failed { error: String },
    /// The item was never attempted (shard cancelled or setup failed).
    Skipped,
}

/// Per-item outcome with the number of attempts actually spent.
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub label: String,
    pub attempts: usize,
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub(crate) fn skipped(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attempts: 0,
            status: ItemStatus::Skipped,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ItemStatus::Completed
    }
}

/// Result of one shard worker.
#[derive(Debug)]
pub enum ShardOutcome {
    /// The worker ran its shard to the end (some items may still have failed
    /// or been skipped by cancellation).
    Completed {
        shard_index: usize,
        outcomes: Vec<ItemOutcome>,
    },
    /// Session establishment failed; no item in the shard was attempted.
    SetupFailed {
        shard_index: usize,
        skipped: usize,
        error: DispatchError,
    },
}

/// Aggregated result of a whole batch call with detailed statistics.
///
/// Counters always satisfy `successful + failed + skipped == total_requested`
/// unless a worker panicked, in which case its items are unaccounted and the
/// panic is recorded in `error_details`.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Total number of items handed to the dispatch call.
    pub total_requested: usize,
    /// Items that completed successfully.
    pub successful: usize,
    /// Items that exhausted their attempt bound.
    pub failed: usize,
    /// Items never attempted (cancelled shard or login setup failure).
    pub skipped: usize,
    /// Shards abandoned because login retries were exhausted.
    pub setup_failures: usize,
    /// Detailed error messages for failed items and failed shards.
    pub error_details: Vec<String>,
    /// Labels of items that completed successfully.
    pub successful_items: Vec<String>,
    /// Every per-item outcome, across all shards, including attempt counts.
    pub item_outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn new(total_requested: usize) -> Self {
        Self {
            total_requested,
            ..Self::default()
        }
    }

    /// `true` when every requested item completed successfully.
    pub fn is_complete_success(&self) -> bool {
        self.successful == self.total_requested && self.failed == 0 && self.skipped == 0
    }

    pub(crate) fn absorb(&mut self, outcome: ShardOutcome) {
        match outcome {
            ShardOutcome::Completed { outcomes, .. } => {
                for item in outcomes {
                    match &item.status {
                        ItemStatus::Completed => {
                            self.successful += 1;
                            self.successful_items.push(item.label.clone());
                        }
                        ItemStatus::Failed { error } => {
                            self.failed += 1;
                            self.error_details.push(format!("{}: {error}", item.label));
                        }
                        ItemStatus::Skipped => self.skipped += 1,
                    }
                    self.item_outcomes.push(item);
                }
            }
            ShardOutcome::SetupFailed {
                shard_index,
                skipped,
                error,
            } => {
                self.skipped += skipped;
                self.setup_failures += 1;
                self.error_details.push(format!("shard {shard_index}: {error}"));
            }
        }
    }

    pub(crate) fn record_worker_failure(&mut self, detail: String) {
        self.error_details.push(detail);
    }
}

/// Configuration for batch dispatch. All values have sensible defaults.
///
/// # Examples
///
/// ```no_run
/// use engine::batch::DispatchConfig;
///
/// let config = DispatchConfig::default();
/// assert_eq!(config.login_attempts(), 4);
/// assert_eq!(config.delete_retry_limit(), 3);
/// ```
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DispatchConfig {
    /// Maximum login attempts per worker before its shard is abandoned
    /// (default: 4)
    login_attempts: Option<usize>,
    /// Attempt bound per item for delete batches (default: 3)
    delete_retry_limit: Option<usize>,
    /// Hard cap on workers per dispatch call (default: uncapped)
    max_workers: Option<usize>,
}

impl DispatchConfig {
    pub fn new(login_attempts: usize, delete_retry_limit: usize) -> Self {
        Self {
            login_attempts: Some(login_attempts),
            delete_retry_limit: Some(delete_retry_limit),
            max_workers: None,
        }
    }

    /// Caps the number of workers any single dispatch call may spawn.
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = Some(max_workers.max(1));
        self
    }

    /// Login attempts allowed per worker (≥1).
    pub fn login_attempts(&self) -> usize {
        self.login_attempts.unwrap_or(4).max(1)
    }

    /// Per-item attempt bound for delete batches (≥1).
    pub fn delete_retry_limit(&self) -> usize {
        self.delete_retry_limit.unwrap_or(3).max(1)
    }

    /// Optional hard cap on workers per dispatch call.
    pub fn max_workers(&self) -> Option<usize> {
        self.max_workers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DispatchConfig::default();

        assert_eq!(config.login_attempts(), 4);
        assert_eq!(config.delete_retry_limit(), 3);
        assert_eq!(config.max_workers(), None);
    }

    #[test]
    fn config_clamps_zero_bounds() {
        let config = DispatchConfig::new(0, 0).with_max_workers(0);

        assert_eq!(config.login_attempts(), 1);
        assert_eq!(config.delete_retry_limit(), 1);
        assert_eq!(config.max_workers(), Some(1));
    }

    #[test]
    fn upload_item_derives_target_name_from_path() {
        let item = UploadItem::from_path("/data/shots/frame_001.png");
        assert_eq!(item.target_name, "frame_001.png");
    }

    #[test]
    fn report_tracks_complete_success() {
        let mut report = BatchReport::new(2);
        report.absorb(ShardOutcome::Completed {
            shard_index: 0,
            outcomes: vec![
                ItemOutcome {
                    label: "a".into(),
                    attempts: 1,
                    status: ItemStatus::Completed,
                },
                ItemOutcome {
                    label: "b".into(),
                    attempts: 2,
                    status: ItemStatus::Completed,
                },
            ],
        });

        assert!(report.is_complete_success());
        assert_eq!(report.successful_items, vec!["a", "b"]);
    }
}
