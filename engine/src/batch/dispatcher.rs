//! The caller-owned dispatch entry point and its join handle.

use super::partition::partition;
use super::types::{
    BatchReport, DeleteItem, DispatchConfig, FailurePolicy, ShardOutcome, UploadItem, WorkItem,
};
use super::worker::ShardWorker;
use crate::auth::{Credentials, SessionFactory};
use crate::common::{DispatchError, DispatchResult};
use crate::remote::{RemoteService, UploadFilter};
use futures::future::join_all;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Entry point for batch operations against one remote service.
///
/// A dispatcher is an ordinary caller-owned value: construct as many as
/// needed, each with its own service handle and credentials. There is no
/// process-wide state. Dispatch calls return immediately after spawning their
/// workers; use the returned [`BatchHandle`] to await completion and collect
/// the per-item results.
///
/// Each call spawns exactly one worker (and therefore one authenticated
/// session) per shard, with no pooling: a caller requesting 500 workers gets
/// 500 concurrent sessions. Choosing a worker count compatible with the
/// remote service's rate limits is the caller's responsibility, optionally
/// enforced via [`DispatchConfig::with_max_workers`].
///
/// Failure contract: uploads are continue-on-error with a single attempt per
/// item; deletions retry each item up to
/// [`DispatchConfig::delete_retry_limit`] attempts (default 3) before
/// recording it as permanently failed and moving on.
pub struct BatchDispatcher<S: RemoteService> {
    service: Arc<S>,
    credentials: Arc<Credentials>,
    config: DispatchConfig,
}

impl<S: RemoteService> BatchDispatcher<S> {
    /// Creates a dispatcher with default configuration.
    pub fn new(service: S, credentials: Credentials) -> Self {
        Self::with_config(service, credentials, DispatchConfig::default())
    }

    pub fn with_config(service: S, credentials: Credentials, config: DispatchConfig) -> Self {
        Self {
            service: Arc::new(service),
            credentials: Arc::new(credentials),
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Starts a batch upload across `worker_count` workers.
    ///
    /// Every item gets one attempt; failed items are recorded and the owning
    /// shard continues with the next item.
    ///
    /// Must be called from within a tokio runtime.
    pub fn upload_batch(
        &self,
        items: Vec<UploadItem>,
        description: impl Into<String>,
        worker_count: usize,
    ) -> BatchHandle {
        let items = items.into_iter().map(WorkItem::Upload).collect();
        self.dispatch(
            items,
            description.into(),
            FailurePolicy::ContinueOnError,
            worker_count,
        )
    }

    /// Starts a batch delete across `worker_count` workers.
    ///
    /// Each item is retried up to the configured delete retry limit before
    /// being recorded as permanently failed; the shard then proceeds.
    ///
    /// Must be called from within a tokio runtime.
    pub fn delete_batch(
        &self,
        items: Vec<DeleteItem>,
        reason: impl Into<String>,
        worker_count: usize,
    ) -> BatchHandle {
        let policy = FailurePolicy::RetryToBound(self.config.delete_retry_limit());
        let items = items.into_iter().map(WorkItem::Delete).collect();
        self.dispatch(items, reason.into(), policy, worker_count)
    }

    /// Enumerates eligible files in `directory` and uploads them as a batch.
    ///
    /// Only regular files directly in the directory are considered; the
    /// supplied filter decides eligibility. Files are uploaded under their
    /// file names, in path order so repeated runs shard identically.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DirectoryRead`] when the listing fails.
    pub fn upload_directory(
        &self,
        directory: &Path,
        description: impl Into<String>,
        worker_count: usize,
        filter: &dyn UploadFilter,
    ) -> DispatchResult<BatchHandle> {
        let read_error = |source: std::io::Error| DispatchError::DirectoryRead {
            path: directory.to_path_buf(),
            source,
        };

        let mut items = Vec::new();
        for entry in std::fs::read_dir(directory).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && filter.is_eligible(&path) {
                items.push(UploadItem::from_path(path));
            }
        }
        items.sort_by(|a, b| a.path.cmp(&b.path));

        log::info!(
            "Collected {} eligible files from {}",
            items.len(),
            directory.display()
        );
        Ok(self.upload_batch(items, description, worker_count))
    }

    /// Partitions `items`, spawns one worker per shard, and returns at once.
    fn dispatch(
        &self,
        items: Vec<WorkItem>,
        note: String,
        policy: FailurePolicy,
        worker_count: usize,
    ) -> BatchHandle {
        let total_requested = items.len();
        let mut worker_count = worker_count.max(1);
        if let Some(cap) = self.config.max_workers() {
            worker_count = worker_count.min(cap);
        }

        let shards = partition(items, worker_count);
        let factory = SessionFactory::new(self.config.login_attempts());
        let cancel = CancellationToken::new();

        log::info!(
            "Dispatching {total_requested} items across {} workers ({policy:?})",
            shards.len()
        );

        let mut workers = Vec::with_capacity(shards.len());
        for (shard_index, shard) in shards.into_iter().enumerate() {
            let service = self.service.clone();
            let credentials = self.credentials.clone();
            let note = note.clone();
            let cancel = cancel.clone();

            workers.push(tokio::spawn(async move {
                // One login per worker, before any item runs. Exhausting the
                // attempt bound abandons this shard only.
                let session = match factory.establish(service.as_ref(), &credentials).await {
                    Ok(session) => session,
                    Err(error) => {
                        log::error!(
                            "Shard {shard_index}: session setup failed, skipping {} items: {error}",
                            shard.len()
                        );
                        return ShardOutcome::SetupFailed {
                            shard_index,
                            skipped: shard.len(),
                            error,
                        };
                    }
                };

                ShardWorker::new(shard_index, session, note, policy, cancel)
                    .run(shard)
                    .await
            }));
        }

        BatchHandle {
            total_requested,
            workers,
            cancel,
        }
    }
}

/// Handle to one in-flight batch call.
///
/// Workers run whether or not the handle is awaited; `join` is how a caller
/// learns the outcome. Dropping the handle without joining detaches the
/// workers (they still run to completion) and discards their results.
pub struct BatchHandle {
    total_requested: usize,
    workers: Vec<JoinHandle<ShardOutcome>>,
    cancel: CancellationToken,
}

impl BatchHandle {
    /// Number of shard workers spawned for this call.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Requests cooperative cancellation: every worker finishes its current
    /// item, then records the rest of its shard as skipped.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Awaits every shard worker and aggregates their outcomes.
    ///
    /// A panicked worker never propagates; its shard is recorded in
    /// `error_details` and its items stay unaccounted in the counters.
    pub async fn join(self) -> BatchReport {
        let mut report = BatchReport::new(self.total_requested);

        for (shard_index, joined) in join_all(self.workers).await.into_iter().enumerate() {
            match joined {
                Ok(outcome) => report.absorb(outcome),
                Err(e) => {
                    log::error!("Shard {shard_index}: worker task failed: {e}");
                    report.record_worker_failure(format!("shard {shard_index}: worker task: {e}"));
                }
            }
        }

        log::info!(
            "Batch completed: {} successful, {} failed, {} skipped out of {} requested",
            report.successful,
            report.failed,
            report.skipped,
            report.total_requested
        );
        report
    }
}
