//! Shard workers: one owned session, one shard, strict in-shard order.

use super::types::{FailurePolicy, ItemOutcome, ItemStatus, ShardOutcome, WorkItem};
use crate::remote::{RemoteSession, ServiceError};
use tokio_util::sync::CancellationToken;

/// Executes one shard of work items against one exclusively owned session.
///
/// Items run strictly in shard order; a network call blocks only this worker.
/// The failure policy decides how many attempts each item gets — failures are
/// recorded in the shard outcome, never escalated past the shard.
pub(crate) struct ShardWorker<R: RemoteSession> {
    shard_index: usize,
    session: R,
    /// Batch-level annotation: the upload description or the delete reason.
    note: String,
    policy: FailurePolicy,
    cancel: CancellationToken,
}

impl<R: RemoteSession> ShardWorker<R> {
    pub(crate) fn new(
        shard_index: usize,
        session: R,
        note: String,
        policy: FailurePolicy,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            shard_index,
            session,
            note,
            policy,
            cancel,
        }
    }

    pub(crate) async fn run(mut self, items: Vec<WorkItem>) -> ShardOutcome {
        let mut outcomes = Vec::with_capacity(items.len());
        let mut remaining = items.into_iter();

        while let Some(item) = remaining.next() {
            if self.cancel.is_cancelled() {
                log::info!(
                    "Shard {}: cancelled; skipping '{}' and {} further items",
                    self.shard_index,
                    item.label(),
                    remaining.len()
                );
                outcomes.push(ItemOutcome::skipped(item.label()));
                outcomes.extend(remaining.map(|rest| ItemOutcome::skipped(rest.label())));
                break;
            }
            outcomes.push(self.run_item(item).await);
        }

        log::debug!("Shard {}: finished {} items", self.shard_index, outcomes.len());
        ShardOutcome::Completed {
            shard_index: self.shard_index,
            outcomes,
        }
    }

    /// Runs one item to its final state under the attempt bound of the policy.
    async fn run_item(&mut self, item: WorkItem) -> ItemOutcome {
        let bound = self.policy.attempt_bound();
        let label = item.label().to_string();
        let mut last_error = String::new();

        for attempt in 1..=bound {
            match self.attempt(&item).await {
                Ok(()) => {
                    log::debug!(
                        "Shard {}: '{label}' completed on attempt {attempt}/{bound}",
                        self.shard_index
                    );
                    return ItemOutcome {
                        label,
                        attempts: attempt,
                        status: ItemStatus::Completed,
                    };
                }
                Err(e) => {
                    log::warn!(
                        "Shard {}: '{label}' failed on attempt {attempt}/{bound}: {e}",
                        self.shard_index
                    );
                    last_error = e.to_string();
                }
            }
        }

        ItemOutcome {
            label,
            attempts: bound,
            status: ItemStatus::Failed { error: last_error },
        }
    }

    async fn attempt(&mut self, item: &WorkItem) -> Result<(), ServiceError> {
        match item {
            WorkItem::Upload(upload) => {
                self.session
                    .upload(&upload.path, &upload.target_name, &self.note)
                    .await
            }
            WorkItem::Delete(delete) => self.session.delete(&delete.target, &self.note).await,
        }
    }
}
