//! Balanced contiguous sharding of work-item lists.

/// Splits `items` into at most `worker_count` contiguous shards.
///
/// The split is deterministic and order-preserving: concatenating the shards
/// reproduces the input exactly. Shard sizes differ by at most one, with the
/// larger shards first — the first `n % k` shards get `n / k + 1` items and
/// the rest get `n / k`. An empty input yields zero shards; `worker_count`
/// is clamped to the range `1..=items.len()`, so a zero worker count behaves
/// like one worker.
pub fn partition<T>(items: Vec<T>, worker_count: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }

    let shard_count = worker_count.clamp(1, items.len());
    let base_size = items.len() / shard_count;
    let mut oversized = items.len() % shard_count;

    let mut shards = Vec::with_capacity(shard_count);
    let mut rest = items;
    for _ in 0..shard_count {
        let mut take = base_size;
        if oversized > 0 {
            take += 1;
            oversized -= 1;
        }
        let tail = rest.split_off(take);
        shards.push(rest);
        rest = tail;
    }

    shards
}
