use engine::batch::partition;
use proptest::prelude::*;

proptest! {
    #[test]
    fn partition_reconstructs_input_exactly(
        items in prop::collection::vec(any::<u32>(), 0..400),
        worker_count in 0usize..64
    ) {
        let shards = partition(items.clone(), worker_count);

        // Property: concatenating shards in order reproduces the input,
        // so no item is duplicated or dropped
        let flattened: Vec<u32> = shards.iter().flatten().copied().collect();
        prop_assert_eq!(flattened, items);
    }

    #[test]
    fn shard_sizes_are_balanced(
        items in prop::collection::vec(any::<u8>(), 1..400),
        worker_count in 1usize..64
    ) {
        let shards = partition(items.clone(), worker_count);

        // Property: shard count is min(k, n) and no shard is empty
        prop_assert_eq!(shards.len(), worker_count.min(items.len()));
        prop_assert!(shards.iter().all(|shard| !shard.is_empty()));

        // Property: pairwise size difference is at most one
        let min = shards.iter().map(Vec::len).min().unwrap();
        let max = shards.iter().map(Vec::len).max().unwrap();
        prop_assert!(max - min <= 1);

        // Property: the documented tie-break puts larger shards first
        for pair in shards.windows(2) {
            prop_assert!(pair[0].len() >= pair[1].len());
        }
    }

    #[test]
    fn empty_input_always_yields_zero_shards(worker_count in 0usize..256) {
        prop_assert!(partition(Vec::<u32>::new(), worker_count).is_empty());
    }
}
