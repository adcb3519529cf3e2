//! Enumeration of k-combinations by repeated merging of pairs.
//!
//! All pairs of `{1..n}` form the base set. Each growth step merges every
//! combination of the current set with every pair of the base set and keeps
//! only the merges of the next size. Duplicate merges are produced and then
//! collapsed by the dedup key rather than avoided.

use crate::combination::{Combination, CombinationSet};
use itertools::iproduct;

/// Every unordered pair of distinct items from `{1..n}`
pub(crate) fn combination_of_two(n: usize) -> CombinationSet {
    iproduct!(1..=n, 1..=n)
        .filter(|(first, second)| first != second)
        .map(|(first, second)| Combination::from_items([first, second]))
        .collect()
}

/// Merge every combination of `first` with every combination of `second`,
/// keeping only distinct results of exactly `expected_size` items
pub(crate) fn combination_of_two_sets(
    first: &CombinationSet,
    second: &CombinationSet,
    expected_size: usize,
) -> CombinationSet {
    let mut merged: CombinationSet = iproduct!(first.iter(), second.iter())
        .filter(|(a, b)| a != b)
        .map(|(a, b)| a.merge(b))
        .collect();

    merged.retain_size(expected_size);
    merged
}

/// All `combination_size`-element combinations of `{1..item_count}`.
///
/// Sizes below 3 return the pair set itself, so sizes 0 and 1 also yield
/// pairs. A size larger than `item_count` yields an empty set.
pub fn get_combination(item_count: usize, combination_size: usize) -> CombinationSet {
    let base = combination_of_two(item_count);

    let mut growing = base.clone();
    for size in 3..=combination_size {
        growing = combination_of_two_sets(&growing, &base, size);
    }

    growing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_keys(set: &CombinationSet) -> Vec<String> {
        set.to_sorted_vec().iter().map(Combination::key).collect()
    }

    #[test]
    fn test_pairs() {
        assert!(combination_of_two(0).is_empty());
        assert!(combination_of_two(1).is_empty());
        assert_eq!(
            sorted_keys(&combination_of_two(4)),
            vec!["1-2", "1-3", "1-4", "2-3", "2-4", "3-4"]
        );
    }

    #[test]
    fn test_merge_filters_by_size() {
        let pairs = combination_of_two(3);
        let triples = combination_of_two_sets(&pairs, &pairs, 3);
        assert_eq!(sorted_keys(&triples), vec!["1-2-3"]);

        // Overlapping pairs never reach four items
        assert!(combination_of_two_sets(&pairs, &pairs, 4).is_empty());
    }

    #[test]
    fn test_get_combination_of_two() {
        assert_eq!(
            sorted_keys(&get_combination(4, 2)),
            vec!["1-2", "1-3", "1-4", "2-3", "2-4", "3-4"]
        );
    }

    #[test]
    fn test_get_combination_of_three() {
        assert_eq!(
            sorted_keys(&get_combination(4, 3)),
            vec!["1-2-3", "1-2-4", "1-3-4", "2-3-4"]
        );
    }

    #[test]
    fn test_small_sizes_return_pairs() {
        let pairs = get_combination(4, 2);
        assert_eq!(get_combination(4, 1), pairs);
        assert_eq!(get_combination(4, 0), pairs);
    }

    #[test]
    fn test_full_and_oversized() {
        assert_eq!(sorted_keys(&get_combination(5, 5)), vec!["1-2-3-4-5"]);
        assert!(get_combination(3, 4).is_empty());
    }
}
