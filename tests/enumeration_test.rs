//! Cross-checks of the merge-based enumeration against itertools and the
//! binomial coefficient.

use exact_combinatorics::{combination_count, get_combination, Combination, CombinationSet};
use itertools::Itertools;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn reference(item_count: usize, size: usize) -> HashSet<Combination> {
    (1..=item_count)
        .combinations(size)
        .map(Combination::from_items)
        .collect()
}

fn assert_well_formed(set: &CombinationSet, item_count: usize, size: usize) {
    for combination in set {
        let items = combination.items();
        assert_eq!(items.len(), size, "{} has the wrong size", combination);
        assert!(
            items.windows(2).all(|w| w[0] < w[1]),
            "{} is not strictly ascending",
            combination
        );
        assert!(
            items.iter().all(|&item| (1..=item_count).contains(&item)),
            "{} is out of range",
            combination
        );
        assert_eq!(set.get(&combination.key()), Some(combination));
    }
}

#[test]
fn test_matches_itertools_for_random_sizes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..12 {
        let item_count = rng.gen_range(2..=7);
        let size = rng.gen_range(2..=item_count);

        let set = get_combination(item_count, size);
        assert_well_formed(&set, item_count, size);

        let produced: HashSet<Combination> = set.into_iter().collect();
        assert_eq!(
            produced,
            reference(item_count, size),
            "mismatch for C({}, {})",
            item_count,
            size
        );
    }
}

#[test]
fn test_cardinality_matches_combination_count() {
    for item_count in 2..=7usize {
        for size in 2..=item_count {
            let set = get_combination(item_count, size);
            let expected = combination_count(item_count as i64, size as i64).unwrap();
            assert_eq!(
                BigUint::from(set.len()),
                expected,
                "|C({}, {})|",
                item_count,
                size
            );
        }
    }
}

#[test]
fn test_no_duplicate_element_sets() {
    let set = get_combination(6, 4);
    let distinct: HashSet<Vec<usize>> = set.iter().map(|c| c.items().to_vec()).collect();
    assert_eq!(distinct.len(), set.len());
    assert_eq!(set.len(), 15);
}
