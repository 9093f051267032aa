//! Seeded Fisher-Yates shuffle.

use crate::rng::SeededRng;

/// Return a seeded permutation of `items` without mutating the input.
///
/// Walks indices from last to first, swapping each with a position drawn
/// from `[0, i]`. Given the same seed the permutation is identical across
/// runs and platforms.
pub fn shuffle<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut rng = SeededRng::new(seed);
    for i in (1..shuffled.len()).rev() {
        let j = rng.next_range(0, i as i64 + 1) as usize;
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn deterministic_for_seed() {
        let items: Vec<u32> = (0..78).collect();
        assert_eq!(shuffle(&items, 12345), shuffle(&items, 12345));
    }

    #[test]
    fn different_seeds_differ() {
        let items: Vec<u32> = (0..78).collect();
        assert_ne!(shuffle(&items, 1), shuffle(&items, 2));
    }

    #[test]
    fn input_not_mutated() {
        let items: Vec<u32> = (0..10).collect();
        let before = items.clone();
        let _ = shuffle(&items, 42);
        assert_eq!(items, before);
    }

    #[test]
    fn empty_and_singleton() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(shuffle(&empty, 1), empty);
        assert_eq!(shuffle(&[7u32], 1), [7]);
    }

    proptest! {
        #[test]
        fn output_is_a_permutation(mut items in prop::collection::vec(0u32..1000, 0..64), seed in any::<i64>()) {
            let mut shuffled = shuffle(&items, seed);
            items.sort_unstable();
            shuffled.sort_unstable();
            prop_assert_eq!(items, shuffled);
        }

        #[test]
        fn seed_determinism(items in prop::collection::vec(0u32..1000, 0..64), seed in any::<i64>()) {
            prop_assert_eq!(shuffle(&items, seed), shuffle(&items, seed));
        }
    }
}
