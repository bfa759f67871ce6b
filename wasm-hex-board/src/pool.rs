/// Pool expansion and shuffling module

use rand::Rng;
use crate::types::{ColorPoolItem, ColorPoolSpec, LabelPoolItem, LabelPoolSpec};

/// Expand compact colour entries into one item per tile
///
/// Output order mirrors the entries; a zero count contributes nothing.
pub fn expand_color_pool(spec: &[ColorPoolSpec]) -> Vec<ColorPoolItem> {
    spec.iter()
        .flat_map(|entry| {
            std::iter::repeat(ColorPoolItem {
                terrain: entry.terrain,
                can_assign: entry.can_assign,
            })
            .take(entry.count)
        })
        .collect()
}

/// Expand compact label entries into one item per number token
pub fn expand_label_pool(spec: &[LabelPoolSpec]) -> Vec<LabelPoolItem> {
    let mut out = Vec::with_capacity(spec.iter().map(|entry| entry.count).sum());
    for entry in spec {
        for _ in 0..entry.count {
            out.push(LabelPoolItem { text: entry.text.to_string() });
        }
    }
    out
}

/// Return a shuffled copy of `items` using Fisher-Yates
///
/// **Learning Point**: Walking from the back and swapping with a uniformly
/// chosen index in `0..=i` gives every one of the n! orderings the same
/// probability. The input slice is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    for i in (1..copy.len()).rev() {
        let j = rng.gen_range(0..=i);
        copy.swap(i, j);
    }
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Terrain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn color_pool_length_is_sum_of_counts() {
        let spec = [
            ColorPoolSpec::new(Terrain::Pasture, 4),
            ColorPoolSpec::new(Terrain::Forest, 0),
            ColorPoolSpec::fixed(Terrain::Desert, 1),
        ];
        let pool = expand_color_pool(&spec);

        assert_eq!(pool.len(), 5);
        assert_eq!(pool.iter().filter(|i| i.terrain == Terrain::Pasture).count(), 4);
        assert!(pool.iter().all(|i| i.terrain != Terrain::Forest));
        assert_eq!(
            pool.last(),
            Some(&ColorPoolItem { terrain: Terrain::Desert, can_assign: false })
        );
        assert!(pool[..4].iter().all(|i| i.can_assign));
    }

    #[test]
    fn label_pool_keeps_spec_order() {
        let spec = [LabelPoolSpec::new("2", 1), LabelPoolSpec::new("3", 2)];
        let texts: Vec<String> = expand_label_pool(&spec).into_iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["2", "3", "3"]);
    }

    #[test]
    fn shuffle_preserves_multiset_and_input() {
        let input: Vec<u32> = (0..50).map(|n| n % 7).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle(&input, &mut rng);

        assert_eq!(shuffled.len(), input.len());
        let mut a = input.clone();
        let mut b = shuffled.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(input, (0..50).map(|n| n % 7).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_of_empty_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let out: Vec<u8> = shuffle(&[], &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn shuffle_reaches_every_ordering_of_three() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            seen.insert(shuffle(&[1, 2, 3], &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }
}
