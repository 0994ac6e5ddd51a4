//! Randomized checks of the relationships between the collection utilities.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use collection_utils::{
    dedupe_stable, difference, find_duplicates, flat_map, flatten, has_duplicate, intersection,
    multi_intersection, union, Depth, FnvHashSet, Nested, Slot,
};

const ROUNDS: usize = 200;

fn random_vec(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.gen_range(0 .. 24);
    (0 .. len).map(|_| rng.gen_range(0 .. 12)).collect()
}

fn random_set(rng: &mut StdRng) -> FnvHashSet<u8> {
    random_vec(rng).into_iter().collect()
}

/// A sequence of up to five slots, nested at most `depth` further levels.
fn random_slots(rng: &mut StdRng, depth: usize) -> Vec<Slot<u8>> {
    let len = rng.gen_range(0 .. 5);
    (0 .. len)
        .map(|_| match rng.gen_range(0 .. 6) {
            0 => None,
            1 | 2 if depth > 0 => Some(Nested::Seq(random_slots(rng, depth - 1))),
            _ => Some(Nested::Item(rng.gen_range(0 .. 100))),
        })
        .collect()
}

fn contains_seq(items: &[Nested<u8>]) -> bool {
    items.iter().any(Nested::is_seq)
}

#[test]
fn dedupe_stable_matches_first_occurrences() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0 .. ROUNDS {
        let input = random_vec(&mut rng);
        let expected = input.iter().copied().unique().collect::<Vec<_>>();
        assert_eq!(dedupe_stable(input.iter().copied()), expected);
    }
}

#[test]
fn find_duplicates_matches_second_occurrences() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0 .. ROUNDS {
        let input = random_vec(&mut rng);
        let expected = input.iter().copied().duplicates().collect::<Vec<_>>();
        let found = find_duplicates(input.iter().copied());
        assert_eq!(found, expected);
        assert_eq!(has_duplicate(input.iter().copied()), !found.is_empty());
    }
}

#[test]
fn set_algebra_laws() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0 .. ROUNDS {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);

        let ab: FnvHashSet<u8> = union(&a, &b);
        let ba: FnvHashSet<u8> = union(&b, &a);
        assert_eq!(ab, ba);

        let aa: FnvHashSet<u8> = intersection(&a, &a);
        assert_eq!(aa, a);

        let both: FnvHashSet<u8> = intersection(&a, &b);
        assert!(both.is_subset(&a));
        assert!(both.is_subset(&b));

        let only_a: FnvHashSet<u8> = difference(&a, &b);
        assert!(only_a.is_disjoint(&b));
        let rebuilt: FnvHashSet<u8> = union(&only_a, &both);
        assert_eq!(rebuilt, a);

        let c = random_set(&mut rng);
        let all: FnvHashSet<u8> = multi_intersection([&a, &b, &c]);
        let pairwise: FnvHashSet<u8> = intersection(&both, &c);
        assert_eq!(all, pairwise);
    }
}

#[test]
fn flatten_depth_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0 .. ROUNDS {
        let slots = random_slots(&mut rng, 4);

        let shallow = flatten(&slots, Depth::ZERO);
        let expected = slots.iter().flatten().cloned().collect::<Vec<_>>();
        assert_eq!(shallow, expected);

        let full = flatten(&slots, Depth::Unbounded);
        assert!(!contains_seq(&full));
        assert_eq!(flatten(&slots, Depth::Levels(5)), full);

        let leaves = Nested::Seq(slots.clone()).leaves();
        assert_eq!(full, leaves.into_iter().map(Nested::Item).collect::<Vec<_>>());
    }
}

#[test]
fn flat_map_is_map_then_flatten_one() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0 .. ROUNDS {
        let input = random_vec(&mut rng);
        let f = |x: u8| match x % 3 {
            0 => Nested::Item(x),
            1 => Nested::seq([Nested::Item(x), Nested::seq([Nested::Item(x)])]),
            _ => Nested::sparse([None, Some(Nested::Item(x))]),
        };

        let mapped = input.iter().map(|&x| Some(f(x))).collect::<Vec<_>>();
        assert_eq!(flat_map(input.iter().copied(), f), flatten(&mapped, Depth::Levels(1)));
    }
}
