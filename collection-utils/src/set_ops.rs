//! Set algebra over hash sets.
//!
//! Each operation reads its inputs and returns a new set. The hasher of the result is chosen by
//! the caller through the `S` type parameter, and it need not match the hashers of the inputs.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::Data;

/// Elements present in either `a` or `b`.
pub fn union<T, S, S1, S2>(a: &HashSet<T, S1>, b: &HashSet<T, S2>) -> HashSet<T, S>
where
    T: Data,
    S: BuildHasher + Default,
    S1: BuildHasher,
    S2: BuildHasher,
{
    let mut result = HashSet::with_capacity_and_hasher(a.len().max(b.len()), S::default());
    result.extend(a.iter().cloned());
    result.extend(b.iter().cloned());
    result
}

/// Elements present in both `a` and `b`.
pub fn intersection<T, S, S1, S2>(a: &HashSet<T, S1>, b: &HashSet<T, S2>) -> HashSet<T, S>
where
    T: Data,
    S: BuildHasher + Default,
    S1: BuildHasher,
    S2: BuildHasher,
{
    // Probe the larger set with the elements of the smaller one.
    if a.len() <= b.len() {
        a.iter().filter(|item| b.contains(*item)).cloned().collect()
    }
    else {
        b.iter().filter(|item| a.contains(*item)).cloned().collect()
    }
}

/// Elements present in `a` but not in `b`.
pub fn difference<T, S, S1, S2>(a: &HashSet<T, S1>, b: &HashSet<T, S2>) -> HashSet<T, S>
where
    T: Data,
    S: BuildHasher + Default,
    S1: BuildHasher,
    S2: BuildHasher,
{
    a.iter().filter(|item| !b.contains(*item)).cloned().collect()
}

/// Elements present in every set of `sets`.
///
/// The result starts as a copy of the first set and is narrowed by each subsequent set. No sets
/// produce the empty set, and a single set is returned as a copy.
pub fn multi_intersection<'a, T, S, S1, I>(sets: I) -> HashSet<T, S>
where
    T: Data + 'a,
    S: BuildHasher + Default,
    S1: BuildHasher + 'a,
    I: IntoIterator<Item = &'a HashSet<T, S1>>,
{
    let mut sets = sets.into_iter();
    let mut result: HashSet<T, S> = match sets.next() {
        Some(first) => first.iter().cloned().collect(),
        None => {
            tracing::trace!("multi_intersection: no input sets");
            return HashSet::default();
        }
    };

    for (index, set) in sets.enumerate() {
        if result.is_empty() {
            tracing::trace!(remaining_from = index + 1, "multi_intersection: result emptied early");
            break;
        }
        result.retain(|item| set.contains(item));
    }

    result
}
