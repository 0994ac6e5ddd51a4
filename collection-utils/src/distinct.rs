//! Reduction of sequences to their distinct elements.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::duplicates::count_occurrences;
use crate::{Data, FnvHashSet};

/// Retains the first occurrence of each value, in input order.
///
/// The result lists the distinct elements of `seq` as a subsequence of `seq`.
pub fn dedupe_stable<T, I>(seq: I) -> Vec<T>
where
    T: Data,
    I: IntoIterator<Item = T>,
{
    let mut seen = FnvHashSet::default();
    seq.into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Collects the distinct values of `seq` into a set.
///
/// The content matches `dedupe_stable`, but no order is maintained.
pub fn dedupe_unordered<T, I, S>(seq: I) -> HashSet<T, S>
where
    T: Data,
    I: IntoIterator<Item = T>,
    S: BuildHasher + Default,
{
    seq.into_iter().collect()
}

/// Concatenates several sequences and retains the first occurrence of each value.
///
/// Passing no sequences produces an empty result.
pub fn combine_unique<T, I, J>(seqs: J) -> Vec<T>
where
    T: Data,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = I>,
{
    dedupe_stable(seqs.into_iter().flatten())
}

/// The number of distinct values in `seq`.
pub fn count_unique<T, I>(seq: I) -> usize
where
    T: Data,
    I: IntoIterator<Item = T>,
{
    seq.into_iter().collect::<FnvHashSet<T>>().len()
}

/// The first value that occurs exactly once in `seq`.
///
/// Returns `None` for empty input, or if every value repeats.
pub fn first_unique<T, I>(seq: I) -> Option<T>
where
    T: Data,
    I: IntoIterator<Item = T>,
{
    count_occurrences(seq)
        .into_vec()
        .into_iter()
        .find(|(_, count)| *count == 1)
        .map(|(item, _)| item)
}
