//! Detection and extraction of repeated values.
//!
//! These methods count occurrences of each value as they scan their input once. The count of a
//! value only matters up to the point it first repeats, which is what allows `has_duplicate` to
//! stop early and `find_duplicates` to report each repeated value exactly once.

use crate::{Data, FnvHashMap};

/// Returns true if some value occurs more than once.
///
/// The scan stops at the first repeated value. Empty and all-unique inputs return false.
pub fn has_duplicate<T, I>(seq: I) -> bool
where
    T: Data,
    I: IntoIterator<Item = T>,
{
    let mut counts: FnvHashMap<T, usize> = FnvHashMap::default();
    for item in seq {
        let count = counts.entry(item).or_insert(0);
        *count += 1;
        if *count > 1 {
            return true;
        }
    }
    false
}

/// Returns each value that occurs at least twice, exactly once.
///
/// Values are reported in the order their count reaches two, which is the position of their
/// second occurrence and not of their first. For example `[3, 1, 1, 3]` yields `[1, 3]`.
pub fn find_duplicates<T, I>(seq: I) -> Vec<T>
where
    T: Data,
    I: IntoIterator<Item = T>,
{
    let mut counts: FnvHashMap<T, usize> = FnvHashMap::default();
    let mut duplicates = Vec::new();
    for item in seq {
        if let Some(count) = counts.get_mut(&item) {
            *count += 1;
            if *count == 2 {
                duplicates.push(item);
            }
        }
        else {
            counts.insert(item, 1);
        }
    }
    duplicates
}

/// Returns each key shared by at least two records, exactly once.
///
/// This is `find_duplicates` applied to the keys extracted by `key_fn`, and it reports keys in
/// the same second-occurrence order.
pub fn find_duplicates_by<R, K, I, F>(seq: I, mut key_fn: F) -> Vec<K>
where
    K: Data,
    I: IntoIterator<Item = R>,
    F: FnMut(&R) -> K,
{
    find_duplicates(seq.into_iter().map(|record| key_fn(&record)))
}

/// Counts the occurrences of each distinct value in `seq`.
pub fn count_occurrences<T, I>(seq: I) -> Counts<T>
where
    T: Data,
    I: IntoIterator<Item = T>,
{
    let mut counts = Counts::new();
    for item in seq {
        counts.push(item);
    }
    counts
}

/// Occurrence counts of distinct values, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts<T: Data> {
    /// Position of each value in `entries`.
    index: FnvHashMap<T, usize>,
    entries: Vec<(T, usize)>,
}

impl<T: Data> Counts<T> {
    fn new() -> Self {
        Counts {
            index: FnvHashMap::default(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, item: T) {
        if let Some(&position) = self.index.get(&item) {
            self.entries[position].1 += 1;
        }
        else {
            self.index.insert(item.clone(), self.entries.len());
            self.entries.push((item, 1));
        }
    }

    /// The number of occurrences of `item`, which is zero for absent values.
    pub fn get(&self, item: &T) -> usize {
        self.index.get(item).map_or(0, |&position| self.entries[position].1)
    }

    /// The number of distinct values.
    pub fn len(&self) -> usize { self.entries.len() }

    /// True if no values were counted.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// The number of values counted, duplicates included.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates over `(value, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    /// Extracts the `(value, count)` pairs in first-occurrence order.
    pub fn into_vec(self) -> Vec<(T, usize)> {
        self.entries
    }
}
