//! Membership tests over sequences.

use crate::{Data, FnvHashSet};

/// Returns true if `value` occurs in `seq` at or after `from_index`.
///
/// A negative `from_index` counts back from the end of `seq`. If it still lands before the
/// start, the whole of `seq` is searched. An index at or past the end finds nothing.
pub fn contains_from<T: PartialEq>(seq: &[T], value: &T, from_index: isize) -> bool {
    let start = if from_index < 0 {
        seq.len().saturating_sub(from_index.unsigned_abs())
    }
    else {
        from_index.unsigned_abs()
    };
    seq.get(start ..).is_some_and(|tail| tail.contains(value))
}

/// Returns true if any element of `b` also occurs in `a`.
///
/// The elements of `a` are hashed once; the scan of `b` stops at the first match.
pub fn has_common_elements<T: Data>(a: &[T], b: &[T]) -> bool {
    let seen: FnvHashSet<&T> = a.iter().collect();
    b.iter().any(|item| seen.contains(item))
}

/// Elements of `a` that also occur in `b`, each once, in the order of their first occurrence
/// in `a`.
pub fn intersect_ordered<T: Data>(a: &[T], b: &[T]) -> Vec<T> {
    let wanted: FnvHashSet<&T> = b.iter().collect();
    let mut emitted: FnvHashSet<&T> = FnvHashSet::default();
    a.iter()
        .filter(|item| wanted.contains(item) && emitted.insert(*item))
        .cloned()
        .collect()
}
