//! Partitioning of records by a key.
//!
//! Grouping produces a [`Groups`] value, which behaves like a map from keys to the records that
//! produced them but remembers the order in which keys were first seen. Within each group, records
//! appear in input order.

use std::borrow::Borrow;
use std::convert::Infallible;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Data, FnvHashMap};

/// Buckets the records of `seq` by the key `key_fn` extracts from each.
pub fn group_by<R, K, I, F>(seq: I, mut key_fn: F) -> Groups<K, R>
where
    K: Data,
    I: IntoIterator<Item = R>,
    F: FnMut(&R) -> K,
{
    match try_group_by(seq, |record| Ok::<K, Infallible>(key_fn(record))) {
        Ok(groups) => groups,
        Err(never) => match never { },
    }
}

/// Buckets the records of `seq` by key, where extracting a key may fail.
///
/// The first failure of `key_fn` is returned unchanged, and the groups built so far are discarded.
pub fn try_group_by<R, K, E, I, F>(seq: I, mut key_fn: F) -> Result<Groups<K, R>, E>
where
    K: Data,
    I: IntoIterator<Item = R>,
    F: FnMut(&R) -> Result<K, E>,
{
    let mut groups = Groups::new();
    for (index, record) in seq.into_iter().enumerate() {
        match key_fn(&record) {
            Ok(key) => groups.push(key, record),
            Err(error) => {
                tracing::debug!(index, "try_group_by: key function failed");
                return Err(error);
            }
        }
    }
    Ok(groups)
}

/// Records grouped by key, in the order keys were first seen.
#[derive(Debug, Clone)]
pub struct Groups<K, R> {
    /// Position of each key in `groups`.
    index: FnvHashMap<K, usize>,
    groups: Vec<(K, Vec<R>)>,
}

impl<K: Data, R> Groups<K, R> {
    fn new() -> Self {
        Groups {
            index: FnvHashMap::default(),
            groups: Vec::new(),
        }
    }

    fn push(&mut self, key: K, record: R) {
        if let Some(&position) = self.index.get(&key) {
            self.groups[position].1.push(record);
        }
        else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, vec![record]));
        }
    }

    /// The records grouped under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&[R]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&position| &self.groups[position].1[..])
    }

    /// True if some record produced `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// The number of groups.
    pub fn len(&self) -> usize { self.groups.len() }

    /// True if there are no groups, which happens only for empty input.
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// The keys, in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// The groups, in first-occurrence order of their keys.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[R])> {
        self.groups.iter().map(|(key, records)| (key, &records[..]))
    }

    /// Extracts the groups, in first-occurrence order of their keys.
    pub fn into_vec(self) -> Vec<(K, Vec<R>)> {
        self.groups
    }
}

impl<K, R> IntoIterator for Groups<K, R> {
    type Item = (K, Vec<R>);
    type IntoIter = std::vec::IntoIter<(K, Vec<R>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups are equal when they hold the same keys in the same order, with equal records.
impl<K: PartialEq, R: PartialEq> PartialEq for Groups<K, R> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: Eq, R: Eq> Eq for Groups<K, R> { }

/// Serializes as a map, with entries in first-occurrence order of their keys.
impl<K: Serialize, R: Serialize> Serialize for Groups<K, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, records) in self.groups.iter() {
            map.serialize_entry(key, records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, serde::Serialize)]
    struct Row {
        k: &'static str,
        v: i32,
    }

    fn row(k: &'static str, v: i32) -> Row {
        Row { k, v }
    }

    #[test]
    fn test_group_by() {
        let rows = vec![row("a", 1), row("b", 2), row("a", 3)];
        let groups = group_by(rows.clone(), |r| r.k);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(groups.get("a"), Some(&[row("a", 1), row("a", 3)][..]));
        assert_eq!(groups.get("b"), Some(&[row("b", 2)][..]));
        assert_eq!(groups.get("c"), None);
        assert!(groups.contains_key("a"));
        assert!(!groups.contains_key("c"));

        // The input is left alone.
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_group_by_order() {
        let numbers = [5, 2, 8, 1, 4, 7, 6];
        let groups = group_by(numbers, |n| n % 3);
        assert_eq!(groups.into_vec(), vec![
            (2, vec![5, 2, 8]),
            (1, vec![1, 4, 7]),
            (0, vec![6]),
        ]);
    }

    #[test]
    fn test_group_by_borrowed() {
        let words = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let groups = group_by(&words, |w| w.len());
        let lengths: Vec<(usize, usize)> = groups.iter().map(|(len, ws)| (*len, ws.len())).collect();
        assert_eq!(lengths, vec![(3, 2), (5, 1)]);
    }

    #[test]
    fn test_group_by_empty() {
        let groups = group_by(Vec::<Row>::new(), |r| r.k);
        assert!(groups.is_empty());
        assert_eq!(groups.into_iter().count(), 0);
    }

    #[test]
    fn test_try_group_by() {
        let lines = ["a:1", "b:2", "a:3"];
        let groups = try_group_by(lines, |&line| line.split_once(':').map(|(k, _)| k).ok_or("no key"));
        assert_eq!(groups.map(|g| g.len()), Ok(2));

        let lines = ["a:1", "b2", "a:3"];
        let groups = try_group_by(lines, |&line| line.split_once(':').map(|(k, _)| k).ok_or(line));
        assert_eq!(groups, Err("b2"));
    }

    #[test]
    fn test_serialize_in_key_order() {
        let groups = group_by(vec![row("b", 2), row("a", 1), row("b", 4)], |r| r.k);
        assert_eq!(
            serde_json::to_string(&groups).unwrap(),
            r#"{"b":[{"k":"b","v":2},{"k":"b","v":4}],"a":[{"k":"a","v":1}]}"#,
        );
    }
}
