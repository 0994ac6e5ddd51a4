//! Pure utilities over in-memory sequences and sets.
//!
//! The crate is organized around a handful of collection-oriented primitives: detecting and
//! extracting duplicates, deduplicating, set algebra, flattening nested sequences, and grouping
//! records by a key. Every function is synchronous, allocates a fresh result, and leaves its
//! inputs untouched.
//!
//! Elements are required to implement [`Data`], which is simply `Clone + Eq + Hash`. Set-valued
//! results are returned as `HashSet<T, S>` for any `S: BuildHasher + Default`; the [`FnvHashSet`]
//! alias is the usual choice, and is what the crate uses internally.
//!
//! # Examples
//!
//! ```
//! use collection_utils::{dedupe_stable, find_duplicates, group_by};
//!
//! assert_eq!(dedupe_stable([1, 2, 2, 3, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
//! assert_eq!(find_duplicates([1, 2, 2, 3, 4, 4, 5, 5, 5, 7]), vec![2, 4, 5]);
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//! let groups = group_by(words, |word| word.as_bytes()[0]);
//! assert_eq!(groups.get(&b'a'), Some(&["apple", "avocado"][..]));
//! assert_eq!(groups.len(), 3);
//! ```
//!
//! Flattening works over [`Nested`] values, which may contain holes:
//!
//! ```
//! use collection_utils::{flatten, Depth, Nested};
//!
//! let deep = vec![
//!     Some(Nested::Item(1)),
//!     Some(Nested::seq([Nested::Item(2), Nested::seq([Nested::Item(3)])])),
//!     None,
//! ];
//! let flat = flatten(&deep, Depth::Unbounded);
//! assert_eq!(flat, vec![Nested::Item(1), Nested::Item(2), Nested::Item(3)]);
//! ```

#![forbid(missing_docs)]

use std::hash::Hash;

pub use fnv::{FnvHashMap, FnvHashSet};

pub use distinct::{combine_unique, count_unique, dedupe_stable, dedupe_unordered, first_unique};
pub use duplicates::{count_occurrences, find_duplicates, find_duplicates_by, has_duplicate, Counts};
pub use error::{Error, Result};
pub use flatten::{flat_map, flatten, try_flat_map, Depth, Nested, Slot};
pub use group::{group_by, try_group_by, Groups};
pub use membership::{contains_from, has_common_elements, intersect_ordered};
pub use set_ops::{difference, intersection, multi_intersection, union};

pub mod distinct;
pub mod duplicates;
pub mod error;
pub mod flatten;
pub mod group;
pub mod membership;
pub mod set_ops;

/// A composite trait for element types usable with the collection utilities.
///
/// Equality decides which elements are "the same", and hashing lets the utilities track seen
/// elements in linear time. Types without a meaningful `Hash` (floating point numbers, for
/// example) should be wrapped in a type that provides one.
pub trait Data : Clone + Eq + Hash { }
impl<T: Clone + Eq + Hash> Data for T { }
