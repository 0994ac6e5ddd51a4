//! Flattening of nested sequences.
//!
//! A [`Nested`] value is either a single item or a sequence of slots, where each slot either holds
//! another nested value or is a hole. Holes model the absent positions of a sparse sequence and
//! are distinct from items that represent "nothing" (an `Option<_>` item, a JSON null, and so on):
//! items are always carried through, while holes are dropped from every sequence that gets
//! unwrapped.
//!
//! Flattening descends through sequences up to a [`Depth`]. Sequences found below that depth are
//! copied as they are, holes and all.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A position in a nested sequence, which is `None` for a hole.
pub type Slot<T> = Option<Nested<T>>;

/// An item, or an arbitrarily nested sequence of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A sequence of slots, some of which may be holes.
    Seq(Vec<Slot<T>>),
    /// A single item.
    Item(T),
}

impl<T> Nested<T> {
    /// A sequence without holes.
    pub fn seq<I: IntoIterator<Item = Nested<T>>>(items: I) -> Self {
        Nested::Seq(items.into_iter().map(Some).collect())
    }

    /// A sequence that may contain holes.
    pub fn sparse<I: IntoIterator<Item = Slot<T>>>(slots: I) -> Self {
        Nested::Seq(slots.into_iter().collect())
    }

    /// True if this is a sequence rather than an item.
    pub fn is_seq(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }

    /// The item, if this is not a sequence.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::Seq(_) => None,
        }
    }
}

impl<T: Clone> Nested<T> {
    /// Flattens this sequence up to `depth` levels.
    ///
    /// Fails with [`Error::NotASequence`] if `self` is an item.
    pub fn flatten(&self, depth: Depth) -> Result<Vec<Nested<T>>> {
        match self {
            Nested::Seq(slots) => Ok(flatten(slots, depth)),
            Nested::Item(_) => Err(Error::NotASequence),
        }
    }

    /// All items, in order, with every level of nesting and every hole removed.
    ///
    /// An item on its own produces a single-element result.
    pub fn leaves(&self) -> Vec<T> {
        let slots = match self {
            Nested::Seq(slots) => slots,
            Nested::Item(item) => return vec![item.clone()],
        };
        let mut leaves = Vec::new();
        let mut stack = vec![slots.iter().flatten()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                None => { stack.pop(); }
                Some(Nested::Item(item)) => leaves.push(item.clone()),
                Some(Nested::Seq(slots)) => stack.push(slots.iter().flatten()),
            }
        }
        leaves
    }
}

/// Unwraps one level of nesting: an item yields itself, and a sequence yields its non-hole slots.
///
/// This is what lets a mapping function passed to [`flat_map`] return a `Nested` value.
impl<T> IntoIterator for Nested<T> {
    type Item = Nested<T>;
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Slot<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        let slots = match self {
            Nested::Seq(slots) => slots,
            item @ Nested::Item(_) => vec![Some(item)],
        };
        slots.into_iter().flatten()
    }
}

/// How many levels of nesting to remove.
///
/// The default is a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    /// Remove at most this many levels.
    Levels(usize),
    /// Remove every level.
    Unbounded,
}

impl Depth {
    /// Only drop holes from the outermost sequence.
    pub const ZERO: Depth = Depth::Levels(0);

    fn is_exhausted(self) -> bool {
        self == Depth::ZERO
    }

    fn descend(self) -> Depth {
        match self {
            Depth::Levels(levels) => Depth::Levels(levels.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl Default for Depth {
    fn default() -> Self { Depth::Levels(1) }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self { Depth::Levels(levels) }
}

/// Negative depths are treated as zero.
impl From<i64> for Depth {
    fn from(levels: i64) -> Self {
        match usize::try_from(levels) {
            Ok(levels) => Depth::Levels(levels),
            Err(_) => {
                tracing::debug!(levels, "negative flatten depth treated as zero");
                Depth::ZERO
            }
        }
    }
}

/// NaN and negative depths are treated as zero, positive infinity as unbounded, and fractional
/// depths are truncated.
impl From<f64> for Depth {
    fn from(levels: f64) -> Self {
        if levels.is_nan() || levels < 0.0 {
            tracing::debug!(levels, "invalid flatten depth treated as zero");
            Depth::ZERO
        }
        else if levels == f64::INFINITY {
            Depth::Unbounded
        }
        else {
            // Saturates for finite depths beyond `usize::MAX`, which are unbounded in effect.
            Depth::Levels(levels.trunc() as usize)
        }
    }
}

/// Flattens `slots` up to `depth` levels.
///
/// Sequences are unwrapped while depth remains, and holes are dropped from every sequence that is
/// unwrapped, including `slots` itself. Items are copied through unchanged. With `Depth::ZERO` the
/// result is a copy of `slots` with its holes removed; with `Depth::Unbounded` the result contains
/// only items.
pub fn flatten<T: Clone>(slots: &[Slot<T>], depth: Depth) -> Vec<Nested<T>> {
    let mut result = Vec::with_capacity(slots.len());
    let mut stack = vec![(slots.iter(), depth)];
    while let Some((iter, depth)) = stack.last_mut() {
        let depth = *depth;
        match iter.next() {
            None => { stack.pop(); }
            Some(None) => { }
            Some(Some(Nested::Seq(inner))) if !depth.is_exhausted() => {
                stack.push((inner.iter(), depth.descend()));
            }
            Some(Some(nested)) => result.push(nested.clone()),
        }
    }
    result
}

/// Maps each element of `seq` and flattens the results by exactly one level.
///
/// The result is the same as mapping and then flattening with `Depth::Levels(1)`, but without the
/// intermediate sequence. Mapping functions may return any iterable, including a `Nested` value.
pub fn flat_map<T, U, R, I, F>(seq: I, f: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    R: IntoIterator<Item = U>,
    F: FnMut(T) -> R,
{
    seq.into_iter().flat_map(f).collect()
}

/// Like [`flat_map`], but the mapping function may fail.
///
/// The first failure is returned as is, and no partial output is produced.
pub fn try_flat_map<T, U, R, E, I, F>(seq: I, mut f: F) -> std::result::Result<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    R: IntoIterator<Item = U>,
    F: FnMut(T) -> std::result::Result<R, E>,
{
    let mut result = Vec::new();
    for (index, item) in seq.into_iter().enumerate() {
        match f(item) {
            Ok(items) => result.extend(items),
            Err(error) => {
                tracing::debug!(index, "try_flat_map: mapping function failed");
                return Err(error);
            }
        }
    }
    Ok(result)
}
