//! Errors produced by the collection utilities.
//!
//! Almost every operation is total: static types rule out non-sequence arguments, and empty
//! inputs produce empty results. The remaining failure is supplying a single item where a
//! sequence is required, which can only happen at the dynamically nested [`Nested`] boundary.
//!
//! Failures raised by caller-supplied callbacks are not represented here. The `try_*` operations
//! are generic over the callback's error type and hand it back unchanged.
//!
//! [`Nested`]: crate::flatten::Nested

/// Errors that can occur when invoking a collection utility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A single item was supplied where a sequence was expected.
    #[error("expected a sequence, found a single item")]
    NotASequence,
}

/// Result alias for operations that fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
