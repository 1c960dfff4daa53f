//! Failure types reported by a sequence.
//!
//! A sequence fails with a [`SequenceError`]: the first operation failure plus
//! every value that settled before it. Operations that may themselves report an
//! already-wrapped failure (for example a nested sequence) use [`Rejection`] to
//! say so explicitly, so the failure is forwarded as-is instead of being nested
//! a second time.
//!
//! # Examples
//!
//! ```
//! use inorder::{Rejection, SequenceError};
//!
//! let fresh: Rejection<u32, &str> = Rejection::Failed("boom");
//! assert_eq!(fresh.wrap(vec![0, 1]), SequenceError::new("boom", vec![0, 1]));
//!
//! let inner = SequenceError::new("boom", vec![7]);
//! let forwarded: Rejection<u32, &str> = inner.clone().into();
//! assert_eq!(forwarded.wrap(vec![0, 1]), inner);
//! ```

use thiserror::Error;

/// The first failure of a sequence together with the results settled before it.
///
/// `results` holds the values of every operation that succeeded strictly before
/// the failing one, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation failed after {} settled: {error}", .results.len())]
pub struct SequenceError<T, E> {
    /// The failure reported by the operation, untouched.
    #[source]
    pub error: E,
    /// Values settled before the failure.
    pub results: Vec<T>,
}

impl<T, E> SequenceError<T, E> {
    /// Bundle `error` with the values settled before it.
    pub fn new(error: E, results: Vec<T>) -> Self {
        Self { error, results }
    }

    /// The failure reported by the operation.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Values settled before the failure.
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Split into the operation failure and the settled values.
    pub fn into_parts(self) -> (E, Vec<T>) {
        (self.error, self.results)
    }

    /// Transform the operation failure, keeping the partial results.
    pub fn map_err<E2, F>(self, f: F) -> SequenceError<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        SequenceError {
            error: f(self.error),
            results: self.results,
        }
    }
}

/// How an operation failed, as seen by [`sequence_nested`](crate::sequence_nested).
///
/// The variant decides whether the failure gets wrapped with the sequence's
/// partial results or is forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection<T, E> {
    /// A plain failure that still needs wrapping.
    #[error("{0}")]
    Failed(E),
    /// A failure some other sequence already wrapped.
    #[error("{0}")]
    Wrapped(#[source] SequenceError<T, E>),
}

impl<T, E> Rejection<T, E> {
    /// Returns `true` if the failure was already wrapped.
    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Rejection::Wrapped(_))
    }

    /// Fold the failure into a [`SequenceError`].
    ///
    /// A `Failed` rejection is bundled with `results`. A `Wrapped` rejection is
    /// returned unchanged and `results` is dropped.
    pub fn wrap(self, results: Vec<T>) -> SequenceError<T, E> {
        match self {
            Rejection::Failed(error) => SequenceError { error, results },
            Rejection::Wrapped(wrapped) => wrapped,
        }
    }
}

impl<T, E> From<SequenceError<T, E>> for Rejection<T, E> {
    fn from(wrapped: SequenceError<T, E>) -> Self {
        Rejection::Wrapped(wrapped)
    }
}
