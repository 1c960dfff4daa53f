//! Method syntax for sequencing any iterable of operations.
//!
//! # Examples
//!
//! ```rust
//! use std::future::ready;
//! use inorder::SequenceExt;
//!
//! let outcome = futures::executor::block_on(
//!     vec![ready(Ok::<_, ()>('a')), ready(Ok('b'))].sequence(),
//! );
//! assert_eq!(outcome, Ok(vec!['a', 'b']));
//! ```

use std::future::Future;

use crate::sequential::Sequencer;
use crate::{Rejection, SequenceError};

/// Extension trait turning an iterable of operations into a sequence.
///
/// Implemented for every [`IntoIterator`].
pub trait SequenceExt: IntoIterator + Sized {
    /// See [`sequence`](crate::sequence).
    fn sequence<T, E>(self) -> impl Future<Output = Result<Vec<T>, SequenceError<T, E>>>
    where
        Self::Item: Future<Output = Result<T, E>>,
    {
        crate::sequence(self)
    }

    /// See [`sequence_nested`](crate::sequence_nested).
    fn sequence_nested<T, E>(self) -> impl Future<Output = Result<Vec<T>, SequenceError<T, E>>>
    where
        Self::Item: Future<Output = Result<T, Rejection<T, E>>>,
    {
        crate::sequence_nested(self)
    }

    /// Build a [`Sequencer`] to drive step by step.
    fn sequencer<T, E>(self) -> Sequencer<Self::IntoIter, T>
    where
        Self::Item: Future<Output = Result<T, Rejection<T, E>>>,
    {
        Sequencer::new(self)
    }
}

impl<I: IntoIterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::collections::VecDeque;
    use std::future::ready;

    #[test]
    fn test_sequence_ext_on_vec_deque() {
        let queue: VecDeque<_> = (1..=3).map(|i| ready(Ok::<_, String>(i * 10))).collect();
        assert_eq!(block_on(queue.sequence()), Ok(vec![10, 20, 30]));
    }

    #[test]
    fn test_sequence_ext_stops_at_failure() {
        let operations = vec![ready(Ok(1)), ready(Err("nope")), ready(Ok(3))];

        let err = block_on(operations.sequence()).unwrap_err();
        assert_eq!(err, SequenceError::new("nope", vec![1]));
    }

    #[test]
    fn test_sequencer_ext_steps() {
        let sequencer = vec![ready(Ok::<_, Rejection<_, ()>>(4)), ready(Ok(5))].sequencer();

        let sequencer = block_on(sequencer.step()).unwrap_yielded();
        assert_eq!(sequencer.results(), &[4]);
        assert_eq!(block_on(sequencer.run()), Ok(vec![4, 5]));
    }

    #[test]
    fn test_sequence_nested_ext_forwards_wrapped() {
        let inner = SequenceError::new('x', vec![9]);
        let operations = vec![ready(Ok(1)), ready(Err(Rejection::from(inner.clone())))];

        assert_eq!(block_on(operations.sequence_nested()), Err(inner));
    }
}
