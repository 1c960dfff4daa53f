//! Functions for driving a batch of operations to completion.
//!
//! Both entry points build a [`Sequencer`] and run it. [`sequence`] accepts
//! operations reporting plain failures; [`sequence_nested`] accepts operations
//! that report a [`Rejection`], so failures already wrapped by an inner
//! sequence are forwarded without nesting.

use std::future::Future;

use futures::TryFutureExt;

use crate::sequential::Sequencer;
use crate::{Rejection, SequenceError};

/// Await `operations` strictly one at a time, in order.
///
/// Resolves with every value in input order, or with the first failure and the
/// values settled before it. Operations after the failing one are never polled.
///
/// ```rust
/// use std::future::ready;
/// use inorder::{SequenceError, sequence};
///
/// let operations = vec![ready(Ok(0)), ready(Ok(1)), ready(Err("boom")), ready(Ok(3))];
/// let outcome = futures::executor::block_on(sequence(operations));
///
/// assert_eq!(outcome, Err(SequenceError::new("boom", vec![0, 1])));
/// ```
pub async fn sequence<I, F, T, E>(operations: I) -> Result<Vec<T>, SequenceError<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let operations = operations
        .into_iter()
        .map(|operation| operation.map_err(Rejection::<T, E>::Failed));
    Sequencer::new(operations).run().await
}

/// Like [`sequence`], for operations that may report an already wrapped failure.
///
/// A `Rejection::Wrapped` failure becomes the outcome as-is; its partial results
/// replace the ones collected here.
///
/// ```rust
/// use std::future::ready;
/// use inorder::{Rejection, sequence, sequence_nested};
///
/// futures::executor::block_on(async {
///     let inner = async {
///         let values = sequence(vec![ready(Ok::<u32, &str>(1)), ready(Err("inner"))]).await?;
///         Ok::<u32, Rejection<u32, &str>>(values.iter().sum())
///     };
///
///     let err = sequence_nested(vec![inner]).await.unwrap_err();
///     assert_eq!(err.error, "inner");
///     assert_eq!(err.results, vec![1]);
/// });
/// ```
pub async fn sequence_nested<I, F, T, E>(operations: I) -> Result<Vec<T>, SequenceError<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, Rejection<T, E>>>,
{
    Sequencer::new(operations).run().await
}
