//! Draining a queue of already-started operations one at a time.
//!
//! This module provides the [`Sequencer`], which owns the remaining queue and
//! the values settled so far. Each [`step`](Sequencer::step) awaits exactly one
//! operation and hands the advanced sequencer back, so ownership of the queue
//! and accumulator moves forward with the drain instead of being copied.

use std::future::Future;

use tracing::{debug, trace};

use crate::{Rejection, SequenceError, Step};

/// Terminal outcome of a sequence.
pub type Outcome<T, E> = Result<Vec<T>, SequenceError<T, E>>;

/// Observes operations strictly in queue order, collecting their values.
///
/// The head of the queue is only pulled (and therefore only polled) once the
/// previous operation has settled. The first failure stops the drain: the rest
/// of the queue is left untouched and the failure is reported with every value
/// settled before it.
///
/// # Examples
///
/// ```
/// use std::future::ready;
/// use inorder::{Rejection, Sequencer};
///
/// futures::executor::block_on(async {
///     let operations = vec![
///         ready(Ok::<u32, Rejection<u32, &str>>(1)),
///         ready(Ok(2)),
///     ];
///
///     let sequencer = Sequencer::new(operations);
///     let sequencer = sequencer.step().await.unwrap_yielded();
///     assert_eq!(sequencer.results(), &[1]);
///
///     assert_eq!(sequencer.run().await, Ok(vec![1, 2]));
/// });
/// ```
#[derive(Debug)]
pub struct Sequencer<Q, T> {
    queue: Q,
    results: Vec<T>,
}

impl<Q, T> Sequencer<Q, T> {
    /// Values settled so far, in queue order.
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Number of values settled so far.
    pub fn settled(&self) -> usize {
        self.results.len()
    }

    /// Stop draining and take back the untouched remainder and the settled values.
    pub fn into_parts(self) -> (Q, Vec<T>) {
        (self.queue, self.results)
    }
}

impl<Q, F, T, E> Sequencer<Q, T>
where
    Q: Iterator<Item = F>,
    F: Future<Output = Result<T, Rejection<T, E>>>,
{
    /// Create a sequencer over `operations` with an empty accumulator.
    ///
    /// The accumulator grows as values settle; the queue's size hint is never
    /// used to allocate up front.
    pub fn new<I>(operations: I) -> Self
    where
        I: IntoIterator<IntoIter = Q>,
    {
        Sequencer {
            queue: operations.into_iter(),
            results: Vec::new(),
        }
    }

    /// Continue a sequence whose first values already settled.
    ///
    /// New values are appended after `results`. A failure reports `results`
    /// followed by everything settled from `operations`.
    ///
    /// ```
    /// use std::future::ready;
    /// use inorder::{Rejection, Sequencer};
    ///
    /// let operations = vec![ready(Ok::<_, Rejection<_, ()>>(3))];
    /// let sequencer = Sequencer::resume(operations, vec![1, 2]);
    /// assert_eq!(futures::executor::block_on(sequencer.run()), Ok(vec![1, 2, 3]));
    /// ```
    pub fn resume<I>(operations: I, results: Vec<T>) -> Self
    where
        I: IntoIterator<IntoIter = Q>,
    {
        Sequencer {
            queue: operations.into_iter(),
            results,
        }
    }

    /// Await the head of the queue and fold its outcome.
    ///
    /// Returns `Yielded` with the advanced sequencer when the operation
    /// succeeded, or `Complete` once the queue is exhausted or an operation
    /// failed.
    pub async fn step(mut self) -> Step<Self, Outcome<T, E>> {
        let settled = self.results.len();
        let Some(operation) = self.queue.next() else {
            trace!(settled, "operation queue drained");
            return Step::Complete(Ok(self.results));
        };

        trace!(index = settled, "attaching operation");
        match operation.await {
            Ok(value) => {
                self.results.push(value);
                Step::Yielded(self)
            }
            Err(rejection) => {
                debug!(
                    settled,
                    wrapped = rejection.is_wrapped(),
                    "operation failed, halting sequence"
                );
                Step::Complete(Err(rejection.wrap(self.results)))
            }
        }
    }

    /// Drive the sequence to its terminal outcome.
    pub async fn run(self) -> Outcome<T, E> {
        let mut sequencer = self;
        loop {
            match sequencer.step().await {
                Step::Yielded(next) => sequencer = next,
                Step::Complete(outcome) => return outcome,
            }
        }
    }
}
