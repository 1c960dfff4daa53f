//! Fixtures shared by the integration tests.
//!
//! Operations are spawned onto the tokio runtime before they are handed to a
//! sequence, so they are already running. Each one is wrapped in a spy that
//! records when the sequence first polls it and when it settles.
#![allow(dead_code)]

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Attached(usize),
    Settled(usize),
}

/// Shared log of spy events, in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn record(&self, event: Event) {
        self.0.lock().expect("journal lock poisoned").push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().expect("journal lock poisoned").clone()
    }

    /// Indices of every operation that was polled at least once.
    pub fn attached(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Attached(index) => Some(index),
                Event::Settled(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation {0} failed")]
pub struct OperationError(pub usize);

/// Wrap `operation` so its first poll and its settlement land in `journal`.
pub fn spied<F, T, E>(
    index: usize,
    journal: Journal,
    operation: F,
) -> impl Future<Output = Result<T, E>> + Send
where
    F: Future<Output = Result<T, E>> + Send,
{
    async move {
        journal.record(Event::Attached(index));
        let outcome = operation.await;
        journal.record(Event::Settled(index));
        outcome
    }
}

/// Spawn `amount` operations resolving to their own index.
///
/// Later operations finish their work sooner, so settlement order on the
/// runtime is roughly the reverse of input order. The operation at `reject_at`
/// fails with [`OperationError`].
pub fn started_operations(
    amount: usize,
    reject_at: Option<usize>,
    journal: &Journal,
) -> Vec<impl Future<Output = Result<usize, OperationError>> + Send + use<>> {
    (0..amount)
        .map(|index| {
            let delay = Duration::from_millis((amount - index) as u64);
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if reject_at == Some(index) {
                    Err(OperationError(index))
                } else {
                    Ok(index)
                }
            });
            spied(index, journal.clone(), async move {
                handle.await.expect("operation task panicked")
            })
        })
        .collect()
}

/// Random batch size, matching the range the sequencing tests exercise.
pub fn random_amount() -> usize {
    rand::random_range(7..=14)
}

/// Random failure position that always leaves at least one prior success.
pub fn random_reject_at() -> usize {
    rand::random_range(1..=6)
}

/// `[0, 1, .., length - 1]`
pub fn sequence_up_to(length: usize) -> Vec<usize> {
    (0..length).collect()
}

/// Strict ordering: every operation settles before the next one is attached.
pub fn expected_strict_events(length: usize) -> Vec<Event> {
    (0..length)
        .flat_map(|index| [Event::Attached(index), Event::Settled(index)])
        .collect()
}
