//! Observe operations one after another
//!
//! This module provides the sequential drain behind [`sequence`](crate::sequence).

mod sequencer;

pub use sequencer::{Outcome, Sequencer};
