//! Commonly used imports
//!
//! Use `use inorder::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Rejection, SequenceError, Sequencer, Step};

// Execution
pub use crate::{SequenceExt, sequence, sequence_nested};
