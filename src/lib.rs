//! # Inorder: Strictly Ordered Settlement of Running Operations
//!
//! Observe a batch of already-started operations one at a time, in input
//! order, instead of letting them settle concurrently.
//!
//! ## Core Types
//!
//! - **[`Sequencer`]**: owns the remaining queue and the values settled so far
//! - **[`SequenceError`]**: the first failure plus every value settled before it
//! - **[`Rejection`]**: marks whether an operation failure is already wrapped
//!
//! ## Key Properties
//!
//! - **Ordered**: values come back in input order, whatever order the work finished in
//! - **Strict**: operation `i + 1` is not polled until operation `i` has settled
//! - **Fail-fast**: the first failure stops the drain; later operations are never polled
//!
//! ## Example
//!
//! ```
//! use std::future::ready;
//! use inorder::*;
//!
//! let operations = vec![ready(Ok(0)), ready(Ok(1)), ready(Err("boom")), ready(Ok(3))];
//!
//! match futures::executor::block_on(sequence(operations)) {
//!     Ok(values) => unreachable!("{values:?}"),
//!     Err(SequenceError { error, results }) => {
//!         assert_eq!(error, "boom");
//!         assert_eq!(results, vec![0, 1]);
//!     }
//! }
//! ```
//!
//! ## Common Functions
//!
//! - [`sequence(operations)`] - Settle plain `Result` operations in order
//! - [`sequence_nested(operations)`] - Same, forwarding already wrapped failures
//! - [`Sequencer::step`] - Settle exactly one more operation

mod error;
mod handler;
pub mod iter;
pub mod prelude;
pub mod sequential;
mod step;

pub use error::*;
pub use handler::*;
pub use iter::SequenceExt;
pub use sequential::Sequencer;
pub use step::*;
