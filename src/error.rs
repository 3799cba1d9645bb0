//! Error type shared by every collection in the crate.

use thiserror::Error;

/// Alias for results produced by collection operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Boundary violations reported by the collections.
///
/// Every full, empty, or out-of-range condition is surfaced as a variant
/// here; no operation panics on caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Push onto a stack that holds `capacity` elements.
    #[error("stack is full (capacity {capacity})")]
    StackFull {
        /// Fixed capacity of the stack.
        capacity: usize,
    },

    /// Pop or peek on a stack with no elements.
    #[error("stack is empty")]
    StackEmpty,

    /// Enqueue onto a queue that holds `capacity` elements.
    #[error("queue is full (capacity {capacity})")]
    QueueFull {
        /// Fixed capacity of the queue.
        capacity: usize,
    },

    /// Dequeue from a queue with no elements.
    #[error("queue is empty")]
    QueueEmpty,

    /// Removal from a linked list with no nodes.
    #[error("list is empty")]
    ListEmpty,

    /// Position outside of the filled range of a collection.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of elements at the time of the request.
        len: usize,
    },

    /// Argument rejected before any state was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` for errors caused by a structure being at capacity.
    pub fn is_full(&self) -> bool {
        matches!(self, Error::StackFull { .. } | Error::QueueFull { .. })
    }

    /// Returns `true` for errors caused by a structure having no elements.
    pub fn is_empty(&self) -> bool {
        matches!(self, Error::StackEmpty | Error::QueueEmpty | Error::ListEmpty)
    }
}
