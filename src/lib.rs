//! Linear data structures over integers: a growable array, a singly linked
//! list, a fixed-capacity stack, and two fixed-capacity queues.
//!
//! Every boundary violation (full, empty, out of range, bad argument) is
//! reported through [`Error`]; no operation panics on caller input.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod collections;
mod error;

pub use error::{Error, Result};

/// Data Structures Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{array, linked};

    #[doc(no_inline)]
    pub use super::collections::{
        new_queue, CircularQueue, DynamicArray, LinkedList, Queue, QueueConfig, QueueKind, Stack,
        StackQueue,
    };
    #[doc(no_inline)]
    pub use super::Error;

    #[doc(no_inline)]
    pub use super::algorithms::linear_search::*;
}
