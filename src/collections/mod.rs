//! Collection Types.

pub mod array;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use array::DynamicArray;
pub use linked_list::LinkedList;
pub use queue::{new_queue, CircularQueue, Queue, QueueConfig, QueueKind, StackQueue};
pub use stack::Stack;
