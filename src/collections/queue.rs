//! FIFO queues of integers with a fixed capacity.
//!
//! Two implementations share the [`Queue`] contract:
//!
//! - [`CircularQueue`] stores elements in a ring buffer whose `front` and
//!   `rear` indices wrap around the capacity.
//! - [`StackQueue`] composes two [`Stack`]s. Elements enter the in-stack and
//!   leave from the out-stack; reversing twice restores FIFO order.
//!
//! [`new_queue`] picks an implementation from a type tag.
//!
//! # Examples
//!
//! ```
//! use dsa::prelude::*;
//!
//! for tag in ["array", "stack"] {
//!     let mut queue = new_queue(tag, 3)?;
//!
//!     queue.enqueue(1)?;
//!     queue.enqueue(2)?;
//!     queue.enqueue(3)?;
//!
//!     assert_eq!(queue.dequeue(), Ok(1));
//!     assert_eq!(queue.dequeue(), Ok(2));
//!     assert_eq!(queue.dequeue(), Ok(3));
//!     assert_eq!(queue.dequeue(), Err(Error::QueueEmpty));
//! }
//! # Ok::<(), dsa::Error>(())
//! ```

use core::fmt;
use core::str::FromStr;

use tracing::{debug, trace};

use super::stack::Stack;
use crate::error::{Error, Result};

/// Capability shared by every queue implementation.
pub trait Queue: fmt::Debug {
    /// Adds `value` at the rear of the queue and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QueueFull`] if the queue cannot take another element.
    fn enqueue(&mut self, value: i64) -> Result<i64>;

    /// Removes the element at the front of the queue and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QueueEmpty`] if the queue has no elements.
    fn dequeue(&mut self) -> Result<i64>;

    /// Returns the number of queued elements.
    fn len(&self) -> usize;

    /// Returns the fixed capacity the queue was built with.
    fn capacity(&self) -> usize;

    /// Returns `true` if the queue has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A queue backed by a fixed-length ring buffer.
pub struct CircularQueue {
    /// Ring buffer. Vacated slots are reset to zero.
    buf: Box<[i64]>,
    /// Index of the oldest element.
    front: usize,
    /// Index the next enqueued element is written to.
    rear: usize,
    /// Number of occupied slots.
    len: usize,
}

impl CircularQueue {
    /// Creates an empty queue able to hold `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity].into_boxed_slice(),
            front: 0,
            rear: 0,
            len: 0,
        }
    }

    /// Returns the element at the front without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QueueEmpty`] if the queue has no elements.
    pub fn peek(&self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::QueueEmpty);
        }

        Ok(self.buf[self.front])
    }

    /// Copies the queued elements, oldest first, into a `Vec`.
    pub fn as_vec(&self) -> Vec<i64> {
        (0..self.len)
            .map(|offset| self.buf[(self.front + offset) % self.buf.len()])
            .collect()
    }
}

impl Queue for CircularQueue {
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The value is written at `rear`, which then wraps
    /// modulo the capacity.
    fn enqueue(&mut self, value: i64) -> Result<i64> {
        if self.len == self.buf.len() {
            return Err(Error::QueueFull {
                capacity: self.buf.len(),
            });
        }

        self.buf[self.rear] = value;
        self.rear = (self.rear + 1) % self.buf.len();
        self.len += 1;

        Ok(value)
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The slot at `front` is read and cleared, then
    /// `front` wraps modulo the capacity.
    fn dequeue(&mut self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::QueueEmpty);
        }

        let value = self.buf[self.front];
        self.buf[self.front] = 0;
        self.front = (self.front + 1) % self.buf.len();
        self.len -= 1;

        Ok(value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl fmt::Debug for CircularQueue {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("CircularQueue")
            .field("elements", &self.as_vec())
            .field("capacity", &self.buf.len())
            .finish()
    }
}

/// A queue composed of two fixed-capacity stacks.
#[derive(Debug)]
pub struct StackQueue {
    /// Receives every enqueued element.
    in_stack: Stack,
    /// Serves dequeues; refilled from `in_stack` only once it runs dry.
    out_stack: Stack,
}

impl StackQueue {
    /// Creates an empty queue whose two stacks each hold `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            in_stack: Stack::with_capacity(capacity),
            out_stack: Stack::with_capacity(capacity),
        }
    }

    /// Moves every element of the in-stack onto the out-stack, leaving the
    /// oldest element on top.
    fn transfer(&mut self) -> Result<()> {
        let moved = self.in_stack.len();

        while let Ok(value) = self.in_stack.pop() {
            // Cannot overflow: `out_stack` is empty and shares the capacity
            // of `in_stack`.
            self.out_stack.push(value)?;
        }

        trace!(moved, "transferred in-stack to out-stack");
        Ok(())
    }
}

impl Queue for StackQueue {
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The value is pushed onto the in-stack. Elements
    /// waiting in the out-stack count against the capacity too.
    fn enqueue(&mut self, value: i64) -> Result<i64> {
        let capacity = self.capacity();

        if self.len() == capacity {
            return Err(Error::QueueFull { capacity });
        }

        self.in_stack.push(value).map_err(|err| {
            if err.is_full() {
                Error::QueueFull { capacity }
            } else {
                err
            }
        })?;

        Ok(value)
    }

    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time. A dequeue that finds the out-stack empty
    /// costs *O*(*n*) to transfer the in-stack, but each element is moved at
    /// most once.
    fn dequeue(&mut self) -> Result<i64> {
        if self.out_stack.is_empty() {
            self.transfer()?;
        }

        self.out_stack.pop().map_err(|err| {
            if err.is_empty() {
                Error::QueueEmpty
            } else {
                err
            }
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.in_stack.len() + self.out_stack.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.in_stack.capacity()
    }
}

/// Selects a [`Queue`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// [`CircularQueue`], tagged `"array"`.
    Array,
    /// [`StackQueue`], tagged `"stack"`.
    Stack,
}

impl QueueKind {
    /// Returns the type tag of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            QueueKind::Array => "array",
            QueueKind::Stack => "stack",
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "array" => Ok(QueueKind::Array),
            "stack" => Ok(QueueKind::Stack),
            other => Err(Error::InvalidArgument(format!("invalid queue type: {other:?}"))),
        }
    }
}

/// Construction parameters for a boxed [`Queue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Implementation to build.
    pub kind: QueueKind,
    /// Number of elements the queue holds. Must be positive.
    pub capacity: usize,
}

impl QueueConfig {
    /// Builds the configured queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is 0.
    pub fn build(&self) -> Result<Box<dyn Queue>> {
        if self.capacity == 0 {
            return Err(Error::InvalidArgument("invalid queue size: 0".to_string()));
        }

        debug!(kind = %self.kind, capacity = self.capacity, "building queue");

        let queue: Box<dyn Queue> = match self.kind {
            QueueKind::Array => Box::new(CircularQueue::with_capacity(self.capacity)),
            QueueKind::Stack => Box::new(StackQueue::with_capacity(self.capacity)),
        };

        Ok(queue)
    }
}

/// Creates a queue from a type tag (`"array"` or `"stack"`) and a size.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `size` is not positive or `tag` is
/// not a known type.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// assert!(new_queue("array", 4).is_ok());
/// assert!(new_queue("array", 0).is_err());
/// assert!(new_queue("list", 4).is_err());
/// ```
pub fn new_queue(tag: &str, size: i64) -> Result<Box<dyn Queue>> {
    let capacity = match usize::try_from(size) {
        Ok(capacity) if capacity > 0 => capacity,
        _ => {
            debug!(size, "rejected queue size");
            return Err(Error::InvalidArgument(format!("invalid queue size: {size}")));
        }
    };

    let kind = tag.parse::<QueueKind>().inspect_err(|_| {
        debug!(tag, "rejected queue type");
    })?;

    QueueConfig { kind, capacity }.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut dyn Queue) -> Vec<i64> {
        let mut out = Vec::new();
        while let Ok(value) = queue.dequeue() {
            out.push(value);
        }
        out
    }

    #[test]
    fn test_circular_fifo() {
        let mut queue = CircularQueue::with_capacity(3);

        assert_eq!(queue.enqueue(1), Ok(1));
        assert_eq!(queue.enqueue(2), Ok(2));
        assert_eq!(queue.enqueue(3), Ok(3));
        assert_eq!(queue.enqueue(4), Err(Error::QueueFull { capacity: 3 }));

        assert_eq!(queue.peek(), Ok(1));
        assert_eq!(drain(&mut queue), vec![1, 2, 3]);
        assert_eq!(queue.dequeue(), Err(Error::QueueEmpty));
        assert_eq!(queue.peek(), Err(Error::QueueEmpty));
    }

    #[test]
    fn test_circular_wraps() {
        let mut queue = CircularQueue::with_capacity(3);

        for value in 0..3 {
            queue.enqueue(value).unwrap();
        }
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.dequeue(), Ok(1));

        // `rear` wraps to slot 0 and 1.
        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();

        assert_eq!(queue.as_vec(), vec![2, 3, 4]);
        assert_eq!(queue.len(), 3);
        assert_eq!(drain(&mut queue), vec![2, 3, 4]);
    }

    #[test]
    fn test_circular_clears_vacated_slot() {
        let mut queue = CircularQueue::with_capacity(2);
        queue.enqueue(9).unwrap();
        queue.dequeue().unwrap();

        assert_eq!(&*queue.buf, &[0, 0]);
    }

    #[test]
    fn test_stack_queue_fifo() {
        let mut queue = StackQueue::with_capacity(3);

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.dequeue(), Ok(1));

        // New elements wait behind the transferred ones.
        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();
        assert_eq!(queue.len(), 3);

        assert_eq!(drain(&mut queue), vec![2, 3, 4]);
        assert_eq!(queue.dequeue(), Err(Error::QueueEmpty));
    }

    #[test]
    fn test_stack_queue_full() {
        let mut queue = StackQueue::with_capacity(2);

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.enqueue(3), Err(Error::QueueFull { capacity: 2 }));

        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.enqueue(3), Ok(3));
        assert_eq!(drain(&mut queue), vec![2, 3]);
    }

    #[test]
    fn test_stack_queue_counts_out_stack_against_capacity() {
        let mut stacked = StackQueue::with_capacity(2);
        let mut circular = CircularQueue::with_capacity(2);

        let queues: [&mut dyn Queue; 2] = [&mut stacked, &mut circular];

        for queue in queues {
            queue.enqueue(1).unwrap();
            queue.enqueue(2).unwrap();
            assert_eq!(queue.dequeue(), Ok(1));

            // `2` now waits in the out-stack, leaving room for one more.
            assert_eq!(queue.enqueue(3), Ok(3));
            assert_eq!(queue.enqueue(4), Err(Error::QueueFull { capacity: 2 }));
            assert_eq!(queue.len(), 2);
            assert!(queue.len() <= queue.capacity());

            assert_eq!(drain(queue), vec![2, 3]);
        }
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("array".parse::<QueueKind>(), Ok(QueueKind::Array));
        assert_eq!("stack".parse::<QueueKind>(), Ok(QueueKind::Stack));
        assert!(matches!(
            "Array".parse::<QueueKind>(),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(QueueKind::Stack.to_string(), "stack");
    }

    #[test]
    fn test_new_queue_rejects() {
        assert!(matches!(new_queue("array", 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(new_queue("stack", -3), Err(Error::InvalidArgument(_))));
        assert!(matches!(new_queue("heap", 3), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_new_queue_kinds() {
        let array = new_queue("array", 2).unwrap();
        assert_eq!(array.capacity(), 2);
        assert!(array.is_empty());
        assert!(format!("{:?}", array).starts_with("CircularQueue"));

        let stack = new_queue("stack", 2).unwrap();
        assert!(format!("{:?}", stack).starts_with("StackQueue"));
    }

    #[test]
    fn test_config_build() {
        let config = QueueConfig {
            kind: QueueKind::Stack,
            capacity: 0,
        };
        assert!(config.build().is_err());

        let mut queue = QueueConfig {
            capacity: 1,
            ..config
        }
        .build()
        .unwrap();
        assert_eq!(queue.enqueue(5), Ok(5));
        assert_eq!(queue.enqueue(6), Err(Error::QueueFull { capacity: 1 }));
    }
}
