//! A fixed-capacity LIFO stack of integers.

use core::fmt;

use tracing::trace;

use crate::error::{Error, Result};

/// A fixed-capacity LIFO stack of integers.
///
/// The capacity is set at construction and never grows; pushing onto a full
/// stack is an error.
pub struct Stack {
    /// Backing buffer, one slot per unit of capacity.
    buf: Box<[i64]>,
    /// Number of occupied slots. The top element lives at `top - 1`.
    top: usize,
}

impl Stack {
    /// Creates an empty stack able to hold `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let stack = Stack::with_capacity(4);
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity].into_boxed_slice(),
            top: 0,
        }
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackFull`] if the stack is at capacity.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = Stack::with_capacity(1);
    /// assert_eq!(stack.push(7), Ok(()));
    /// assert_eq!(stack.push(8), Err(Error::StackFull { capacity: 1 }));
    /// ```
    pub fn push(&mut self, value: i64) -> Result<()> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "push rejected, stack full");
            return Err(Error::StackFull {
                capacity: self.capacity(),
            });
        }

        self.buf[self.top] = value;
        self.top += 1;

        Ok(())
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackEmpty`] if the stack has no elements.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut stack = Stack::with_capacity(2);
    /// stack.push(1)?;
    /// stack.push(2)?;
    ///
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(Error::StackEmpty));
    /// # Ok::<(), dsa::Error>(())
    /// ```
    pub fn pop(&mut self) -> Result<i64> {
        if self.is_empty() {
            return Err(Error::StackEmpty);
        }

        self.top -= 1;
        Ok(self.buf[self.top])
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackEmpty`] if the stack has no elements.
    #[inline]
    pub fn peek(&self) -> Result<i64> {
        self.as_slice().last().copied().ok_or(Error::StackEmpty)
    }

    /// Returns `true` if the stack has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Returns `true` if another push would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.top == self.buf.len()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.top
    }

    /// Returns the fixed capacity of the stack.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the occupied slots, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.buf[..self.top]
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Stack")
            .field("elements", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}
