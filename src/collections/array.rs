//! A contiguous growable array of integers.
//!
//! The backing buffer doubles in length whenever an insert finds it full, and
//! is cut back to the filled prefix after a removal.

use core::cmp;
use core::fmt;
use core::ops::Deref;

use tracing::trace;

use crate::algorithms::linear_search::linear_search;
use crate::error::{Error, Result};

/// Creates a `DynamicArray` containing the arguments.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let arr = array![1, 2, 3];
/// assert_eq!(arr, [1, 2, 3]);
/// assert_eq!(arr.capacity(), 3);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::collections::DynamicArray::new()
    };
    // `$(,)?` allows for a trailing comma.
    ($($elem:expr),* $(,)?) => {{
        let mut arr = $crate::collections::DynamicArray::with_capacity($crate::count![@COUNT; $($elem),*]);
        $(arr.insert($elem);)*
        arr
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! count {
    (@COUNT; $($elem:expr),*) => {
        // For every `$elem`, create an array, substituting the `$elem` with
        // unit, take a reference to it, and invoke the len implementation for
        // a slice of unit values.
        <[()]>::len(&[$($crate::count![@SUBST; $elem]),*])
    };
    (@SUBST; $elem:expr) => { () };
}

/// A contiguous growable array of integers.
pub struct DynamicArray {
    /// Backing buffer. Slots at or past `len` hold no logical element.
    buf: Box<[i64]>,
    /// Number of filled slots.
    len: usize,
}

impl DynamicArray {
    /// Constructs a new, empty `DynamicArray` with no backing storage.
    ///
    /// The first insert allocates a single slot.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `DynamicArray` whose backing buffer holds
    /// exactly `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut arr = DynamicArray::with_capacity(2);
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 2);
    ///
    /// arr.insert(10);
    /// arr.insert(20);
    /// assert_eq!(arr.capacity(), 2);
    ///
    /// arr.insert(30);
    /// assert_eq!(arr.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Appends an element after the last filled slot.
    ///
    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time. If the backing buffer is full, *O*(*n*)
    /// time is taken to copy the elements into a buffer of twice the length.
    /// This expensive operation is offset by the *n* *O*(1) inserts it
    /// allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut arr = array![1, 2];
    /// arr.insert(3);
    /// assert_eq!(arr, [1, 2, 3]);
    /// ```
    pub fn insert(&mut self, item: i64) {
        if self.len == self.buf.len() {
            self.grow();
        }

        self.buf[self.len] = item;
        self.len += 1;
    }

    /// Removes the element at `index`, shifting all elements after it to the
    /// left, and returns it.
    ///
    /// The backing buffer is shrunk to the remaining filled prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a filled position.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. All items after the removal index are shifted and
    /// the remaining prefix is copied into the shrunk buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut arr = array![10, 11, 12, 13];
    ///
    /// assert_eq!(arr.remove_at(2), Ok(12));
    /// assert_eq!(arr, [10, 11, 13]);
    /// assert!(arr.remove_at(3).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let removed = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;

        trace!(from = self.buf.len(), to = self.len, "shrinking array backing");
        self.buf = Box::from(&self.buf[..self.len]);

        Ok(removed)
    }

    /// Returns the position of the first filled slot equal to `item`, or
    /// [`None`] if it is not present.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Only the filled prefix is scanned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let arr = array![4, 8, 15, 8];
    /// assert_eq!(arr.index_of(8), Some(1));
    /// assert_eq!(arr.index_of(0), None);
    /// ```
    #[inline]
    pub fn index_of(&self, item: i64) -> Option<usize> {
        linear_search(self.as_slice(), &item)
    }

    /// Returns `true` if a filled slot equals `item`.
    #[inline]
    pub fn contains(&self, item: i64) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns the element at `index`, or [`None`] if it is not filled.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.as_slice().get(index).copied()
    }

    /// Returns a read-only view of the filled prefix.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. No elements are copied.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.buf[..self.len]
    }

    /// Returns the number of filled slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array has no filled slots.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn grow(&mut self) {
        // Allocations of `i64` exhaust memory long before the doubling could
        // overflow `usize`.
        let new_cap = cmp::max(self.buf.len() * 2, 1);

        trace!(from = self.buf.len(), to = new_cap, "growing array backing");

        let mut new_buf = vec![0; new_cap].into_boxed_slice();
        new_buf[..self.len].copy_from_slice(self.as_slice());
        self.buf = new_buf;
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl Clone for DynamicArray {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl Deref for DynamicArray {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        self.as_slice()
    }
}

impl Extend<i64> for DynamicArray {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl FromIterator<i64> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a i64;
    type IntoIter = core::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($vars)*> PartialEq<$rhs> for $lhs {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
        }
    }
}

impl_slice_eq! { [] DynamicArray, DynamicArray }
impl_slice_eq! { [] DynamicArray, &[i64] }
impl_slice_eq! { [] DynamicArray, [i64] }
impl_slice_eq! { [] [i64], DynamicArray }
impl_slice_eq! { [const N: usize] DynamicArray, [i64; N] }
impl_slice_eq! { [const N: usize] DynamicArray, &[i64; N] }

impl Eq for DynamicArray {}
