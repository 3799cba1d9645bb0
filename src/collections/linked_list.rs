//! A [singly-linked list] of integers with owned nodes.
//!
//! The list keeps pointers to both its `head` and `tail`, so appending and
//! prepending are *constant* time. Nodes only link forward, which makes
//! removing the last node a linear walk.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use tracing::debug;

use crate::algorithms::linear_search::linear_search;
use crate::error::{Error, Result};

/// Creates a `LinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let mut list = linked![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.remove_first(), Ok(1));
/// assert_eq!(list.remove_first(), Ok(2));
/// assert_eq!(list.remove_first(), Ok(3));
/// ```
#[macro_export]
macro_rules! linked {
    ($($elem:expr)=>*) => {{
        #[allow(unused_mut)]
        let mut list = $crate::collections::LinkedList::new();
        $(list.add_last($elem);)*
        list
    }};
}

/// A [singly-linked list] of integers with owned nodes.
///
/// [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list
pub struct LinkedList {
    /// Pointer to the head of the list.
    head: Option<NonNull<Node>>,
    /// Pointer to the tail of the list. Its `next` is always [`None`].
    tail: Option<NonNull<Node>>,
    /// Number of allocated nodes in the list.
    len: usize,
    /// In order to tell the drop checker that we own the boxed nodes.
    _marker: PhantomData<Box<Node>>,
}

struct Node {
    /// Pointer to the next node.
    next: Option<NonNull<Node>>,
    /// Value the node owns.
    value: i64,
}

/// An iterator over the values of a `LinkedList`, from head to tail.
#[derive(Debug)]
pub struct Iter<'a> {
    /// Next node to yield.
    head: Option<NonNull<Node>>,
    /// Number of nodes left to yield.
    len: usize,
    _marker: PhantomData<&'a Node>,
}

impl LinkedList {
    /// Creates a new, empty `LinkedList`.
    ///
    /// The list will not allocate until values are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let list = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Appends a value to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The list maintains a reference to the `tail`, so no
    /// traversal is needed to find the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(3);
    /// list.add_last(4);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.first(), Some(3));
    /// assert_eq!(list.last(), Some(4));
    /// ```
    pub fn add_last(&mut self, value: i64) {
        let node = Self::alloc_node(value, None);

        match self.tail {
            // SAFETY: `tail` points to a live node owned by this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Prepends a value to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Only the `head` pointer is manipulated, regardless
    /// of the number of nodes within the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(3);
    /// list.add_first(4);
    ///
    /// assert_eq!(list.to_array(), vec![4, 3]);
    /// ```
    pub fn add_first(&mut self, value: i64) {
        let node = Self::alloc_node(value, self.head);

        if self.tail.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the last node of the list and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListEmpty`] if the list has no nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Nodes carry no back-links, so the list is walked
    /// from the `head` to find the node preceding the `tail`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut list = linked![1 => 2];
    ///
    /// assert_eq!(list.remove_last(), Ok(2));
    /// assert_eq!(list.remove_last(), Ok(1));
    /// assert_eq!(list.remove_last(), Err(Error::ListEmpty));
    /// ```
    pub fn remove_last(&mut self) -> Result<i64> {
        let tail = self.tail.ok_or(Error::ListEmpty)?;

        if self.head == Some(tail) {
            self.head = None;
            self.tail = None;
        } else {
            let mut prev = self.head.ok_or(Error::ListEmpty)?;

            // SAFETY: every pointer reached from `head` is a live node owned by
            // this list, and `tail` is reachable since the list has two or more
            // nodes.
            unsafe {
                while let Some(next) = (*prev.as_ptr()).next {
                    if next == tail {
                        break;
                    }
                    prev = next;
                }

                (*prev.as_ptr()).next = None;
            }

            self.tail = Some(prev);
        }

        self.len -= 1;

        // SAFETY: `tail` was allocated by `alloc_node` and is now unlinked.
        let boxed_node = unsafe { Box::from_raw(tail.as_ptr()) };
        Ok(boxed_node.value)
    }

    /// Removes the first node of the list and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListEmpty`] if the list has no nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The `head` advances to its successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut list = linked![5 => 4];
    ///
    /// assert_eq!(list.remove_first(), Ok(5));
    /// assert_eq!(list.remove_first(), Ok(4));
    /// assert!(list.remove_first().is_err());
    /// assert_eq!(list.last(), None);
    /// ```
    pub fn remove_first(&mut self) -> Result<i64> {
        let head = self.head.ok_or(Error::ListEmpty)?;

        // SAFETY: `head` was allocated by `alloc_node` and is owned by this
        // list.
        let mut boxed_node = unsafe { Box::from_raw(head.as_ptr()) };

        self.head = boxed_node.next.take();

        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;

        Ok(boxed_node.value)
        // `boxed_node` handles its deallocation...
    }

    /// Returns the position of the first node holding `value`, or [`None`] if
    /// no node does.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed from the `head`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let list = linked![10 => 20 => 30 => 20];
    ///
    /// assert_eq!(list.index_of(20), Some(1));
    /// assert_eq!(list.index_of(40), None);
    /// ```
    #[inline]
    pub fn index_of(&self, value: i64) -> Option<usize> {
        linear_search(self.iter(), &value)
    }

    /// Returns `true` if a node holds `value`.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value of the first node, or [`None`] if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<i64> {
        // SAFETY: `head` is a live node owned by this list.
        self.head.map(|head| unsafe { (*head.as_ptr()).value })
    }

    /// Returns the value of the last node, or [`None`] if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<i64> {
        // SAFETY: `tail` is a live node owned by this list.
        self.tail.map(|tail| unsafe { (*tail.as_ptr()).value })
    }

    /// Copies the values of the list, from head to tail, into a `Vec`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time.
    #[inline]
    pub fn to_array(&self) -> Vec<i64> {
        self.iter().copied().collect()
    }

    /// Provides a forward iterator over the values of the list.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            head: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Reverses the order of the nodes in place.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Every `next` pointer is flipped once, then `head`
    /// and `tail` are swapped. No nodes are allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let mut list = linked![1 => 2 => 3];
    /// list.reverse();
    ///
    /// assert_eq!(list.to_array(), vec![3, 2, 1]);
    /// assert_eq!(list.last(), Some(1));
    /// ```
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut prev: Option<NonNull<Node>> = None;
        let mut curr = self.head;

        while let Some(node) = curr {
            // SAFETY: `node` is a live node owned by this list.
            unsafe {
                curr = (*node.as_ptr()).next;
                (*node.as_ptr()).next = prev;
            }
            prev = Some(node);
        }

        // The old `head` had its `next` cleared on the first iteration.
        mem::swap(&mut self.head, &mut self.tail);

        debug!(len = self.len, "reversed linked list");
    }

    /// Returns the value of the `k`-th node counted from the end, where `k`
    /// of 1 is the last node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `k` is 0, and
    /// [`Error::IndexOutOfRange`] if the list has fewer than `k` nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time in a single pass. A lead pointer is advanced
    /// `k - 1` nodes, then the lead and a trailing pointer move in lockstep
    /// until the lead reaches the `tail`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::prelude::*;
    ///
    /// let list = linked![10 => 20 => 30 => 40];
    ///
    /// assert_eq!(list.get_kth_from_the_end(1), Ok(40));
    /// assert_eq!(list.get_kth_from_the_end(3), Ok(20));
    /// assert!(list.get_kth_from_the_end(5).is_err());
    /// ```
    pub fn get_kth_from_the_end(&self, k: usize) -> Result<i64> {
        if k == 0 {
            return Err(Error::InvalidArgument("k must be greater than 0".to_string()));
        }

        let out_of_range = || Error::IndexOutOfRange {
            index: k,
            len: self.len,
        };

        let mut lead = self.head.ok_or_else(out_of_range)?;
        let mut trail = lead;

        // SAFETY: every pointer reached from `head` is a live node owned by
        // this list.
        unsafe {
            for _ in 1..k {
                lead = (*lead.as_ptr()).next.ok_or_else(out_of_range)?;
            }

            while let (Some(l), Some(t)) = ((*lead.as_ptr()).next, (*trail.as_ptr()).next) {
                lead = l;
                trail = t;
            }

            Ok((*trail.as_ptr()).value)
        }
    }

    fn alloc_node(value: i64, next: Option<NonNull<Node>>) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(Node { next, value })))
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        while self.remove_first().is_ok() {}
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl Extend<i64> for LinkedList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl FromIterator<i64> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            // SAFETY: `len > 0` means `head` is a live node of the borrowed
            // list, which outlives `'a`.
            self.head.map(|head| unsafe {
                self.len -= 1;
                self.head = (*head.as_ptr()).next;
                &(*head.as_ptr()).value
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.len
    }
}

unsafe impl Send for LinkedList {}
unsafe impl Sync for LinkedList {}

unsafe impl<'a> Send for Iter<'a> {}
unsafe impl<'a> Sync for Iter<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_front() {
        let mut list = LinkedList::new();

        // Try to break an empty list
        assert_eq!(list.len(), 0);
        assert_eq!(list.remove_first(), Err(Error::ListEmpty));
        assert_eq!(list.len(), 0);

        // Try to break a one item list
        list.add_first(10);
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove_first(), Ok(10));
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);

        // Mess around
        list.add_first(10);
        list.add_first(20);
        list.add_first(30);
        assert_eq!(list.len(), 3);
        assert_eq!(list.remove_first(), Ok(30));
        list.add_first(40);
        assert_eq!(list.remove_first(), Ok(40));
        assert_eq!(list.remove_first(), Ok(20));
        assert_eq!(list.remove_first(), Ok(10));
        assert_eq!(list.len(), 0);
        assert_eq!(list.remove_first(), Err(Error::ListEmpty));
    }

    #[test]
    fn test_basic_back() {
        let mut list = LinkedList::new();
        assert_eq!(list.remove_last(), Err(Error::ListEmpty));

        list.add_last(1);
        assert_eq!(list.first(), Some(1));
        assert_eq!(list.last(), Some(1));
        assert_eq!(list.remove_last(), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.first(), None);

        list.add_last(1);
        list.add_last(2);
        list.add_last(3);
        assert_eq!(list.remove_last(), Ok(3));
        assert_eq!(list.last(), Some(2));
        list.add_last(4);
        assert_eq!(list.to_array(), vec![1, 2, 4]);
        assert_eq!(list.remove_last(), Ok(4));
        assert_eq!(list.remove_last(), Ok(2));
        assert_eq!(list.remove_last(), Ok(1));
        assert_eq!(list.remove_last(), Err(Error::ListEmpty));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_mixed_ends() {
        let mut list = LinkedList::new();
        list.add_first(0);
        for i in 1..=4 {
            list.add_last(i);
        }

        assert_eq!(list.len(), 5);
        assert_eq!(list.to_array(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_index_of_and_contains() {
        let list = linked![7 => 8 => 9];

        assert_eq!(list.index_of(7), Some(0));
        assert_eq!(list.index_of(9), Some(2));
        assert_eq!(list.index_of(1), None);
        assert!(list.contains(8));
        assert!(!list.contains(10));
        assert_eq!(LinkedList::new().index_of(0), None);
    }

    #[test]
    fn test_reverse() {
        let mut empty = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut single = linked![1];
        single.reverse();
        assert_eq!(single.to_array(), vec![1]);

        let mut list = linked![1 => 2 => 3 => 4];
        list.reverse();
        assert_eq!(list.to_array(), vec![4, 3, 2, 1]);
        assert_eq!(list.first(), Some(4));
        assert_eq!(list.last(), Some(1));

        // Tail must be detached, so appending after a reverse stays linear.
        list.add_last(0);
        assert_eq!(list.to_array(), vec![4, 3, 2, 1, 0]);

        list.reverse();
        assert_eq!(list.to_array(), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.remove_last(), Ok(4));
    }

    #[test]
    fn test_kth_from_the_end() {
        let list = linked![1 => 2 => 3];

        assert_eq!(list.get_kth_from_the_end(1), Ok(3));
        assert_eq!(list.get_kth_from_the_end(2), Ok(2));
        assert_eq!(list.get_kth_from_the_end(3), Ok(1));
        assert_eq!(
            list.get_kth_from_the_end(4),
            Err(Error::IndexOutOfRange { index: 4, len: 3 })
        );
        assert!(matches!(
            list.get_kth_from_the_end(0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_kth_from_the_end_empty() {
        let list = LinkedList::new();
        assert_eq!(
            list.get_kth_from_the_end(1),
            Err(Error::IndexOutOfRange { index: 1, len: 0 })
        );
    }

    #[test]
    fn test_iter() {
        let list: LinkedList = (1..=3).collect();
        let mut iter = list.iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);

        let sum: i64 = (&list).into_iter().sum();
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_eq() {
        let a = linked![1 => 2];
        let mut b = LinkedList::new();
        b.add_first(2);
        b.add_first(1);

        assert_eq!(a, b);
        b.add_last(3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug() {
        let list = linked![0 => 1 => 2];
        assert_eq!(format!("{:?}", list), "[0, 1, 2]");

        let empty = LinkedList::new();
        assert_eq!(format!("{:?}", empty), "[]");
    }

    #[test]
    fn test_drop_long_list() {
        let mut list = LinkedList::new();
        for i in 0..100_000 {
            list.add_last(i);
        }
        drop(list);
    }
}
