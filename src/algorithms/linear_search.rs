//! [Linear Search]: Method for finding an element within a sequence. It
//! checks each element in order until a match is found or the whole sequence
//! has been visited.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

/// Returns the position of the first element equal to `target`, or [`None`]
/// if no element matches.
///
/// Any borrowing sequence works: slices, and the iterators of the crate's
/// collections.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Each element is compared at most once, and the scan
/// stops at the first match.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let arr = [11, 4, 30, 110, 20, 2, 70, 45];
///
/// assert_eq!(linear_search(&arr, &4), Some(1));
/// assert_eq!(linear_search(&arr, &40), None);
///
/// let list = linked![3 => 1 => 4];
/// assert_eq!(linear_search(list.iter(), &4), Some(2));
/// ```
pub fn linear_search<'a, T, I>(items: I, target: &T) -> Option<usize>
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().position(|item| *item == *target)
}
