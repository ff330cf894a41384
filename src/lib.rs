#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings))))]

//! Two double-ended queues behind one contract, for comparing an array-backed
//! ring with a linked ring.
//!
//! # [`ArrayDeque`] vs [`LinkedDeque`]
//!
//! ## Storage
//!
//! [`ArrayDeque`] keeps its elements in a circular buffer. The buffer doubles
//! when it is full and halves when less than a quarter of it is in use, so
//! indexed access is *O*(1) and adding is amortized *O*(1).
//!
//! [`LinkedDeque`] keeps one node per element in a doubly linked ring closed
//! by a sentinel node. Adding and removing at the ends is *O*(1) without any
//! reallocation of existing elements, but indexed access walks the ring and is
//! *O*(n).
//!
//! ## Absent values
//!
//! Neither deque panics on caller input. Removing from an empty deque and
//! reading past the last element both return `None`:
//!
//! ```
//! use dual_deque::{ArrayDeque, Deque, LinkedDeque};
//!
//! fn check<D: Deque<u8> + Default>() {
//!     let mut deque = D::default();
//!     assert_eq!(deque.remove_first(), None);
//!     assert_eq!(deque.remove_last(), None);
//!     assert_eq!(deque.get(0), None);
//! }
//!
//! check::<ArrayDeque<u8>>();
//! check::<LinkedDeque<u8>>();
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for both deques, as sequences.

use std::fmt;

macro_rules! impl_partial_eq {
    ($deque:ident, [$($n:tt)*] $rhs:ty) => {
        impl<T, U, $($n)*> PartialEq<$rhs> for $deque<T>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: & $rhs) -> bool {
                self.iter().eq(other.iter())
            }
        }
    };
}

pub use array_deque::{ArrayDeque, INITIAL_CAPACITY, MIN_SHRINK_CAPACITY, SHRINK_DIVISOR};
pub use linked_deque::{LinkedDeque, NodeRef};
pub use stats::ResizeStats;

pub mod array_deque;
mod buffer;
pub mod linked_deque;
mod node;
mod stats;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod drop_tracker;

/// Operations shared by [`ArrayDeque`] and [`LinkedDeque`].
///
/// Element 0 is the front of the deque. Every method reports a missing element
/// with `None` instead of panicking.
///
/// # Example
///
/// ```
/// use dual_deque::{ArrayDeque, Deque, LinkedDeque};
///
/// fn fill<D: Deque<char>>(deque: &mut D) {
///     deque.add_last('b');
///     deque.add_first('a');
/// }
///
/// let mut array = ArrayDeque::new();
/// let mut linked = LinkedDeque::new();
/// fill(&mut array);
/// fill(&mut linked);
///
/// assert_eq!(array, linked);
/// ```
pub trait Deque<T> {
    /// Prepends an element.
    fn add_first(&mut self, elem: T);

    /// Appends an element.
    fn add_last(&mut self, elem: T);

    /// Removes and returns the front element, or `None` if the deque is empty.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the back element, or `None` if the deque is empty.
    fn remove_last(&mut self) -> Option<T>;

    /// Returns the element at `index`, or `None` if `index >= self.size()`.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

fn fmt_spaced<'a, T, I>(f: &mut fmt::Formatter<'_>, elems: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut elems = elems.into_iter();
    if let Some(first) = elems.next() {
        write!(f, "{first}")?;
        for elem in elems {
            write!(f, " {elem}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{ArrayDeque, Deque, LinkedDeque};

    fn exercise<D: Deque<i32> + Default>() {
        let mut deque = D::default();
        assert!(deque.is_empty());

        deque.add_last(2);
        deque.add_first(1);
        deque.add_last(3);
        assert_eq!(deque.size(), 3);
        assert_eq!(deque.get(0), Some(&1));
        assert_eq!(deque.get(2), Some(&3));
        assert_eq!(deque.get(3), None);

        assert_eq!(deque.remove_last(), Some(3));
        assert_eq!(deque.remove_first(), Some(1));
        assert_eq!(deque.remove_first(), Some(2));
        assert_eq!(deque.remove_first(), None);
        assert!(deque.is_empty());
    }

    #[test]
    fn array_deque_contract() {
        exercise::<ArrayDeque<i32>>();
    }

    #[test]
    fn linked_deque_contract() {
        exercise::<LinkedDeque<i32>>();
    }
}
