//! The circular-buffer deque and its iterators.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::buffer::{wrap_add, wrap_sub, Buffer};
use crate::stats::ResizeStats;
use crate::{fmt_spaced, Deque};

/// Capacity of a freshly constructed [`ArrayDeque`].
pub const INITIAL_CAPACITY: usize = 8;

/// The backing store is never shrunk to fewer slots than this.
pub const MIN_SHRINK_CAPACITY: usize = 16;

/// The store is halved once fewer than `1 / SHRINK_DIVISOR` of its slots are
/// in use.
pub const SHRINK_DIVISOR: usize = 4;

/// A double-ended queue implemented with a resizable circular buffer.
///
/// Elements occupy a contiguous run of slots that may wrap around the end of
/// the buffer. `head` points one slot before the first element and `tail` one
/// slot after the last one.
///
/// The buffer doubles when an element is added to a full deque and halves when
/// a mutation leaves it less than a quarter full, but it is never halved below
/// [`MIN_SHRINK_CAPACITY`] slots.
///
/// ```
/// use dual_deque::ArrayDeque;
///
/// let mut deque = ArrayDeque::new();
/// deque.add_last(2);
/// deque.add_first(1);
/// deque.add_last(3);
///
/// assert_eq!(deque, [1, 2, 3]);
/// assert_eq!(deque.remove_first(), Some(1));
/// assert_eq!(deque.get(5), None);
/// ```
#[derive(Clone)]
pub struct ArrayDeque<T> {
    buf: Buffer<T>,
    size: usize,
    head: usize,
    tail: usize,
    stats: ResizeStats,
}

impl<T> ArrayDeque<T> {
    /// Creates an empty deque with [`INITIAL_CAPACITY`] slots.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let deque: ArrayDeque<u32> = ArrayDeque::new();
    /// assert_eq!(deque.capacity(), 8);
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        ArrayDeque {
            buf: Buffer::new(INITIAL_CAPACITY),
            size: 0,
            head: INITIAL_CAPACITY - 1,
            tail: 0,
            stats: ResizeStats::default(),
        }
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut deque = ArrayDeque::new();
    /// deque.add_last(1);
    /// deque.add_last(3);
    /// assert_eq!(deque.get(1), Some(&3));
    /// ```
    pub fn add_last(&mut self, elem: T) {
        self.resize_if_needed();
        self.buf.put(self.tail, elem);
        self.tail = wrap_add(self.tail, 1, self.capacity());
        self.size += 1;
    }

    /// Prepends an element to the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut deque = ArrayDeque::new();
    /// deque.add_first(1);
    /// deque.add_first(2);
    /// assert_eq!(deque.get(0), Some(&2));
    /// ```
    pub fn add_first(&mut self, elem: T) {
        self.resize_if_needed();
        self.buf.put(self.head, elem);
        self.head = wrap_sub(self.head, 1, self.capacity());
        self.size += 1;
    }

    /// Removes the last element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut deque = ArrayDeque::new();
    /// assert_eq!(deque.remove_last(), None);
    /// deque.add_last(1);
    /// deque.add_last(3);
    /// assert_eq!(deque.remove_last(), Some(3));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        self.tail = wrap_sub(self.tail, 1, self.capacity());
        let elem = self.buf.take(self.tail);
        self.size -= 1;
        self.resize_if_needed();
        elem
    }

    /// Removes the first element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut deque = ArrayDeque::new();
    /// deque.add_last(1);
    /// deque.add_last(2);
    ///
    /// assert_eq!(deque.remove_first(), Some(1));
    /// assert_eq!(deque.remove_first(), Some(2));
    /// assert_eq!(deque.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        self.head = wrap_add(self.head, 1, self.capacity());
        let elem = self.buf.take(self.head);
        self.size -= 1;
        self.resize_if_needed();
        elem
    }

    /// Provides a reference to the element at `index`, or `None` if `index`
    /// is not less than the deque size.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let deque = ArrayDeque::from([3, 4, 5]);
    /// assert_eq!(deque.get(1), Some(&4));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.buf.get(self.slot_of(index))
    }

    /// Provides a mutable reference to the element at `index`, or `None` if
    /// `index` is out of range.
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut deque = ArrayDeque::from([3, 4, 5]);
    /// if let Some(x) = deque.get_mut(1) {
    ///     *x = 7;
    /// }
    /// assert_eq!(deque, [3, 7, 5]);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size {
            return None;
        }
        let slot = self.slot_of(index);
        self.buf.get_mut(slot)
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes all elements and goes back to [`INITIAL_CAPACITY`] slots.
    ///
    /// Resize statistics are kept.
    pub fn clear(&mut self) {
        self.buf = Buffer::new(INITIAL_CAPACITY);
        self.size = 0;
        self.head = INITIAL_CAPACITY - 1;
        self.tail = 0;
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Returns how many times the backing buffer was grown and shrunk.
    pub fn resize_stats(&self) -> ResizeStats {
        self.stats
    }

    /// Returns a front-to-back iterator over the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut deque = ArrayDeque::new();
    /// deque.add_last(5);
    /// deque.add_last(3);
    /// deque.add_first(4);
    ///
    /// let b: &[_] = &[&4, &5, &3];
    /// let c: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.size,
        }
    }

    /// Prints all elements front to back, separated by spaces, to stdout.
    pub fn print_deque(&self)
    where
        T: fmt::Display,
    {
        println!("{self}");
    }

    fn slot_of(&self, index: usize) -> usize {
        wrap_add(self.head, 1 + index, self.capacity())
    }

    fn resize_if_needed(&mut self) {
        let cap = self.capacity();
        if self.size == cap {
            self.resize(cap * 2);
            self.stats.record_grow();
        } else if cap / 2 >= MIN_SHRINK_CAPACITY && self.size * SHRINK_DIVISOR < cap {
            self.resize(cap / 2);
            self.stats.record_shrink();
        }
    }

    fn resize(&mut self, new_cap: usize) {
        let start = wrap_add(self.head, 1, self.capacity());
        self.buf.realloc(new_cap, start, self.size);
        self.head = new_cap - 1;
        self.tail = self.size;
    }
}

impl<T> Deque<T> for ArrayDeque<T> {
    fn add_first(&mut self, elem: T) {
        ArrayDeque::add_first(self, elem);
    }

    fn add_last(&mut self, elem: T) {
        ArrayDeque::add_last(self, elem);
    }

    fn remove_first(&mut self) -> Option<T> {
        ArrayDeque::remove_first(self)
    }

    fn remove_last(&mut self) -> Option<T> {
        ArrayDeque::remove_last(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        ArrayDeque::get(self, index)
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayDeque<T> {
    /// Formats the elements front to back, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_spaced(f, self)
    }
}

impl_partial_eq!(ArrayDeque, [const N: usize] [U; N]);
impl_partial_eq!(ArrayDeque, [const N: usize] &[U; N]);
impl_partial_eq!(ArrayDeque, [] &[U]);
impl_partial_eq!(ArrayDeque, [] Vec<U>);
impl_partial_eq!(ArrayDeque, [] ArrayDeque<U>);
impl_partial_eq!(ArrayDeque, [] crate::LinkedDeque<U>);

impl<T: Eq> Eq for ArrayDeque<T> {}

impl<T: Hash> Hash for ArrayDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayDeque<T> {
    /// Converts a `[T; N]` into an `ArrayDeque<T>`, first element at the front.
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let deque = ArrayDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T> From<Vec<T>> for ArrayDeque<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_iter(value)
    }
}

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for ArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add_last(elem);
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the deque into a front-to-back iterator yielding elements by
    /// value.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

/// An iterator over the elements of an `ArrayDeque`.
///
/// This `struct` is created by the [`iter`] method on [`ArrayDeque`]. See its
/// documentation for more.
///
/// [`iter`]: ArrayDeque::iter
#[derive(Debug)]
pub struct Iter<'a, T> {
    deque: &'a ArrayDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let elem = self.deque.get(self.front);
        self.front += 1;
        elem
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of an `ArrayDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`ArrayDeque`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: ArrayDeque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Debug)]
pub struct IntoIter<T> {
    deque: ArrayDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.size, Some(self.deque.size))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.remove_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
