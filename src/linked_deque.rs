//! The sentinel-ring linked deque, its node cursor and its iterators.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::node::{NodeId, Nodes, SENTINEL};
use crate::{fmt_spaced, Deque};

/// A double-ended queue implemented as a doubly linked ring closed by a
/// sentinel node.
///
/// The sentinel is always present, so adding and removing at either end never
/// has to special-case an empty deque. The first element is the sentinel's
/// `next` and the last one its `prev`.
///
/// ```
/// use dual_deque::LinkedDeque;
///
/// let mut deque = LinkedDeque::new();
/// deque.add_last('b');
/// deque.add_first('a');
///
/// assert_eq!(deque.get(1), Some(&'b'));
/// assert_eq!(deque.get_recursive(1), Some(&'b'));
/// assert_eq!(deque.remove_last(), Some('b'));
/// assert_eq!(deque.get(1), None);
/// ```
#[derive(Clone)]
pub struct LinkedDeque<T> {
    nodes: Nodes<T>,
    size: usize,
}

impl<T> LinkedDeque<T> {
    /// Creates an empty deque holding only its sentinel.
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let deque: LinkedDeque<u32> = LinkedDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        LinkedDeque {
            nodes: Nodes::with_sentinel(),
            size: 0,
        }
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// deque.add_last(1);
    /// deque.add_last(3);
    /// assert_eq!(deque.get(1), Some(&3));
    /// ```
    pub fn add_last(&mut self, elem: T) {
        let id = self.alloc(elem);
        let last = self.nodes.prev(SENTINEL).unwrap_or(SENTINEL);
        self.nodes.set_next(last, Some(id));
        self.nodes.set_next(id, Some(SENTINEL));
        self.size += 1;
    }

    /// Prepends an element to the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// deque.add_first(1);
    /// deque.add_first(2);
    /// assert_eq!(deque.get(0), Some(&2));
    /// ```
    pub fn add_first(&mut self, elem: T) {
        let id = self.alloc(elem);
        let first = self.nodes.next(SENTINEL).unwrap_or(SENTINEL);
        self.nodes.set_prev(first, Some(id));
        self.nodes.set_prev(id, Some(SENTINEL));
        self.size += 1;
    }

    /// Removes the first element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
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

        let target = self.nodes.next(SENTINEL)?;
        let after = self.nodes.next(target)?;
        self.nodes.set_next(SENTINEL, Some(after));
        self.size -= 1;
        let elem = self.nodes.release(target);
        self.reclaim();
        elem
    }

    /// Removes the last element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// assert_eq!(deque.remove_last(), None);
    /// deque.add_last(1);
    /// deque.add_last(3);
    /// assert_eq!(deque.remove_last(), Some(3));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        let target = self.nodes.prev(SENTINEL)?;
        let before = self.nodes.prev(target)?;
        self.nodes.set_prev(SENTINEL, Some(before));
        self.size -= 1;
        let elem = self.nodes.release(target);
        self.reclaim();
        elem
    }

    /// Provides a reference to the element at `index`, or `None` if `index`
    /// is not less than the deque size.
    ///
    /// Walks the ring from the front, so this takes *O*(`index`) time.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from([3, 4, 5]);
    /// assert_eq!(deque.get(1), Some(&4));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.nodes.element(self.node_at(index)?)
    }

    /// Same as [`get`](LinkedDeque::get), but walks the ring by recursing
    /// on each node's successor instead of looping.
    ///
    /// Returns `None` if `index` is out of range, or if the walk comes back to
    /// the sentinel before reaching `index`.
    ///
    /// Each step is a stack frame, so stack use grows with `index` and a large
    /// enough index overflows the thread's stack. Prefer
    /// [`get`](LinkedDeque::get) on long deques.
    pub fn get_recursive(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.get_recursive_from(self.nodes.next(SENTINEL)?, index)
    }

    fn get_recursive_from(&self, id: NodeId, index: usize) -> Option<&T> {
        if id == SENTINEL {
            return None;
        }
        match index {
            0 => self.nodes.element(id),
            _ => self.get_recursive_from(self.nodes.next(id)?, index - 1),
        }
    }

    /// Provides a mutable reference to the element at `index`, or `None` if
    /// `index` is out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size {
            return None;
        }
        let id = self.node_at(index)?;
        self.nodes.element_mut(id)
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

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.size = 0;
    }

    /// Returns a cursor on the first node, or `None` if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from(['a', 'b']);
    ///
    /// let first = deque.front_node().unwrap();
    /// assert_eq!(first.element(), &'a');
    /// assert!(!first.has_prev());
    ///
    /// let second = first.next().unwrap();
    /// assert_eq!(second.element(), &'b');
    /// assert!(second.next().is_none());
    /// assert_eq!(second.prev().map(|n| *n.element()), Some('a'));
    /// ```
    pub fn front_node(&self) -> Option<NodeRef<'_, T>> {
        NodeRef::new(&self.nodes, self.nodes.next(SENTINEL))
    }

    /// Returns a cursor on the last node, or `None` if the deque is empty.
    pub fn back_node(&self) -> Option<NodeRef<'_, T>> {
        NodeRef::new(&self.nodes, self.nodes.prev(SENTINEL))
    }

    /// Returns a front-to-back iterator over the deque.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.nodes.next(SENTINEL).unwrap_or(SENTINEL),
            back: self.nodes.prev(SENTINEL).unwrap_or(SENTINEL),
            remaining: self.size,
        }
    }

    /// Prints all elements front to back, separated by spaces, to stdout.
    pub fn print_deque(&self)
    where
        T: fmt::Display,
    {
        println!("{self}");
    }

    fn alloc(&mut self, elem: T) -> NodeId {
        let id = self.nodes.alloc(elem);
        debug_assert!(!self.nodes.has_prev(id) && !self.nodes.has_next(id));
        id
    }

    /// Gives released nodes back: all of them once the deque is empty,
    /// otherwise whenever most of the arena is released.
    fn reclaim(&mut self) {
        if self.size == 0 {
            self.nodes.clear();
        } else {
            self.nodes.compact();
        }
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        let mut id = self.nodes.next(SENTINEL)?;
        for _ in 0..index {
            id = self.nodes.next(id)?;
        }
        Some(id)
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    fn add_first(&mut self, elem: T) {
        LinkedDeque::add_first(self, elem);
    }

    fn add_last(&mut self, elem: T) {
        LinkedDeque::add_last(self, elem);
    }

    fn remove_first(&mut self) -> Option<T> {
        LinkedDeque::remove_first(self)
    }

    fn remove_last(&mut self) -> Option<T> {
        LinkedDeque::remove_last(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        LinkedDeque::get(self, index)
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedDeque<T> {
    /// Formats the elements front to back, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_spaced(f, self)
    }
}

impl_partial_eq!(LinkedDeque, [const N: usize] [U; N]);
impl_partial_eq!(LinkedDeque, [const N: usize] &[U; N]);
impl_partial_eq!(LinkedDeque, [] &[U]);
impl_partial_eq!(LinkedDeque, [] Vec<U>);
impl_partial_eq!(LinkedDeque, [] LinkedDeque<U>);
impl_partial_eq!(LinkedDeque, [] crate::ArrayDeque<U>);

impl<T: Eq> Eq for LinkedDeque<T> {}

impl<T: Hash> Hash for LinkedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedDeque<T> {
    /// Converts a `[T; N]` into a `LinkedDeque<T>`, first element at the front.
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T> From<Vec<T>> for LinkedDeque<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_iter(value)
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add_last(elem);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

/// A read-only cursor on a node of a [`LinkedDeque`].
///
/// Navigation never yields the sentinel: [`next`](NodeRef::next) on the back
/// node and [`prev`](NodeRef::prev) on the front node return `None`.
pub struct NodeRef<'a, T> {
    nodes: &'a Nodes<T>,
    id: NodeId,
    element: &'a T,
}

impl<'a, T> NodeRef<'a, T> {
    fn new(nodes: &'a Nodes<T>, id: Option<NodeId>) -> Option<Self> {
        let id = id?;
        // the sentinel is the only linked node without an element
        let element = nodes.element(id)?;
        Some(NodeRef { nodes, id, element })
    }

    /// The element stored in this node.
    pub fn element(&self) -> &'a T {
        self.element
    }

    /// The node after this one, if it is not the sentinel.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::new(self.nodes, self.nodes.next(self.id))
    }

    /// The node before this one, if it is not the sentinel.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::new(self.nodes, self.nodes.prev(self.id))
    }

    /// Returns `true` if another element follows this one.
    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }

    /// Returns `true` if another element precedes this one.
    pub fn has_prev(&self) -> bool {
        self.prev().is_some()
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.element).finish()
    }
}

/// An iterator over the elements of a `LinkedDeque`.
///
/// This `struct` is created by the [`iter`] method on [`LinkedDeque`].
///
/// [`iter`]: LinkedDeque::iter
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front;
        self.front = self.nodes.next(id)?;
        self.remaining -= 1;
        self.nodes.element(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back;
        self.back = self.nodes.prev(id)?;
        self.remaining -= 1;
        self.nodes.element(id)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.remaining).finish()
    }
}

/// An owning iterator over the elements of a `LinkedDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`LinkedDeque`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: LinkedDeque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Debug)]
pub struct IntoIter<T> {
    deque: LinkedDeque<T>,
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
