//! Arena of doubly linked nodes backing [`LinkedDeque`](crate::LinkedDeque).
//!
//! Nodes are addressed by [`NodeId`]. Slot 0 is the sentinel: it holds no
//! element and is never released. Links are only changed through
//! [`Nodes::set_next`] and [`Nodes::set_prev`], which update the neighbor's
//! opposite link in the same call.
//!
//! Released slots are recycled first. Once more than half of a large arena is
//! released, [`Nodes::compact`] moves the live nodes into a fresh, tightly
//! sized arena.

use std::mem;

/// Index of a node inside a [`Nodes`] arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// The permanent sentinel node.
pub const SENTINEL: NodeId = NodeId(0);

/// Arenas of at most this many slots are never compacted.
pub const MIN_COMPACT_SLOTS: usize = 16;

#[derive(Clone, Debug)]
struct Node<T> {
    element: Option<T>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    fn detached(element: Option<T>) -> Self {
        Node {
            element,
            prev: None,
            next: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Nodes<T> {
    slots: Vec<Node<T>>,
    free: Vec<NodeId>,
}

impl<T> Nodes<T> {
    /// Creates an arena holding only the sentinel, linked to itself.
    pub fn with_sentinel() -> Self {
        let mut nodes = Nodes {
            slots: vec![Node::detached(None)],
            free: Vec::new(),
        };
        nodes.set_next(SENTINEL, Some(SENTINEL));
        nodes
    }

    /// Allocates a detached node holding `element`, reusing a released slot
    /// when there is one.
    pub fn alloc(&mut self, element: T) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.set_element(id, element);
                id
            }
            None => {
                self.slots.push(Node::detached(Some(element)));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the element out of a node and clears both of its links, without
    /// touching its former neighbors. The slot becomes available to
    /// [`alloc`](Nodes::alloc).
    pub fn release(&mut self, id: NodeId) -> Option<T> {
        debug_assert_ne!(id, SENTINEL, "the sentinel can't be released");

        let node = self.node_mut(id);
        node.prev = None;
        node.next = None;
        let element = node.element.take();
        self.free.push(id);
        element
    }

    /// Drops every node except the sentinel and closes the ring on it.
    pub fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots.shrink_to(MIN_COMPACT_SLOTS);
        self.free.clear();
        self.free.shrink_to(MIN_COMPACT_SLOTS);
        self.set_next(SENTINEL, Some(SENTINEL));
    }

    /// Rebuilds the arena from the ring when more than half of its slots are
    /// released, keeping ring order. Node ids are not stable across a
    /// compaction.
    ///
    /// Returns `true` if the arena was rebuilt.
    pub fn compact(&mut self) -> bool {
        if self.slots.len() <= MIN_COMPACT_SLOTS || self.free.len() * 2 <= self.slots.len() {
            return false;
        }

        let live = self.slots.len() - self.free.len();
        let mut old = mem::replace(
            self,
            Nodes {
                slots: Vec::with_capacity(live),
                free: Vec::new(),
            },
        );
        self.slots.push(Node::detached(None));

        let mut last = SENTINEL;
        let mut cursor = old.next(SENTINEL);
        while let Some(id) = cursor.filter(|&id| id != SENTINEL) {
            cursor = old.next(id);
            let element = old.node_mut(id).element.take();
            self.slots.push(Node::detached(element));
            let moved = NodeId(self.slots.len() - 1);
            self.set_next(last, Some(moved));
            last = moved;
        }
        self.set_next(last, Some(SENTINEL));
        true
    }

    /// Replaces the element of a node, returning the previous one.
    pub fn set_element(&mut self, id: NodeId, element: T) -> Option<T> {
        self.node_mut(id).element.replace(element)
    }

    #[inline]
    pub fn element(&self, id: NodeId) -> Option<&T> {
        self.node(id).element.as_ref()
    }

    #[inline]
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).element.as_mut()
    }

    /// Points `id` forward to `next`, and `next` back to `id`.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.node_mut(id).next = next;
        if let Some(next) = next {
            self.node_mut(next).prev = Some(id);
        }
    }

    /// Points `id` back to `prev`, and `prev` forward to `id`.
    pub fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        self.node_mut(id).prev = prev;
        if let Some(prev) = prev {
            self.node_mut(prev).next = Some(id);
        }
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    #[inline]
    pub fn has_next(&self, id: NodeId) -> bool {
        self.node(id).next.is_some()
    }

    #[inline]
    pub fn has_prev(&self, id: NodeId) -> bool {
        self.node(id).prev.is_some()
    }

    #[cfg(test)]
    pub fn slots_len(&self) -> usize {
        self.slots.len()
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.slots[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.slots[id.0]
    }
}
