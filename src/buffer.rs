use std::iter;

/// Fixed-length slot storage for [`ArrayDeque`](crate::ArrayDeque).
///
/// Every slot is either occupied or `None`. The buffer never changes length in
/// place; [`realloc`](Buffer::realloc) replaces the whole store.
#[derive(Clone, Debug)]
pub struct Buffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Buffer<T> {
    pub fn new(cap: usize) -> Self {
        assert!(cap > 0, "can't allocate a zero length buffer");

        Buffer {
            slots: empty_slots(cap),
        }
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots[index].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots[index].as_mut()
    }

    /// Stores `elem` in a slot that must be vacant.
    #[inline]
    pub fn put(&mut self, index: usize, elem: T) {
        let previous = self.slots[index].replace(elem);
        debug_assert!(previous.is_none(), "slot {index} was occupied");
    }

    /// Reads and clears a slot.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Replaces the store with one of `new_cap` slots, moving the circular run
    /// of `len` elements that starts at `start` into slots `0..len`.
    ///
    /// The run is moved as two segments: the part between `start` and the end
    /// of the old store, then the part that wrapped around to slot 0.
    pub fn realloc(&mut self, new_cap: usize, start: usize, len: usize) {
        assert!(new_cap >= len, "new capacity can't hold the elements");
        assert!(new_cap > 0, "can't realloc to zero length");

        let cap = self.cap();
        let contiguous = len.min(cap - start);
        let wrapped = len - contiguous;

        let mut slots = empty_slots(new_cap);
        let (front, back) = self.slots.split_at_mut(start);
        let run = back[..contiguous].iter_mut().chain(&mut front[..wrapped]);
        for (dst, src) in slots.iter_mut().zip(run) {
            *dst = src.take();
        }

        self.slots = slots;
    }
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

/// Advances `index` by `addend` positions around a ring of `cap` slots.
#[inline]
pub fn wrap_add(index: usize, addend: usize, cap: usize) -> usize {
    wrap_index(index + addend, cap)
}

/// Retreats `index` by `subtrahend` positions around a ring of `cap` slots.
#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, cap: usize) -> usize {
    wrap_index(index + cap - subtrahend % cap, cap)
}

#[inline]
fn wrap_index(index: usize, cap: usize) -> usize {
    index % cap
}
