/// Counters of backing-store resizes performed by an
/// [`ArrayDeque`](crate::ArrayDeque).
///
/// Reads never resize, so these only move on adds and removes.
///
/// # Example
///
/// ```
/// use dual_deque::ArrayDeque;
///
/// let mut deque = ArrayDeque::new();
/// for i in 0..9 {
///     deque.add_last(i);
/// }
///
/// let stats = deque.resize_stats();
/// assert_eq!(stats.grows, 1);
/// assert_eq!(stats.shrinks, 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResizeStats {
    /// Number of times the capacity was doubled.
    pub grows: u64,
    /// Number of times the capacity was halved.
    pub shrinks: u64,
}

impl ResizeStats {
    /// Total number of resizes in either direction.
    pub fn resizes(&self) -> u64 {
        self.grows + self.shrinks
    }

    pub(crate) fn record_grow(&mut self) {
        self.grows += 1;
    }

    pub(crate) fn record_shrink(&mut self) {
        self.shrinks += 1;
    }
}
