use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// `f64` priority with a total order, for heuristic-driven queues.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Priority(pub(crate) f64);

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Heap entry ordered by `key`, then by insertion sequence.
///
/// The payload never takes part in the comparison, so equal keys always
/// pop in the order they were pushed.
struct Queued<K, T> {
    key: K,
    seq: u64,
    item: T,
}

impl<K: Ord, T> Ord for Queued<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K: Ord, T> PartialOrd for Queued<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> PartialEq for Queued<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, T> Eq for Queued<K, T> {}

/// Min-priority queue with a stable insertion-order tie-break.
///
/// Duplicate entries for the same item are allowed; callers skip stale ones
/// when they pop.
pub(crate) struct MinQueue<K, T> {
    heap: BinaryHeap<Queued<K, T>>,
    next_seq: u64,
    peak: usize,
}

impl<K: Ord, T> MinQueue<K, T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            peak: 0,
        }
    }

    pub(crate) fn push(&mut self, key: K, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Queued { key, seq, item });
        self.peak = self.peak.max(self.heap.len());
    }

    pub(crate) fn pop(&mut self) -> Option<(K, T)> {
        self.heap.pop().map(|q| (q.key, q.item))
    }

    /// Largest size the queue reached.
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut q = MinQueue::new();
        q.push(5, "e");
        q.push(1, "a");
        q.push(3, "c");
        assert_eq!(q.pop(), Some((1, "a")));
        assert_eq!(q.pop(), Some((3, "c")));
        assert_eq!(q.pop(), Some((5, "e")));
        assert_eq!(q.pop(), None);
        assert_eq!(q.peak(), 3);
    }

    #[test]
    fn equal_keys_pop_in_insertion_order() {
        let mut q = MinQueue::new();
        for item in ["first", "second", "third"] {
            q.push(7, item);
        }
        q.push(2, "early");
        let order: Vec<_> = std::iter::from_fn(|| q.pop().map(|(_, s)| s)).collect();
        assert_eq!(order, ["early", "first", "second", "third"]);
    }

    #[test]
    fn payload_need_not_be_comparable() {
        struct Opaque;
        let mut q = MinQueue::new();
        q.push(Priority(1.5), Opaque);
        q.push(Priority(0.5), Opaque);
        assert!(matches!(q.pop(), Some((Priority(p), Opaque)) if p == 0.5));
    }

    #[test]
    fn priority_orders_floats() {
        assert!(Priority(1.0) < Priority(1.5));
        assert_eq!(Priority(2.0), Priority(2.0));
        let mut q = MinQueue::new();
        q.push((Priority(3.0), 1u32), 'b');
        q.push((Priority(3.0), 0u32), 'a');
        assert_eq!(q.pop().map(|(_, c)| c), Some('a'));
    }
}
