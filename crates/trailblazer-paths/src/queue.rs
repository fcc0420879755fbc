//! A min-priority queue with decrease-key: [`MinQueue`].

use std::collections::HashMap;
use std::hash::Hash;

/// One heap slot: an element, its priority, and its insertion sequence.
#[derive(Clone, Copy, Debug)]
struct Slot<T> {
    elem: T,
    priority: f64,
    seq: u64,
}

impl<T> Slot<T> {
    /// Heap order: priority first, insertion order as the tie-break.
    #[inline]
    fn before(&self, other: &Self) -> bool {
        match self.priority.total_cmp(&other.priority) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => self.seq < other.seq,
        }
    }
}

/// A min-priority queue over unique elements, supporting `decrease_key`.
///
/// Backed by a binary heap coupled with an element-to-slot index, so that
/// [`enqueue`](MinQueue::enqueue), [`dequeue_min`](MinQueue::dequeue_min) and
/// [`decrease_key`](MinQueue::decrease_key) are all O(log n), while
/// membership and priority lookups are O(1).
///
/// Elements with equal priorities are dequeued in insertion order, so the
/// queue is deterministic for a given operation sequence.
///
/// Misuse is a programming error and panics: duplicate insertion, NaN
/// priorities, dequeueing an empty queue, and decrease-key on an absent
/// element or with an increasing priority are all rejected.
#[derive(Debug, Clone)]
pub struct MinQueue<T> {
    heap: Vec<Slot<T>>,
    index: HashMap<T, usize>,
    next_seq: u64,
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Copy + Eq + Hash> MinQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Number of enqueued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `elem` is currently enqueued.
    #[inline]
    pub fn contains(&self, elem: &T) -> bool {
        self.index.contains_key(elem)
    }

    /// The stored priority of `elem`, or `None` if absent.
    #[inline]
    pub fn priority_of(&self, elem: &T) -> Option<f64> {
        self.index.get(elem).map(|&i| self.heap[i].priority)
    }

    /// The minimum-priority element and its priority, without removing it.
    #[inline]
    pub fn peek_min(&self) -> Option<(T, f64)> {
        self.heap.first().map(|s| (s.elem, s.priority))
    }

    /// Insert a new element with the given priority.
    ///
    /// Panics if `elem` is already present (route updates through
    /// [`decrease_key`](MinQueue::decrease_key)) or if `priority` is NaN.
    pub fn enqueue(&mut self, elem: T, priority: f64) {
        assert!(!priority.is_nan(), "enqueue: NaN priority");
        assert!(
            !self.index.contains_key(&elem),
            "enqueue: element already in queue"
        );
        let slot = Slot {
            elem,
            priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(slot);
        let last = self.heap.len() - 1;
        self.index.insert(elem, last);
        self.sift_up(last);
    }

    /// Remove and return the element with the smallest priority.
    ///
    /// Panics if the queue is empty.
    pub fn dequeue_min(&mut self) -> T {
        assert!(!self.heap.is_empty(), "dequeue_min: queue is empty");
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let slot = self.heap.pop().unwrap();
        self.index.remove(&slot.elem);
        if !self.heap.is_empty() {
            self.index.insert(self.heap[0].elem, 0);
            self.sift_down(0);
        }
        slot.elem
    }

    /// Lower the stored priority of an already-present element.
    ///
    /// Panics if `elem` is absent, if `new_priority` is NaN, or if
    /// `new_priority` exceeds the element's current priority. The operation
    /// may only ever decrease a key: during Dijkstra/A* relaxation, paths
    /// only get cheaper.
    pub fn decrease_key(&mut self, elem: T, new_priority: f64) {
        assert!(!new_priority.is_nan(), "decrease_key: NaN priority");
        let &i = self
            .index
            .get(&elem)
            .unwrap_or_else(|| panic!("decrease_key: element not in queue"));
        let current = self.heap[i].priority;
        assert!(
            new_priority <= current,
            "decrease_key: new priority {new_priority} exceeds current {current}"
        );
        self.heap[i].priority = new_priority;
        self.sift_up(i);
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].before(&self.heap[parent]) {
                break;
            }
            self.swap_slots(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.heap[right].before(&self.heap[left]) {
                smallest = right;
            }
            if !self.heap[smallest].before(&self.heap[i]) {
                break;
            }
            self.swap_slots(i, smallest);
            i = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.index.insert(self.heap[a].elem, a);
        self.index.insert(self.heap[b].elem, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_priority_order() {
        let mut q = MinQueue::new();
        q.enqueue("c", 3.0);
        q.enqueue("a", 1.0);
        q.enqueue("d", 4.0);
        q.enqueue("b", 2.0);
        assert_eq!(q.len(), 4);
        assert_eq!(q.dequeue_min(), "a");
        assert_eq!(q.dequeue_min(), "b");
        assert_eq!(q.dequeue_min(), "c");
        assert_eq!(q.dequeue_min(), "d");
        assert!(q.is_empty());
    }

    #[test]
    fn equal_priorities_dequeue_in_insertion_order() {
        let mut q = MinQueue::new();
        q.enqueue("first", 1.0);
        q.enqueue("second", 1.0);
        q.enqueue("third", 1.0);
        assert_eq!(q.dequeue_min(), "first");
        assert_eq!(q.dequeue_min(), "second");
        assert_eq!(q.dequeue_min(), "third");
    }

    #[test]
    fn decrease_key_reorders() {
        let mut q = MinQueue::new();
        q.enqueue("a", 5.0);
        q.enqueue("b", 3.0);
        q.enqueue("c", 4.0);
        q.decrease_key("a", 1.0);
        assert_eq!(q.dequeue_min(), "a");
        assert_eq!(q.dequeue_min(), "b");
        assert_eq!(q.dequeue_min(), "c");
    }

    #[test]
    fn decrease_key_to_equal_priority_is_allowed() {
        let mut q = MinQueue::new();
        q.enqueue("a", 2.0);
        q.decrease_key("a", 2.0);
        assert_eq!(q.priority_of(&"a"), Some(2.0));
    }

    #[test]
    fn membership_and_priority_lookup() {
        let mut q = MinQueue::new();
        q.enqueue(7u32, 1.5);
        assert!(q.contains(&7));
        assert_eq!(q.priority_of(&7), Some(1.5));
        assert!(!q.contains(&8));
        assert_eq!(q.priority_of(&8), None);
        q.dequeue_min();
        assert!(!q.contains(&7));
    }

    #[test]
    fn peek_min_does_not_remove() {
        let mut q = MinQueue::new();
        assert_eq!(q.peek_min(), None);
        q.enqueue("a", 2.0);
        q.enqueue("b", 1.0);
        assert_eq!(q.peek_min(), Some(("b", 1.0)));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn interleaved_operations_keep_heap_order() {
        let mut q = MinQueue::new();
        for i in 0..32u32 {
            // Deliberately scrambled priorities.
            q.enqueue(i, ((i * 37) % 64) as f64);
        }
        for i in 0..32u32 {
            if i % 3 == 0 {
                let cur = q.priority_of(&i).unwrap();
                q.decrease_key(i, cur / 2.0);
            }
        }
        let mut last = f64::NEG_INFINITY;
        while !q.is_empty() {
            let (_, p) = q.peek_min().unwrap();
            q.dequeue_min();
            assert!(p >= last, "priorities must come out non-decreasing");
            last = p;
        }
    }

    #[test]
    fn decrease_then_dequeue_returns_new_minimum() {
        let mut q = MinQueue::new();
        q.enqueue("a", 10.0);
        q.enqueue("b", 5.0);
        q.decrease_key("a", 1.0);
        assert_eq!(q.dequeue_min(), "a");
    }

    #[test]
    #[should_panic(expected = "already in queue")]
    fn duplicate_enqueue_panics() {
        let mut q = MinQueue::new();
        q.enqueue("a", 1.0);
        q.enqueue("a", 2.0);
    }

    #[test]
    #[should_panic(expected = "NaN")]
    fn nan_enqueue_panics() {
        let mut q = MinQueue::new();
        q.enqueue("a", f64::NAN);
    }

    #[test]
    #[should_panic(expected = "queue is empty")]
    fn dequeue_empty_panics() {
        let mut q: MinQueue<&str> = MinQueue::new();
        q.dequeue_min();
    }

    #[test]
    #[should_panic(expected = "not in queue")]
    fn decrease_key_absent_panics() {
        let mut q: MinQueue<&str> = MinQueue::new();
        q.decrease_key("missing", 1.0);
    }

    #[test]
    #[should_panic(expected = "NaN")]
    fn decrease_key_nan_panics() {
        let mut q = MinQueue::new();
        q.enqueue("a", 1.0);
        q.decrease_key("a", f64::NAN);
    }

    #[test]
    #[should_panic(expected = "exceeds current")]
    fn increase_key_panics() {
        let mut q = MinQueue::new();
        q.enqueue("a", 1.0);
        q.decrease_key("a", 2.0);
    }

    #[test]
    fn default_does_not_require_default_elements() {
        // An element type with no Default impl of its own.
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        struct Key(u32);

        let mut q: MinQueue<Key> = MinQueue::default();
        assert!(q.is_empty());
        q.enqueue(Key(7), 0.5);
        assert_eq!(q.len(), 1);
        assert!(q.contains(&Key(7)));
    }

    #[test]
    fn infinite_priorities_are_sortable() {
        let mut q = MinQueue::new();
        q.enqueue("far", f64::INFINITY);
        q.enqueue("near", 1.0);
        assert_eq!(q.dequeue_min(), "near");
        assert_eq!(q.dequeue_min(), "far");
    }
}
