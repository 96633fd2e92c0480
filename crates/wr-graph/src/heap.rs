//! Binary min-heap.
//!
//! Array-backed: the children of slot `i` are `2i + 1` and `2i + 2`.  There
//! is no decrease-key; Dijkstra pushes a fresh entry on every improvement
//! and skips stale ones when they surface.

/// Min-heap over any `Ord` key.  Dijkstra uses `(distance, ZoneId)` so ties
/// on distance pop in ascending id order.
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    slots: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Smallest entry without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots.first()
    }

    pub fn push(&mut self, item: T) {
        self.slots.push(item);
        self.sift_up(self.slots.len() - 1);
    }

    /// Remove and return the smallest entry.
    pub fn pop(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        let top = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.slots[i] >= self.slots[parent] {
                break;
            }
            self.slots.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.slots.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.slots[left] < self.slots[smallest] {
                smallest = left;
            }
            if right < n && self.slots[right] < self.slots[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.slots.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
