// crates/algokit-core/src/sorting/pq.rs
// ============================================================================
// Module: Binary-Heap Priority Queues
// Description: Max- and min-oriented priority queues over a binary heap.
// Purpose: Top-M selection, lazy Prim and other priority-driven clients.
// Dependencies: crate::sorting::elementary
// ============================================================================

//! ## Overview
//! [`MaxPq`] and [`MinPq`] share one zero-indexed heap that is parameterized
//! by which of two items belongs nearer the root.
//!
//! ## Invariants
//! - For every node `k > 0`, the item at `(k - 1) / 2` is not below it in the
//!   queue's orientation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::sorting::elementary::less;

// ============================================================================
// SECTION: Shared Heap
// ============================================================================

/// Zero-indexed binary heap ordered by `above`.
#[derive(Debug, Clone)]
struct Heap<T> {
    /// Heap-ordered items.
    items: Vec<T>,
    /// Returns true when the first item belongs above the second.
    above: fn(&T, &T) -> bool,
}

impl<T: PartialOrd> Heap<T> {
    /// Creates an empty heap.
    const fn new(above: fn(&T, &T) -> bool) -> Self {
        Self {
            items: Vec::new(),
            above,
        }
    }

    /// Adds an item and swims it into place.
    fn push(&mut self, item: T) {
        self.items.push(item);
        self.swim(self.items.len() - 1);
    }

    /// Removes the root.
    fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        self.sink(0);
        top
    }

    /// Moves the item at `k` up while it belongs above its parent.
    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !(self.above)(&self.items[k], &self.items[parent]) {
                break;
            }
            self.items.swap(k, parent);
            k = parent;
        }
    }

    /// Moves the item at `k` down while a child belongs above it.
    fn sink(&mut self, mut k: usize) {
        let n = self.items.len();
        loop {
            let mut child = 2 * k + 1;
            if child >= n {
                break;
            }
            if child + 1 < n && (self.above)(&self.items[child + 1], &self.items[child]) {
                child += 1;
            }
            if !(self.above)(&self.items[child], &self.items[k]) {
                break;
            }
            self.items.swap(k, child);
            k = child;
        }
    }
}

/// Orientation for max-heaps.
fn greater<T: PartialOrd>(a: &T, b: &T) -> bool {
    less(b, a)
}

// ============================================================================
// SECTION: Max Priority Queue
// ============================================================================

/// Priority queue that yields its largest item first.
#[derive(Debug, Clone)]
pub struct MaxPq<T> {
    /// Max-oriented heap.
    heap: Heap<T>,
}

impl<T: PartialOrd> Default for MaxPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> MaxPq<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heap: Heap::new(greater::<T>),
        }
    }

    /// Adds an item.
    pub fn insert(&mut self, item: T) {
        self.heap.push(item);
    }

    /// Returns the largest item.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.heap.items.first()
    }

    /// Removes and returns the largest item.
    pub fn del_max(&mut self) -> Option<T> {
        self.heap.pop()
    }

    /// Returns the number of queued items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.heap.items.len()
    }

    /// Returns true when the queue is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.heap.items.is_empty()
    }

    /// Iterates in heap order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.items.iter()
    }
}

impl<T: PartialOrd> FromIterator<T> for MaxPq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pq = Self::new();
        for item in iter {
            pq.insert(item);
        }
        pq
    }
}

// ============================================================================
// SECTION: Min Priority Queue
// ============================================================================

/// Priority queue that yields its smallest item first.
#[derive(Debug, Clone)]
pub struct MinPq<T> {
    /// Min-oriented heap.
    heap: Heap<T>,
}

impl<T: PartialOrd> Default for MinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> MinPq<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heap: Heap::new(less::<T>),
        }
    }

    /// Adds an item.
    pub fn insert(&mut self, item: T) {
        self.heap.push(item);
    }

    /// Returns the smallest item.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.heap.items.first()
    }

    /// Removes and returns the smallest item.
    pub fn del_min(&mut self) -> Option<T> {
        self.heap.pop()
    }

    /// Returns the number of queued items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.heap.items.len()
    }

    /// Returns true when the queue is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.heap.items.is_empty()
    }

    /// Iterates in heap order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.items.iter()
    }
}

impl<T: PartialOrd> FromIterator<T> for MinPq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pq = Self::new();
        for item in iter {
            pq.insert(item);
        }
        pq
    }
}
