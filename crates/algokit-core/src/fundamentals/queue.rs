// crates/algokit-core/src/fundamentals/queue.rs
// ============================================================================
// Module: Resizing Ring-Buffer Queue
// Description: FIFO queue over a circular slot array.
// Purpose: Constant amortized enqueue/dequeue with bounded memory overhead.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! Items live in `slots[first .. first + len]` modulo the slot count. The
//! array doubles when full and halves when a quarter full, mirroring
//! [`crate::fundamentals::ResizingStack`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::trace;

// ============================================================================
// SECTION: Queue
// ============================================================================

/// FIFO queue backed by a resizing circular buffer.
///
/// # Invariants
/// - `slots.len() >= 1` and `len <= slots.len()`.
/// - Occupied slots are exactly those at `(first + i) % slots.len()` for
///   `i in 0 .. len`.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    /// Circular slot array.
    slots: Vec<Option<T>>,
    /// Position of the oldest item.
    first: usize,
    /// Number of queued items.
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue with capacity 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None],
            first: 0,
            len: 0,
        }
    }

    /// Returns the number of queued items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the queue holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot array size.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends an item at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.resize(self.slots.len() * 2);
        }
        let last = (self.first + self.len) % self.slots.len();
        self.slots[last] = Some(item);
        self.len += 1;
    }

    /// Removes and returns the oldest item.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.first].take();
        self.first = (self.first + 1) % self.slots.len();
        self.len -= 1;
        if self.len > 0 && self.len == self.slots.len() / 4 {
            self.resize(self.slots.len() / 2);
        }
        item
    }

    /// Returns the oldest item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 { None } else { self.slots[self.first].as_ref() }
    }

    /// Iterates from the oldest item to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let cap = self.slots.len();
        (0 .. self.len).filter_map(move |offset| self.slots[(self.first + offset) % cap].as_ref())
    }

    /// Copies the live items, in FIFO order, into a fresh slot array.
    fn resize(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        trace!(from = self.slots.len(), to = capacity, "resizing queue");
        let cap = self.slots.len();
        let mut slots: Vec<Option<T>> = Vec::with_capacity(capacity);
        for offset in 0 .. self.len {
            slots.push(self.slots[(self.first + offset) % cap].take());
        }
        slots.resize_with(capacity, || None);
        self.slots = slots;
        self.first = 0;
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Queue;

    #[test]
    fn wraps_around_and_keeps_fifo_order() {
        let mut queue = Queue::new();
        for value in 0 .. 4 {
            queue.enqueue(value);
        }
        assert_eq!(queue.dequeue(), Some(0));
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(4);
        queue.enqueue(5);
        let order: Vec<i32> = queue.iter().copied().collect();
        assert_eq!(order, vec![2, 3, 4, 5]);
        assert_eq!(queue.capacity(), 4);
    }

    #[test]
    fn shrinks_when_a_quarter_full() {
        let mut queue: Queue<u32> = (0 .. 8).collect();
        assert_eq!(queue.capacity(), 8);
        for _ in 0 .. 6 {
            queue.dequeue();
        }
        assert_eq!(queue.capacity(), 4);
        assert_eq!(queue.peek(), Some(&6));
    }
}
