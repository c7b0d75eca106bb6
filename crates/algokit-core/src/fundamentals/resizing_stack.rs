// crates/algokit-core/src/fundamentals/resizing_stack.rs
// ============================================================================
// Module: Resizing Array Stack
// Description: Stack over an explicitly managed slot array.
// Purpose: Demonstrate amortized doubling and quarter-full halving.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! The slot array is sized by hand rather than relying on `Vec` growth so the
//! capacity policy is observable through [`ResizingStack::capacity`].
//!
//! ## Invariants
//! - `1 <= capacity`, and `len <= capacity`.
//! - After a pop, the stack is more than a quarter full unless the capacity
//!   is already 1.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::trace;

// ============================================================================
// SECTION: Stack
// ============================================================================

/// LIFO stack that doubles when full and halves when a quarter full.
#[derive(Debug, Clone)]
pub struct ResizingStack<T> {
    /// Slot array; `slots[..len]` are `Some`, the rest are `None`.
    slots: Vec<Option<T>>,
    /// Number of occupied slots.
    len: usize,
}

impl<T> Default for ResizingStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResizingStack<T> {
    /// Creates an empty stack with capacity 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None],
            len: 0,
        }
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the stack holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot array size.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Pushes an item, doubling the slot array first when it is full.
    pub fn push(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.resize(self.slots.len() * 2);
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
    }

    /// Removes and returns the top item, halving the slot array at a quarter full.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let item = self.slots[self.len].take();
        if self.len > 0 && self.len == self.slots.len() / 4 {
            self.resize(self.slots.len() / 2);
        }
        item
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|top| self.slots[top].as_ref())
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[.. self.len].iter().rev().filter_map(Option::as_ref)
    }

    /// Moves the occupied slots into a fresh array of `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        trace!(from = self.slots.len(), to = capacity, "resizing stack");
        let mut slots: Vec<Option<T>> = Vec::with_capacity(capacity);
        slots.extend(self.slots.drain(.. self.len));
        slots.resize_with(capacity, || None);
        self.slots = slots;
    }
}
