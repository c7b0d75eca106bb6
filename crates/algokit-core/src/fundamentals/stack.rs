// crates/algokit-core/src/fundamentals/stack.rs
// ============================================================================
// Module: Vector-Backed Stacks
// Description: LIFO stacks layered on `Vec` with and without a hard capacity.
// Purpose: Provide the simplest stack plus a bounded variant for fixed buffers.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! [`VecStack`] is the everyday pushdown stack used by clients such as the
//! expression evaluator. [`FixedCapacityStack`] refuses pushes once full
//! instead of growing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::AlgoError;
use crate::error::AlgoResult;

// ============================================================================
// SECTION: Unbounded Stack
// ============================================================================

/// Pushdown stack backed by a growable vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecStack<T> {
    /// Items with the top of the stack at the end.
    items: Vec<T>,
}

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VecStack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
        }
    }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the stack holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

// ============================================================================
// SECTION: Bounded Stack
// ============================================================================

/// Stack that holds at most `capacity` items.
///
/// # Invariants
/// - `len() <= capacity()` at all times.
#[derive(Debug, Clone)]
pub struct FixedCapacityStack<T> {
    /// Items with the top of the stack at the end.
    items: Vec<T>,
    /// Maximum number of items.
    capacity: usize,
}

impl<T> FixedCapacityStack<T> {
    /// Creates an empty stack that accepts up to `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an item when room remains.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::CapacityExceeded`] when the stack is full.
    pub fn push(&mut self, item: T) -> AlgoResult<()> {
        if self.is_full() {
            return Err(AlgoError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the stack holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true when a further push would fail.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
