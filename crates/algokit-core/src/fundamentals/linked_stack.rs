// crates/algokit-core/src/fundamentals/linked_stack.rs
// ============================================================================
// Module: Linked-List Stack
// Description: Stack built from singly linked, owned nodes.
// Purpose: Constant-time push/pop without any array resizing.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! Each push allocates one node that owns the rest of the list. Dropping the
//! stack unlinks nodes in a loop so very deep stacks do not recurse.

// ============================================================================
// SECTION: Types
// ============================================================================

/// Owning link to the next node.
type Link<T> = Option<Box<Node<T>>>;

/// One stack entry.
#[derive(Debug)]
struct Node<T> {
    /// Stored item.
    item: T,
    /// Node below this one.
    next: Link<T>,
}

/// LIFO stack over a singly linked list.
#[derive(Debug)]
pub struct LinkedStack<T> {
    /// Top of the stack.
    head: Link<T>,
    /// Number of nodes.
    len: usize,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
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
        self.head.is_none()
    }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node {
            item,
            next,
        }));
        self.len += 1;
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.item
        })
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.item)
    }

    /// Iterates from the top of the stack to the bottom.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

// ============================================================================
// SECTION: Iteration
// ============================================================================

/// Borrowing iterator over a [`LinkedStack`], top first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Next node to yield.
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
