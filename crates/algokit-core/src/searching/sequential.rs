// crates/algokit-core/src/searching/sequential.rs
// ============================================================================
// Module: Sequential Search Symbol Table
// Description: Unordered symbol table over a singly linked list.
// Purpose: Baseline table and the per-chain structure for hashing.
// Dependencies: crate::searching::table
// ============================================================================

//! ## Overview
//! Lookups scan the list front to back. New keys go to the front; existing
//! keys are updated in place.

use crate::searching::table::SymbolTable;

/// Owning link to the next node.
type Link<K, V> = Option<Box<Node<K, V>>>;

/// One list entry.
#[derive(Debug)]
struct Node<K, V> {
    /// Entry key.
    key: K,
    /// Entry value.
    value: V,
    /// Following entry.
    next: Link<K, V>,
}

/// Symbol table that searches a linked list sequentially.
#[derive(Debug)]
pub struct SequentialSearchSt<K, V> {
    /// First entry.
    head: Link<K, V>,
    /// Number of entries.
    len: usize,
}

impl<K, V> Default for SequentialSearchSt<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SequentialSearchSt<K, V> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
        }
    }

    /// Removes every entry, most recently inserted first.
    pub fn drain(&mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.len);
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            let Node {
                key,
                value,
                next,
            } = *node;
            entries.push((key, value));
            cursor = next;
        }
        self.len = 0;
        entries
    }

    /// Iterates over entries, most recently inserted first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        let mut cursor = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = cursor?;
            cursor = node.next.as_deref();
            Some((&node.key, &node.value))
        })
    }
}

impl<K: Eq, V> SymbolTable<K, V> for SequentialSearchSt<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        let next = self.head.take();
        self.head = Some(Box::new(Node {
            key,
            value,
            next,
        }));
        self.len += 1;
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.iter().find(|(candidate, _)| *candidate == key).map(|(_, value)| value)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == *key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let mut link = &mut self.head;
        loop {
            let found = link.as_ref().map(|node| node.key == *key)?;
            if found {
                break;
            }
            link = &mut link.as_mut()?.next;
        }
        let node = link.take()?;
        let node = *node;
        *link = node.next;
        self.len -= 1;
        Some(node.value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self) -> Vec<&K> {
        self.iter().map(|(key, _)| key).collect()
    }
}

impl<K, V> Drop for SequentialSearchSt<K, V> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}
