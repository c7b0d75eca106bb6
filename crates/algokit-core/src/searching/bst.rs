// crates/algokit-core/src/searching/bst.rs
// ============================================================================
// Module: Binary Search Tree
// Description: Size-augmented, unbalanced binary search tree.
// Purpose: Ordered symbol table with logarithmic expected-case operations.
// Dependencies: crate::searching::table
// ============================================================================

//! ## Overview
//! Every node records the size of its subtree, which makes `rank` and
//! `select` proportional to the tree height. Deletion uses Hibbard's
//! successor replacement.
//!
//! ## Invariants
//! - Keys are in symmetric order: left subtree < node < right subtree.
//! - `node.size == 1 + size(left) + size(right)` for every node.
//!
//! The tree is unbalanced, so sorted input degrades it to a list. Every walk
//! below is iterative and the tree drops itself iteratively, so degenerate
//! shapes cost time but never stack depth.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use crate::searching::table::OrderedSymbolTable;
use crate::searching::table::SymbolTable;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Owning child link.
type Link<K, V> = Option<Box<Node<K, V>>>;

/// Tree node.
#[derive(Debug)]
struct Node<K, V> {
    /// Node key.
    key: K,
    /// Node value.
    value: V,
    /// Number of nodes in this subtree.
    size: usize,
    /// Smaller keys.
    left: Link<K, V>,
    /// Larger keys.
    right: Link<K, V>,
}

/// Returns the subtree size of a link.
fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// Ordered symbol table backed by an unbalanced binary search tree.
#[derive(Debug)]
pub struct Bst<K, V> {
    /// Tree root.
    root: Link<K, V>,
}

impl<K, V> Default for Bst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Bst<K, V> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
        }
    }

    /// Returns the number of levels; an empty tree has height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<K, V>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl<K: Ord, V> Bst<K, V> {
    /// Returns true when symmetric order and every size field hold.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut stack: Vec<&Node<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.size != 1 + size(&node.left) + size(&node.right) {
                return false;
            }
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        let keys = self.in_order(None, None);
        keys.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Collects keys within the optional inclusive bounds, in order.
    fn in_order(&self, lo: Option<&K>, hi: Option<&K>) -> Vec<&K> {
        let above_lo = |key: &K| lo.is_none_or(|lo| lo < key);
        let below_hi = |key: &K| hi.is_none_or(|hi| key < hi);
        let mut keys = Vec::new();
        let mut stack: Vec<&Node<K, V>> = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = if above_lo(&node.key) { node.left.as_deref() } else { None };
            }
            let Some(node) = stack.pop() else {
                break;
            };
            if lo.is_none_or(|lo| *lo <= node.key) && hi.is_none_or(|hi| node.key <= *hi) {
                keys.push(&node.key);
            }
            cursor = if below_hi(&node.key) { node.right.as_deref() } else { None };
        }
        keys
    }
}

// ============================================================================
// SECTION: Detach Helpers
// ============================================================================

/// Detaches the minimum node under `link`, fixing sizes along the path.
fn detach_min<K, V>(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    loop {
        if link.as_ref()?.left.is_none() {
            break;
        }
        let node = link.as_mut()?;
        node.size -= 1;
        link = &mut node.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Detaches the maximum node under `link`, fixing sizes along the path.
fn detach_max<K, V>(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    loop {
        if link.as_ref()?.right.is_none() {
            break;
        }
        let node = link.as_mut()?;
        node.size -= 1;
        link = &mut node.right;
    }
    let mut max = link.take()?;
    *link = max.left.take();
    Some(max)
}

// ============================================================================
// SECTION: Symbol Table
// ============================================================================

impl<K: Ord, V> SymbolTable<K, V> for Bst<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        let mut link = &mut self.root;
        while let Some(node) = link {
            node.size += 1;
            link = if key < node.key { &mut node.left } else { &mut node.right };
        }
        *link = Some(Box::new(Node {
            key,
            value,
            size: 1,
            left: None,
            right: None,
        }));
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cursor = self.root.as_deref_mut();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        if !self.contains(key) {
            return None;
        }
        let mut link = &mut self.root;
        loop {
            let direction = key.cmp(&link.as_ref()?.key);
            if direction == Ordering::Equal {
                break;
            }
            let node = link.as_mut()?;
            node.size -= 1;
            link = if direction == Ordering::Less { &mut node.left } else { &mut node.right };
        }
        let mut target = link.take()?;
        *link = match (target.left.take(), target.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, right) => {
                let mut right = right;
                let mut successor = detach_min(&mut right)?;
                successor.size = 1 + size(&left) + size(&right);
                successor.left = left;
                successor.right = right;
                Some(successor)
            }
        };
        Some(target.value)
    }

    fn len(&self) -> usize {
        size(&self.root)
    }

    fn keys(&self) -> Vec<&K> {
        self.in_order(None, None)
    }
}

// ============================================================================
// SECTION: Ordered Operations
// ============================================================================

impl<K: Ord, V> OrderedSymbolTable<K, V> for Bst<K, V> {
    fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    fn floor(&self, key: &K) -> Option<&K> {
        let mut best = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => {
                    best = Some(&node.key);
                    node.right.as_deref()
                }
            };
        }
        best
    }

    fn ceiling(&self, key: &K) -> Option<&K> {
        let mut best = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Less => {
                    best = Some(&node.key);
                    node.left.as_deref()
                }
            };
        }
        best
    }

    fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => {
                    rank += 1 + size(&node.left);
                    node.right.as_deref()
                }
                Ordering::Equal => return rank + size(&node.left),
            };
        }
        rank
    }

    fn select(&self, mut rank: usize) -> Option<&K> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            let left = size(&node.left);
            cursor = match rank.cmp(&left) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => {
                    rank -= left + 1;
                    node.right.as_deref()
                }
                Ordering::Equal => return Some(&node.key),
            };
        }
        None
    }

    fn delete_min(&mut self) -> Option<(K, V)> {
        detach_min(&mut self.root).map(|node| (node.key, node.value))
    }

    fn delete_max(&mut self) -> Option<(K, V)> {
        detach_max(&mut self.root).map(|node| (node.key, node.value))
    }

    fn range_keys(&self, lo: &K, hi: &K) -> Vec<&K> {
        if hi < lo {
            return Vec::new();
        }
        self.in_order(Some(lo), Some(hi))
    }
}

impl<K, V> Drop for Bst<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
