// crates/algokit-core/src/searching/avl.rs
// ============================================================================
// Module: AVL Tree
// Description: Height-balanced binary search tree.
// Purpose: Guaranteed logarithmic symbol-table operations via rotations.
// Dependencies: crate::searching::table
// ============================================================================

//! ## Overview
//! After every insertion or removal each node on the path is rebalanced: a
//! subtree whose children differ in height by two is fixed by a single
//! rotation, or by a double rotation when the taller grandchild is on the
//! inside.
//!
//! ## Invariants
//! - For every node the child heights differ by at most one.
//! - `node.height == 1 + max(height(left), height(right))`, with an empty
//!   link at height 0.

#![allow(
    clippy::unnecessary_box_returns,
    reason = "Tree rewrites move owned nodes between links without reallocating."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use crate::searching::table::SymbolTable;

// ============================================================================
// SECTION: Nodes
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
    /// Levels in this subtree.
    height: usize,
    /// Smaller keys.
    left: Link<K, V>,
    /// Larger keys.
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf.
    fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Recomputes the height from the children.
    fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

/// Returns the height of a link.
fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

//      y                               x
//     / \     rotate_right            / \
//    x   C    - - - - - - ->         A   y
//   / \       <- - - - - - -            / \
//  A   B      rotate_left              B   C

/// Lifts the left child above `node`.
fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

/// Lifts the right child above `node`.
fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

/// Restores the height invariant at `node`, assuming its children satisfy it.
fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update();
    let (left, right) = (height(&node.left), height(&node.right));
    if left > right + 1 {
        if node.left.as_ref().is_some_and(|child| height(&child.left) < height(&child.right)) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if right > left + 1 {
        if node.right.as_ref().is_some_and(|child| height(&child.right) < height(&child.left)) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

// ============================================================================
// SECTION: Recursive Operations
// ============================================================================

/// Inserts into the subtree, returning the new root and any replaced value.
fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
    let Some(mut node) = link else {
        return (Node::leaf(key, value), None);
    };
    let replaced = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, replaced) = insert(node.left.take(), key, value);
            node.left = Some(child);
            replaced
        }
        Ordering::Greater => {
            let (child, replaced) = insert(node.right.take(), key, value);
            node.right = Some(child);
            replaced
        }
        Ordering::Equal => Some(std::mem::replace(&mut node.value, value)),
    };
    (rebalance(node), replaced)
}

/// Removes `key` from the subtree, returning the new root and the removed value.
fn remove<K: Ord, V>(link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>) {
    let Some(mut node) = link else {
        return (None, None);
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, removed) = remove(node.left.take(), key);
            node.left = child;
            (Some(rebalance(node)), removed)
        }
        Ordering::Greater => {
            let (child, removed) = remove(node.right.take(), key);
            node.right = child;
            (Some(rebalance(node)), removed)
        }
        Ordering::Equal => {
            let Node {
                value,
                left,
                right,
                ..
            } = *node;
            let replacement = match (left, right) {
                (None, right) => right,
                (left, None) => left,
                (Some(left), Some(right)) => {
                    let (rest, mut successor) = take_min(right);
                    successor.left = Some(left);
                    successor.right = rest;
                    Some(rebalance(successor))
                }
            };
            (replacement, Some(value))
        }
    }
}

/// Detaches the minimum node, returning the rebalanced remainder and the node.
fn take_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        None => (node.right.take(), node),
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

/// Appends subtree keys in order.
fn collect_keys<'a, K, V>(link: &'a Link<K, V>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_keys(&node.left, out);
        out.push(&node.key);
        collect_keys(&node.right, out);
    }
}

/// Returns true when every node satisfies the balance and height invariants.
fn balanced<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_none_or(|node| {
        let (left, right) = (height(&node.left), height(&node.right));
        left.abs_diff(right) <= 1
            && node.height == 1 + left.max(right)
            && balanced(&node.left)
            && balanced(&node.right)
    })
}

// ============================================================================
// SECTION: Tree
// ============================================================================

/// Symbol table backed by an AVL tree.
#[derive(Debug)]
pub struct AvlTree<K, V> {
    /// Tree root.
    root: Link<K, V>,
    /// Number of keys.
    len: usize,
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> AvlTree<K, V> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }

    /// Returns the number of levels; an empty tree has height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns true when the AVL balance and height invariants hold everywhere.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        balanced(&self.root)
    }

    /// Returns the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key.
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (root, removed) = remove(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns true when keys are in strictly increasing symmetric order.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.keys().windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl<K: Ord, V> SymbolTable<K, V> for AvlTree<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        let (root, replaced) = insert(self.root.take(), key, value);
        self.root = Some(root);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
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
        self.remove(key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        collect_keys(&self.root, &mut keys);
        keys
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
