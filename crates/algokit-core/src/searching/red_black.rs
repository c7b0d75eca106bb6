// crates/algokit-core/src/searching/red_black.rs
// ============================================================================
// Module: Left-Leaning Red-Black BST
// Description: Balanced ordered symbol table encoding 2-3 trees.
// Purpose: Guaranteed logarithmic height with simple rotation rules.
// Dependencies: thiserror, crate::searching::table
// ============================================================================

//! ## Overview
//! Red links glue a 2-3 tree's 3-nodes together and always lean left.
//! Insertion restores the shape bottom-up with left rotation, right rotation
//! and color flips. Deletion pushes a red link down the search path
//! (`move_red_left` / `move_red_right`) so the removed node is never a lone
//! black leaf.
//!
//! ## Invariants
//! - No node has a red right link, and no red node has a red left child.
//! - Every root-to-null path crosses the same number of black links.
//! - The root is black.

#![allow(
    clippy::unnecessary_box_returns,
    reason = "Tree rewrites move owned nodes between links without reallocating."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use thiserror::Error;

use crate::searching::table::OrderedSymbolTable;
use crate::searching::table::SymbolTable;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Color of the link from a node's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Part of a 3-node with its parent.
    Red,
    /// Ordinary 2-3 tree link.
    Black,
}

impl Color {
    /// Returns the opposite color.
    const fn flip(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

/// Owning child link.
type Link<K, V> = Option<Box<Node<K, V>>>;

/// Tree node.
#[derive(Debug)]
struct Node<K, V> {
    /// Node key.
    key: K,
    /// Node value.
    value: V,
    /// Color of the parent link.
    color: Color,
    /// Number of nodes in this subtree.
    size: usize,
    /// Smaller keys.
    left: Link<K, V>,
    /// Larger keys.
    right: Link<K, V>,
}

/// Structural invariant broken inside a [`RedBlackBst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedBlackViolation {
    /// Keys are not in strictly increasing symmetric order.
    #[error("keys are not in symmetric order")]
    SymmetricOrder,
    /// A subtree size field disagrees with its children.
    #[error("subtree sizes are inconsistent")]
    SubtreeSize,
    /// A red right link or two consecutive red links exist.
    #[error("tree is not a 2-3 tree")]
    TwoThree,
    /// Root-to-null paths cross different numbers of black links.
    #[error("tree is not black balanced")]
    BlackBalance,
}

// ============================================================================
// SECTION: Link Helpers
// ============================================================================

/// Returns true when the link is red; null links are black.
fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|node| node.color == Color::Red)
}

/// Returns true when the link's left child is red.
fn is_left_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|node| is_red(&node.left))
}

/// Returns the subtree size of a link.
fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// Makes a right-leaning red link lean left.
fn rotate_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = h.right.take() else {
        return h;
    };
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.size = 1 + size(&h.left) + size(&h.right);
    x.left = Some(h);
    x
}

/// Makes a left-leaning red link lean right.
fn rotate_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = h.left.take() else {
        return h;
    };
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.size = 1 + size(&h.left) + size(&h.right);
    x.right = Some(h);
    x
}

/// Flips the colors of a node and both of its children.
fn flip_colors<K, V>(h: &mut Node<K, V>) {
    h.color = h.color.flip();
    for child in [h.left.as_mut(), h.right.as_mut()].into_iter().flatten() {
        child.color = child.color.flip();
    }
}

/// Restores left-leaning shape and the size field on the way up.
fn balance<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && is_left_red(&h.left) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.size = 1 + size(&h.left) + size(&h.right);
    h
}

/// Makes `h.left` or one of its children red, assuming `h` is red and both
/// `h.left` and `h.left.left` are black.
fn move_red_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if h.right.as_ref().is_some_and(|right| is_red(&right.left)) {
        h.right = h.right.take().map(rotate_right);
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Makes `h.right` or one of its children red, assuming `h` is red and both
/// `h.right` and `h.right.left` are black.
fn move_red_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if is_left_red(&h.left) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}

// ============================================================================
// SECTION: Recursive Operations
// ============================================================================

/// Inserts into the subtree, returning the new root and any replaced value.
fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
    let Some(mut h) = link else {
        let leaf = Box::new(Node {
            key,
            value,
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        });
        return (leaf, None);
    };
    let replaced = match key.cmp(&h.key) {
        Ordering::Less => {
            let (child, replaced) = insert(h.left.take(), key, value);
            h.left = Some(child);
            replaced
        }
        Ordering::Greater => {
            let (child, replaced) = insert(h.right.take(), key, value);
            h.right = Some(child);
            replaced
        }
        Ordering::Equal => Some(std::mem::replace(&mut h.value, value)),
    };
    (balance(h), replaced)
}

/// Removes the minimum node, returning the new subtree and the detached node.
fn remove_min<K, V>(mut h: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    let Some(left) = h.left.as_ref() else {
        return (h.right.take(), h);
    };
    if !is_red(&h.left) && !is_red(&left.left) {
        h = move_red_left(h);
    }
    let Some(left) = h.left.take() else {
        return (h.right.take(), h);
    };
    let (rest, min) = remove_min(left);
    h.left = rest;
    (Some(balance(h)), min)
}

/// Removes the maximum node, returning the new subtree and the detached node.
fn remove_max<K, V>(mut h: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    if is_red(&h.left) {
        h = rotate_right(h);
    }
    let Some(right) = h.right.as_ref() else {
        return (h.left.take(), h);
    };
    if !is_red(&h.right) && !is_red(&right.left) {
        h = move_red_right(h);
    }
    let Some(right) = h.right.take() else {
        return (h.left.take(), h);
    };
    let (rest, max) = remove_max(right);
    h.right = rest;
    (Some(balance(h)), max)
}

/// Removes `key`, which must be present in the subtree.
fn remove<K: Ord, V>(link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>) {
    let Some(mut h) = link else {
        return (None, None);
    };
    let removed;
    if *key < h.key {
        if !is_red(&h.left) && !is_left_red(&h.left) {
            h = move_red_left(h);
        }
        let (child, value) = remove(h.left.take(), key);
        h.left = child;
        removed = value;
    } else {
        if is_red(&h.left) {
            h = rotate_right(h);
        }
        if *key == h.key && h.right.is_none() {
            return (h.left.take(), Some(h.value));
        }
        if !is_red(&h.right) && !is_left_red(&h.right) {
            h = move_red_right(h);
        }
        if *key == h.key {
            match h.right.take() {
                Some(right) => {
                    let (rest, successor) = remove_min(right);
                    h.right = rest;
                    let Node {
                        key: successor_key,
                        value: successor_value,
                        ..
                    } = *successor;
                    h.key = successor_key;
                    removed = Some(std::mem::replace(&mut h.value, successor_value));
                }
                None => return (h.left.take(), Some(h.value)),
            }
        } else {
            let (child, value) = remove(h.right.take(), key);
            h.right = child;
            removed = value;
        }
    }
    (Some(balance(h)), removed)
}

/// Returns the number of levels below a link.
fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| 1 + height(&node.left).max(height(&node.right)))
}

/// Appends subtree keys in order.
fn collect_keys<'a, K, V>(link: &'a Link<K, V>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_keys(&node.left, out);
        out.push(&node.key);
        collect_keys(&node.right, out);
    }
}

// ============================================================================
// SECTION: Tree
// ============================================================================

/// Ordered symbol table backed by a left-leaning red-black BST.
#[derive(Debug)]
pub struct RedBlackBst<K, V> {
    /// Tree root; always black when present.
    root: Link<K, V>,
}

impl<K, V> Default for RedBlackBst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RedBlackBst<K, V> {
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
        height(&self.root)
    }

    /// Prepares the root for a top-down deletion.
    fn redden_root(&mut self) {
        if let Some(root) = self.root.as_mut()
            && !is_red(&root.left)
            && !is_red(&root.right)
        {
            root.color = Color::Red;
        }
    }

    /// Re-blackens the root after a structural change.
    fn blacken_root(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }
    }
}

impl<K: Ord, V> RedBlackBst<K, V> {
    /// Validates every structural invariant of the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`RedBlackViolation`] found.
    pub fn check(&self) -> Result<(), RedBlackViolation> {
        if !self.keys().windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(RedBlackViolation::SymmetricOrder);
        }
        if !sizes_consistent(&self.root) {
            return Err(RedBlackViolation::SubtreeSize);
        }
        if is_red(&self.root) || !two_three(&self.root) {
            return Err(RedBlackViolation::TwoThree);
        }
        let mut black = 0;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if node.color == Color::Black {
                black += 1;
            }
            cursor = node.left.as_deref();
        }
        if !black_balanced(&self.root, black) {
            return Err(RedBlackViolation::BlackBalance);
        }
        Ok(())
    }
}

/// Returns true when every size field matches its children.
fn sizes_consistent<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_none_or(|node| {
        node.size == 1 + size(&node.left) + size(&node.right)
            && sizes_consistent(&node.left)
            && sizes_consistent(&node.right)
    })
}

/// Returns true when no red link leans right and no two reds are consecutive.
fn two_three<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_none_or(|node| {
        !(is_red(&node.right) || node.color == Color::Red && is_red(&node.left))
            && two_three(&node.left)
            && two_three(&node.right)
    })
}

/// Returns true when every path below `link` has exactly `black` black links.
fn black_balanced<K, V>(link: &Link<K, V>, black: usize) -> bool {
    link.as_ref().map_or(black == 0, |node| {
        let remaining =
            if node.color == Color::Black { black.checked_sub(1) } else { Some(black) };
        remaining.is_some_and(|remaining| {
            black_balanced(&node.left, remaining) && black_balanced(&node.right, remaining)
        })
    })
}

// ============================================================================
// SECTION: Symbol Table
// ============================================================================

impl<K: Ord, V> SymbolTable<K, V> for RedBlackBst<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        let (root, replaced) = insert(self.root.take(), key, value);
        self.root = Some(root);
        self.blacken_root();
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
        if !self.contains(key) {
            return None;
        }
        self.redden_root();
        let (root, removed) = remove(self.root.take(), key);
        self.root = root;
        self.blacken_root();
        removed
    }

    fn len(&self) -> usize {
        size(&self.root)
    }

    fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        collect_keys(&self.root, &mut keys);
        keys
    }
}

// ============================================================================
// SECTION: Ordered Operations
// ============================================================================

impl<K: Ord, V> OrderedSymbolTable<K, V> for RedBlackBst<K, V> {
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
        self.redden_root();
        let (root, min) = remove_min(self.root.take()?);
        self.root = root;
        self.blacken_root();
        Some((min.key, min.value))
    }

    fn delete_max(&mut self) -> Option<(K, V)> {
        self.redden_root();
        let (root, max) = remove_max(self.root.take()?);
        self.root = root;
        self.blacken_root();
        Some((max.key, max.value))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
