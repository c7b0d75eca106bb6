// crates/algokit-core/src/error.rs
// ============================================================================
// Module: Algorithm Error Definitions
// Description: Structured failures shared by every algokit module.
// Purpose: Replace panics on caller input with typed, matchable errors.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every fallible operation in the crate returns [`AlgoResult`]. Read-only
//! queries with an obvious empty answer (`marked`, `get`, `adj`) return
//! `Option`, `bool` or an empty slice instead, so errors are reserved for
//! mutations and constructors that would otherwise corrupt state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised by algokit data structures and algorithms.
///
/// # Invariants
/// - Variants carry enough context to render an actionable message without
///   access to the structure that produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgoError {
    // ============================================================================
    // SECTION: Index and Capacity Errors
    // ============================================================================
    /// An index fell outside `0 .. bound`.
    #[error("index {index} out of range 0..{bound}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Exclusive upper bound.
        bound: usize,
    },

    /// A vertex fell outside `0 .. vertices`.
    #[error("vertex {vertex} out of range 0..{vertices}")]
    VertexOutOfBounds {
        /// Offending vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertices: usize,
    },

    /// The operation requires a non-empty collection.
    #[error("{0} is empty")]
    Empty(&'static str),

    /// A fixed-capacity structure is full.
    #[error("capacity {capacity} exceeded")]
    CapacityExceeded {
        /// Configured capacity.
        capacity: usize,
    },

    // ============================================================================
    // SECTION: Priority Queue Errors
    // ============================================================================
    /// The index is already present in an indexed priority queue.
    #[error("index {index} is already in the priority queue")]
    DuplicateIndex {
        /// Offending index.
        index: usize,
    },

    /// The index is not present in an indexed priority queue.
    #[error("index {index} is not in the priority queue")]
    MissingIndex {
        /// Offending index.
        index: usize,
    },

    /// `decrease_key` was called with a key that is not strictly smaller.
    #[error("new key for index {index} does not decrease the current key")]
    KeyNotDecreased {
        /// Offending index.
        index: usize,
    },

    /// `increase_key` was called with a key that is not strictly larger.
    #[error("new key for index {index} does not increase the current key")]
    KeyNotIncreased {
        /// Offending index.
        index: usize,
    },

    // ============================================================================
    // SECTION: Input Shape Errors
    // ============================================================================
    /// The input must not contain duplicate values.
    #[error("input contains duplicate values")]
    DuplicateValues,

    /// The digraph has a directed cycle where a DAG is required.
    #[error("digraph is not acyclic")]
    NotAcyclic,

    /// An edge weight is NaN.
    #[error("edge {from}-{to} has a NaN weight")]
    InvalidWeight {
        /// Tail (or either) endpoint.
        from: usize,
        /// Head (or other) endpoint.
        to: usize,
    },

    /// An edge weight is negative where non-negative weights are required.
    #[error("edge {from}-{to} has a negative weight")]
    NegativeWeight {
        /// Tail (or either) endpoint.
        from: usize,
        /// Head (or other) endpoint.
        to: usize,
    },

    // ============================================================================
    // SECTION: String Errors
    // ============================================================================
    /// An alphabet definition repeats a character.
    #[error("illegal alphabet: repeated character '{0}'")]
    RepeatedCharacter(char),

    /// A character is not part of the alphabet.
    #[error("character '{0}' not in alphabet")]
    CharacterNotInAlphabet(char),

    /// A key-indexed counting key is not below the radix.
    #[error("key {key} is not below radix {radix}")]
    KeyOutOfRadix {
        /// Offending key.
        key: usize,
        /// Radix in use.
        radix: usize,
    },

    /// A string is shorter than the fixed width required by LSD sort.
    #[error("string at position {index} is shorter than width {width}")]
    StringTooShort {
        /// Position of the offending string.
        index: usize,
        /// Required width in bytes.
        width: usize,
    },

    // ============================================================================
    // SECTION: Parse Errors
    // ============================================================================
    /// A named algorithm or table kind is not recognized.
    #[error("unknown {kind} '{name}'")]
    UnknownName {
        /// Category being parsed, such as `sort algorithm`.
        kind: &'static str,
        /// Rejected name.
        name: String,
    },

    /// Textual input could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number (0 when not line oriented).
        line: usize,
        /// Human-readable reason.
        message: String,
    },
}

impl AlgoError {
    /// Builds a [`AlgoError::Parse`] for the given line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type AlgoResult<T> = Result<T, AlgoError>;

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Returns `Ok(())` when `index < bound`.
///
/// # Errors
///
/// Returns [`AlgoError::IndexOutOfBounds`] otherwise.
pub const fn check_index(index: usize, bound: usize) -> AlgoResult<()> {
    if index < bound {
        Ok(())
    } else {
        Err(AlgoError::IndexOutOfBounds {
            index,
            bound,
        })
    }
}

/// Returns `Ok(())` when `vertex < vertices`.
///
/// # Errors
///
/// Returns [`AlgoError::VertexOutOfBounds`] otherwise.
pub const fn check_vertex(vertex: usize, vertices: usize) -> AlgoResult<()> {
    if vertex < vertices {
        Ok(())
    } else {
        Err(AlgoError::VertexOutOfBounds {
            vertex,
            vertices,
        })
    }
}
