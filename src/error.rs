use thiserror::Error as ThisError;

/// A broken structural invariant, reported by `Tree::check_invariants`.
/// Nodes are identified by their position in the tree arena
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InvariantError {
    #[error("node {node} holds {len} keys, more than the capacity of {capacity}")]
    Overfull {
        node: usize,
        len: usize,
        capacity: usize,
    },

    #[error("keys of node {node} are not sorted")]
    Unsorted { node: usize },

    #[error("internal node {node} has no keys")]
    EmptyInternal { node: usize },

    #[error("internal node {node} has {keys} keys but {children} children")]
    ChildCount {
        node: usize,
        keys: usize,
        children: usize,
    },

    #[error("node {node} points to parent {found:?}, expected {expected:?}")]
    ParentMismatch {
        node: usize,
        expected: Option<usize>,
        found: Option<usize>,
    },

    #[error("a key of node {node} lies outside the separators of its parent")]
    SeparatorViolation { node: usize },

    #[error("leaf {node} sits at depth {depth}, other leaves at depth {expected}")]
    UnevenDepth {
        node: usize,
        depth: usize,
        expected: usize,
    },

    #[error("tree holds {counted} keys but reports a length of {len}")]
    LenMismatch { counted: usize, len: usize },
}
