mod invariants;
mod node;
mod range_iter;
mod structure;
mod tree;
mod tree_iter;

pub use range_iter::{RangeIter, RangeQuery};
pub use structure::Structure;
pub use tree::{NaturalOrder, Tree};
pub use tree_iter::Iter;

/// Maximum number of keys a node holds between operations.
/// A node reaching `NODE_SIZE + 1` keys during an insertion is split
pub const NODE_SIZE: usize = 8;

/// Handle of a node inside the tree arena
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A planned action of the explicit-stack traversals
enum Step<'a, T> {
    Visit(NodeId),
    Emit(&'a T),
}
