use super::*;
use arrayvec::ArrayVec;
use std::cmp::Ordering;

/// Keys of a node, with room for the extra key that triggers a split
pub(super) type Keys<T> = ArrayVec<[T; NODE_SIZE + 1]>;
pub(super) type Children = ArrayVec<[NodeId; NODE_SIZE + 2]>;

#[derive(Debug, Clone)]
pub(super) struct Node<T> {
    keys: Keys<T>,
    children: Children,
    parent: Option<NodeId>,
}

/// The right half and median taken out of an overflowing node
pub(super) struct Split<T> {
    pub median: T,
    pub keys: Keys<T>,
    pub children: Children,
}

impl<T> Node<T> {
    /// Build an empty leaf
    pub(super) fn leaf(parent: Option<NodeId>) -> Self {
        Node {
            keys: ArrayVec::new(),
            children: ArrayVec::new(),
            parent,
        }
    }

    /// Build a node from already sorted keys and children.
    /// Panics if an internal node is given the wrong number of children
    pub(super) fn with_keys_and_children(
        keys: Keys<T>,
        children: Children,
        parent: Option<NodeId>,
    ) -> Self {
        assert!(children.is_empty() || children.len() == keys.len() + 1);
        Node {
            keys,
            children,
            parent,
        }
    }

    /// Return the number of keys in this node
    pub(super) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(super) fn keys(&self) -> &[T] {
        &self.keys
    }

    pub(super) fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(super) fn child(&self, index: usize) -> NodeId {
        self.children[index]
    }

    pub(super) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(super) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Find the first index such that `keys[i] > item`, or `len()` if there is none.
    /// Items equal to a key are placed after it
    pub(super) fn insertion_point<C>(&self, item: &T, comparator: &C) -> usize
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.keys
            .iter()
            .position(|key| comparator(key, item) == Ordering::Greater)
            .unwrap_or_else(|| self.keys.len())
    }

    /// Insert `item` at `index` of a leaf. The node may be left overflowing
    pub(super) fn insert_key(&mut self, index: usize, item: T) {
        assert!(self.is_leaf());
        self.keys.insert(index, item);
    }

    /// Place a promoted `median` right after the child at `child_index` and
    /// attach `right` as the child that follows it
    pub(super) fn insert_promoted(&mut self, child_index: usize, median: T, right: NodeId) {
        assert!(!self.is_leaf());
        assert!(child_index < self.children.len());
        self.keys.insert(child_index, median);
        self.children.insert(child_index + 1, right);
    }

    /// Return the position of `child` among the children of this node
    pub(super) fn child_position(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&id| id == child)
    }

    /// Split an overflowing node around its median.
    /// Self keeps the keys (and children) left of the median; the rest is returned
    pub(super) fn split(&mut self) -> Split<T> {
        assert!(self.keys.len() > NODE_SIZE);
        let median_i = self.keys.len() / 2;
        let keys: Keys<T> = self.keys.drain(median_i + 1..).collect();
        let median = self.keys.remove(median_i);
        let children: Children = if self.is_leaf() {
            ArrayVec::new()
        } else {
            self.children.drain(median_i + 1..).collect()
        };
        Split {
            median,
            keys,
            children,
        }
    }
}
