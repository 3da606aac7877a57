use super::node::{Children, Keys, Node};
use super::*;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

/// Comparator used by trees built from `Ord` items
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// An in-memory B-tree ordered by a user-supplied comparator.
///
/// Duplicates are kept: every `put` adds one item. Nodes live in an arena and
/// refer to each other by handle, so the tree owns all of them directly
#[derive(Clone)]
pub struct Tree<T, C = NaturalOrder<T>> {
    pub(super) nodes: Vec<Node<T>>,
    pub(super) root: NodeId,
    pub(super) comparator: C,
    pub(super) len: usize,
}

impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty tree. `comparator` must be a total order
    pub fn new(comparator: C) -> Self {
        Tree {
            nodes: vec![Node::leaf(None)],
            root: NodeId(0),
            comparator,
            len: 0,
        }
    }

    /// Create a tree by inserting every item of `items`, in order
    pub fn from_items<I: IntoIterator<Item = T>>(items: I, comparator: C) -> Self {
        let mut tree = Tree::new(comparator);
        tree.extend(items);
        tree
    }

    /// Insert a new item. Items equal to existing ones are placed after them
    pub fn put(&mut self, item: T) {
        let leaf = self.locate_leaf(&item);
        let node = &mut self.nodes[leaf.index()];
        let index = node.insertion_point(&item, &self.comparator);
        node.insert_key(index, item);
        self.len += 1;
        trace!(leaf = leaf.index(), index, keys = node.len(), "inserted into leaf");

        if node.len() > NODE_SIZE {
            self.split_from(leaf);
        }

        #[cfg(feature = "validate")]
        {
            if let Err(error) = self.check_invariants() {
                panic!("B-tree invariant violated after insertion: {}", error);
            }
        }
    }

    /// Return whether an item comparing as equal to `item` is stored
    pub fn has(&self, item: &T) -> bool {
        let mut node = &self.nodes[self.root.index()];
        loop {
            let mut index = node.len();
            for (i, key) in node.keys().iter().enumerate() {
                match (self.comparator)(key, item) {
                    Ordering::Equal => return true,
                    Ordering::Greater => {
                        index = i;
                        break;
                    }
                    Ordering::Less => {}
                }
            }
            if node.is_leaf() {
                return false;
            }
            node = &self.nodes[node.child(index).index()];
        }
    }

    /// Return a lazy iterator over the items selected by `query`
    pub fn range<'a>(&'a self, query: RangeQuery<'a, T>) -> RangeIter<'a, T, C> {
        RangeIter::new(self, query)
    }

    /// Follow insertion points down to the leaf that should receive `item`
    fn locate_leaf(&self, item: &T) -> NodeId {
        let mut id = self.root;
        loop {
            let node = &self.nodes[id.index()];
            if node.is_leaf() {
                return id;
            }
            id = node.child(node.insertion_point(item, &self.comparator));
        }
    }

    /// Iteratively split `blown` and its ancestors until no node overflows.
    /// Each split keeps the left half in place, moves the right half to a new
    /// sibling and promotes the median to the parent (or to a new root)
    fn split_from(&mut self, mut blown: NodeId) {
        while self.nodes[blown.index()].len() > NODE_SIZE {
            let split = self.nodes[blown.index()].split();
            let parent = self.nodes[blown.index()].parent();

            // Children moving to the new sibling point to it before anything else runs
            let right = NodeId(self.nodes.len());
            for &child in split.children.iter() {
                self.nodes[child.index()].set_parent(Some(right));
            }
            self.nodes.push(Node::with_keys_and_children(
                split.keys,
                split.children,
                parent,
            ));
            trace!(node = blown.index(), right = right.index(), "split node");

            match parent {
                None => {
                    let root = NodeId(self.nodes.len());
                    let mut keys = Keys::new();
                    keys.push(split.median);
                    let mut children = Children::new();
                    children.push(blown);
                    children.push(right);
                    self.nodes
                        .push(Node::with_keys_and_children(keys, children, None));
                    self.nodes[blown.index()].set_parent(Some(root));
                    self.nodes[right.index()].set_parent(Some(root));
                    self.root = root;
                    debug!(root = root.index(), depth = self.depth(), "tree grew a new root");
                    return;
                }
                Some(parent) => {
                    let node = &mut self.nodes[parent.index()];
                    let child_index = node.child_position(blown).unwrap_or_else(|| {
                        panic!(
                            "node {} is not a child of its parent {}",
                            blown.index(),
                            parent.index()
                        )
                    });
                    node.insert_promoted(child_index, split.median, right);
                    blown = parent;
                }
            }
        }
    }
}

impl<T, C> Tree<T, C> {
    /// Return the total number of items in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a sorted iterator over references to the items in the tree
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }

    /// Collect all items in ascending order
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Return the number of levels, counting the root. All leaves share the same depth
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut node = &self.nodes[self.root.index()];
        while !node.is_leaf() {
            node = &self.nodes[node.child(0).index()];
            depth += 1;
        }
        depth
    }

    /// Return the number of nodes allocated by the tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return a `Display` adapter that dumps the node structure
    pub fn structure(&self) -> Structure<T, C> {
        Structure::new(self)
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.put(item);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for Tree<T> {
    /// Create a tree ordered by `Ord` from an iterator
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter, T::cmp)
    }
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new(T::cmp)
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
