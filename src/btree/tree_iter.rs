use super::node::Node;
use super::{NodeId, Step, Tree};
use std::slice;

/// In-order iterator over all items of a `Tree`.
///
/// Instead of recursing, it keeps a stack of planned steps: visiting a node
/// pushes its children interleaved with "emit" steps for its keys, so that
/// popping the stack yields child[0], key[0], child[1], ..., child[k]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    plan: Vec<Step<'a, T>>,
    /// Keys of the leaf being emitted
    leaf: slice::Iter<'a, T>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new<C>(tree: &'a Tree<T, C>) -> Self {
        let empty: &'a [T] = &[];
        Iter {
            nodes: &tree.nodes,
            plan: vec![Step::Visit(tree.root)],
            leaf: empty.iter(),
            len: tree.len(),
        }
    }

    fn visit(&mut self, id: NodeId) {
        let nodes = self.nodes;
        let node = &nodes[id.index()];
        let keys = node.keys();
        if node.is_leaf() {
            self.leaf = keys.iter();
            return;
        }

        self.plan.push(Step::Visit(node.child(keys.len())));
        for i in (0..keys.len()).rev() {
            self.plan.push(Step::Emit(&keys[i]));
            self.plan.push(Step::Visit(node.child(i)));
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.leaf.next() {
                self.len -= 1;
                return Some(value);
            }
            match self.plan.pop()? {
                Step::Emit(value) => {
                    self.len -= 1;
                    return Some(value);
                }
                Step::Visit(id) => self.visit(id),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}
