use super::{NodeId, Tree, NODE_SIZE};
use crate::InvariantError;
use std::cmp::Ordering;

impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Walk every node and report the first broken structural invariant.
    /// A failure here is a bug in the tree (or a comparator that is not a total order)
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let comparator = &self.comparator;
        let root = &self.nodes[self.root.index()];
        if root.parent().is_some() {
            return Err(InvariantError::ParentMismatch {
                node: self.root.index(),
                expected: None,
                found: root.parent().map(NodeId::index),
            });
        }

        // Each planned node carries its depth and the separators around it
        let mut plan: Vec<(NodeId, usize, Option<&T>, Option<&T>)> =
            vec![(self.root, 1, None, None)];
        let mut leaf_depth = None;
        let mut counted = 0;
        while let Some((id, depth, lower, upper)) = plan.pop() {
            let node = &self.nodes[id.index()];
            let keys = node.keys();
            counted += keys.len();

            if keys.len() > NODE_SIZE {
                return Err(InvariantError::Overfull {
                    node: id.index(),
                    len: keys.len(),
                    capacity: NODE_SIZE,
                });
            }
            if keys
                .windows(2)
                .any(|pair| comparator(&pair[0], &pair[1]) == Ordering::Greater)
            {
                return Err(InvariantError::Unsorted { node: id.index() });
            }
            let outside = keys.iter().any(|key| {
                lower.map_or(false, |lower| comparator(key, lower) == Ordering::Less)
                    || upper.map_or(false, |upper| comparator(key, upper) == Ordering::Greater)
            });
            if outside {
                return Err(InvariantError::SeparatorViolation { node: id.index() });
            }

            if node.is_leaf() {
                let expected = *leaf_depth.get_or_insert(depth);
                if expected != depth {
                    return Err(InvariantError::UnevenDepth {
                        node: id.index(),
                        depth,
                        expected,
                    });
                }
                continue;
            }

            if keys.is_empty() {
                return Err(InvariantError::EmptyInternal { node: id.index() });
            }
            if node.children().len() != keys.len() + 1 {
                return Err(InvariantError::ChildCount {
                    node: id.index(),
                    keys: keys.len(),
                    children: node.children().len(),
                });
            }
            for (i, &child) in node.children().iter().enumerate() {
                let found = self.nodes[child.index()].parent();
                if found != Some(id) {
                    return Err(InvariantError::ParentMismatch {
                        node: child.index(),
                        expected: Some(id.index()),
                        found: found.map(NodeId::index),
                    });
                }
                let child_lower = if i == 0 { lower } else { Some(&keys[i - 1]) };
                let child_upper = keys.get(i).or(upper);
                plan.push((child, depth + 1, child_lower, child_upper));
            }
        }

        if counted != self.len {
            return Err(InvariantError::LenMismatch {
                counted,
                len: self.len,
            });
        }
        Ok(())
    }
}
