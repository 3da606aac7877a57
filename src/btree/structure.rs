use super::Tree;
use std::fmt;

/// Human-readable dump of the nodes of a `Tree`, one line per node in pre-order.
///
/// Each line holds the depth as indentation, the depth itself, `L` for leaves
/// and the keys of the node
pub struct Structure<'a, T, C> {
    tree: &'a Tree<T, C>,
}

impl<'a, T, C> Structure<'a, T, C> {
    pub(super) fn new(tree: &'a Tree<T, C>) -> Self {
        Structure { tree }
    }
}

impl<'a, T: fmt::Debug, C> fmt::Display for Structure<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[BTree]")?;
        writeln!(f, "#root")?;

        let mut plan = vec![(self.tree.root, 0)];
        while let Some((id, depth)) = plan.pop() {
            let node = &self.tree.nodes[id.index()];
            plan.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
            writeln!(
                f,
                "{}{:>2}{} {:?}",
                " ".repeat(depth),
                depth,
                if node.is_leaf() { "L" } else { " " },
                node.keys()
            )?;
        }
        Ok(())
    }
}
