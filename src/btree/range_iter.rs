use super::node::Node;
use super::{NodeId, Step, Tree, NODE_SIZE};
use arrayvec::ArrayVec;
use std::cmp::Ordering;
use std::fmt;
use std::slice;
use tracing::trace;

/// Inclusive bounds and direction of a range query.
///
/// Both bounds are optional. `RangeQuery::new()` selects every item in ascending order
pub struct RangeQuery<'q, T> {
    min: Option<&'q T>,
    max: Option<&'q T>,
    ascending: bool,
}

impl<'q, T> RangeQuery<'q, T> {
    pub fn new() -> Self {
        RangeQuery {
            min: None,
            max: None,
            ascending: true,
        }
    }

    /// Build a query from optional bounds
    pub fn bounds(min: Option<&'q T>, max: Option<&'q T>) -> Self {
        RangeQuery {
            min,
            max,
            ascending: true,
        }
    }

    /// Only select items greater or equal to `min`
    pub fn min(mut self, min: &'q T) -> Self {
        self.min = Some(min);
        self
    }

    /// Only select items lesser or equal to `max`
    pub fn max(mut self, max: &'q T) -> Self {
        self.max = Some(max);
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Return the selected items from the largest to the smallest
    pub fn descending(self) -> Self {
        self.ascending(false)
    }
}

impl<'q, T> Default for RangeQuery<'q, T> {
    fn default() -> Self {
        RangeQuery::new()
    }
}

impl<'q, T> Clone for RangeQuery<'q, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'q, T> Copy for RangeQuery<'q, T> {}

impl<'q, T: fmt::Debug> fmt::Debug for RangeQuery<'q, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RangeQuery")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("ascending", &self.ascending)
            .finish()
    }
}

/// Lazy iterator over the items of a `Tree` that fall inside a `RangeQuery`.
///
/// Works like `Iter`, with an explicit stack of planned steps, but only plans
/// the children and keys of a node that may hold selected items:
/// 1. if `max` is below every key, only the leftmost child is visited
/// 2. if `min` is above every key, only the rightmost child is visited
/// 3. otherwise, every selected key is planned with the child to its left,
///    plus the child right of the last selected key. When no key is selected,
///    both bounds fall in the gap of a single child, which is the only one visited
pub struct RangeIter<'a, T, C> {
    nodes: &'a [Node<T>],
    comparator: &'a C,
    min: Option<&'a T>,
    max: Option<&'a T>,
    ascending: bool,
    plan: Vec<Step<'a, T>>,
    /// Selected keys of the leaf being emitted
    leaf: slice::Iter<'a, T>,
}

impl<'a, T, C> RangeIter<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub(super) fn new(tree: &'a Tree<T, C>, query: RangeQuery<'a, T>) -> Self {
        let empty: &'a [T] = &[];
        let mut iter = RangeIter {
            nodes: &tree.nodes,
            comparator: &tree.comparator,
            min: query.min,
            max: query.max,
            ascending: query.ascending,
            plan: Vec::new(),
            leaf: empty.iter(),
        };

        match (query.min, query.max) {
            (Some(min), Some(max)) if (tree.comparator)(min, max) == Ordering::Greater => {
                trace!("range query with min above max selects nothing");
            }
            _ => iter.plan.push(Step::Visit(tree.root)),
        }
        iter
    }

    fn above_min(&self, value: &T) -> bool {
        self.min
            .map_or(true, |min| (self.comparator)(value, min) != Ordering::Less)
    }

    fn below_max(&self, value: &T) -> bool {
        self.max
            .map_or(true, |max| (self.comparator)(value, max) != Ordering::Greater)
    }

    fn visit(&mut self, id: NodeId) {
        let nodes = self.nodes;
        let node = &nodes[id.index()];
        let keys = node.keys();

        if node.is_leaf() {
            // Leaf keys are sorted, so the selected ones are contiguous
            let start = keys
                .iter()
                .position(|key| self.above_min(key))
                .unwrap_or_else(|| keys.len());
            let end = keys
                .iter()
                .position(|key| !self.below_max(key))
                .unwrap_or_else(|| keys.len())
                .max(start);
            self.leaf = keys[start..end].iter();
            return;
        }

        let last = keys.len() - 1;
        if let Some(max) = self.max {
            if (self.comparator)(&keys[0], max) == Ordering::Greater {
                self.plan.push(Step::Visit(node.child(0)));
                return;
            }
        }
        if let Some(min) = self.min {
            if (self.comparator)(&keys[last], min) == Ordering::Less {
                self.plan.push(Step::Visit(node.child(last + 1)));
                return;
            }
        }

        let mut scheduled: ArrayVec<[Step<'a, T>; 2 * NODE_SIZE + 1]> = ArrayVec::new();
        let mut last_selected = None;
        for (i, key) in keys.iter().enumerate() {
            if self.above_min(key) && self.below_max(key) {
                scheduled.push(Step::Visit(node.child(i)));
                scheduled.push(Step::Emit(key));
                last_selected = Some(i);
            }
        }

        match last_selected {
            Some(last_i) => scheduled.push(Step::Visit(node.child(last_i + 1))),
            None => {
                if let (Some(min), Some(_)) = (self.min, self.max) {
                    let gap = keys
                        .iter()
                        .position(|key| (self.comparator)(key, min) != Ordering::Less)
                        .unwrap_or(last + 1);
                    trace!(node = id.index(), gap, "range falls between two keys");
                    self.plan.push(Step::Visit(node.child(gap)));
                }
                return;
            }
        }

        // The stack pops in reverse order of pushing
        if self.ascending {
            scheduled.reverse();
        }
        self.plan.extend(scheduled);
    }
}

impl<'a, T, C> Iterator for RangeIter<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = if self.ascending {
                self.leaf.next()
            } else {
                self.leaf.next_back()
            };
            if value.is_some() {
                return value;
            }
            match self.plan.pop()? {
                Step::Emit(value) => return Some(value),
                Step::Visit(id) => self.visit(id),
            }
        }
    }
}

impl<'a, T, C> std::iter::FusedIterator for RangeIter<'a, T, C> where
    C: Fn(&T, &T) -> Ordering
{
}

#[cfg(test)]
mod test {
    use super::*;

    fn helper_range(
        tree: &Tree<i32>,
        min: Option<i32>,
        max: Option<i32>,
        ascending: bool,
    ) -> Vec<i32> {
        let query = RangeQuery::bounds(min.as_ref(), max.as_ref()).ascending(ascending);
        tree.range(query).copied().collect()
    }

    fn helper_expected(
        min: Option<i32>,
        max: Option<i32>,
        values: std::ops::Range<i32>,
    ) -> Vec<i32> {
        values
            .filter(|x| min.map_or(true, |min| *x >= min) && max.map_or(true, |max| *x <= max))
            .collect()
    }

    #[test]
    fn leaf_only() {
        let tree: Tree<i32> = vec![5, 1, 4, 2, 3].into_iter().collect();
        assert_eq!(helper_range(&tree, Some(2), Some(4), true), vec![2, 3, 4]);
        assert_eq!(helper_range(&tree, Some(2), Some(4), false), vec![4, 3, 2]);
        assert_eq!(helper_range(&tree, None, Some(0), true), Vec::<i32>::new());
        assert_eq!(helper_range(&tree, Some(6), None, false), Vec::<i32>::new());
        assert_eq!(helper_range(&tree, None, None, true), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_tree() {
        let tree: Tree<i32> = Tree::default();
        assert_eq!(helper_range(&tree, None, None, true), Vec::<i32>::new());
        assert_eq!(helper_range(&tree, Some(1), Some(2), false), Vec::<i32>::new());
    }

    #[test]
    fn min_above_max() {
        let tree: Tree<i32> = (0..100).collect();
        assert_eq!(helper_range(&tree, Some(51), Some(50), true), Vec::<i32>::new());
        assert_eq!(helper_range(&tree, Some(200), Some(50), false), Vec::<i32>::new());
        assert_eq!(helper_range(&tree, Some(50), Some(50), true), vec![50]);
    }

    #[test]
    fn all_bounds_both_directions() {
        let tree: Tree<i32> = (0..200).map(|x| (x * 73) % 200).collect();
        assert!(tree.depth() >= 3);
        let bounds = vec![
            None,
            Some(-5),
            Some(0),
            Some(3),
            Some(4),
            Some(57),
            Some(100),
            Some(199),
            Some(250),
        ];
        for &min in &bounds {
            for &max in &bounds {
                let expected = helper_expected(min, max, 0..200);
                assert_eq!(
                    helper_range(&tree, min, max, true),
                    expected,
                    "min={:?} max={:?}",
                    min,
                    max
                );
                let reversed: Vec<_> = expected.into_iter().rev().collect();
                assert_eq!(
                    helper_range(&tree, min, max, false),
                    reversed,
                    "min={:?} max={:?}",
                    min,
                    max
                );
            }
        }
    }

    #[test]
    fn range_between_two_separators() {
        // Every other value, so that narrow queries land in gaps
        let tree: Tree<i32> = (0..500).map(|x| x * 2).collect();
        for start in 0..1000 {
            let min = Some(start);
            let max = Some(start);
            let expected: Vec<i32> = if start % 2 == 0 { vec![start] } else { vec![] };
            assert_eq!(helper_range(&tree, min, max, true), expected);
            assert_eq!(helper_range(&tree, min, max, false), expected);
        }
    }

    #[test]
    fn duplicates() {
        let tree: Tree<i32> = (0..300).map(|x| x % 10).collect();
        let selected = helper_range(&tree, Some(3), Some(4), true);
        assert_eq!(selected.len(), 60);
        assert!(selected[..30].iter().all(|&x| x == 3));
        assert!(selected[30..].iter().all(|&x| x == 4));
        assert_eq!(helper_range(&tree, Some(9), None, false), vec![9; 30]);
    }

    #[test]
    fn unbounded_equals_iter() {
        let tree: Tree<i32> = (0..1000).map(|x| (x * 31) % 97).collect();
        let all: Vec<_> = tree.range(RangeQuery::new()).collect();
        let iter: Vec<_> = tree.iter().collect();
        assert_eq!(all, iter);
    }

    #[test]
    fn early_termination() {
        let tree: Tree<i32> = (0..1000).collect();
        let query = RangeQuery::new().min(&100).descending();
        let first: Vec<_> = tree.range(query).take(3).copied().collect();
        assert_eq!(first, vec![999, 998, 997]);
        let mut iter = tree.range(RangeQuery::new().max(&1));
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
