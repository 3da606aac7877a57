//! Seeded key generators used to exercise and benchmark trees
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::{RangeQuery, Tree};

    #[test]
    fn trees_from_generators() {
        check_all(1);
        check_all(100);
        check_all(5000);
    }

    fn check_all(num: usize) {
        check_one(RandomKeys::new(num, 1000, 17).collect(), num);
        check_one(SequentialKeys::new(num, SequentialOrder::Ascending).collect(), num);
        check_one(SequentialKeys::new(num, SequentialOrder::Descending).collect(), num);
    }

    fn check_one(keys: Vec<u32>, num: usize) {
        let tree: Tree<u32> = keys.iter().copied().collect();
        assert_eq!(tree.len(), num);
        assert_eq!(tree.check_invariants(), Ok(()));

        let mut sorted = keys;
        sorted.sort();
        assert_eq!(tree.values(), sorted);

        let selected: Vec<_> = tree
            .range(RangeQuery::new().min(&250).max(&750))
            .copied()
            .collect();
        let expected: Vec<_> = sorted
            .into_iter()
            .filter(|&x| x >= 250 && x <= 750)
            .collect();
        assert_eq!(selected, expected);
    }
}
