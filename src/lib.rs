//! An in-memory B-tree that keeps items sorted by a user-supplied comparator.
//!
//! Duplicates are kept, lookups use comparator equality and range queries
//! accept optional inclusive bounds in either direction. Traversals use an
//! explicit stack, so arbitrarily deep trees never exhaust the call stack.
//!
//! ```
//! use range_btree::{RangeQuery, Tree};
//!
//! let mut tree = Tree::from_items(vec![68, 78, 15, 81, 62], |a: &i32, b: &i32| a.cmp(b));
//! tree.put(66);
//! assert!(tree.has(&62));
//! assert_eq!(tree.values(), vec![15, 62, 66, 68, 78, 81]);
//!
//! let selected: Vec<_> = tree
//!     .range(RangeQuery::new().min(&62).max(&78).descending())
//!     .copied()
//!     .collect();
//! assert_eq!(selected, vec![78, 68, 66, 62]);
//! ```


mod btree;
mod error;

#[cfg(any(test, feature = "workload"))]
pub mod workload;

pub use btree::{Iter, NaturalOrder, RangeIter, RangeQuery, Structure, Tree, NODE_SIZE};
pub use error::InvariantError;
