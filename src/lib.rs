//! An ordered set backed by a self-balancing binary search tree.
//!
//! The set is an AVL tree: after every insertion and removal the heights of the two child subtrees
//! of any node differ by at most one, so lookups, insertions and removals all take `O(log n)`
//! comparisons.
//!
//! # Examples
//!
//! ```
//! use avl_collections::avl_tree::{AvlSet, Error};
//!
//! let mut set = AvlSet::new();
//! set.insert(10).unwrap();
//! set.insert(5).unwrap();
//!
//! assert_eq!(set.insert(5), Err(Error::DuplicateElement));
//! assert_eq!(set.remove(&10), Ok(10));
//! assert_eq!(set.remove(&10), Err(Error::ElementNotFound));
//! ```

#[macro_use]
extern crate log;

pub mod avl_tree;
