//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::node::Node;
pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};

use std::result;

/// Errors returned by fallible `AvlSet` operations. A failed operation leaves the set untouched.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The element being inserted is already in the set.
    #[error("cannot insert a duplicate element")]
    DuplicateElement,
    /// The element being removed or queried is not in the set.
    #[error("element not found in the tree")]
    ElementNotFound,
}

pub type Result<T> = result::Result<T, Error>;
