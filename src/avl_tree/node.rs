use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// Nodes are owned by an `AvlSet` and can only be inspected from outside the crate.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: i32,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = *self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_ref().map(|node| &**node)
    }

    /// Returns the cached height of the subtree rooted at this node. A leaf has a height of `0`.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree. A positive
    /// value means the node is left-heavy and a negative value means it is right-heavy.
    pub fn balance_factor(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}
