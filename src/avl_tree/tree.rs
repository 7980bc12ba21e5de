use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result};
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left around node of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right around node of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the root of `tree` and restores the avl invariant with at most two
// rotations. Every node below the root must already be balanced.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let node = match node.balance_factor() {
        factor if factor > 1 => {
            if node.left.as_ref().map_or(false, |left| left.balance_factor() < 0) {
                trace!("left-right case");
                node.left = node.left.take().map(rotate_left);
            } else {
                trace!("left-left case");
            }
            rotate_right(node)
        },
        factor if factor < -1 => {
            if node.right.as_ref().map_or(false, |right| right.balance_factor() > 0) {
                trace!("right-left case");
                node.right = node.right.take().map(rotate_right);
            } else {
                trace!("right-right case");
            }
            rotate_left(node)
        },
        _ => node,
    };

    *tree = Some(node);
}

// Unlinks the minimum node of `tree`, rebalancing every node on the path to it.
fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let mut node = tree.take()?;
    if node.left.is_some() {
        let min = remove_min(&mut node.left);
        *tree = Some(node);
        balance(tree);
        min
    } else {
        *tree = node.right.take();
        Some(node)
    }
}

// Joins the two subtrees of a removed node by promoting the in-order successor.
fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    match remove_min(&mut right_tree) {
        Some(mut new_root) => {
            new_root.left = left_tree;
            new_root.right = right_tree;
            Some(new_root)
        },
        None => left_tree,
    }
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>) -> Result<()>
where
    T: Ord,
{
    match tree {
        Some(node) => match new_node.value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, new_node)?,
            Ordering::Greater => insert(&mut node.right, new_node)?,
            Ordering::Equal => {
                debug!("rejected insert of a duplicate element");
                return Err(Error::DuplicateElement);
            },
        },
        None => {
            *tree = Some(Box::new(new_node));
            return Ok(());
        },
    }

    balance(tree);
    Ok(())
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Result<T>
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            debug!("element to remove is not in the tree");
            return Err(Error::ElementNotFound);
        },
    };

    let ret = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            let Node { value, left, right, .. } = *node;
            *tree = match (left, right) {
                (None, right) => right,
                (left, None) => left,
                (left, right) => combine_subtrees(left, right),
            };
            balance(tree);
            return Ok(value);
        },
    };

    *tree = Some(node);
    if ret.is_ok() {
        balance(tree);
    }
    ret
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => {
                best = Some(&node.value);
                &node.left
            },
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(&node.value),
        };
    }
    best
}

pub fn floor<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => {
                best = Some(&node.value);
                &node.right
            },
            Ordering::Equal => return Some(&node.value),
        };
    }
    best
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_ref()?;
    while let Some(left) = &curr.left {
        curr = left;
    }
    Some(&curr.value)
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_ref()?;
    while let Some(right) = &curr.right {
        curr = right;
    }
    Some(&curr.value)
}
