extern crate avl_collections;
extern crate rand;
extern crate simplelog;

use avl_collections::avl_tree::{AvlSet, Error, Node};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{Config, LevelFilter, TestLogger};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 20_000;

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

// Checks ordering, balance and cached heights below `node` and returns the node count and height.
fn check_subtree(node: Option<&Node<u32>>, lo: Option<u32>, hi: Option<u32>) -> (usize, i32) {
    let node = match node {
        Some(node) => node,
        None => return (0, -1),
    };
    let value = *node.value();
    if let Some(lo) = lo {
        assert!(lo < value);
    }
    if let Some(hi) = hi {
        assert!(value < hi);
    }

    let (left_count, left_height) = check_subtree(node.left(), lo, Some(value));
    let (right_count, right_height) = check_subtree(node.right(), Some(value), hi);

    assert!((left_height - right_height).abs() <= 1);
    assert_eq!(node.balance_factor(), left_height - right_height);
    assert_eq!(node.height(), left_height.max(right_height) + 1);
    (left_count + right_count + 1, node.height())
}

fn check_invariants(set: &AvlSet<u32>) {
    let (count, height) = check_subtree(set.root(), None, None);
    assert_eq!(count, set.len());
    assert_eq!(height, set.height());
}

#[test]
fn int_test_avl_set_random_operations() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen_range(0..1000u32);

        if rng.gen::<bool>() {
            let ret = set.insert(value);
            if expected.insert(value) {
                assert_eq!(ret, Ok(()));
            } else {
                assert_eq!(ret, Err(Error::DuplicateElement));
            }
        } else {
            let ret = set.remove(&value);
            if expected.remove(&value) {
                assert_eq!(ret, Ok(value));
            } else {
                assert_eq!(ret, Err(Error::ElementNotFound));
            }
        }

        assert_eq!(set.len(), expected.len());
        check_invariants(&set);
    }

    assert_eq!(set.iter().collect::<Vec<&u32>>(), expected.iter().collect::<Vec<&u32>>());
    assert_eq!(set.min().ok(), expected.iter().next());
    assert_eq!(set.max().ok(), expected.iter().next_back());
}

#[test]
fn int_test_avl_set_ascending_insert() {
    let mut set = AvlSet::new();
    for value in 0..1023 {
        set.insert(value).unwrap();
        check_invariants(&set);
    }

    // 2^10 - 1 ascending values fill a perfect tree.
    assert_eq!(set.height(), 9);
    assert_eq!(set.into_iter().collect::<Vec<u32>>(), (0..1023).collect::<Vec<u32>>());
}

#[test]
fn int_test_avl_set_drain_by_remove() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut set = AvlSet::new();
    let mut values = Vec::new();
    while values.len() < 500 {
        let value = rng.gen::<u32>();
        if set.insert(value).is_ok() {
            values.push(value);
        }
    }

    for (i, value) in values.iter().enumerate() {
        assert_eq!(set.remove(value), Ok(*value));
        assert!(!set.contains(value));
        assert_eq!(set.len(), values.len() - i - 1);
        check_invariants(&set);
    }

    assert!(set.is_empty());
    assert!(set.root().is_none());
}

#[test]
fn int_test_avl_set_floor_ceil() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();
    for _ in 0..1000 {
        let value = rng.gen_range(0..10_000u32);
        set.extend(Some(value));
        expected.insert(value);
    }

    for _ in 0..1000 {
        let query = rng.gen_range(0..10_000u32);
        assert_eq!(set.floor(&query), expected.range(..=query).next_back());
        assert_eq!(set.ceil(&query), expected.range(query..).next());
    }
}

fn shape(node: Option<&Node<u32>>, out: &mut Vec<(u32, i32)>) {
    if let Some(node) = node {
        out.push((*node.value(), node.height()));
        shape(node.left(), out);
        shape(node.right(), out);
    }
}

#[test]
fn int_test_avl_set_failed_operations_keep_shape() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(3);
    let mut set = AvlSet::new();
    let mut present = Vec::new();
    while present.len() < 200 {
        let value = rng.gen_range(0..10_000u32);
        if set.insert(value).is_ok() {
            present.push(value);
        }
    }
    for value in present.drain(..67).collect::<Vec<u32>>() {
        assert_eq!(set.remove(&value), Ok(value));
    }

    let mut before = Vec::new();
    shape(set.root(), &mut before);

    for value in &present {
        assert_eq!(set.insert(*value), Err(Error::DuplicateElement));
    }
    for value in 10_000..10_100u32 {
        assert_eq!(set.remove(&value), Err(Error::ElementNotFound));
    }

    let mut after = Vec::new();
    shape(set.root(), &mut after);
    assert_eq!(before, after);
    assert_eq!(set.len(), present.len());
    check_invariants(&set);
}
