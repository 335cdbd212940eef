//! AVL behavior: seeded rotation scenarios plus the universal invariants
//! (adjacency, content, and height/balance) run against both node
//! representations.

use itertools::Itertools;
use ordtree::{Accessor, ArrayStore, AvlSet, LinkedStore};

fn cmp(a: &i32, b: &i32) -> std::cmp::Ordering {
    a.cmp(b)
}

fn assert_avl_shape<A: Accessor<Key = i32> + Default>(keys: &[i32]) {
    let mut set: AvlSet<A, _> = AvlSet::new_with_comparator(cmp);
    for &k in keys {
        set.add(k);
    }
    ordtree::validate::check_avl(set.accessor(), set.root()).expect("balanced");
    ordtree::validate::check_adjacency(set.accessor(), set.root()).expect("well-formed");
}

/// Inserting `a, b, c` in any order that forces a single rotation must
/// settle into the shape `b` with children `a` and `c`, since a 3-node
/// AVL tree has only one balanced arrangement.
fn three_node_rotation<A: Accessor<Key = i32> + Default>() {
    for ordering in [1, 2, 3].into_iter().permutations(3) {
        let mut set: AvlSet<A, _> = AvlSet::new_with_comparator(cmp);
        for &k in &ordering {
            set.add(k);
        }
        let acc = set.accessor();
        let root = set.root();
        assert_eq!(acc.key(root), 2, "ordering {:?}", ordering);
        let left = acc.left(root);
        let right = acc.right(root);
        assert_eq!(acc.key(left), 1, "ordering {:?}", ordering);
        assert_eq!(acc.key(right), 3, "ordering {:?}", ordering);
        assert!(acc.is_nil(acc.left(left)));
        assert!(acc.is_nil(acc.right(left)));
        assert!(acc.is_nil(acc.left(right)));
        assert!(acc.is_nil(acc.right(right)));
    }
}

/// Starting from the tree `20, {4, {3}, {9}}, {26}` (built by inserting
/// 20, 4, 26, 3, 9 in order), inserting 15 triggers a double rotation
/// that re-roots the tree at 9, with left subtree `4, {3}` and right
/// subtree `20, {15}, {26}`.
fn double_rotation_reroots_at_nine<A: Accessor<Key = i32> + Default>() {
    let mut set: AvlSet<A, _> = AvlSet::new_with_comparator(cmp);
    for k in [20, 4, 26, 3, 9] {
        set.add(k);
    }
    set.add(15);

    let acc = set.accessor();
    let root = set.root();
    assert_eq!(acc.key(root), 9);

    let left = acc.left(root);
    assert_eq!(acc.key(left), 4);
    let left_left = acc.left(left);
    assert_eq!(acc.key(left_left), 3);
    assert!(acc.is_nil(acc.right(left)));

    let right = acc.right(root);
    assert_eq!(acc.key(right), 20);
    let right_left = acc.left(right);
    assert_eq!(acc.key(right_left), 15);
    let right_right = acc.right(right);
    assert_eq!(acc.key(right_right), 26);

    ordtree::validate::check_avl(set.accessor(), set.root()).expect("balanced");
}

fn stays_balanced_under_sorted_insertion<A: Accessor<Key = i32> + Default>() {
    let keys: Vec<i32> = (0..200).collect();
    assert_avl_shape::<A>(&keys);
}

fn stays_balanced_under_deletion<A: Accessor<Key = i32> + Default>() {
    let mut set: AvlSet<A, _> = AvlSet::new_with_comparator(cmp);
    for k in 0..100 {
        set.add(k);
    }
    for k in (0..100).step_by(2) {
        assert!(set.remove(k));
        ordtree::validate::check_avl(set.accessor(), set.root()).expect("balanced after remove");
    }
    assert_eq!(set.count(), 50);
}

macro_rules! backend_tests {
    ($suffix:ident, $store:ty) => {
        mod $suffix {
            use super::*;

            #[test]
            fn three_node_rotation() {
                super::three_node_rotation::<$store>();
            }

            #[test]
            fn double_rotation_reroots_at_nine() {
                super::double_rotation_reroots_at_nine::<$store>();
            }

            #[test]
            fn stays_balanced_under_sorted_insertion() {
                super::stays_balanced_under_sorted_insertion::<$store>();
            }

            #[test]
            fn stays_balanced_under_deletion() {
                super::stays_balanced_under_deletion::<$store>();
            }
        }
    };
}

backend_tests!(linked, LinkedStore<i32>);
backend_tests!(array, ArrayStore<i32>);
