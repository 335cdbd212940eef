//! Red-Black behavior: seeded recoloring/rotation scenarios, plus the
//! universal and color-rule invariants, run against both node
//! representations.

use std::collections::HashSet;

use ordtree::accessor::Color;
use ordtree::{Accessor, ArrayStore, LinkedStore, RbSet};

fn cmp(a: &i32, b: &i32) -> std::cmp::Ordering {
    a.cmp(b)
}

/// Inserting `2, 1, 4` settles into root `2` (black) with children `1`
/// and `4`, both red, since three nodes fit in one black level.
fn three_inserts_settle_black_root_red_children<A: Accessor<Key = i32> + Default>() {
    let mut set: RbSet<A, _> = RbSet::new_with_comparator(cmp);
    for k in [2, 1, 4] {
        set.add(k);
    }

    let acc = set.accessor();
    let root = set.root();
    assert_eq!(acc.key(root), 2);
    assert_eq!(acc.color(root), Color::Black);

    let left = acc.left(root);
    assert_eq!(acc.key(left), 1);
    assert_eq!(acc.color(left), Color::Red);

    let right = acc.right(root);
    assert_eq!(acc.key(right), 4);
    assert_eq!(acc.color(right), Color::Red);

    ordtree::validate::check_rb(set.accessor(), set.root()).expect("valid red-black tree");
}

/// From that shape, inserting 5 (red uncle case) recolors 2 to red and
/// 1/4 to black, then attaches 5 as a red child under black 4.
fn fourth_insert_triggers_uncle_recolor<A: Accessor<Key = i32> + Default>() {
    let mut set: RbSet<A, _> = RbSet::new_with_comparator(cmp);
    for k in [2, 1, 4] {
        set.add(k);
    }
    set.add(5);

    let acc = set.accessor();
    let root = set.root();
    assert_eq!(acc.key(root), 2);
    assert_eq!(acc.color(root), Color::Black);

    let left = acc.left(root);
    assert_eq!(acc.key(left), 1);
    assert_eq!(acc.color(left), Color::Black);

    let right = acc.right(root);
    assert_eq!(acc.key(right), 4);
    assert_eq!(acc.color(right), Color::Black);

    let right_right = acc.right(right);
    assert_eq!(acc.key(right_right), 5);
    assert_eq!(acc.color(right_right), Color::Red);
    assert!(acc.is_nil(acc.left(right)));

    ordtree::validate::check_rb(set.accessor(), set.root()).expect("valid red-black tree");
}

fn stays_valid_under_sorted_insertion<A: Accessor<Key = i32> + Default>() {
    let mut set: RbSet<A, _> = RbSet::new_with_comparator(cmp);
    for k in 0..200 {
        set.add(k);
    }
    ordtree::validate::check_rb(set.accessor(), set.root()).expect("valid red-black tree");
    ordtree::validate::check_adjacency(set.accessor(), set.root()).expect("well-formed");
}

fn stays_valid_under_deletion<A: Accessor<Key = i32> + Default>() {
    let mut set: RbSet<A, _> = RbSet::new_with_comparator(cmp);
    for k in 0..100 {
        set.add(k);
    }
    for k in (0..100).step_by(3) {
        assert!(set.remove(k));
        ordtree::validate::check_rb(set.accessor(), set.root()).expect("valid after remove");
    }
}

/// Deleting a node with two children forces the successor swap path
/// (Phase A of delete); the tree must stay valid afterward.
fn two_child_delete_swaps_with_successor<A: Accessor<Key = i32> + Default>() {
    let mut set: RbSet<A, _> = RbSet::new_with_comparator(cmp);
    for k in [10, 5, 15, 3, 7, 12, 20] {
        set.add(k);
    }
    assert!(set.remove(10));
    assert!(!set.contains(10));
    assert_eq!(set.count(), 6);
    ordtree::validate::check_rb(set.accessor(), set.root()).expect("valid after swap delete");
    let expected: HashSet<i32> = [5, 15, 3, 7, 12, 20].into_iter().collect();
    ordtree::validate::check_content(set.accessor(), set.root(), &expected)
        .expect("matches expected content");
}

macro_rules! backend_tests {
    ($suffix:ident, $store:ty) => {
        mod $suffix {
            use super::*;

            #[test]
            fn three_inserts_settle_black_root_red_children() {
                super::three_inserts_settle_black_root_red_children::<$store>();
            }

            #[test]
            fn fourth_insert_triggers_uncle_recolor() {
                super::fourth_insert_triggers_uncle_recolor::<$store>();
            }

            #[test]
            fn stays_valid_under_sorted_insertion() {
                super::stays_valid_under_sorted_insertion::<$store>();
            }

            #[test]
            fn stays_valid_under_deletion() {
                super::stays_valid_under_deletion::<$store>();
            }

            #[test]
            fn two_child_delete_swaps_with_successor() {
                super::two_child_delete_swaps_with_successor::<$store>();
            }
        }
    };
}

backend_tests!(linked, LinkedStore<i32>);
backend_tests!(array, ArrayStore<i32>);
