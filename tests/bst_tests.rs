//! Plain BST behavior: seeded end-to-end scenarios plus the universal
//! invariants, run against both node representations (linked and
//! array-packed) with the same test bodies.

use ordtree::{Accessor, ArrayStore, BstSet, LinkedStore};

fn cmp(a: &i32, b: &i32) -> std::cmp::Ordering {
    a.cmp(b)
}

fn right_chain<A: Accessor<Key = i32> + Default>() {
    let mut set: BstSet<A, _> = BstSet::new_with_comparator(cmp);
    assert!(set.add(1));
    assert!(set.add(2));
    assert!(set.add(3));
    assert_eq!(set.count(), 3);

    let acc = set.accessor();
    let root = set.root();
    assert_eq!(acc.key(root), 1);
    let r1 = acc.right(root);
    assert!(acc.is_nil(acc.left(root)));
    assert_eq!(acc.key(r1), 2);
    let r2 = acc.right(r1);
    assert_eq!(acc.key(r2), 3);
    assert!(acc.is_nil(acc.right(r2)));
}

fn left_chain<A: Accessor<Key = i32> + Default>() {
    let mut set: BstSet<A, _> = BstSet::new_with_comparator(cmp);
    assert!(set.add(3));
    assert!(set.add(2));
    assert!(set.add(1));

    let acc = set.accessor();
    let root = set.root();
    assert_eq!(acc.key(root), 3);
    let l1 = acc.left(root);
    assert_eq!(acc.key(l1), 2);
    let l2 = acc.left(l1);
    assert_eq!(acc.key(l2), 1);
    assert!(acc.is_nil(acc.left(l2)));
}

fn duplicate_insert_is_noop<A: Accessor<Key = i32> + Default>() {
    let mut set: BstSet<A, _> = BstSet::new_with_comparator(cmp);
    assert!(set.add(10));
    assert!(!set.add(10));
    assert_eq!(set.count(), 1);
}

fn remove_absent_is_noop<A: Accessor<Key = i32> + Default>() {
    let mut set: BstSet<A, _> = BstSet::new_with_comparator(cmp);
    set.add(1);
    assert!(!set.remove(42));
    assert_eq!(set.count(), 1);
}

fn add_then_contains<A: Accessor<Key = i32> + Default>() {
    let mut set: BstSet<A, _> = BstSet::new_with_comparator(cmp);
    for k in [5, 1, 9, 3, 7] {
        assert!(set.add(k));
        assert!(set.contains(k));
    }
    assert!(!set.contains(100));
}

fn remove_then_not_contains<A: Accessor<Key = i32> + Default>() {
    let mut set: BstSet<A, _> = BstSet::new_with_comparator(cmp);
    for k in [5, 1, 9, 3, 7] {
        set.add(k);
    }
    assert!(set.remove(9));
    assert!(!set.contains(9));
    assert_eq!(set.count(), 4);
}

fn clear_empties_the_set<A: Accessor<Key = i32> + Default>() {
    let mut set: BstSet<A, _> = BstSet::new_with_comparator(cmp);
    for k in 0..20 {
        set.add(k);
    }
    set.clear();
    assert_eq!(set.count(), 0);
    assert!(!set.contains(5));
}

macro_rules! backend_tests {
    ($suffix:ident, $store:ty) => {
        mod $suffix {
            use super::*;

            #[test]
            fn right_chain_insert_123() {
                right_chain::<$store>();
            }

            #[test]
            fn left_chain_insert_321() {
                left_chain::<$store>();
            }

            #[test]
            fn duplicate_insert_is_noop() {
                duplicate_insert_is_noop::<$store>();
            }

            #[test]
            fn remove_absent_is_noop() {
                remove_absent_is_noop::<$store>();
            }

            #[test]
            fn add_then_contains() {
                add_then_contains::<$store>();
            }

            #[test]
            fn remove_then_not_contains() {
                remove_then_not_contains::<$store>();
            }

            #[test]
            fn clear_empties_the_set() {
                clear_empties_the_set::<$store>();
            }
        }
    };
}

backend_tests!(linked, LinkedStore<i32>);
backend_tests!(array, ArrayStore<i32>);

#[test]
fn array_store_does_not_reclaim_indices() {
    let mut set: BstSet<ArrayStore<i32>, _> = BstSet::new_with_comparator(cmp);
    for k in 0..50 {
        set.add(k);
    }
    let used_after_inserts = set.accessor().capacity_used();
    for k in 0..50 {
        set.remove(k);
    }
    assert_eq!(set.count(), 0);
    // Deleting never shrinks the backing vectors (documented limitation).
    assert_eq!(set.accessor().capacity_used(), used_after_inserts);

    // Repeated insert/remove cycles must still not corrupt structure even
    // as the backing vectors grow monotonically.
    for k in 0..50 {
        assert!(set.add(k));
        assert!(set.contains(k));
    }
    assert_eq!(set.count(), 50);
}
