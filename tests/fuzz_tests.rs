//! Differential fuzz runs: a short, fixed-epoch pass per tree variant
//! per node representation, enough to catch a regression in CI without
//! the unbounded `fuzz_variant` loop.

use ordtree::{fuzz_epochs, ArrayStore, AvlDriver, BstDriver, LinkedStore, RbDriver};

const MAX_ELEMENTS: usize = 40;
const EPOCHS: u64 = 50;

#[test]
fn bst_linked_survives_fuzzing() {
    fuzz_epochs::<BstDriver<LinkedStore<i64>>>(MAX_ELEMENTS, EPOCHS).expect("no mismatch");
}

#[test]
fn bst_array_survives_fuzzing() {
    fuzz_epochs::<BstDriver<ArrayStore<i64>>>(MAX_ELEMENTS, EPOCHS).expect("no mismatch");
}

#[test]
fn avl_linked_survives_fuzzing() {
    fuzz_epochs::<AvlDriver<LinkedStore<i64>>>(MAX_ELEMENTS, EPOCHS).expect("no mismatch");
}

#[test]
fn avl_array_survives_fuzzing() {
    fuzz_epochs::<AvlDriver<ArrayStore<i64>>>(MAX_ELEMENTS, EPOCHS).expect("no mismatch");
}

#[test]
fn rb_linked_survives_fuzzing() {
    fuzz_epochs::<RbDriver<LinkedStore<i64>>>(MAX_ELEMENTS, EPOCHS).expect("no mismatch");
}

#[test]
fn rb_array_survives_fuzzing() {
    fuzz_epochs::<RbDriver<ArrayStore<i64>>>(MAX_ELEMENTS, EPOCHS).expect("no mismatch");
}

/// A longer run for the plain BST over the linked representation: 1,000
/// epochs with no validation failure.
#[test]
#[ignore = "slow; run explicitly with `cargo test -- --ignored`"]
fn bst_linked_survives_thousand_epochs() {
    fuzz_epochs::<BstDriver<LinkedStore<i64>>>(100, 1_000).expect("no mismatch");
}
