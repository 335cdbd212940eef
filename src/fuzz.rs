//! Differential fuzzer: drives a tree-under-test and an oracle `HashSet`
//! through the same random sequence of inserts and removes, asserting
//! agreement on every return value and revalidating structural
//! invariants after every mutation. Variant-agnostic: it is parameterized
//! by a `FuzzDriver` implementation rather than hardcoding which tree
//! kind it drives, so the same loop exercises plain BST, AVL, and
//! Red-Black trees alike.
//!
//! Progress is reported with a plain `println!` every 100 epochs, not a
//! tracing framework; there's nothing else in this crate that needs one.

use std::collections::HashSet;

use rand::Rng;

use crate::accessor::Accessor;
use crate::error::{FuzzCause, FuzzFailure, FuzzMismatchError, ValidationError};
use crate::sets::{AvlSet, BstSet, RbSet};

/// Keys are fixed to `i64` for the fuzz harness, which picks random
/// integers in `[0, 4N)` for each grow/shrink step; the sets themselves
/// remain generic over any `Ord` key, this harness just exercises them
/// with integers.
pub trait FuzzDriver {
    fn new() -> Self;
    fn add(&mut self, key: i64) -> bool;
    fn remove(&mut self, key: i64) -> bool;
    fn validate(&self, oracle: &HashSet<i64>) -> Result<(), ValidationError>;
    fn snapshot(&self) -> String;
}

fn natural_cmp(a: &i64, b: &i64) -> std::cmp::Ordering {
    a.cmp(b)
}

type Cmp = fn(&i64, &i64) -> std::cmp::Ordering;

/// Drives a `BstSet` (adjacency + content validation only).
pub struct BstDriver<A>(BstSet<A, Cmp>)
where
    A: Accessor<Key = i64> + Default;

impl<A> FuzzDriver for BstDriver<A>
where
    A: Accessor<Key = i64> + Default,
{
    fn new() -> Self {
        BstDriver(BstSet::new_with_comparator(natural_cmp))
    }
    fn add(&mut self, key: i64) -> bool {
        self.0.add(key)
    }
    fn remove(&mut self, key: i64) -> bool {
        self.0.remove(key)
    }
    fn validate(&self, oracle: &HashSet<i64>) -> Result<(), ValidationError> {
        crate::validate::check_adjacency(self.0.accessor(), self.0.root())?;
        crate::validate::check_content(self.0.accessor(), self.0.root(), oracle)?;
        Ok(())
    }
    fn snapshot(&self) -> String {
        self.0.render()
    }
}

/// Drives an `AvlSet` (adjacency + content + height/balance validation).
pub struct AvlDriver<A>(AvlSet<A, Cmp>)
where
    A: Accessor<Key = i64> + Default;

impl<A> FuzzDriver for AvlDriver<A>
where
    A: Accessor<Key = i64> + Default,
{
    fn new() -> Self {
        AvlDriver(AvlSet::new_with_comparator(natural_cmp))
    }
    fn add(&mut self, key: i64) -> bool {
        self.0.add(key)
    }
    fn remove(&mut self, key: i64) -> bool {
        self.0.remove(key)
    }
    fn validate(&self, oracle: &HashSet<i64>) -> Result<(), ValidationError> {
        crate::validate::check_adjacency(self.0.accessor(), self.0.root())?;
        crate::validate::check_content(self.0.accessor(), self.0.root(), oracle)?;
        crate::validate::check_avl(self.0.accessor(), self.0.root())?;
        Ok(())
    }
    fn snapshot(&self) -> String {
        self.0.render()
    }
}

/// Drives an `RbSet` (adjacency + content + Red-Black color-rule
/// validation).
pub struct RbDriver<A>(RbSet<A, Cmp>)
where
    A: Accessor<Key = i64> + Default;

impl<A> FuzzDriver for RbDriver<A>
where
    A: Accessor<Key = i64> + Default,
{
    fn new() -> Self {
        RbDriver(RbSet::new_with_comparator(natural_cmp))
    }
    fn add(&mut self, key: i64) -> bool {
        self.0.add(key)
    }
    fn remove(&mut self, key: i64) -> bool {
        self.0.remove(key)
    }
    fn validate(&self, oracle: &HashSet<i64>) -> Result<(), ValidationError> {
        crate::validate::check_adjacency(self.0.accessor(), self.0.root())?;
        crate::validate::check_content(self.0.accessor(), self.0.root(), oracle)?;
        crate::validate::check_rb(self.0.accessor(), self.0.root())?;
        Ok(())
    }
    fn snapshot(&self) -> String {
        self.0.render()
    }
}

fn fail(
    epoch: u64,
    operation: String,
    cause: impl Into<FuzzCause>,
    pre_op_snapshot: String,
) -> FuzzFailure {
    FuzzFailure {
        epoch,
        operation,
        cause: cause.into(),
        snapshot: pre_op_snapshot,
    }
}

/// Runs exactly `epochs` epochs of the fuzz loop against a fresh `D` each
/// time, each epoch growing the tree to `max_elements` and then shrinking
/// it back to empty, validating after every single mutation. This is the
/// bounded building block `fuzz_variant` loops forever over; tests call
/// it directly with a small epoch count.
pub fn fuzz_epochs<D: FuzzDriver>(max_elements: usize, epochs: u64) -> Result<(), FuzzFailure> {
    let mut rng = rand::thread_rng();
    let bound = (4 * max_elements.max(1)) as i64;

    for epoch in 1..=epochs {
        if epoch % 100 == 0 {
            println!("fuzz epoch {}", epoch);
        }

        let mut tree = D::new();
        let mut oracle: HashSet<i64> = HashSet::new();
        tree.validate(&oracle).map_err(|e| {
            fail(epoch, "initial state".to_string(), e, tree.snapshot())
        })?;

        // Grow phase: insert until the tree holds `max_elements` keys.
        while oracle.len() < max_elements {
            let key = rng.gen_range(0, bound);
            let snapshot = tree.snapshot();
            let tree_result = tree.add(key);
            let oracle_result = oracle.insert(key);
            if tree_result != oracle_result {
                return Err(fail(
                    epoch,
                    format!("add({})", key),
                    FuzzMismatchError {
                        operation: "add",
                        key: format!("{:?}", key),
                        tree_result,
                        oracle_result,
                    },
                    snapshot,
                ));
            }
            tree.validate(&oracle)
                .map_err(|e| fail(epoch, format!("add({})", key), e, snapshot.clone()))?;
        }

        // Shrink phase: remove until the tree is empty.
        while !oracle.is_empty() {
            let key = rng.gen_range(0, bound);
            let snapshot = tree.snapshot();
            let tree_result = tree.remove(key);
            let oracle_result = oracle.remove(&key);
            if tree_result != oracle_result {
                return Err(fail(
                    epoch,
                    format!("remove({})", key),
                    FuzzMismatchError {
                        operation: "remove",
                        key: format!("{:?}", key),
                        tree_result,
                        oracle_result,
                    },
                    snapshot,
                ));
            }
            tree.validate(&oracle)
                .map_err(|e| fail(epoch, format!("remove({})", key), e, snapshot.clone()))?;
        }
    }
    Ok(())
}

/// The crate's single fuzzing entry point: runs the grow/shrink loop
/// forever, epoch after epoch, for the driver `D` (one of `BstDriver`,
/// `AvlDriver`, `RbDriver`). Returns on the first validation or mismatch
/// failure; otherwise runs until the caller interrupts the process (e.g.
/// Ctrl-C), printing an epoch counter and only ever stopping on a signal
/// or a failure.
pub fn fuzz_variant<D: FuzzDriver>(max_elements: usize) -> Result<(), FuzzFailure> {
    fuzz_epochs::<D>(max_elements, u64::MAX)
}
