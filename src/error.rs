//! Structured error types: validation failures raised by the structural
//! validators, fuzzer mismatch failures, and the top-level error the
//! fuzz loop returns. Kernel-internal precondition failures (e.g. a
//! rotation invoked on a node with a nil required child) stay as
//! `debug_assert!`/`panic!` at the call site. They are programmer
//! errors, not recoverable conditions, so they are not part of this enum.

use thiserror::Error;

/// A structural invariant violated by one of the C6 validators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("adjacency broken at node with key {key:?}: parent does not point back to it")]
    Adjacency { key: String },

    #[error("root's parent is non-nil")]
    RootHasParent,

    #[error("content mismatch: tree has {extra:?} that the oracle does not, oracle has {missing:?} that the tree does not")]
    Content {
        extra: Vec<String>,
        missing: Vec<String>,
    },

    #[error("AVL height mismatch at key {key:?}: stored {stored}, recomputed {recomputed}")]
    AvlHeightMismatch {
        key: String,
        stored: i64,
        recomputed: i64,
    },

    #[error("AVL balance factor {factor} at key {key:?} exceeds +/-1")]
    AvlBalanceViolation { key: String, factor: i64 },

    #[error("red-black red-red violation: red node at key {key:?} has a red child")]
    RedRedViolation { key: String },

    #[error("red-black black-height mismatch at key {key:?}: left subtree {left}, right subtree {right}")]
    BlackHeightMismatch { key: String, left: u32, right: u32 },

    #[error("red-black root is red")]
    RedRoot,
}

/// Raised by the fuzzer when `add`/`remove` on the tree under test
/// disagrees with the oracle set's return value for the same operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("mismatch on {operation} {key:?}: tree returned {tree_result}, oracle returned {oracle_result}")]
pub struct FuzzMismatchError {
    pub operation: &'static str,
    pub key: String,
    pub tree_result: bool,
    pub oracle_result: bool,
}

/// What went wrong during one fuzz epoch, together with the pre-operation
/// snapshot and the operation description, so a failure can be
/// reproduced from the report alone.
#[derive(Error, Debug, Clone)]
pub enum FuzzCause {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Mismatch(#[from] FuzzMismatchError),
}

/// The top-level error `fuzz_variant` returns on failure.
#[derive(Error, Debug, Clone)]
#[error(
    "fuzz failure at epoch {epoch}, operation {operation}: {cause}\n--- snapshot before operation ---\n{snapshot}"
)]
pub struct FuzzFailure {
    pub epoch: u64,
    pub operation: String,
    pub cause: FuzzCause,
    pub snapshot: String,
}
