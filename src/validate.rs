//! Structural validators: adjacency, content-vs-oracle, AVL
//! height/balance, and Red-Black color-rule checks. Each walks the tree
//! once and returns a structured `ValidationError` describing the first
//! violation found; the fuzzer wraps these together with a snapshot and
//! the triggering operation into a `FuzzFailure`.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::accessor::{Accessor, Color};
use crate::error::ValidationError;

fn key_str<A: Accessor>(acc: &A, h: A::Handle) -> String
where
    A::Key: Debug,
{
    format!("{:?}", acc.key(h))
}

/// Recursively confirms `parent(left(n)) == n` and `parent(right(n)) == n`
/// at every node, and that the root's own parent is nil.
pub fn check_adjacency<A>(acc: &A, root: A::Handle) -> Result<(), ValidationError>
where
    A: Accessor,
    A::Key: Debug,
{
    if acc.is_nil(root) {
        return Ok(());
    }
    if !acc.is_nil(acc.parent(root)) {
        return Err(ValidationError::RootHasParent);
    }
    check_adjacency_at(acc, root)
}

fn check_adjacency_at<A>(acc: &A, node: A::Handle) -> Result<(), ValidationError>
where
    A: Accessor,
    A::Key: Debug,
{
    let left = acc.left(node);
    if !acc.is_nil(left) {
        if !acc.handles_eq(acc.parent(left), node) {
            return Err(ValidationError::Adjacency {
                key: key_str(acc, left),
            });
        }
        check_adjacency_at(acc, left)?;
    }
    let right = acc.right(node);
    if !acc.is_nil(right) {
        if !acc.handles_eq(acc.parent(right), node) {
            return Err(ValidationError::Adjacency {
                key: key_str(acc, right),
            });
        }
        check_adjacency_at(acc, right)?;
    }
    Ok(())
}

/// Collects the tree's keys via in-order traversal and compares them,
/// as a set, against `oracle`.
pub fn check_content<A>(
    acc: &A,
    root: A::Handle,
    oracle: &HashSet<A::Key>,
) -> Result<(), ValidationError>
where
    A: Accessor,
    A::Key: Eq + Hash + Debug,
{
    let mut seen = HashSet::new();
    collect_in_order(acc, root, &mut seen);

    let extra: Vec<String> = seen
        .difference(oracle)
        .map(|k| format!("{:?}", k))
        .collect();
    let missing: Vec<String> = oracle
        .difference(&seen)
        .map(|k| format!("{:?}", k))
        .collect();

    if extra.is_empty() && missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Content { extra, missing })
    }
}

fn collect_in_order<A>(acc: &A, node: A::Handle, out: &mut HashSet<A::Key>)
where
    A: Accessor,
    A::Key: Eq + Hash,
{
    if acc.is_nil(node) {
        return;
    }
    collect_in_order(acc, acc.left(node), out);
    out.insert(acc.key(node));
    collect_in_order(acc, acc.right(node), out);
}

/// Recomputes height bottom-up and compares it against the stored value,
/// and checks `|balance factor| <= 1`, at every node.
pub fn check_avl<A>(acc: &A, root: A::Handle) -> Result<(), ValidationError>
where
    A: Accessor,
    A::Key: Debug,
{
    check_avl_at(acc, root).map(|_| ())
}

fn check_avl_at<A>(acc: &A, node: A::Handle) -> Result<i64, ValidationError>
where
    A: Accessor,
    A::Key: Debug,
{
    if acc.is_nil(node) {
        return Ok(0);
    }
    let lh = check_avl_at(acc, acc.left(node))?;
    let rh = check_avl_at(acc, acc.right(node))?;

    let recomputed = 1 + lh.max(rh);
    let stored = acc.height(node);
    if stored != recomputed {
        return Err(ValidationError::AvlHeightMismatch {
            key: key_str(acc, node),
            stored,
            recomputed,
        });
    }

    let factor = lh - rh;
    if factor.abs() > 1 {
        return Err(ValidationError::AvlBalanceViolation {
            key: key_str(acc, node),
            factor,
        });
    }
    Ok(recomputed)
}

/// Verifies the root is black, no red node has a red child, and every
/// root-to-nil path carries the same black-height (a nil counts as
/// black-height 1).
pub fn check_rb<A>(acc: &A, root: A::Handle) -> Result<(), ValidationError>
where
    A: Accessor,
    A::Key: Debug,
{
    if acc.is_nil(root) {
        return Ok(());
    }
    if acc.color(root) == Color::Red {
        return Err(ValidationError::RedRoot);
    }
    check_rb_at(acc, root).map(|_| ())
}

fn check_rb_at<A>(acc: &A, node: A::Handle) -> Result<u32, ValidationError>
where
    A: Accessor,
    A::Key: Debug,
{
    if acc.is_nil(node) {
        return Ok(1);
    }

    let left = acc.left(node);
    let right = acc.right(node);

    if acc.color(node) == Color::Red {
        if !acc.is_nil(left) && acc.color(left) == Color::Red {
            return Err(ValidationError::RedRedViolation {
                key: key_str(acc, left),
            });
        }
        if !acc.is_nil(right) && acc.color(right) == Color::Red {
            return Err(ValidationError::RedRedViolation {
                key: key_str(acc, right),
            });
        }
    }

    let lbh = check_rb_at(acc, left)?;
    let rbh = check_rb_at(acc, right)?;
    if lbh != rbh {
        return Err(ValidationError::BlackHeightMismatch {
            key: key_str(acc, node),
            left: lbh,
            right: rbh,
        });
    }
    let own = if acc.color(node) == Color::Black { 1 } else { 0 };
    Ok(lbh + own)
}
