//! AVL balancing layer: height maintenance, balance-factor computation,
//! rebalance-at-node, and the balanced insert/delete wrappers around the
//! plain BST algorithms.
//!
//! The ancestor walks below climb via `Accessor::parent` rather than a
//! separately threaded path vector. Parent access is constant-time
//! uniformly across representations, so a path vector buys nothing here.

use std::cmp::Ordering;

use crate::accessor::Accessor;
use crate::kernel::bst::{self, SearchResult};

pub fn update_height<A: Accessor>(acc: &mut A, n: A::Handle) {
    if acc.is_nil(n) {
        return;
    }
    let lh = acc.height(acc.left(n));
    let rh = acc.height(acc.right(n));
    acc.set_height(n, 1 + lh.max(rh));
}

pub fn balance_factor<A: Accessor>(acc: &A, n: A::Handle) -> i64 {
    acc.height(acc.left(n)) - acc.height(acc.right(n))
}

fn rotate_left<A: Accessor>(acc: &mut A, root: A::Handle, r: A::Handle) -> A::Handle {
    let y = acc.right(r);
    let new_root = bst::rotate_left(acc, root, r);
    update_height(acc, r);
    update_height(acc, y);
    new_root
}

fn rotate_right<A: Accessor>(acc: &mut A, root: A::Handle, r: A::Handle) -> A::Handle {
    let y = acc.left(r);
    let new_root = bst::rotate_right(acc, root, r);
    update_height(acc, r);
    update_height(acc, y);
    new_root
}

/// Rebalances at `n`, whose height is assumed freshly updated. Returns the
/// new root of the subtree formerly rooted at `n`, the (possibly updated)
/// tree root, and whether a rotation occurred.
fn rebalance_at<A: Accessor>(
    acc: &mut A,
    root: A::Handle,
    n: A::Handle,
) -> (A::Handle, A::Handle, bool) {
    let bf = balance_factor(acc, n);
    if bf < -1 {
        let r = acc.right(n);
        let mut root = root;
        if balance_factor(acc, r) > 0 {
            root = rotate_right(acc, root, r);
        }
        root = rotate_left(acc, root, n);
        let new_sub_root = acc.parent(n);
        (new_sub_root, root, true)
    } else if bf > 1 {
        let l = acc.left(n);
        let mut root = root;
        if balance_factor(acc, l) < 0 {
            root = rotate_left(acc, root, l);
        }
        root = rotate_right(acc, root, n);
        let new_sub_root = acc.parent(n);
        (new_sub_root, root, true)
    } else {
        (n, root, false)
    }
}

/// Plain BST insert followed by an ancestor walk that updates heights and
/// rebalances, stopping at the first rotation (the subtree's pre-insert
/// height is restored at that point, so no ancestor above it can have
/// changed balance factor).
pub fn insert<A, C>(acc: &mut A, root: A::Handle, key: A::Key, cmp: &C) -> (A::Handle, bool)
where
    A: Accessor,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    let hint = match bst::search(acc, root, key, cmp) {
        SearchResult::Found(_) => return (root, false),
        SearchResult::Missing { parent, dir } => (parent, dir),
    };
    let mut new_root = root;
    let node = bst::insert_at_hint(acc, hint.0, hint.1, key);
    acc.set_height(node, 1);
    if acc.is_nil(new_root) {
        new_root = node;
    }

    let mut cur = acc.parent(node);
    while !acc.is_nil(cur) {
        update_height(acc, cur);
        let (_, updated_root, rotated) = rebalance_at(acc, new_root, cur);
        new_root = updated_root;
        if rotated {
            break;
        }
        cur = acc.parent(cur);
    }
    (new_root, true)
}

/// Plain BST delete followed by an ancestor walk from the rebalance anchor
/// up to the root, updating height and rebalancing at every step. Unlike
/// insert, deletion never stops early: a rotation here can still change
/// the height seen by an ancestor further up.
pub fn remove<A, C>(acc: &mut A, root: A::Handle, key: A::Key, cmp: &C) -> (A::Handle, bool)
where
    A: Accessor,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    let target = match bst::search(acc, root, key, cmp) {
        SearchResult::Found(h) => h,
        SearchResult::Missing { .. } => return (root, false),
    };

    let outcome = bst::delete(acc, root, target);
    let mut new_root = outcome.root;
    let mut cur = outcome.rebalance_anchor;

    while !acc.is_nil(cur) {
        let next = acc.parent(cur);
        update_height(acc, cur);
        let (_, updated_root, _) = rebalance_at(acc, new_root, cur);
        new_root = updated_root;
        cur = next;
    }
    (new_root, true)
}
