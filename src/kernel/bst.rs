//! Plain BST algorithms: search, insert, delete, rotations, min/max,
//! in-order successor/predecessor. Every function is generic over
//! `A: Accessor` and an externally supplied comparator closure, and is
//! shared verbatim by the AVL and Red-Black layers.

use std::cmp::Ordering;

use crate::accessor::{Accessor, Dir};

/// Outcome of `search`: either the node carrying `key`, or a *hint*, the
/// last node visited plus the direction an insert would take from it.
pub enum SearchResult<H> {
    Found(H),
    Missing { parent: H, dir: Dir },
}

pub fn search<A, C>(acc: &A, root: A::Handle, key: A::Key, cmp: &C) -> SearchResult<A::Handle>
where
    A: Accessor,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    let mut cur = root;
    let mut parent = acc.nil();
    let mut dir = Dir::Left;
    while !acc.is_nil(cur) {
        let k = acc.key(cur);
        match cmp(&key, &k) {
            Ordering::Equal => return SearchResult::Found(cur),
            Ordering::Less => {
                parent = cur;
                dir = Dir::Left;
                cur = acc.left(cur);
            }
            Ordering::Greater => {
                parent = cur;
                dir = Dir::Right;
                cur = acc.right(cur);
            }
        }
    }
    SearchResult::Missing { parent, dir }
}

/// Preconditions: `node` is non-nil.
pub fn minimum<A: Accessor>(acc: &A, mut node: A::Handle) -> A::Handle {
    debug_assert!(!acc.is_nil(node), "minimum called on nil");
    while !acc.is_nil(acc.left(node)) {
        node = acc.left(node);
    }
    node
}

/// Preconditions: `node` is non-nil.
pub fn maximum<A: Accessor>(acc: &A, mut node: A::Handle) -> A::Handle {
    debug_assert!(!acc.is_nil(node), "maximum called on nil");
    while !acc.is_nil(acc.right(node)) {
        node = acc.right(node);
    }
    node
}

pub fn successor<A: Accessor>(acc: &A, node: A::Handle) -> A::Handle {
    if !acc.is_nil(acc.right(node)) {
        return minimum(acc, acc.right(node));
    }
    let mut cur = node;
    let mut p = acc.parent(cur);
    while !acc.is_nil(p) && acc.handles_eq(cur, acc.right(p)) {
        cur = p;
        p = acc.parent(cur);
    }
    p
}

pub fn predecessor<A: Accessor>(acc: &A, node: A::Handle) -> A::Handle {
    if !acc.is_nil(acc.left(node)) {
        return maximum(acc, acc.left(node));
    }
    let mut cur = node;
    let mut p = acc.parent(cur);
    while !acc.is_nil(p) && acc.handles_eq(cur, acc.left(p)) {
        cur = p;
        p = acc.parent(cur);
    }
    p
}

/// Builds a new node for `key` and links it as the hinted child of
/// `parent` (or as the new root, if `parent` is nil). Returns the new
/// node's handle. Callers are responsible for any height/color
/// initialization their variant needs beyond the accessor's defaults.
pub fn insert_at_hint<A: Accessor>(
    acc: &mut A,
    parent: A::Handle,
    dir: Dir,
    key: A::Key,
) -> A::Handle {
    let node = acc.build(key);
    acc.set_parent(node, parent);
    if acc.is_nil(parent) {
        return node;
    }
    acc.set_child(parent, dir, node);
    node
}

/// Replaces the subtree rooted at `u` with the subtree rooted at `v` in
/// `u`'s parent's child slot, repairing `v`'s parent back-pointer. Does
/// not touch `u` itself; the caller still owns unlinking `u`'s remaining
/// pointers and releasing it. If `u` was the root, `root` is updated to
/// `v` and returned.
pub fn shift<A: Accessor>(acc: &mut A, root: A::Handle, u: A::Handle, v: A::Handle) -> A::Handle {
    let up = acc.parent(u);
    let mut new_root = root;
    if acc.is_nil(up) {
        new_root = v;
    } else if acc.handles_eq(u, acc.left(up)) {
        acc.set_left(up, v);
    } else {
        acc.set_right(up, v);
    }
    if !acc.is_nil(v) {
        acc.set_parent(v, up);
    }
    new_root
}

/// Result of `delete`: the (possibly updated) root, and the anchor node
/// from which AVL/RB rebalancing walks should start (plain BST delete
/// ignores it).
pub struct DeleteOutcome<H> {
    pub root: H,
    pub rebalance_anchor: H,
}

/// Removes `u` from the tree rooted at `root`: no left child, no right
/// child, or both, relinking and repairing parent back-pointers in each
/// case, and releases `u`'s storage once fully unlinked.
pub fn delete<A: Accessor>(acc: &mut A, root: A::Handle, u: A::Handle) -> DeleteOutcome<A::Handle> {
    let mut new_root = root;
    let rebalance_anchor;

    if acc.is_nil(acc.left(u)) {
        let r = acc.right(u);
        rebalance_anchor = acc.parent(u);
        new_root = shift(acc, new_root, u, r);
    } else if acc.is_nil(acc.right(u)) {
        let l = acc.left(u);
        rebalance_anchor = acc.parent(u);
        new_root = shift(acc, new_root, u, l);
    } else {
        let y = successor(acc, u);
        let y_parent = acc.parent(y);
        if !acc.handles_eq(y_parent, u) {
            let anchor = y_parent;
            let yr = acc.right(y);
            new_root = shift(acc, new_root, y, yr);
            let ur = acc.right(u);
            acc.set_right(y, ur);
            acc.set_parent(ur, y);
            rebalance_anchor = anchor;
        } else {
            rebalance_anchor = y;
        }
        new_root = shift(acc, new_root, u, y);
        let ul = acc.left(u);
        acc.set_left(y, ul);
        acc.set_parent(ul, y);
    }

    acc.release(u);
    DeleteOutcome {
        root: new_root,
        rebalance_anchor,
    }
}

/// Left-rotates around `r`. Precondition: `right(r)` is non-nil.
/// Postcondition: `r`, the new subtree root, and the relocated inner
/// grandchild all have consistent parent back-pointers; if `r` was the
/// tree root, the updated root is returned.
pub fn rotate_left<A: Accessor>(acc: &mut A, root: A::Handle, r: A::Handle) -> A::Handle {
    let y = acc.right(r);
    debug_assert!(!acc.is_nil(y), "rotate_left requires a non-nil right child");
    let mut new_root = root;

    let yl = acc.left(y);
    acc.set_right(r, yl);
    if !acc.is_nil(yl) {
        acc.set_parent(yl, r);
    }

    let rp = acc.parent(r);
    acc.set_parent(y, rp);
    if acc.is_nil(rp) {
        new_root = y;
    } else if acc.handles_eq(r, acc.left(rp)) {
        acc.set_left(rp, y);
    } else {
        acc.set_right(rp, y);
    }

    acc.set_left(y, r);
    acc.set_parent(r, y);
    new_root
}

/// Right-rotates around `r`. Precondition: `left(r)` is non-nil. Symmetric
/// to `rotate_left`.
pub fn rotate_right<A: Accessor>(acc: &mut A, root: A::Handle, r: A::Handle) -> A::Handle {
    let y = acc.left(r);
    debug_assert!(!acc.is_nil(y), "rotate_right requires a non-nil left child");
    let mut new_root = root;

    let yr = acc.right(y);
    acc.set_left(r, yr);
    if !acc.is_nil(yr) {
        acc.set_parent(yr, r);
    }

    let rp = acc.parent(r);
    acc.set_parent(y, rp);
    if acc.is_nil(rp) {
        new_root = y;
    } else if acc.handles_eq(r, acc.left(rp)) {
        acc.set_left(rp, y);
    } else {
        acc.set_right(rp, y);
    }

    acc.set_right(y, r);
    acc.set_parent(r, y);
    new_root
}

/// Plain BST insert: search for `key`, and if absent, link a new node at
/// the hint. Returns the (possibly updated) root and whether a node was
/// actually inserted. This is the crate's only insert routine; every new
/// node always gets its parent pointer set.
pub fn insert<A, C>(acc: &mut A, root: A::Handle, key: A::Key, cmp: &C) -> (A::Handle, bool)
where
    A: Accessor,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    match search(acc, root, key, cmp) {
        SearchResult::Found(_) => (root, false),
        SearchResult::Missing { parent, dir } => {
            let node = insert_at_hint(acc, parent, dir, key);
            let new_root = if acc.is_nil(root) { node } else { root };
            (new_root, true)
        }
    }
}

/// Plain BST delete by key: search for `key`, and if present, remove it.
/// Returns the (possibly updated) root and whether a node was removed.
pub fn remove<A, C>(acc: &mut A, root: A::Handle, key: A::Key, cmp: &C) -> (A::Handle, bool)
where
    A: Accessor,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    match search(acc, root, key, cmp) {
        SearchResult::Found(node) => {
            let outcome = delete(acc, root, node);
            (outcome.root, true)
        }
        SearchResult::Missing { .. } => (root, false),
    }
}

/// Tears the tree down post-order, releasing every node. Representations
/// that own storage (`LinkedStore`) must be walked this way before being
/// dropped or reused; `ArrayStore::release` is a no-op but `clear` still
/// walks the same way so both representations share one code path.
pub fn clear<A: Accessor>(acc: &mut A, root: A::Handle) {
    if acc.is_nil(root) {
        return;
    }
    let l = acc.left(root);
    let r = acc.right(root);
    clear(acc, l);
    clear(acc, r);
    acc.release(root);
}
