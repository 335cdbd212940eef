//! Red-Black balancing layer: color invariants, insertion fixup cases
//! I1-I6, deletion fixup cases D1-D6. This is the most intricate
//! subsystem in the kernel; the case tables below are encoded as an
//! explicit decision sequence rather than a chain of ad hoc conditionals.

use std::cmp::Ordering;

use crate::accessor::{Accessor, Color, Dir};
use crate::kernel::bst::{self, SearchResult};

fn is_red<A: Accessor>(acc: &A, h: A::Handle) -> bool {
    !acc.is_nil(h) && acc.color(h) == Color::Red
}

fn is_black<A: Accessor>(acc: &A, h: A::Handle) -> bool {
    !is_red(acc, h)
}

/// `dir == Left` rotates left (promoting the right child); `dir == Right`
/// rotates right. A thin wrapper so the fixup tables below can name a
/// rotation by the side it favors instead of repeating a `match`.
fn rotate<A: Accessor>(acc: &mut A, root: A::Handle, r: A::Handle, dir: Dir) -> A::Handle {
    match dir {
        Dir::Left => bst::rotate_left(acc, root, r),
        Dir::Right => bst::rotate_right(acc, root, r),
    }
}

/// I1-I6: walks from the freshly inserted (red) `node` up toward the
/// root, resolving red-red violations. Terminates as soon as a case is
/// reached that doesn't require further ascent (I1, I3, I4, I6); I2 loops
/// by recoloring and continuing from the grandparent; I5 falls through to
/// I6 after a single rotation.
fn insert_fixup<A: Accessor>(acc: &mut A, mut root: A::Handle, mut node: A::Handle) -> A::Handle {
    loop {
        let parent = acc.parent(node);
        if acc.is_nil(parent) {
            break; // I3: node is the root
        }
        if is_black(acc, parent) {
            break; // I1: parent black, nothing to fix
        }
        let grandparent = acc.parent(parent);
        if acc.is_nil(grandparent) {
            // I4: parent is red and has no parent, so parent is the root.
            acc.set_color(parent, Color::Black);
            break;
        }
        let parent_dir = acc
            .dir_of(grandparent, parent)
            .expect("parent must be a child of grandparent");
        let uncle = acc.child(grandparent, parent_dir.opposite());
        if is_red(acc, uncle) {
            // I2: both parent and uncle red -> recolor and ascend.
            acc.set_color(parent, Color::Black);
            acc.set_color(uncle, Color::Black);
            acc.set_color(grandparent, Color::Red);
            node = grandparent;
            continue;
        }

        let node_dir = acc
            .dir_of(parent, node)
            .expect("node must be a child of parent");
        let outer_parent = if node_dir != parent_dir {
            // I5: node is an inner grandchild. Rotate at parent to turn
            // it into the outer case, then fall through to I6 below.
            root = rotate(acc, root, parent, parent_dir);
            acc.parent(parent)
        } else {
            parent
        };

        // I6: node (or, after I5, the former parent) is an outer
        // grandchild of a black uncle. One rotation at the grandparent
        // settles it.
        let grandparent = acc.parent(outer_parent);
        acc.set_color(outer_parent, Color::Black);
        acc.set_color(grandparent, Color::Red);
        root = rotate(acc, root, grandparent, parent_dir.opposite());
        break;
    }
    root
}

pub fn insert<A, C>(acc: &mut A, root: A::Handle, key: A::Key, cmp: &C) -> (A::Handle, bool)
where
    A: Accessor,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    let hint = match bst::search(acc, root, key, cmp) {
        SearchResult::Found(_) => return (root, false),
        SearchResult::Missing { parent, dir } => (parent, dir),
    };
    let node = bst::insert_at_hint(acc, hint.0, hint.1, key);
    acc.set_color(node, Color::Red);

    let mut new_root = if acc.is_nil(root) { node } else { root };
    new_root = insert_fixup(acc, new_root, node);
    acc.set_color(new_root, Color::Black);
    (new_root, true)
}

/// Phase A of delete: if `u` has two children, structurally swap it with
/// its in-order successor `y` (relinking all six of their mutual
/// pointer fields, and swapping colors) so the node Phase B actually
/// splices out, `u`, now sitting at `y`'s former position, has at most
/// one child. `y` itself is never removed; it simply takes `u`'s old
/// place in the tree, carrying `u`'s old color.
fn swap_with_successor<A: Accessor>(acc: &mut A, mut root: A::Handle, u: A::Handle) -> A::Handle {
    let y = bst::successor(acc, u);

    let u_color = acc.color(u);
    let y_color = acc.color(y);
    acc.set_color(u, y_color);
    acc.set_color(y, u_color);

    let u_left = acc.left(u);
    let u_right = acc.right(u);
    let u_parent = acc.parent(u);

    if acc.handles_eq(acc.parent(y), u) {
        // y is u's direct right child: no detach step needed on y's side.
        let y_right = acc.right(y);

        acc.set_left(y, u_left);
        acc.set_parent(u_left, y);
        acc.set_parent(y, u_parent);
        if acc.is_nil(u_parent) {
            root = y;
        } else if acc.handles_eq(u, acc.left(u_parent)) {
            acc.set_left(u_parent, y);
        } else {
            acc.set_right(u_parent, y);
        }

        acc.set_right(y, u);
        acc.set_parent(u, y);
        acc.set_left(u, acc.nil());
        acc.set_right(u, y_right);
        if !acc.is_nil(y_right) {
            acc.set_parent(y_right, u);
        }
    } else {
        let y_parent = acc.parent(y);
        let y_right = acc.right(y);

        // y moves into u's old position, taking both of u's children.
        acc.set_left(y, u_left);
        acc.set_parent(u_left, y);
        acc.set_right(y, u_right);
        acc.set_parent(u_right, y);
        acc.set_parent(y, u_parent);
        if acc.is_nil(u_parent) {
            root = y;
        } else if acc.handles_eq(u, acc.left(u_parent)) {
            acc.set_left(u_parent, y);
        } else {
            acc.set_right(u_parent, y);
        }

        // u moves into y's old position (always a left child, since y
        // was the minimum of u's right subtree), inheriting y's old
        // right child.
        acc.set_parent(u, y_parent);
        acc.set_left(y_parent, u);
        acc.set_left(u, acc.nil());
        acc.set_right(u, y_right);
        if !acc.is_nil(y_right) {
            acc.set_parent(y_right, u);
        }
    }
    root
}

/// D1-D6: resolves the "double black" deficiency left behind when a
/// black leaf is spliced out. `parent`/`dir` identify where the removed
/// node used to hang (`dir` is which child slot of `parent` it occupied).
fn delete_fixup<A: Accessor>(
    acc: &mut A,
    mut root: A::Handle,
    mut parent: A::Handle,
    mut dir: Dir,
) -> A::Handle {
    loop {
        let mut sib = acc.child(parent, dir.opposite());

        if is_red(acc, sib) {
            // D3: red sibling. Rotate it into the grandparent's slot,
            // recolor, and re-fetch the (now black) sibling and its
            // nephews before testing the remaining cases.
            acc.set_color(sib, Color::Black);
            acc.set_color(parent, Color::Red);
            root = rotate(acc, root, parent, dir);
            sib = acc.child(parent, dir.opposite());
        }

        let close_nephew = acc.child(sib, dir);
        let distant_nephew = acc.child(sib, dir.opposite());

        if is_red(acc, distant_nephew) {
            // D6: distant nephew red, terminal regardless of the other
            // colors.
            acc.set_color(sib, acc.color(parent));
            acc.set_color(parent, Color::Black);
            acc.set_color(distant_nephew, Color::Black);
            root = rotate(acc, root, parent, dir);
            break;
        }

        if is_red(acc, close_nephew) {
            // D5: close nephew red, distant nephew black. Rotate at the
            // sibling away from node's side to manufacture a red distant
            // nephew, then loop back around to re-enter as D6.
            acc.set_color(sib, Color::Red);
            acc.set_color(close_nephew, Color::Black);
            root = rotate(acc, root, sib, dir.opposite());
            continue;
        }

        if is_red(acc, parent) {
            // D4: both nephews black, parent red. Terminal recolor.
            acc.set_color(sib, Color::Red);
            acc.set_color(parent, Color::Black);
            break;
        }

        // D1: parent, sibling, and both nephews all black. Push the
        // deficiency one level up and continue from the grandparent,
        // unless (D2) the ascent has already reached the root.
        acc.set_color(sib, Color::Red);
        let grandparent = acc.parent(parent);
        if acc.is_nil(grandparent) {
            break;
        }
        dir = acc
            .dir_of(grandparent, parent)
            .expect("parent must be a child of its parent");
        parent = grandparent;
    }
    root
}

pub fn remove<A, C>(acc: &mut A, root: A::Handle, key: A::Key, cmp: &C) -> (A::Handle, bool)
where
    A: Accessor,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    let node = match bst::search(acc, root, key, cmp) {
        SearchResult::Found(h) => h,
        SearchResult::Missing { .. } => return (root, false),
    };

    let mut new_root = root;
    if !acc.is_nil(acc.left(node)) && !acc.is_nil(acc.right(node)) {
        new_root = swap_with_successor(acc, new_root, node);
    }

    let parent = acc.parent(node);
    let child = if !acc.is_nil(acc.left(node)) {
        acc.left(node)
    } else {
        acc.right(node)
    };

    if is_red(acc, node) || !acc.is_nil(child) {
        // node is red (a red node can only have nil children here, by
        // the Red-Black invariants, so this splices out a leaf), or its
        // sole child is a red leaf. Either way: splice and (if present)
        // repaint the promoted child black.
        new_root = bst::shift(acc, new_root, node, child);
        if !acc.is_nil(child) {
            acc.set_color(child, Color::Black);
        }
        acc.release(node);
        if !acc.is_nil(new_root) {
            acc.set_color(new_root, Color::Black);
        }
        return (new_root, true);
    }

    // node is black with two nil children. Splicing it out leaves the
    // parent's slot one black short, unless node was the root (in which
    // case the tree is simply now empty).
    let was_root = acc.is_nil(parent);
    let dir = if was_root {
        None
    } else {
        acc.dir_of(parent, node)
    };
    new_root = bst::shift(acc, new_root, node, acc.nil());
    acc.release(node);

    if !was_root {
        new_root = delete_fixup(
            acc,
            new_root,
            parent,
            dir.expect("node must be a child of parent"),
        );
    }
    if !acc.is_nil(new_root) {
        acc.set_color(new_root, Color::Black);
    }
    (new_root, true)
}
