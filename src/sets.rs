//! Public ordered-set containers: `BstSet`, `AvlSet`, `RbSet`. Each owns a
//! root handle, a node count, and a comparator, and delegates every
//! public operation to the matching kernel layer through an `Accessor`
//! instance. Thin, monomorphic wrappers; the actual algorithm work lives
//! in `crate::kernel`.
//!
//! Set-algebra operations (`intersect_with`, `is_subset_of`, and friends)
//! and stable iteration are intentionally not provided here.

use std::cmp::Ordering;

use crate::accessor::Accessor;
use crate::kernel::{avl, bst, rb};

macro_rules! define_set {
    ($name:ident, $insert_fn:path, $remove_fn:path, $doc:literal) => {
        #[doc = $doc]
        pub struct $name<A, C>
        where
            A: Accessor,
            C: Fn(&A::Key, &A::Key) -> Ordering,
        {
            store: A,
            root: A::Handle,
            len: usize,
            cmp: C,
        }

        impl<A, C> $name<A, C>
        where
            A: Accessor + Default,
            C: Fn(&A::Key, &A::Key) -> Ordering,
        {
            /// Builds an empty set ordered by `cmp`.
            pub fn new_with_comparator(cmp: C) -> Self {
                let store = A::default();
                let root = store.nil();
                $name {
                    store,
                    root,
                    len: 0,
                    cmp,
                }
            }

            pub fn count(&self) -> usize {
                self.len
            }

            pub fn contains(&self, key: A::Key) -> bool {
                matches!(
                    bst::search(&self.store, self.root, key, &self.cmp),
                    bst::SearchResult::Found(_)
                )
            }

            /// Returns `true` iff `key` was newly inserted.
            pub fn add(&mut self, key: A::Key) -> bool {
                let (new_root, inserted) = $insert_fn(&mut self.store, self.root, key, &self.cmp);
                self.root = new_root;
                if inserted {
                    self.len += 1;
                }
                inserted
            }

            /// Returns `true` iff `key` was present and removed.
            pub fn remove(&mut self, key: A::Key) -> bool {
                let (new_root, removed) = $remove_fn(&mut self.store, self.root, key, &self.cmp);
                self.root = new_root;
                if removed {
                    self.len -= 1;
                }
                removed
            }

            /// Drops every node; `count()` becomes 0.
            pub fn clear(&mut self) {
                bst::clear(&mut self.store, self.root);
                self.root = self.store.nil();
                self.len = 0;
            }

            /// The current root handle, for introspection and testing.
            pub fn root(&self) -> A::Handle {
                self.root
            }

            /// Read-only access to the backing accessor, for
            /// introspection and testing.
            pub fn accessor(&self) -> &A {
                &self.store
            }
        }

        impl<A, C> Drop for $name<A, C>
        where
            A: Accessor,
            C: Fn(&A::Key, &A::Key) -> Ordering,
        {
            fn drop(&mut self) {
                bst::clear(&mut self.store, self.root);
            }
        }
    };
}

define_set!(
    BstSet,
    bst::insert,
    bst::remove,
    "An ordered set backed by a plain, unbalanced binary search tree."
);
define_set!(
    AvlSet,
    avl::insert,
    avl::remove,
    "An ordered set backed by a height-balanced AVL tree."
);
define_set!(
    RbSet,
    rb::insert,
    rb::remove,
    "An ordered set backed by a Red-Black tree."
);

impl<A, C> BstSet<A, C>
where
    A: Accessor + Default,
    A::Key: std::fmt::Debug,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    /// A box-drawing rendering of the tree's current shape, for ad hoc
    /// debugging.
    pub fn render(&self) -> String {
        crate::render::render(self.accessor(), self.root(), false)
    }
}

impl<A, C> AvlSet<A, C>
where
    A: Accessor + Default,
    A::Key: std::fmt::Debug,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    pub fn render(&self) -> String {
        crate::render::render(self.accessor(), self.root(), false)
    }
}

impl<A, C> RbSet<A, C>
where
    A: Accessor + Default,
    A::Key: std::fmt::Debug,
    C: Fn(&A::Key, &A::Key) -> Ordering,
{
    pub fn render(&self) -> String {
        crate::render::render(self.accessor(), self.root(), true)
    }
}
