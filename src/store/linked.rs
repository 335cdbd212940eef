//! The linked node representation: each node is an independently
//! allocated record; left/right/parent are nullable raw pointers and nil
//! is the literal null pointer.

use std::ptr;

use crate::accessor::{Accessor, Color};

pub struct LinkedNode<K> {
    left: *mut LinkedNode<K>,
    right: *mut LinkedNode<K>,
    parent: *mut LinkedNode<K>,
    key: K,
    height: i64,
    color: Color,
}

/// Owning-pointer node storage. One node is allocated per `build` call and
/// freed by `release`; this representation never leaks as long as every
/// built node is eventually released (the kernel's `clear` and `delete`
/// guarantee this).
pub struct LinkedStore<K> {
    _marker: std::marker::PhantomData<K>,
}

impl<K> LinkedStore<K> {
    pub fn new() -> Self {
        LinkedStore {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<K> Default for LinkedStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy> Accessor for LinkedStore<K> {
    type Handle = *mut LinkedNode<K>;
    type Key = K;

    fn nil(&self) -> Self::Handle {
        ptr::null_mut()
    }

    fn is_nil(&self, h: Self::Handle) -> bool {
        h.is_null()
    }

    fn handles_eq(&self, a: Self::Handle, b: Self::Handle) -> bool {
        a == b
    }

    fn left(&self, h: Self::Handle) -> Self::Handle {
        if h.is_null() {
            return ptr::null_mut();
        }
        unsafe { (*h).left }
    }

    fn right(&self, h: Self::Handle) -> Self::Handle {
        if h.is_null() {
            return ptr::null_mut();
        }
        unsafe { (*h).right }
    }

    fn set_left(&mut self, h: Self::Handle, c: Self::Handle) {
        if h.is_null() {
            return;
        }
        unsafe {
            (*h).left = c;
        }
    }

    fn set_right(&mut self, h: Self::Handle, c: Self::Handle) {
        if h.is_null() {
            return;
        }
        unsafe {
            (*h).right = c;
        }
    }

    fn parent(&self, h: Self::Handle) -> Self::Handle {
        if h.is_null() {
            return ptr::null_mut();
        }
        unsafe { (*h).parent }
    }

    fn set_parent(&mut self, h: Self::Handle, p: Self::Handle) {
        if h.is_null() {
            return;
        }
        unsafe {
            (*h).parent = p;
        }
    }

    fn key(&self, h: Self::Handle) -> Self::Key {
        unsafe { (*h).key }
    }

    fn build(&mut self, key: Self::Key) -> Self::Handle {
        let node = LinkedNode {
            left: ptr::null_mut(),
            right: ptr::null_mut(),
            parent: ptr::null_mut(),
            key,
            height: 1,
            color: Color::Red,
        };
        Box::into_raw(Box::new(node))
    }

    fn release(&mut self, h: Self::Handle) {
        if h.is_null() {
            return;
        }
        unsafe {
            drop(Box::from_raw(h));
        }
    }

    fn height(&self, h: Self::Handle) -> i64 {
        if h.is_null() {
            return 0;
        }
        unsafe { (*h).height }
    }

    fn set_height(&mut self, h: Self::Handle, v: i64) {
        if h.is_null() {
            return;
        }
        unsafe {
            (*h).height = v;
        }
    }

    fn color(&self, h: Self::Handle) -> Color {
        if h.is_null() {
            return Color::Black;
        }
        unsafe { (*h).color }
    }

    fn set_color(&mut self, h: Self::Handle, c: Color) {
        if h.is_null() {
            return;
        }
        unsafe {
            (*h).color = c;
        }
    }
}
