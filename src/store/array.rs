//! The array-packed node representation: parallel vectors for key, left,
//! right, parent, height and color, indexed by node handle. Index `0` is
//! a permanently reserved sentinel slot standing in for nil. This store
//! does not maintain a free list: `release` is a no-op and deleted
//! indices are never reused.

use crate::accessor::{Accessor, Color};

const NIL: u32 = 0;

pub struct ArrayStore<K> {
    keys: Vec<K>,
    left: Vec<u32>,
    right: Vec<u32>,
    parent: Vec<u32>,
    height: Vec<i64>,
    color: Vec<Color>,
}

impl<K: Default + Copy> ArrayStore<K> {
    pub fn new() -> Self {
        ArrayStore {
            keys: vec![K::default()],
            left: vec![NIL],
            right: vec![NIL],
            parent: vec![NIL],
            height: vec![0],
            color: vec![Color::Black],
        }
    }

    /// Number of slots ever allocated, including the reserved nil slot and
    /// any slots left behind by deletions. Exposed for tests that assert
    /// on the non-reclaiming behavior.
    pub fn capacity_used(&self) -> usize {
        self.keys.len()
    }
}

impl<K: Default + Copy> Default for ArrayStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy + Default> Accessor for ArrayStore<K> {
    type Handle = u32;
    type Key = K;

    fn nil(&self) -> Self::Handle {
        NIL
    }

    fn is_nil(&self, h: Self::Handle) -> bool {
        h == NIL
    }

    fn handles_eq(&self, a: Self::Handle, b: Self::Handle) -> bool {
        a == b
    }

    fn left(&self, h: Self::Handle) -> Self::Handle {
        self.left[h as usize]
    }

    fn right(&self, h: Self::Handle) -> Self::Handle {
        self.right[h as usize]
    }

    fn set_left(&mut self, h: Self::Handle, c: Self::Handle) {
        if h == NIL {
            return;
        }
        self.left[h as usize] = c;
    }

    fn set_right(&mut self, h: Self::Handle, c: Self::Handle) {
        if h == NIL {
            return;
        }
        self.right[h as usize] = c;
    }

    fn parent(&self, h: Self::Handle) -> Self::Handle {
        self.parent[h as usize]
    }

    fn set_parent(&mut self, h: Self::Handle, p: Self::Handle) {
        if h == NIL {
            return;
        }
        self.parent[h as usize] = p;
    }

    fn key(&self, h: Self::Handle) -> Self::Key {
        self.keys[h as usize]
    }

    fn build(&mut self, key: Self::Key) -> Self::Handle {
        let idx = self.keys.len() as u32;
        self.keys.push(key);
        self.left.push(NIL);
        self.right.push(NIL);
        self.parent.push(NIL);
        self.height.push(1);
        self.color.push(Color::Red);
        idx
    }

    fn release(&mut self, _h: Self::Handle) {
        // No-op: indices are never reclaimed on delete.
    }

    fn height(&self, h: Self::Handle) -> i64 {
        self.height[h as usize]
    }

    fn set_height(&mut self, h: Self::Handle, v: i64) {
        if h == NIL {
            return;
        }
        self.height[h as usize] = v;
    }

    fn color(&self, h: Self::Handle) -> Color {
        self.color[h as usize]
    }

    fn set_color(&mut self, h: Self::Handle, c: Color) {
        if h == NIL {
            return;
        }
        self.color[h as usize] = c;
    }
}
