//! Tree rendering & diagnostics: a compact box-drawing textual rendering
//! of a tree, colorizing red nodes via `colored` when the variant tracks
//! color. Used both as a standalone debugging aid and as the snapshot
//! embedded in `FuzzFailure`'s `Display` output.

use std::fmt::Debug;

use colored::Colorize;

use crate::accessor::{Accessor, Color};

/// Renders the tree rooted at `root` as an indented, box-drawing string,
/// one key per line. When `colorize` is true (Red-Black trees), red nodes
/// are rendered in red; plain BST and AVL trees pass `false` since their
/// nodes carry the accessor's neutral default color rather than a
/// meaningful one.
pub fn render<A>(acc: &A, root: A::Handle, colorize: bool) -> String
where
    A: Accessor,
    A::Key: Debug,
{
    if acc.is_nil(root) {
        return "(empty)\n".to_string();
    }

    let mut out = String::new();
    let mut stack = vec![(root, String::new(), String::new())];
    while let Some((node, mut padding, pointer)) = stack.pop() {
        if acc.is_nil(node) {
            continue;
        }
        out.push_str(&padding);
        out.push_str(&pointer);
        let label = format!("{:?}", acc.key(node));
        if colorize && acc.color(node) == Color::Red {
            out.push_str(&label.red().to_string());
        } else {
            out.push_str(&label);
        }
        out.push('\n');
        padding.push_str("│  ");

        let left = acc.left(node);
        let right = acc.right(node);
        let left_pointer = if !acc.is_nil(right) { "├──" } else { "└──" }.to_string();
        let right_pointer = "└──".to_string();

        stack.push((right, padding.clone(), right_pointer));
        stack.push((left, padding, left_pointer));
    }
    out
}
