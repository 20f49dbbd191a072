use std::fmt::{self, Display, Write};

use termtree::Tree;
use tracing::instrument;

use crate::node::NodeRef;
use crate::tree::BinaryTree;

/// Label used in box-drawing output for the empty slot next to a lone child.
pub const EMPTY_SLOT: &str = "·";

pub const DEFAULT_INDENT: usize = 2;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for NodeRef<'_, T> {
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.to_string();
        if self.is_external() {
            return Tree::new(root);
        }

        // Keep left/right positions visible when only one child exists
        let leaves: Vec<_> = [self.left(), self.right()]
            .into_iter()
            .map(|child| match child {
                Some(child) => child.to_tree_string(),
                None => Tree::new(EMPTY_SLOT.to_string()),
            })
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

impl<T: Display> TreeNodeConvert for BinaryTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root_node() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl<T: Display> BinaryTree<T> {
    /// One line per node in pre-order, indented `width` spaces per level.
    pub fn render_indented(&self, width: usize) -> String {
        let mut out = String::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root_node() {
            stack.push((root, 0));
        }

        while let Some((node, level)) = stack.pop() {
            // writing into a String cannot fail
            let _ = writeln!(out, "{:indent$}{}", "", node, indent = level * width);
            if let Some(right) = node.right() {
                stack.push((right, level + 1));
            }
            if let Some(left) = node.left() {
                stack.push((left, level + 1));
            }
        }

        out
    }
}

impl<T: Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_indented(DEFAULT_INDENT))
    }
}
