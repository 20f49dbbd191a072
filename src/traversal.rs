//! Traversal iterators and the printing operations built on them.
//!
//! Every traversal is iterative (explicit queue or stack), so deep trees do
//! not grow the call stack.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::TreeResult;
use crate::node::{NodeId, NodeRef};
use crate::tree::BinaryTree;

/// Traversal orders offered by the printing operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    #[default]
    BreadthFirst,
    ReverseBreadthFirst,
    PostOrder,
    PreOrder,
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TraversalOrder::BreadthFirst => "breadth-first",
            TraversalOrder::ReverseBreadthFirst => "reverse-breadth-first",
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::PreOrder => "pre-order",
        };
        f.write_str(name)
    }
}

impl<T> BinaryTree<T> {
    pub fn iter_breadth_first(&self) -> BreadthFirstIterator<'_, T> {
        BreadthFirstIterator::new(self)
    }

    pub fn iter_reverse_breadth_first(&self) -> ReverseBreadthFirstIterator<'_, T> {
        ReverseBreadthFirstIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    pub fn iter_preorder(&self) -> PreOrderIterator<'_, T> {
        PreOrderIterator::new(self)
    }
}

impl<T: Display> BinaryTree<T> {
    pub fn write_breadth_first<W: Write>(&self, out: &mut W) -> TreeResult<()> {
        write_nodes(out, self.iter_breadth_first())
    }

    pub fn write_reverse_breadth_first<W: Write>(&self, out: &mut W) -> TreeResult<()> {
        write_nodes(out, self.iter_reverse_breadth_first())
    }

    pub fn write_post_order<W: Write>(&self, out: &mut W) -> TreeResult<()> {
        write_nodes(out, self.iter_postorder())
    }

    pub fn write_pre_order<W: Write>(&self, out: &mut W) -> TreeResult<()> {
        write_nodes(out, self.iter_preorder())
    }

    #[instrument(level = "debug", skip(self, out))]
    pub fn write_traversal<W: Write>(&self, order: TraversalOrder, out: &mut W) -> TreeResult<()> {
        match order {
            TraversalOrder::BreadthFirst => self.write_breadth_first(out),
            TraversalOrder::ReverseBreadthFirst => self.write_reverse_breadth_first(out),
            TraversalOrder::PostOrder => self.write_post_order(out),
            TraversalOrder::PreOrder => self.write_pre_order(out),
        }
    }

    /// Prints one node per line in level order.
    #[instrument(level = "debug", skip(self))]
    pub fn print_breadth_first(&self) -> TreeResult<()> {
        self.write_breadth_first(&mut io::stdout().lock())
    }

    /// Prints one node per line, deepest level first, root last.
    #[instrument(level = "debug", skip(self))]
    pub fn reverse_breadth_first(&self) -> TreeResult<()> {
        self.write_reverse_breadth_first(&mut io::stdout().lock())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn print_post_order(&self) -> TreeResult<()> {
        self.write_post_order(&mut io::stdout().lock())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn print_pre_order(&self) -> TreeResult<()> {
        self.write_pre_order(&mut io::stdout().lock())
    }
}

fn write_nodes<'a, T, W, I>(out: &mut W, nodes: I) -> TreeResult<()>
where
    T: Display + 'a,
    W: Write,
    I: Iterator<Item = NodeRef<'a, T>>,
{
    for node in nodes {
        writeln!(out, "{}", node)?;
    }
    out.flush()?;
    Ok(())
}

pub struct BreadthFirstIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> BreadthFirstIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = tree.root() {
            queue.push_back(root);
        }
        Self { tree, queue }
    }
}

impl<'a, T> Iterator for BreadthFirstIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.queue.pop_front() {
            if let Some(node) = self.tree.node(current) {
                self.queue.extend(node.children().map(|child| child.id()));
                return Some(node);
            }
        }
        None
    }
}

/// Level order with right children queued first, replayed from a stack.
///
/// The whole mirrored level-order pass runs on construction; iteration then
/// drains the stack. The result lists levels bottom-up, each level left to
/// right, with the root last.
pub struct ReverseBreadthFirstIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> ReverseBreadthFirstIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut queue = VecDeque::new();
        let mut stack = Vec::with_capacity(tree.len());
        if let Some(root) = tree.root_node() {
            queue.push_back(root);
        }

        while let Some(current) = queue.pop_front() {
            stack.push(current.id());
            if let Some(right) = current.right() {
                queue.push_back(right);
            }
            if let Some(left) = current.left() {
                queue.push_back(left);
            }
        }

        Self { tree, stack }
    }
}

impl<'a, T> Iterator for ReverseBreadthFirstIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                return Some(node);
            }
        }
        None
    }
}

pub struct PreOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for PreOrderIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                // Push right first so left is visited first
                if let Some(right) = node.inner().right() {
                    self.stack.push(right);
                }
                if let Some(left) = node.inner().left() {
                    self.stack.push(left);
                }
                return Some(node);
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                if visited {
                    return Some(node);
                }
                self.stack.push((current, true));
                if let Some(right) = node.inner().right() {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.inner().left() {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}
