use std::collections::VecDeque;
use std::fmt;

use generational_arena::Index;
use tracing::instrument;

use crate::tree::BinaryTree;

/// Handle to a node stored in a [`BinaryTree`].
///
/// Handles are cheap to copy and never keep a node alive; they are only
/// meaningful together with the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "node#{}.{}", slot, generation)
    }
}

/// Child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Tree cell in the arena-backed binary tree.
#[derive(Debug)]
pub struct TreeNode<T> {
    pub(crate) value: T,
    /// Index of parent node in the arena, None for the root
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> TreeNode<T> {
    pub(crate) fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_slot(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// A node without children is external (a leaf).
    pub fn is_external(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_internal(&self) -> bool {
        !self.is_external()
    }
}

/// Borrowed view of one node together with the tree it lives in.
///
/// All upward (parent) and downward (child) navigation goes through the
/// owning tree, so a `NodeRef` can answer depth, height and ancestor queries.
pub struct NodeRef<'a, T> {
    tree: &'a BinaryTree<T>,
    id: NodeId,
    node: &'a TreeNode<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node.value)
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, id: NodeId, node: &'a TreeNode<T>) -> Self {
        Self { tree, id, node }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    pub fn inner(&self) -> &'a TreeNode<T> {
        self.node
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node.parent.and_then(|id| self.tree.node(id))
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.child(Side::Left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.child(Side::Right)
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<'a, T>> {
        self.node.child(side).and_then(|id| self.tree.node(id))
    }

    /// Existing children, left before right.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> {
        [self.left(), self.right()].into_iter().flatten()
    }

    pub fn is_external(&self) -> bool {
        self.node.is_external()
    }

    pub fn is_internal(&self) -> bool {
        self.node.is_internal()
    }

    /// This node followed by every node on the parent chain, ending at the root.
    pub fn ancestors(&self) -> Ancestors<'a, T> {
        Ancestors { next: Some(*self) }
    }

    /// Number of parent links up to the root (root = 0).
    #[instrument(level = "trace", skip(self), fields(node = %self.id))]
    pub fn node_depth(&self) -> usize {
        match self.parent() {
            Some(parent) => 1 + parent.node_depth(),
            None => 0,
        }
    }

    #[instrument(level = "trace", skip(self), fields(node = %self.id))]
    pub fn non_recursive_node_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = *self;
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Edges on the longest downward path to a leaf (leaf = 0).
    ///
    /// A missing child contributes -1, so a node with a single child has
    /// height `1 + height(child)`.
    #[instrument(level = "trace", skip(self), fields(node = %self.id))]
    pub fn node_height(&self) -> usize {
        self.children()
            .map(|child| 1 + child.node_height())
            .max()
            .unwrap_or(0)
    }

    /// Level-order walk of the subtree tracking the deepest level reached.
    #[instrument(level = "trace", skip(self), fields(node = %self.id))]
    pub fn non_recursive_node_height(&self) -> usize {
        let mut max_level = 0;
        let mut queue = VecDeque::new();
        queue.push_back((*self, 0));

        while let Some((node, level)) = queue.pop_front() {
            max_level = max_level.max(level);
            for child in node.children() {
                queue.push_back((child, level + 1));
            }
        }

        max_level
    }
}

/// Iterator from a node up to the root, inclusive at both ends.
pub struct Ancestors<'a, T> {
    next: Option<NodeRef<'a, T>>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
