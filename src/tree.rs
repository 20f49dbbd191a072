use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::node::{NodeId, NodeRef, Side, TreeNode};

/// Arena-based binary tree.
///
/// The arena owns every node; each node is reachable from the root through
/// exactly one left/right slot. Parent links are plain indices and never keep
/// a node alive. Nodes are only ever created through the `add_*` methods, so
/// the parent link of a child always names the node whose slot holds it.
#[derive(Debug)]
pub struct BinaryTree<T> {
    arena: Arena<TreeNode<T>>,
    root: Option<NodeId>,
    size: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Creates the root node. A tree can be rooted exactly once.
    #[instrument(level = "debug", skip(self, value))]
    pub fn add_root(&mut self, value: T) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(TreeError::RootAlreadySet);
        }

        let id = NodeId(self.arena.insert(TreeNode::new(value, None)));
        self.root = Some(id);
        self.size += 1;
        debug!(root = %id, "root added");

        Ok(id)
    }

    pub fn add_left(&mut self, parent: NodeId, value: T) -> TreeResult<NodeId> {
        self.add_child(parent, Side::Left, value)
    }

    pub fn add_right(&mut self, parent: NodeId, value: T) -> TreeResult<NodeId> {
        self.add_child(parent, Side::Right, value)
    }

    /// Attaches a new node in the given slot of `parent`.
    ///
    /// Never overwrites: an occupied slot is an error and leaves the tree
    /// untouched.
    #[instrument(level = "debug", skip(self, value), fields(parent = %parent))]
    pub fn add_child(&mut self, parent: NodeId, side: Side, value: T) -> TreeResult<NodeId> {
        let parent_node = self
            .arena
            .get(parent.0)
            .ok_or(TreeError::NodeNotFound(parent))?;
        if parent_node.child(side).is_some() {
            return Err(TreeError::ChildOccupied { parent, side });
        }

        let id = NodeId(self.arena.insert(TreeNode::new(value, Some(parent))));
        if let Some(parent_node) = self.arena.get_mut(parent.0) {
            *parent_node.child_slot(side) = Some(id);
        }
        self.size += 1;
        debug!(child = %id, size = self.size, "child added");

        Ok(id)
    }

    /// Replaces the payload of a node, returning the previous value.
    #[instrument(level = "debug", skip(self, value), fields(node = %id))]
    pub fn set_value(&mut self, id: NodeId, value: T) -> TreeResult<T> {
        let node = self.get_node_mut(id).ok_or(TreeError::NodeNotFound(id))?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.get_node_mut(id).map(|node| &mut node.value)
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_node(&self) -> Option<NodeRef<'_, T>> {
        self.root.and_then(|id| self.node(id))
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id.0)
    }

    fn get_node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(id.0)
    }

    /// Navigable view of a node, None if the handle does not resolve.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.get_node(id).map(|node| NodeRef::new(self, id, node))
    }

    /// Height of the whole tree in edges.
    ///
    /// A missing child counts as height -1, so a root without children has
    /// height 0. An empty tree also reports 0.
    #[instrument(level = "debug", skip(self))]
    pub fn tree_height(&self) -> usize {
        self.root_node()
            .map(|root| {
                root.children()
                    .map(|child| 1 + child.non_recursive_node_height())
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    #[instrument(level = "debug", skip(self), fields(node = %id))]
    pub fn node_depth(&self, id: NodeId) -> TreeResult<usize> {
        self.node(id)
            .map(|node| node.node_depth())
            .ok_or(TreeError::InvalidNode(id))
    }

    /// Handles of `id` and all of its ancestors, leaf to root.
    #[instrument(level = "debug", skip(self), fields(node = %id))]
    pub fn ancestors(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        let node = self.node(id).ok_or(TreeError::InvalidNode(id))?;
        Ok(node.ancestors().map(|n| n.id()).collect())
    }

    /// Leaf handles in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<NodeId> {
        self.iter_preorder()
            .filter(|node| node.is_external())
            .map(|node| node.id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_created_then_has_no_root() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.get_size(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.tree_height(), 0);
    }

    #[test]
    fn given_root_when_adding_children_then_links_parent() {
        let mut tree = BinaryTree::new();
        let root = tree.add_root(1).unwrap();
        let left = tree.add_left(root, 2).unwrap();
        let right = tree.add_right(root, 3).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get_node(left).unwrap().parent(), Some(root));
        assert_eq!(tree.get_node(right).unwrap().parent(), Some(root));
        assert_eq!(tree.get_node(root).unwrap().left(), Some(left));
        assert_eq!(tree.get_node(root).unwrap().right(), Some(right));
    }

    #[test]
    fn given_occupied_slot_when_adding_child_then_returns_error() {
        let mut tree = BinaryTree::new();
        let root = tree.add_root(1).unwrap();
        let first = tree.add_left(root, 2).unwrap();

        let result = tree.add_child(root, Side::Left, 99);

        assert!(matches!(
            result,
            Err(TreeError::ChildOccupied { side: Side::Left, .. })
        ));
        assert_eq!(tree.get_node(root).unwrap().left(), Some(first));
        assert_eq!(*tree.get_node(first).unwrap().value(), 2);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn given_node_when_setting_value_then_returns_previous() {
        let mut tree = BinaryTree::new();
        let root = tree.add_root(String::from("old")).unwrap();

        let previous = tree.set_value(root, String::from("new")).unwrap();

        assert_eq!(previous, "old");
        assert_eq!(tree.get_node(root).unwrap().value(), "new");
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn given_handle_from_other_tree_when_querying_depth_then_returns_invalid_node() {
        let mut other = BinaryTree::new();
        let other_root = other.add_root(1).unwrap();
        other.add_left(other_root, 2).unwrap();
        let foreign = other.add_right(other_root, 3).unwrap();

        let mut tree = BinaryTree::new();
        tree.add_root(1).unwrap();

        assert!(matches!(
            tree.node_depth(foreign),
            Err(TreeError::InvalidNode(_))
        ));
    }
}
