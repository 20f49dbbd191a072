//! Minimal binary tree abstract data type.
//!
//! Nodes live in a generational arena owned by [`BinaryTree`]; children are
//! attached explicitly to a chosen slot and parent links are non-owning
//! handles used for upward walks (depth, ancestors).
//!
//! ```
//! use bintree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! let root = tree.add_root(1).unwrap();
//! let left = tree.add_left(root, 2).unwrap();
//! tree.add_right(root, 3).unwrap();
//!
//! assert_eq!(tree.get_size(), 3);
//! assert_eq!(tree.node_depth(left).unwrap(), 1);
//! assert_eq!(tree.to_string(), "1\n  2\n  3\n");
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod node;
pub mod samples;
pub mod traversal;
pub mod tree;
pub mod tree_traits;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use node::{Ancestors, NodeId, NodeRef, Side, TreeNode};
pub use traversal::TraversalOrder;
pub use tree::BinaryTree;
pub use tree_traits::TreeNodeConvert;
