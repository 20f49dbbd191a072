//! Demo trees used by the CLI and the test suite.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::TreeResult;
use crate::tree::BinaryTree;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Sample {
    /// Ten nodes numbered 1..=10
    #[default]
    Numbers,
    /// Eight nodes rooted at 5 with a deep left spine
    Ancestors,
}

impl Sample {
    pub fn build(self) -> TreeResult<BinaryTree<i64>> {
        match self {
            Sample::Numbers => numbers_tree(),
            Sample::Ancestors => ancestors_tree(),
        }
    }
}

//           1
//         /   \
//        2     3
//       / \   /
//      4   5 6
//     / \   / \
//    7   8 9  10
#[instrument(level = "debug")]
pub fn numbers_tree() -> TreeResult<BinaryTree<i64>> {
    let mut tree = BinaryTree::new();
    let one = tree.add_root(1)?;
    let two = tree.add_left(one, 2)?;
    let three = tree.add_right(one, 3)?;
    let four = tree.add_left(two, 4)?;
    tree.add_right(two, 5)?;
    tree.add_left(four, 7)?;
    tree.add_right(four, 8)?;
    let six = tree.add_left(three, 6)?;
    tree.add_left(six, 9)?;
    tree.add_right(six, 10)?;
    Ok(tree)
}

//            5
//          /   \
//        10     11
//        /      /
//       8      7
//      / \
//     2   10
//    /
//   9
#[instrument(level = "debug")]
pub fn ancestors_tree() -> TreeResult<BinaryTree<i64>> {
    let mut tree = BinaryTree::new();
    let root = tree.add_root(5)?;
    let left = tree.add_left(root, 10)?;
    let right = tree.add_right(root, 11)?;
    tree.add_left(right, 7)?;
    let left_left = tree.add_left(left, 8)?;
    let left_left_left = tree.add_left(left_left, 2)?;
    tree.add_left(left_left_left, 9)?;
    tree.add_right(left_left, 10)?;
    Ok(tree)
}
