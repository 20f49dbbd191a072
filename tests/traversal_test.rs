//! Traversal order and printed output.

use std::collections::HashSet;

use bintree::samples::{ancestors_tree, numbers_tree};
use bintree::util::testing;
use bintree::{BinaryTree, TraversalOrder};
use rstest::rstest;

fn captured(tree: &BinaryTree<i64>, order: TraversalOrder) -> Vec<String> {
    let mut out = Vec::new();
    tree.write_traversal(order, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn three_node_tree() -> BinaryTree<i64> {
    let mut tree = BinaryTree::new();
    let root = tree.add_root(1).unwrap();
    tree.add_left(root, 2).unwrap();
    tree.add_right(root, 3).unwrap();
    tree
}

#[rstest]
fn given_root_left_right_when_printing_breadth_first_then_visits_root_left_right() {
    testing::init_test_setup();
    let tree = three_node_tree();
    assert_eq!(captured(&tree, TraversalOrder::BreadthFirst), ["1", "2", "3"]);
}

#[rstest]
fn given_root_with_two_leaves_when_printing_post_order_then_emits_children_first() {
    let tree = three_node_tree();
    assert_eq!(captured(&tree, TraversalOrder::PostOrder), ["2", "3", "1"]);
}

#[rstest]
#[case(TraversalOrder::BreadthFirst, &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"])]
#[case(TraversalOrder::ReverseBreadthFirst, &["7", "8", "9", "10", "4", "5", "6", "2", "3", "1"])]
#[case(TraversalOrder::PostOrder, &["7", "8", "4", "5", "2", "9", "10", "6", "3", "1"])]
#[case(TraversalOrder::PreOrder, &["1", "2", "4", "7", "8", "5", "3", "6", "9", "10"])]
fn given_numbers_tree_when_walking_then_emits_expected_order(
    #[case] order: TraversalOrder,
    #[case] expected: &[&str],
) {
    let tree = numbers_tree().unwrap();
    assert_eq!(captured(&tree, order), expected);
}

#[rstest]
#[case(TraversalOrder::BreadthFirst)]
#[case(TraversalOrder::ReverseBreadthFirst)]
#[case(TraversalOrder::PostOrder)]
#[case(TraversalOrder::PreOrder)]
fn given_any_order_when_walking_then_visits_every_node_once(#[case] order: TraversalOrder) {
    let tree = ancestors_tree().unwrap();
    let ids: Vec<_> = match order {
        TraversalOrder::BreadthFirst => tree.iter_breadth_first().map(|n| n.id()).collect(),
        TraversalOrder::ReverseBreadthFirst => {
            tree.iter_reverse_breadth_first().map(|n| n.id()).collect()
        }
        TraversalOrder::PostOrder => tree.iter_postorder().map(|n| n.id()).collect(),
        TraversalOrder::PreOrder => tree.iter_preorder().map(|n| n.id()).collect(),
    };
    let unique: HashSet<_> = ids.iter().collect();

    assert_eq!(ids.len(), tree.get_size());
    assert_eq!(unique.len(), tree.get_size());
}

#[rstest]
fn given_tree_when_walking_reverse_breadth_first_then_deeper_levels_come_first() {
    let tree = ancestors_tree().unwrap();
    let depths: Vec<_> = tree
        .iter_reverse_breadth_first()
        .map(|n| n.node_depth())
        .collect();

    assert!(depths.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(
        tree.iter_reverse_breadth_first().last().map(|n| n.id()),
        tree.root()
    );
}

#[rstest]
fn given_tree_when_walking_post_order_then_root_is_last_and_leaves_precede_parents() {
    let tree = numbers_tree().unwrap();
    let order: Vec<_> = tree.iter_postorder().map(|n| n.id()).collect();

    assert_eq!(order.last().copied(), tree.root());
    for (pos, id) in order.iter().enumerate() {
        if let Some(parent) = tree.get_node(*id).unwrap().parent() {
            let parent_pos = order.iter().position(|p| *p == parent).unwrap();
            assert!(pos < parent_pos);
        }
    }
}

#[rstest]
fn given_tree_when_printing_to_stdout_then_succeeds() {
    let tree = three_node_tree();
    tree.print_breadth_first().unwrap();
    tree.reverse_breadth_first().unwrap();
    tree.print_post_order().unwrap();
    tree.print_pre_order().unwrap();
}

#[rstest]
fn given_empty_tree_when_walking_then_yields_nothing() {
    let tree: BinaryTree<i64> = BinaryTree::new();
    assert_eq!(tree.iter_breadth_first().count(), 0);
    assert_eq!(tree.iter_reverse_breadth_first().count(), 0);
    assert_eq!(tree.iter_postorder().count(), 0);
    assert_eq!(tree.iter_preorder().count(), 0);
    assert!(captured(&tree, TraversalOrder::PreOrder).is_empty());
}
