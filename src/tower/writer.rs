//! Tower notation writing.

use crate::model::{Node, Tree};
use crate::notation::estimate_len;

/// Structural characters per node: `^` and a possible pair of parentheses
const NODE_CHARS: usize = 3;

/// Returns the tower representation of a tree.
///
/// Exponentiation is right-associative, so `a^b^c` stands for `a^(b^c)`.
/// Parentheses are only added around a base that is itself a tower, and
/// around negative numbers.
///
/// # Example
/// ```
/// use powertower::tower::to_tower;
/// use powertower::model::Tree;
///
/// assert_eq!(to_tower(&Tree::node(1, Tree::node(3, 4))), "1^3^4");
/// assert_eq!(to_tower(&Tree::node(Tree::node(1, 3), 4)), "(1^3)^4");
/// assert_eq!(to_tower(&Tree::node(-2, 0.5)), "(-2)^0.5");
/// ```
pub fn to_tower(tree: &Tree) -> String {
    let mut tower = String::with_capacity(estimate_len(tree, NODE_CHARS));
    build_tower(tree, &mut tower);
    tower
}

// Recursive helper for building the tower string
fn build_tower(tree: &Tree, tower: &mut String) {
    match tree {
        Tree::Leaf(leaf) => leaf.push_atom(tower),
        Tree::Node(node) => build_node(node, tower),
    }
}

fn build_node(node: &Node, tower: &mut String) {
    if let Some(left) = node.left() {
        match left {
            // Base binds tighter than the default grouping
            Tree::Node(inner) if node.right().is_some() => {
                tower.push('(');
                build_node(inner, tower);
                tower.push(')');
            }
            _ => build_tower(left, tower),
        }
    }

    if let Some(right) = node.right() {
        if node.left().is_some() {
            tower.push('^');
        }
        build_tower(right, tower);
    }
}
