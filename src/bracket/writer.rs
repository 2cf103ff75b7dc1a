//! Bracket notation writing.

use crate::model::{Node, Tree};
use crate::notation::estimate_len;

/// Structural characters per node: its own pair plus the pair around a leaf child
const NODE_CHARS: usize = 4;

/// Returns the bracket representation of a tree.
///
/// Every node is wrapped in one pair of parentheses containing its children
/// without separator; leaf children get their own pair. A tree that is a
/// single leaf is written as its atom without wrapping.
///
/// # Example
/// ```
/// use powertower::bracket::to_bracket;
/// use powertower::model::{Node, Tree};
///
/// assert_eq!(to_bracket(&Tree::node(Tree::node(1, 3), 4)), "(((1)(3))(4))");
/// assert_eq!(to_bracket(&Tree::node(-2, "x")), "(((-2))(x))");
/// assert_eq!(to_bracket(&Tree::from(Node::with_right(5))), "((5))");
/// assert_eq!(to_bracket(&Tree::from(-7)), "(-7)");
/// ```
pub fn to_bracket(tree: &Tree) -> String {
    let mut bracket = String::with_capacity(estimate_len(tree, NODE_CHARS));
    match tree {
        Tree::Leaf(leaf) => leaf.push_atom(&mut bracket),
        Tree::Node(node) => build_bracket(node, &mut bracket),
    }
    bracket
}

// Recursive helper for building the bracket string
fn build_bracket(node: &Node, bracket: &mut String) {
    bracket.push('(');
    for child in node.children() {
        match child {
            Tree::Node(inner) => build_bracket(inner, bracket),
            Tree::Leaf(leaf) => {
                bracket.push('(');
                leaf.push_atom(bracket);
                bracket.push(')');
            }
        }
    }
    bracket.push(')');
}
