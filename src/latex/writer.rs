//! LaTeX notation writing.

use crate::model::{Node, Tree};
use crate::notation::estimate_len;

/// Structural characters per node: `^{}` plus a possible `\left(` `\right)` pair
const NODE_CHARS: usize = 16;

/// Returns the LaTeX representation of a tree.
///
/// Follows the structure of [to_tower](crate::tower::to_tower), but exponents
/// are braced (`^{...}`) and a tower used as base is wrapped in
/// `\left(...\right)`.
///
/// # Example
/// ```
/// use powertower::latex::to_latex;
/// use powertower::model::Tree;
///
/// assert_eq!(to_latex(&Tree::node(1, Tree::node(3, 4))), "1^{3^{4}}");
/// assert_eq!(to_latex(&Tree::node(Tree::node(1, 3), 4)), "\\left(1^{3}\\right)^{4}");
/// ```
pub fn to_latex(tree: &Tree) -> String {
    let mut latex = String::with_capacity(estimate_len(tree, NODE_CHARS));
    build_latex(tree, &mut latex);
    latex
}

// Recursive helper for building the LaTeX string
fn build_latex(tree: &Tree, latex: &mut String) {
    match tree {
        Tree::Leaf(leaf) => leaf.push_atom(latex),
        Tree::Node(node) => build_node(node, latex),
    }
}

fn build_node(node: &Node, latex: &mut String) {
    if let Some(left) = node.left() {
        match left {
            Tree::Node(inner) if node.right().is_some() => {
                latex.push_str("\\left(");
                build_node(inner, latex);
                latex.push_str("\\right)");
            }
            _ => build_latex(left, latex),
        }
    }

    if let Some(right) = node.right() {
        if node.left().is_some() {
            latex.push_str("^{");
            build_latex(right, latex);
            latex.push('}');
        } else {
            build_latex(right, latex);
        }
    }
}
