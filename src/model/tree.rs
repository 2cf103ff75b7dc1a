//! Binary tree representation of power towers.
//!
//! A [Tree] is either a [Leaf] or a [Node]. A node has two optional children,
//! `left` (the base) and `right` (the exponent), so a child position is
//! exactly one of: absent (`None`), a leaf or a subtree.
//!
//! Trees are owned values without back-references. Equality is structural.

use crate::model::leaf::Leaf;
use crate::tower::to_tower;
use std::fmt;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A power tower: either a single [Leaf] or an exponentiation [Node].
///
/// # Example
/// ```
/// use powertower::model::Tree;
///
/// // 2^(3^4), written with right-associative default grouping
/// let tree = Tree::node(2, Tree::node(3, 4));
/// assert_eq!(tree.to_string(), "2^3^4");
/// assert_eq!(tree.num_leaves(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// Atomic operand
    Leaf(Leaf),
    /// Exponentiation `left ^ right`
    Node(Box<Node>),
}

impl Tree {
    /// Creates a node tree with both children present.
    pub fn node(left: impl Into<Tree>, right: impl Into<Tree>) -> Self {
        Tree::from(Node::new(Some(left.into()), Some(right.into())))
    }

    /// Creates a leaf tree by coercing the given token, see [Leaf::coerce].
    pub fn leaf(token: &str) -> Self {
        Tree::Leaf(Leaf::coerce(token))
    }

    /// Returns whether this tree is a single leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Returns the leaf if this tree is one.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Tree::Leaf(leaf) => Some(leaf),
            Tree::Node(_) => None,
        }
    }

    /// Returns the node if this tree is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Node(node) => Some(node),
        }
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node(node) => node.children().map(Tree::num_leaves).sum(),
        }
    }

    /// Returns the number of nodes (internal vertices) in this tree.
    pub fn num_nodes(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Node(node) => 1 + node.children().map(Tree::num_nodes).sum::<usize>(),
        }
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// A single leaf has height 0.
    pub fn height(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Node(node) => 1 + node.children().map(Tree::height).max().unwrap_or(0),
        }
    }
}

impl fmt::Display for Tree {
    /// Formats the tree in tower notation, e.g. `(a^b)^c`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_tower(self))
    }
}

impl From<Leaf> for Tree {
    fn from(leaf: Leaf) -> Self {
        Tree::Leaf(leaf)
    }
}

impl From<Node> for Tree {
    fn from(node: Node) -> Self {
        Tree::Node(Box::new(node))
    }
}

impl From<i64> for Tree {
    fn from(value: i64) -> Self {
        Tree::Leaf(value.into())
    }
}

impl From<i32> for Tree {
    fn from(value: i32) -> Self {
        Tree::Leaf(value.into())
    }
}

impl From<f64> for Tree {
    fn from(value: f64) -> Self {
        Tree::Leaf(value.into())
    }
}

impl From<&str> for Tree {
    fn from(symbol: &str) -> Self {
        Tree::Leaf(symbol.into())
    }
}

impl From<String> for Tree {
    fn from(symbol: String) -> Self {
        Tree::Leaf(symbol.into())
    }
}

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// An exponentiation `left ^ right` with optional operands.
///
/// A node with only one child is a valid state; it stands for a tower level
/// with a missing base or a missing exponent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    left: Option<Tree>,
    right: Option<Tree>,
}

impl Node {
    /// Creates a node from its (optional) base and exponent.
    pub fn new(left: Option<Tree>, right: Option<Tree>) -> Self {
        Self { left, right }
    }

    /// Creates a node with only a base.
    pub fn with_left(left: impl Into<Tree>) -> Self {
        Self::new(Some(left.into()), None)
    }

    /// Creates a node with only an exponent.
    pub fn with_right(right: impl Into<Tree>) -> Self {
        Self::new(None, Some(right.into()))
    }

    /// Returns the base, if present.
    pub fn left(&self) -> Option<&Tree> {
        self.left.as_ref()
    }

    /// Returns the exponent, if present.
    pub fn right(&self) -> Option<&Tree> {
        self.right.as_ref()
    }

    /// Returns whether both children are present.
    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Iterates over the present children, left first.
    pub fn children(&self) -> impl Iterator<Item = &Tree> {
        self.left.iter().chain(self.right.iter())
    }

    /// Consumes the node and returns its children.
    pub fn into_children(self) -> (Option<Tree>, Option<Tree>) {
        (self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let tree = Tree::node(Tree::node("w", "x"), Tree::node(2, Tree::node(3.5, -1)));
        assert_eq!(tree.num_leaves(), 5);
        assert_eq!(tree.num_nodes(), 4);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_counts_with_absent_children() {
        let tree = Tree::from(Node::with_right(Tree::node(1, 2)));
        assert_eq!(tree.num_leaves(), 2);
        assert_eq!(tree.num_nodes(), 2);
        assert_eq!(tree.height(), 2);

        let empty = Tree::from(Node::default());
        assert_eq!(empty.num_leaves(), 0);
        assert_eq!(empty.height(), 1);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Tree::node(3, 4.0), Tree::node(3.0, 4));
        assert_ne!(Tree::node(3, 4), Tree::node(4, 3));
        assert_ne!(Tree::from(Node::with_left(3)), Tree::from(Node::with_right(3)));
        assert_ne!(Tree::from(1), Tree::from(Node::with_left(1)));
    }
}
