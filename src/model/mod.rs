//! Data model for power towers.
//!
//! # Tree representation
//! A power tower is a [Tree]: either a single [Leaf] or a [Node] with an
//! optional base (`left`) and an optional exponent (`right`). Trees are
//! plain owned values, so no arena or indices are needed.
//!
//! | Type | Content |
//! |------|---------|
//! | [Leaf] | `Integer`, `Float` or `Symbol` operand |
//! | [Node] | `Option<Tree>` base and `Option<Tree>` exponent |
//! | [Tree] | `Leaf` or boxed `Node` |
//!
//! # Building trees
//! Trees are either produced by the parsers (see [crate::bracket],
//! [crate::tower], [crate::latex]) or composed directly:
//! ```
//! use powertower::model::{Node, Tree};
//!
//! let full = Tree::node(Tree::node("w", "x"), 2.5);
//! let base_only = Tree::from(Node::with_left(7));
//! assert_ne!(full, base_only);
//! ```

pub mod leaf;
pub mod tree;

pub use leaf::Leaf;
pub use tree::Node;
pub use tree::Tree;
