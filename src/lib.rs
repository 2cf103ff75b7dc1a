//! Powertower is a library to parse, write and draw power towers.
//!
//! A power tower is a chain of exponentiations such as `2^3^4`, which by
//! convention is evaluated right to left, i.e. `2^(3^4)`. This crate
//! represents power towers as binary trees and converts between the tree and
//! three textual notations.
//! Core functionality provided:
//! - Bracket: fully parenthesized encoding, e.g. `(((1)(3))(4))`
//! - Tower: infix `^` with right-associative grouping, e.g. `(1^3)^4`
//! - LaTeX: typesetting input, e.g. `\left(1^{3}\right)^{4}`
//! - Diagram: ASCII drawing of the tree as binary graph
//! - Tree model: see [crate::model]
//!
//! Parsing and writing are mutual inverses: writing a parsed tree reproduces
//! canonical input, and parsing a written tree reproduces the tree.
//!
//! Limitations:
//! - No evaluation, towers are only represented
//! - No normalization of equivalent trees
//! - LaTeX support only covers what the writer produces
//!
//! # Usage patterns
//! 1. Quick functions at the crate root use default settings.
//! 2. Configure a parser ([BracketParser](bracket::BracketParser),
//!    [TowerParser](tower::TowerParser), [LatexParser](latex::LatexParser))
//!    to limit the nesting depth, or pick a [Notation] at runtime.
//!
//! ## Example
//! ```
//! use powertower::{parse_tower, to_bracket, to_latex, to_diagram};
//!
//! let tree = parse_tower("(2^3)^4").unwrap();
//! assert_eq!(to_bracket(&tree), "(((2)(3))(4))");
//! assert_eq!(to_latex(&tree), "\\left(2^{3}\\right)^{4}");
//! println!("{}", to_diagram(&tree));
//! ```
//!
//! ## Example Parser Configuration
//! ```
//! use powertower::tower::TowerParser;
//! use powertower::parser::ParsingErrorType;
//!
//! let parser = TowerParser::new().with_max_depth(2);
//! let err = parser.parse_str("1^2^3^4").unwrap_err();
//! assert_eq!(err.kind(), &ParsingErrorType::DepthExceeded { limit: 2 });
//! ```

pub mod bracket;
pub mod diagram;
pub mod latex;
pub mod model;
pub mod notation;
pub mod parser;
pub mod tower;

pub use crate::diagram::Diagram;
pub use crate::model::{Leaf, Node, Tree};
pub use crate::notation::Notation;
pub use crate::parser::ParsingError;

// ============================================================================
// Quick parsing API
// ============================================================================
/// Parses a string in bracket notation using default settings.
///
/// See [`bracket::parse_str`].
pub fn parse_bracket<S: AsRef<str>>(input: S) -> Result<Tree, ParsingError> {
    bracket::parse_str(input)
}

/// Parses a string in tower notation using default settings.
///
/// See [`tower::parse_str`].
pub fn parse_tower<S: AsRef<str>>(input: S) -> Result<Tree, ParsingError> {
    tower::parse_str(input)
}

/// Parses a string in LaTeX notation using default settings.
///
/// See [`latex::parse_str`].
pub fn parse_latex<S: AsRef<str>>(input: S) -> Result<Tree, ParsingError> {
    latex::parse_str(input)
}

// ============================================================================
// Quick writing API
// ============================================================================
/// Returns the bracket notation of a tree, e.g. `(((1)(3))(4))`.
pub fn to_bracket(tree: &Tree) -> String {
    bracket::to_bracket(tree)
}

/// Returns the tower notation of a tree, e.g. `(1^3)^4`.
pub fn to_tower(tree: &Tree) -> String {
    tower::to_tower(tree)
}

/// Returns the LaTeX notation of a tree, e.g. `\left(1^{3}\right)^{4}`.
pub fn to_latex(tree: &Tree) -> String {
    latex::to_latex(tree)
}

/// Renders a tree as an ASCII diagram.
pub fn to_diagram(tree: &Tree) -> Diagram {
    diagram::to_diagram(tree)
}
