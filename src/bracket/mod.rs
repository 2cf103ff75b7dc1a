//! Bracket notation parser and writer for power towers.
//!
//! Bracket notation is the fully parenthesized encoding of the binary tree:
//! every node is a pair of parentheses around its children, and every leaf
//! child is a pair of parentheses around its value. There are no separators,
//! so `(((1)(3))(4))` is `(1^3)^4`.
//!
//! # Quick API
//! * [`parse_str`] - parses a bracket string with default settings
//! * [`to_bracket`] - writes a tree in bracket notation
//!
//! # Full API
//! Configure a [BracketParser], e.g. to change the maximum nesting depth.

mod parser;
mod writer;

pub use parser::BracketParser;
pub use writer::to_bracket;

use crate::model::Tree;
use crate::parser::ParsingError;

/// Parses a bracket string using default settings.
///
/// # Example
/// ```
/// use powertower::bracket::parse_str;
/// use powertower::model::Tree;
///
/// let tree = parse_str("((3.1)((4.1)(5.9)))").unwrap();
/// assert_eq!(tree, Tree::node(3.1, Tree::node(4.1, 5.9)));
/// ```
pub fn parse_str<S: AsRef<str>>(bracket: S) -> Result<Tree, ParsingError> {
    BracketParser::new().parse_str(bracket.as_ref())
}
