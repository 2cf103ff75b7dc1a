//! Tower (infix `^`) notation parser and writer for power towers.
//!
//! Tower notation is the conventional way to write a power tower:
//! `2^3^4` is `2^(3^4)`, and parentheses only appear where a base is itself
//! a tower, e.g. `(2^3)^4`. Negative numbers are parenthesized, e.g. `(-2)^3`.
//!
//! # Quick API
//! * [`parse_str`] - parses a tower string with default settings
//! * [`to_tower`] - writes a tree in tower notation
//!
//! # Full API
//! Configure a [TowerParser], e.g. to change the maximum nesting depth.

mod parser;
mod writer;

pub use parser::TowerParser;
pub use writer::to_tower;

use crate::model::Tree;
use crate::parser::ParsingError;

/// Parses a tower string using default settings.
///
/// # Example
/// ```
/// use powertower::tower::parse_str;
/// use powertower::model::Tree;
///
/// let tree = parse_str("2^(3^5)^z").unwrap();
/// assert_eq!(tree, Tree::node(2, Tree::node(Tree::node(3, 5), "z")));
/// ```
pub fn parse_str<S: AsRef<str>>(tower: S) -> Result<Tree, ParsingError> {
    TowerParser::new().parse_str(tower.as_ref())
}
