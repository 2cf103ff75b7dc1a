//! LaTeX notation parser and writer for power towers.
//!
//! The LaTeX form is tower notation ready for typesetting: every exponent is
//! braced and a tower used as base is wrapped in `\left(...\right)`, e.g.
//! `\left(2^{3}\right)^{4}`.
//!
//! # Quick API
//! * [`parse_str`] - parses a LaTeX string with default settings
//! * [`to_latex`] - writes a tree in LaTeX notation

mod parser;
mod writer;

pub use parser::LatexParser;
pub use writer::to_latex;

use crate::model::Tree;
use crate::parser::ParsingError;

/// Parses a LaTeX string using default settings.
///
/// # Example
/// ```
/// use powertower::latex::parse_str;
/// use powertower::model::Tree;
///
/// let tree = parse_str("3.1^{4.1^{5.9^{2.6}}}").unwrap();
/// assert_eq!(tree, Tree::node(3.1, Tree::node(4.1, Tree::node(5.9, 2.6))));
/// ```
pub fn parse_str<S: AsRef<str>>(latex: S) -> Result<Tree, ParsingError> {
    LatexParser::new().parse_str(latex.as_ref())
}
