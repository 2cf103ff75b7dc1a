//! Runtime selection of a textual notation.

use crate::bracket::{BracketParser, to_bracket};
use crate::latex::{LatexParser, to_latex};
use crate::model::Tree;
use crate::parser::ParsingError;
use crate::tower::{TowerParser, to_tower};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three textual notations of a power tower.
///
/// | Notation | Example for `(1^3)^4` |
/// |----------|-----------------------|
/// | `Bracket` | `(((1)(3))(4))` |
/// | `Tower` | `(1^3)^4` |
/// | `Latex` | `\left(1^{3}\right)^{4}` |
///
/// # Example
/// ```
/// use powertower::Notation;
///
/// let tree = Notation::Tower.parse("(1^3)^4").unwrap();
/// assert_eq!(Notation::Bracket.format(&tree), "(((1)(3))(4))");
/// assert_eq!(Notation::Latex.format(&tree), "\\left(1^{3}\\right)^{4}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Fully parenthesized, e.g. `((2)(3))`
    Bracket,
    /// Infix `^`, right-associative, e.g. `2^3`
    Tower,
    /// LaTeX input, e.g. `2^{3}`
    Latex,
}

impl Notation {
    /// All notations, in conversion order.
    pub const ALL: [Notation; 3] = [Notation::Bracket, Notation::Tower, Notation::Latex];

    /// Parses `input` in this notation with default parser settings.
    pub fn parse(self, input: &str) -> Result<Tree, ParsingError> {
        self.parse_with_max_depth(input, crate::parser::DEFAULT_MAX_DEPTH)
    }

    /// Parses `input` in this notation, accepting at most `max_depth` levels of nesting.
    pub fn parse_with_max_depth(self, input: &str, max_depth: usize) -> Result<Tree, ParsingError> {
        match self {
            Notation::Bracket => BracketParser::new().with_max_depth(max_depth).parse_str(input),
            Notation::Tower => TowerParser::new().with_max_depth(max_depth).parse_str(input),
            Notation::Latex => LatexParser::new().with_max_depth(max_depth).parse_str(input),
        }
    }

    /// Formats `tree` in this notation.
    pub fn format(self, tree: &Tree) -> String {
        match self {
            Notation::Bracket => to_bracket(tree),
            Notation::Tower => to_tower(tree),
            Notation::Latex => to_latex(tree),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notation::Bracket => write!(f, "bracket"),
            Notation::Tower => write!(f, "tower"),
            Notation::Latex => write!(f, "LaTeX"),
        }
    }
}

/// Error for names that do not denote a [Notation].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown notation '{0}', expected one of: bracket, tower, latex")]
pub struct UnknownNotation(pub String);

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bracket" | "brackets" => Ok(Notation::Bracket),
            "tower" | "infix" => Ok(Notation::Tower),
            "latex" | "tex" => Ok(Notation::Latex),
            _ => Err(UnknownNotation(name.to_string())),
        }
    }
}

/// Estimates the length of a formatted tree for pre-allocating its string.
///
/// # Arguments
/// * `tree` - The tree to estimate length for
/// * `node_chars` - Structural characters a notation adds per node
pub(crate) fn estimate_len(tree: &Tree, node_chars: usize) -> usize {
    // Most leaves are short numbers or single letters
    const LEAF_CHARS: usize = 4;

    tree.num_leaves() * LEAF_CHARS + tree.num_nodes() * node_chars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("LaTeX".parse::<Notation>(), Ok(Notation::Latex));
        assert_eq!(" tower ".parse::<Notation>(), Ok(Notation::Tower));
        assert_eq!("Bracket".parse::<Notation>(), Ok(Notation::Bracket));
        assert!("polish".parse::<Notation>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for notation in Notation::ALL {
            assert_eq!(notation.to_string().parse::<Notation>(), Ok(notation));
        }
    }
}
