use crate::model::Tree;
use crate::notation::Notation;
use crate::parser::scanner::{ParenScanner, is_wrapped, trim_segment};
use crate::parser::{DEFAULT_MAX_DEPTH, ParsingError};
use std::ops::Range;
use tracing::{debug, trace};

/// Parser (configuration) for power towers in bracket notation.
///
/// # Configuration
/// * `with_max_depth(max_depth)` - Maximum nesting depth before parsing
///   aborts with [DepthExceeded](crate::parser::ParsingErrorType::DepthExceeded).
///
/// # Format
/// * `tree ::= token | '(' group [group] ')'`
/// * `group ::= '(' token ')' | tree`
///
/// Sibling groups are not separated; they are delimited by parenthesis
/// balance alone.
///
/// # Example
/// ```
/// use powertower::bracket::BracketParser;
/// use powertower::model::Tree;
///
/// let parser = BracketParser::new().with_max_depth(16);
/// let tree = parser.parse_str("(((1)(3))(4))").unwrap();
/// assert_eq!(tree, Tree::node(Tree::node(1, 3), 4));
/// ```
#[derive(Debug, Clone)]
pub struct BracketParser {
    max_depth: usize,
}

impl BracketParser {
    /// Creates a new `BracketParser` with default settings.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a complete bracket string into a [Tree].
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed tree, a bare [Leaf](crate::model::Leaf) for inputs like `7`
    /// * `Err(ParsingError)` - If parentheses are imbalanced, a group holds
    ///   more than two arguments or the nesting is too deep
    pub fn parse_str(&self, input: &str) -> Result<Tree, ParsingError> {
        debug!(input, "Parsing bracket string");
        self.parse_segment(input, 0, 0)
    }

    /// Parses a segment of the input starting at byte `offset`:
    /// - A bare token is coerced into a leaf
    /// - Otherwise the outer parentheses are stripped and the remainder
    ///   is split into top-level groups
    fn parse_segment(&self, text: &str, offset: usize, level: usize) -> Result<Tree, ParsingError> {
        if level > self.max_depth {
            return Err(ParsingError::depth_exceeded(Notation::Bracket, self.max_depth, offset));
        }

        let (text, offset) = trim_segment(text, offset);
        if text.is_empty() {
            return Err(ParsingError::empty_operand(Notation::Bracket, offset));
        }

        if !is_wrapped(text) {
            ParenScanner::new(Notation::Bracket, text, offset).expect_balanced()?;
            return Ok(Tree::leaf(text));
        }

        let inner = &text[1..text.len() - 1];
        let inner_offset = offset + 1;
        let groups = split_groups(inner, inner_offset)?;
        trace!(?groups, inner, "Split bracket groups");

        match groups.as_slice() {
            // A lone group is reparsed, which strips residual parentheses
            [single] => self.parse_segment(&inner[single.clone()], inner_offset + single.start, level + 1),
            [left, right] => {
                let left_tree = self.parse_segment(&inner[left.clone()], inner_offset + left.start, level + 1)?;
                let right_tree = self.parse_segment(&inner[right.clone()], inner_offset + right.start, level + 1)?;
                Ok(Tree::node(left_tree, right_tree))
            }
            _ => Err(ParsingError::imbalanced_or_arity(Notation::Bracket, groups.len(), offset)),
        }
    }
}

impl Default for BracketParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits the interior of a bracket group into its top-level groups.
///
/// A group is closed whenever the depth returns to zero right after a `)`,
/// or when the final byte is reached at depth zero.
fn split_groups(inner: &str, offset: usize) -> Result<Vec<Range<usize>>, ParsingError> {
    let mut scanner = ParenScanner::new(Notation::Bracket, inner, offset);
    let mut groups = Vec::with_capacity(2);
    let mut start = 0;

    while let Some(byte) = scanner.advance()? {
        if scanner.at_depth_zero() && (byte == b')' || scanner.is_eof()) {
            groups.push(start..scanner.position());
            start = scanner.position();
        }
    }

    if !scanner.at_depth_zero() {
        return Err(ParsingError::imbalanced_paren(&scanner));
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_groups() {
        assert_eq!(split_groups("(1)(2)", 0).unwrap(), vec![0..3, 3..6]);
        assert_eq!(split_groups("((1)(2))(x)", 0).unwrap(), vec![0..8, 8..11]);
        assert_eq!(split_groups("-3", 0).unwrap(), vec![0..2]);
        assert!(split_groups("", 0).unwrap().is_empty());
    }

    #[test]
    fn test_split_groups_rejects_imbalance() {
        assert!(split_groups("(1))", 0).is_err());
        assert!(split_groups("(1)(2", 0).is_err());
    }
}
