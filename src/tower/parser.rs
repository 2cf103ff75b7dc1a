use crate::model::Tree;
use crate::notation::Notation;
use crate::parser::scanner::{ParenScanner, is_wrapped, strip_parens, trim_segment};
use crate::parser::{DEFAULT_MAX_DEPTH, ParsingError};
use tracing::{debug, trace};

/// Parser (configuration) for power towers in tower notation.
///
/// # Configuration
/// * `with_max_depth(max_depth)` - Maximum nesting depth before parsing
///   aborts with [DepthExceeded](crate::parser::ParsingErrorType::DepthExceeded).
///
/// # Format
/// * `tower ::= operand ['^' tower]`
/// * `operand ::= token | '(' tower ')'`
///
/// `^` is right-associative, so `a^b^c` is `a^(b^c)`. The parser peels off the
/// first `^` outside of parentheses as the split between base and exponent
/// and recurses on both sides; parenthesized groups are opaque to that scan
/// and only unwrapped when they make up the whole segment.
///
/// # Example
/// ```
/// use powertower::tower::TowerParser;
/// use powertower::model::Tree;
///
/// let tree = TowerParser::new().parse_str("(w^x)^y^z").unwrap();
/// assert_eq!(tree, Tree::node(Tree::node("w", "x"), Tree::node("y", "z")));
/// ```
#[derive(Debug, Clone)]
pub struct TowerParser {
    notation: Notation,
    max_depth: usize,
}

impl TowerParser {
    /// Creates a new `TowerParser` with default settings.
    pub fn new() -> Self {
        Self::reporting_as(Notation::Tower)
    }

    /// Creates a `TowerParser` whose errors name the given notation,
    /// for notations that are rewritten into tower notation first.
    pub(crate) fn reporting_as(notation: Notation) -> Self {
        Self {
            notation,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a complete tower string into a [Tree].
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed tree, a bare [Leaf](crate::model::Leaf) for inputs without `^`
    /// * `Err(ParsingError)` - If parentheses are imbalanced, an operand is
    ///   empty or missing its `^`, or the nesting is too deep
    pub fn parse_str(&self, input: &str) -> Result<Tree, ParsingError> {
        debug!(input, notation = %self.notation, "Parsing tower string");
        self.parse_segment(input, 0, 0)
    }

    /// Parses a segment of the input starting at byte `offset`:
    /// - Without any `^`, parentheses are stripped and the rest is a leaf
    /// - Otherwise splits at the first top-level `^` into base and exponent
    /// - A segment that is one parenthesized group is unwrapped
    fn parse_segment(&self, text: &str, offset: usize, level: usize) -> Result<Tree, ParsingError> {
        if level > self.max_depth {
            return Err(ParsingError::depth_exceeded(self.notation, self.max_depth, offset));
        }

        let (text, offset) = trim_segment(text, offset);
        if text.is_empty() {
            return Err(ParsingError::empty_operand(self.notation, offset));
        }

        if !text.contains('^') {
            ParenScanner::new(self.notation, text, offset).expect_balanced()?;
            let token = strip_parens(text);
            if token.trim().is_empty() {
                return Err(ParsingError::empty_operand(self.notation, offset));
            }
            return Ok(Tree::leaf(token.trim()));
        }

        let mut scanner = ParenScanner::new(self.notation, text, offset);
        let mut boundary = None;
        while let Some(byte) = scanner.advance()? {
            if scanner.at_depth_zero() && (byte == b'^' || scanner.is_eof()) {
                boundary = Some(byte);
                break;
            }
        }

        let split = scanner.position();
        match boundary {
            Some(b'^') => {
                let base = &text[..split - 1];
                let mut exponent_start = split;
                // A doubled caret is read as one
                if text[split..].starts_with('^') {
                    exponent_start += 1;
                }
                let exponent = &text[exponent_start..];
                trace!(base, exponent, "Split tower");

                let left = self.parse_segment(base, offset, level + 1)?;
                let right = self.parse_segment(exponent, offset + exponent_start, level + 1)?;
                Ok(Tree::node(left, right))
            }
            Some(_) => {
                if !self.is_single_group(text, offset)? {
                    return Err(ParsingError::missing_operator(self.notation, offset));
                }
                trace!(text, "Unwrap tower group");
                self.parse_segment(&text[1..text.len() - 1], offset + 1, level + 1)
            }
            None => Err(ParsingError::imbalanced_paren(&scanner)),
        }
    }

    /// Returns whether the segment is one parenthesized group, i.e. the
    /// opening parenthesis is matched by the final byte.
    fn is_single_group(&self, text: &str, offset: usize) -> Result<bool, ParsingError> {
        if !is_wrapped(text) {
            return Ok(false);
        }

        let mut scanner = ParenScanner::new(self.notation, text, offset);
        scanner.advance()?;
        Ok(scanner.skip_to_depth_zero()? && scanner.is_eof())
    }
}

impl Default for TowerParser {
    fn default() -> Self {
        Self::new()
    }
}
