//! Low-level cursor over power tower text with parenthesis depth tracking.
//!
//! This module provides [ParenScanner], the foundation of the bracket and
//! tower parsers. The scanner walks a segment byte by byte and keeps track of
//! the parenthesis depth, so that parsers only need to ask whether they are
//! currently at depth zero.

use crate::notation::Notation;
use crate::parser::parsing_error::ParsingError;

// =#========================================================================#=
// PAREN SCANNER
// =#========================================================================#=
/// A byte-by-byte cursor over a text segment that tracks parenthesis depth.
///
/// The scanner operates on a segment of a larger input; `offset` is the byte
/// offset of that segment within the input, so that reported positions are
/// absolute. All structural characters (`(`, `)`, `^`) are ASCII, so segments
/// split at positions found by the scanner are always valid `&str` slices.
///
/// # Invariants
/// - The depth never goes negative: [advance](ParenScanner::advance) returns
///   an error instead of consuming an unmatched `)`.
///
/// # Example
/// ```
/// use powertower::Notation;
/// use powertower::parser::ParenScanner;
///
/// let mut scanner = ParenScanner::new(Notation::Tower, "(a^b)^c", 0);
/// assert_eq!(scanner.advance().unwrap(), Some(b'('));
/// assert!(!scanner.at_depth_zero());
/// assert!(scanner.skip_to_depth_zero().unwrap());
/// assert_eq!(scanner.position(), 5);
/// assert_eq!(scanner.peek(), Some(b'^'));
/// ```
pub struct ParenScanner<'a> {
    notation: Notation,
    input: &'a [u8],
    offset: usize,
    pos: usize,
    depth: usize,
}

impl<'a> ParenScanner<'a> {
    /// Creates a new scanner over `text`.
    ///
    /// # Arguments
    /// * `notation` - The notation being parsed, used for error reporting
    /// * `text` - The segment to scan
    /// * `offset` - Byte offset of `text` within the full input
    pub fn new(notation: Notation, text: &'a str, offset: usize) -> Self {
        Self {
            notation,
            input: text.as_bytes(),
            offset,
            pos: 0,
            depth: 0,
        }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of segment
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consumes the current byte and updates the depth.
    ///
    /// # Returns
    /// * `Ok(Some(u8))` - The consumed byte
    /// * `Ok(None)` - If at end of segment
    /// * `Err(ParsingError)` - If the byte is a `)` at depth zero; it is not consumed
    pub fn advance(&mut self) -> Result<Option<u8>, ParsingError> {
        let Some(byte) = self.peek() else {
            return Ok(None);
        };

        match byte {
            b'(' => self.depth += 1,
            b')' if self.depth == 0 => return Err(ParsingError::imbalanced_paren(self)),
            b')' => self.depth -= 1,
            _ => {}
        }
        self.pos += 1;

        Ok(Some(byte))
    }

    /// Returns whether the scanner is outside of any parenthesis group.
    #[inline]
    pub fn at_depth_zero(&self) -> bool {
        self.depth == 0
    }

    /// Returns the current parenthesis depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes bytes until the depth returns to zero.
    ///
    /// Meant to be called right after entering a group, to skip over it.
    ///
    /// # Returns
    /// * `Ok(true)` - The group was closed
    /// * `Ok(false)` - End of segment reached with the group still open
    /// * `Err(ParsingError)` - If an unmatched `)` is encountered
    pub fn skip_to_depth_zero(&mut self) -> Result<bool, ParsingError> {
        while !self.at_depth_zero() {
            if self.advance()?.is_none() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Consumes the rest of the segment and checks that all groups are closed.
    ///
    /// # Errors
    /// Returns [ImbalancedParen](crate::parser::ParsingErrorType::ImbalancedParen)
    /// on an unmatched `)` or if a `(` is still open at the end.
    pub fn expect_balanced(&mut self) -> Result<(), ParsingError> {
        while self.advance()?.is_some() {}
        if !self.at_depth_zero() {
            return Err(ParsingError::imbalanced_paren(self));
        }
        Ok(())
    }

    /// Returns whether the end of the segment has been reached.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the current position relative to the start of the segment.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the current position within the full input.
    pub fn absolute_position(&self) -> usize {
        self.offset + self.pos
    }

    /// Returns the notation this scanner reports errors for.
    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn context_as_string(&self, k: usize) -> String {
        let end = (self.pos + k).min(self.input.len());
        String::from_utf8_lossy(&self.input[self.pos..end]).into_owned()
    }
}

// =#========================================================================#=
// SEGMENT HELPERS
// =#========================================================================#=
/// Trims surrounding whitespace and shifts the offset accordingly.
pub(crate) fn trim_segment(text: &str, offset: usize) -> (&str, usize) {
    let leading = text.len() - text.trim_start().len();
    (text.trim(), offset + leading)
}

/// Returns whether the segment starts with `(` and ends with `)`.
pub(crate) fn is_wrapped(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('(') && text.ends_with(')')
}

/// Removes every parenthesis from the segment.
pub(crate) fn strip_parens(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}
