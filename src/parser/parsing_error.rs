//! Error types for power tower parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting malformed bracket, tower and LaTeX strings.

use crate::notation::Notation;
use crate::parser::scanner::ParenScanner;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing any of the notations.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ParsingErrorType {
    /// A `)` without matching `(`, or a `(` that is never closed
    #[error("Imbalanced parentheses")]
    ImbalancedParen,
    /// Bracket group holding something other than one or two arguments
    #[error("Expected one or two argument groups but found {groups}")]
    ImbalancedOrArity { groups: usize },
    /// Nesting deeper than the parser's limit
    #[error("Nesting exceeds maximum depth of {limit}")]
    DepthExceeded { limit: usize },
    /// Empty input, base or exponent (e.g. `2^`)
    #[error("Empty operand")]
    EmptyOperand,
    /// Operands placed next to each other without `^` (e.g. `(2^3)4`)
    #[error("Missing '^' between operands")]
    MissingOperator,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (notation, position and
/// surrounding text).
///
/// Positions are byte offsets into the string handed to the tower or bracket
/// scanner. For LaTeX input this is the text after rewriting `\left(`,
/// `\right)`, `{` and `}` into plain parentheses.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {notation} string: {kind} at position {position}{}", format_context(.context))]
pub struct ParsingError {
    notation: Notation,
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} bytes): {}", context.len(), context)
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type and scanner state
    pub(crate) fn from_scanner(kind: ParsingErrorType, scanner: &ParenScanner) -> Self {
        Self {
            notation: scanner.notation(),
            kind,
            position: scanner.absolute_position(),
            context: scanner.context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Create a ParsingError at a known position, without scanner context
    pub(crate) fn at(notation: Notation, kind: ParsingErrorType, position: usize) -> Self {
        Self {
            notation,
            kind,
            position,
            context: String::new(),
        }
    }

    /// Convenience constructor for ImbalancedParen
    pub(crate) fn imbalanced_paren(scanner: &ParenScanner) -> Self {
        Self::from_scanner(ParsingErrorType::ImbalancedParen, scanner)
    }

    /// Convenience constructor for ImbalancedOrArity
    pub(crate) fn imbalanced_or_arity(notation: Notation, groups: usize, position: usize) -> Self {
        Self::at(notation, ParsingErrorType::ImbalancedOrArity { groups }, position)
    }

    /// Convenience constructor for DepthExceeded
    pub(crate) fn depth_exceeded(notation: Notation, limit: usize, position: usize) -> Self {
        Self::at(notation, ParsingErrorType::DepthExceeded { limit }, position)
    }

    /// Convenience constructor for EmptyOperand
    pub(crate) fn empty_operand(notation: Notation, position: usize) -> Self {
        Self::at(notation, ParsingErrorType::EmptyOperand, position)
    }

    /// Convenience constructor for MissingOperator
    pub(crate) fn missing_operator(notation: Notation, position: usize) -> Self {
        Self::at(notation, ParsingErrorType::MissingOperator, position)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the notation that was being parsed
    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}
