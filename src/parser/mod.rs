//! Basic low-level parser functionality shared by all notations.
//!
//! The notation parsers themselves live in [crate::bracket], [crate::tower]
//! and [crate::latex]. This module provides the depth-tracking
//! [ParenScanner] they are built on and the [ParsingError] they report.

pub mod parsing_error;
pub mod scanner;

pub use parsing_error::{ParsingError, ParsingErrorType};
pub use scanner::ParenScanner;

/// Default maximum nesting depth accepted by the parsers
pub const DEFAULT_MAX_DEPTH: usize = 512;
