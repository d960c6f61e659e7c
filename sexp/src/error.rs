//! Reader error types.

use thiserror::Error;

/// A read error with location information.
#[derive(Debug, Clone, Error)]
#[error("parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    pub fn unexpected_eof(line: usize, column: usize) -> Self {
        Self::new("unexpected end of input inside a list", line, column)
    }

    pub fn unbalanced_close(line: usize, column: usize) -> Self {
        Self::new("unmatched ')'", line, column)
    }
}

/// Result type for reading operations.
pub type ParseResult<T> = Result<T, ParseError>;
