//! Error types for JSON deserialization.

use thiserror::Error;

/// Errors that can occur while deserializing JSON text.
///
/// Every variant carries the byte offset into the input at which the problem
/// was detected, so callers can point at the offending position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A value started with a character no JSON value can start with.
    #[error("unexpected character `{found}` at byte {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    /// The input ended in the middle of a value or container.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    /// A specific punctuation character was required but something else
    /// (or nothing) was found.
    #[error("expected `{expected}` at byte {offset}")]
    Expected { expected: char, offset: usize },

    /// A `null`/`true`/`false` keyword was misspelled.
    #[error("invalid literal at byte {offset}, expected `{expected}`")]
    InvalidLiteral {
        expected: &'static str,
        offset: usize,
    },

    /// A number literal violated the supported grammar (lone `-`, or a
    /// decimal point with no fraction digits).
    #[error("invalid number literal at byte {offset}")]
    InvalidNumber { offset: usize },

    /// A string's closing quote was never found.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString { offset: usize },

    /// A `\u` escape was truncated or contained non-hex digits.
    #[error("invalid \\u escape at byte {offset}")]
    InvalidUnicodeEscape { offset: usize },

    /// A UTF-16 surrogate escape appeared without its other half.
    #[error("unpaired UTF-16 surrogate escape at byte {offset}")]
    UnpairedSurrogate { offset: usize },
}

impl ParseError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { offset, .. }
            | ParseError::UnexpectedEof { offset }
            | ParseError::Expected { offset, .. }
            | ParseError::InvalidLiteral { offset, .. }
            | ParseError::InvalidNumber { offset }
            | ParseError::UnterminatedString { offset }
            | ParseError::InvalidUnicodeEscape { offset }
            | ParseError::UnpairedSurrogate { offset } => *offset,
        }
    }
}

/// Convenience alias used throughout jsonette-core.
pub type Result<T> = std::result::Result<T, ParseError>;
