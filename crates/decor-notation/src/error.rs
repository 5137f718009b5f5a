//! Lexer error types.

use thiserror::Error;

/// Errors produced while lexing decor notation.
///
/// Positions are byte offsets of the offending sigil in the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// An `@` or `$` was the final character of the input.
    #[error("sigil {sigil:?} not allowed at end of string")]
    SigilAtEnd { sigil: char },

    /// A `$` was followed by something other than `{` or `$`.
    #[error("malformed variable reference at pos {pos}")]
    MalformedVariable { pos: usize },

    /// A `${` without its closing `}`.
    #[error("unterminated variable reference at pos {pos}")]
    UnterminatedVariable { pos: usize },

    /// A color argument whose closing delimiter never appears.
    #[error("unterminated attribute {attr:?} at pos {pos}")]
    UnterminatedAttribute { attr: char, pos: usize },
}

/// Result type for lexing operations.
pub type Result<T> = std::result::Result<T, LexError>;
