//! Error types for decorators and templates.

use std::path::PathBuf;

use decor_notation::LexError;
use thiserror::Error;

/// Errors returned by [`Decorator`](crate::Decorator) construction and
/// formatting.
///
/// Problems found while expanding a template (undefined variables, circular
/// references, unknown colors) are not errors: they are rendered inline so
/// one bad reference doesn't lose the rest of the output.
#[derive(Debug, Error)]
pub enum DecorError {
    /// The notation could not be lexed.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// `TERM` is unset or empty.
    #[error("TERM environment variable is not set")]
    TermNotSet,

    /// No profile is known for the terminal type.
    #[error("unknown terminal type: {term}")]
    UnknownTerminal { term: String },

    /// A terminal profile could not be parsed.
    #[error("invalid terminal profile{}: {message}", location(.path))]
    Profile {
        /// Source file, when the profile was read from disk.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// Reading a profile file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// A variable that (indirectly) references itself.
///
/// `chain` starts and ends with the variable whose value closed the loop,
/// listing the references followed in between.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("circular reference: {}", .chain.join("->"))]
pub struct CircularReference {
    pub chain: Vec<String>,
}

/// Result type for decor operations.
pub type Result<T> = std::result::Result<T, DecorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_reference_display() {
        let err = CircularReference {
            chain: vec!["B".into(), "D".into(), "F".into(), "B".into()],
        };
        assert_eq!(err.to_string(), "circular reference: B->D->F->B");
    }

    #[test]
    fn profile_error_display() {
        let err = DecorError::Profile {
            path: Some(PathBuf::from("/tmp/term.yaml")),
            message: "missing field `name`".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid terminal profile /tmp/term.yaml: missing field `name`"
        );

        let err = DecorError::Profile {
            path: None,
            message: "oops".into(),
        };
        assert_eq!(err.to_string(), "invalid terminal profile: oops");
    }

    #[test]
    fn lex_errors_are_transparent() {
        let err = DecorError::from(LexError::SigilAtEnd { sigil: '@' });
        assert_eq!(err.to_string(), "sigil '@' not allowed at end of string");
    }
}
