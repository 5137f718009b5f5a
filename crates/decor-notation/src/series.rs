//! Ordered token sequences.
//!
//! A [`Series`] is what the lexer produces and what the optimizer, resolver
//! and code table consume. It is a plain vector with the handful of
//! positional operations those stages need; splicing is cheap enough at the
//! sizes notation strings reach.

use std::fmt;

use crate::token::{Kind, Token};

/// An ordered sequence of [`Token`]s.
///
/// Equality is structural: two series are equal when they hold equal tokens
/// (ignoring ids) in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series {
    tokens: Vec<Token>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from the given tokens, in order.
    pub fn build(tokens: impl IntoIterator<Item = Token>) -> Self {
        tokens.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn front(&self) -> Option<&Token> {
        self.tokens.first()
    }

    pub fn back(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Appends a token to the back of the series.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Moves an existing token equal to `token` to the back of the series,
    /// or appends `token` if there is none.
    ///
    /// Returns true when an existing token was moved.
    pub fn move_to_back_or_push(&mut self, token: Token) -> bool {
        match self.tokens.iter().position(|t| *t == token) {
            Some(index) => {
                let existing = self.tokens.remove(index);
                self.tokens.push(existing);
                true
            }
            None => {
                self.tokens.push(token);
                false
            }
        }
    }

    /// Removes and returns the last token of the given kind, regardless of
    /// its action or text.
    pub fn remove_last(&mut self, kind: Kind) -> Option<Token> {
        let index = self.tokens.iter().rposition(|t| t.kind() == kind)?;
        Some(self.tokens.remove(index))
    }

    /// Removes and returns the token at the back of the series.
    pub fn pop_back(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Inserts clones of every token in `other` right after `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn insert_after(&mut self, index: usize, other: &Series) {
        let at = index + 1;
        assert!(at <= self.tokens.len(), "insert position {index} out of bounds");
        self.tokens.splice(at..at, other.iter().cloned());
    }

    /// True if any token in the series is of the given kind.
    pub fn contains_kind(&self, kind: Kind) -> bool {
        self.tokens.iter().any(|t| t.kind() == kind)
    }

    /// Zero padded diagnostic ids, for debug output.
    pub fn ids(&self) -> Vec<String> {
        self.tokens.iter().map(|t| format!("{:03}", t.id())).collect()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            f.write_str(&token.to_string().replace('+', "++"))?;
        }
        Ok(())
    }
}

impl FromIterator<Token> for Series {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Extend<Token> for Series {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl IntoIterator for Series {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
