//! Lexer for decor notation.
//!
//! Two sigils introduce everything that isn't literal text:
//!
//! - `@` followed by a designator letter starts (upper case) or stops (lower
//!   case) an attribute. `@F` and `@K` take a delimited color argument.
//! - `$` followed by `{name}` references a template variable.
//!
//! A doubled sigil (`@@` or `$$`) is a literal `@` or `$`.

use tracing::trace;

use crate::error::{LexError, Result};
use crate::series::Series;
use crate::token::{Kind, Token};

const SIGILS: [char; 2] = ['@', '$'];

/// Lexes decor notation into a [`Series`] of tokens in source order.
///
/// # Errors
///
/// Fails on a sigil at the very end of the input, a `$` not followed by
/// `{`, an unterminated `${...}`, or a color argument without its closing
/// delimiter.
///
/// # Example
///
/// ```rust
/// use decor_notation::{parse, Kind};
///
/// let series = parse("@Bhi@b").unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.front().unwrap().kind(), Kind::Bold);
/// ```
pub fn parse(input: &str) -> Result<Series> {
    let series = Lexer::new(input).run()?;
    trace!(tokens = series.len(), "lexed notation");
    Ok(series)
}

/// Removes all notation from `input`, returning only its literal text.
///
/// Variable references are dropped, escaped sigils are unescaped.
///
/// # Errors
///
/// Fails exactly when [`parse`] would.
///
/// # Example
///
/// ```rust
/// use decor_notation::strip;
///
/// assert_eq!(strip("@F(Grey37)[ABC:@I123@i]@f").unwrap(), "[ABC:123]");
/// ```
pub fn strip(input: &str) -> Result<String> {
    let series = parse(input)?;
    Ok(series
        .iter()
        .filter(|t| t.kind() == Kind::Text)
        .map(Token::text)
        .collect())
}

/// Returns the character closing a color argument opened by `open`.
fn closing_delimiter(open: char) -> char {
    match open {
        '{' => '}',
        '(' => ')',
        '[' => ']',
        '<' => '>',
        other => other,
    }
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    pending: String,
    series: Series,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: String::new(),
            series: Series::new(),
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consumes and returns the next character, if any.
    fn bump(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Moves buffered literal text into the series.
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.series.push(Token::literal(text));
        }
    }

    fn run(mut self) -> Result<Series> {
        while self.pos < self.input.len() {
            let rest = self.remaining();
            let Some(offset) = rest.find(SIGILS) else {
                self.pending.push_str(rest);
                break;
            };

            self.pending.push_str(&rest[..offset]);

            let at = self.pos + offset;
            let sigil = char::from(self.input.as_bytes()[at]);
            self.pos = at + 1;

            let Some(designator) = self.bump() else {
                return Err(LexError::SigilAtEnd { sigil });
            };

            if designator == sigil {
                self.pending.push(sigil);
                continue;
            }

            self.flush();

            if sigil == '$' {
                self.variable(designator, at)?;
            } else {
                self.attribute(designator, at)?;
            }
        }

        self.flush();
        Ok(self.series)
    }

    fn variable(&mut self, designator: char, at: usize) -> Result<()> {
        if designator != '{' {
            return Err(LexError::MalformedVariable { pos: at });
        }

        let rest = self.remaining();
        let end = rest
            .find('}')
            .ok_or(LexError::UnterminatedVariable { pos: at })?;

        self.series.push(Token::variable(&rest[..end]));
        self.pos += end + 1;
        Ok(())
    }

    fn attribute(&mut self, designator: char, at: usize) -> Result<()> {
        let token = Token::attribute(designator);

        if designator != 'F' && designator != 'K' {
            self.series.push(token);
            return Ok(());
        }

        let unterminated = || LexError::UnterminatedAttribute {
            attr: designator,
            pos: at,
        };

        let close = closing_delimiter(self.bump().ok_or_else(unterminated)?);
        let rest = self.remaining();
        let end = rest.find(close).ok_or_else(unterminated)?;

        self.series.push(token.with_text(&rest[..end]));
        self.pos += end + close.len_utf8();
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Plain text never contains a sigil.
    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"\\[\\](){}<>Жé]{0,40}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn plain_text_round_trips(content in plain_text()) {
            prop_assert_eq!(strip(&content).unwrap(), content);
        }

        #[test]
        fn escaped_text_round_trips(content in "[a-z@$ ]{0,40}") {
            let escaped = content.replace('@', "@@").replace('$', "$$");
            prop_assert_eq!(strip(&escaped).unwrap(), content);
        }

        #[test]
        fn bold_wrapping_preserves_text(content in plain_text()) {
            let input = format!("@B{}@b", content);
            let series = parse(&input).unwrap();

            prop_assert_eq!(series.front().map(Token::kind), Some(Kind::Bold));
            prop_assert_eq!(series.back().map(Token::action), Some(crate::token::Action::Stop));
            prop_assert_eq!(strip(&input).unwrap(), content);
        }

        #[test]
        fn color_argument_round_trips(name in "[A-Za-z0-9]{1,12}") {
            let series = parse(&format!("@F<{}>x@f", name)).unwrap();
            prop_assert_eq!(series.front().map(Token::text), Some(name.as_str()));
        }
    }
}
