//! The token model shared by the lexer, the optimizer and the resolver.
//!
//! A [`Token`] is one lexical unit of decor notation: a run of literal text,
//! a variable reference, an error marker, a save point, or the start/stop of
//! a display attribute.
//!
//! Tokens carry a diagnostic `id` drawn from a process-wide counter. The id
//! only exists to make debug output readable; it takes no part in equality,
//! which compares kind, action and text.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    ID_SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1
}

/// Resets the diagnostic id counter so the next token gets id `1`.
///
/// Ids have no effect on behavior; this only exists so tests can assert on
/// [`Series`](crate::Series) debug strings.
pub fn reset_ids() {
    ID_SEQUENCE.store(0, Ordering::Relaxed);
}

/// What a token represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No-op produced for an unrecognized `@` designator.
    Empty,
    /// Literal text.
    Text,
    /// Diagnostic text rendered inline (undefined variable, cycles, ...).
    Error,
    /// A `${name}` reference.
    Variable,
    /// Save point for the set of active attributes.
    Save,
    Bold,
    Underline,
    Italic,
    ForegroundColor,
    BackgroundColor,
}

impl Kind {
    /// Returns true for the display attributes that have enter/exit codes.
    pub fn is_attribute(self) -> bool {
        matches!(
            self,
            Kind::Bold
                | Kind::Underline
                | Kind::Italic
                | Kind::ForegroundColor
                | Kind::BackgroundColor
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Empty => "EMPTY",
            Kind::Text => "TEXT",
            Kind::Error => "ERROR",
            Kind::Variable => "VAR",
            Kind::Save => "SAVE",
            Kind::Bold => "BOLD",
            Kind::Underline => "UNDERLINE",
            Kind::Italic => "ITALIC",
            Kind::ForegroundColor => "FGCOLOR",
            Kind::BackgroundColor => "BGCOLOR",
        };
        f.write_str(name)
    }
}

/// Whether a token opens or closes its attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    None,
    Start,
    Stop,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::None => Ok(()),
            Action::Start => f.write_str("START"),
            Action::Stop => f.write_str("STOP"),
        }
    }
}

/// One lexical unit of decor notation.
///
/// `text` holds the literal content for [`Kind::Text`], [`Kind::Error`] and
/// [`Kind::Variable`] tokens, and the raw color name or number for color
/// start tokens. It is empty otherwise.
#[derive(Debug, Clone)]
pub struct Token {
    id: u64,
    kind: Kind,
    action: Action,
    text: String,
}

impl Token {
    fn new(kind: Kind, action: Action, text: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            kind,
            action,
            text: text.into(),
        }
    }

    /// A run of literal text.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(Kind::Text, Action::None, text)
    }

    /// A reference to the variable `name`.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(Kind::Variable, Action::None, name)
    }

    /// Diagnostic text that is rendered verbatim.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, Action::None, message)
    }

    /// The no-op token produced for unknown attribute letters.
    pub fn empty() -> Self {
        Self::new(Kind::Empty, Action::None, "")
    }

    /// Opens an attribute of the given kind.
    pub fn start(kind: Kind) -> Self {
        Self::new(kind, Action::Start, "")
    }

    /// Closes an attribute of the given kind.
    pub fn stop(kind: Kind) -> Self {
        Self::new(kind, Action::Stop, "")
    }

    /// Starts the foreground color `color` (a name or a number).
    pub fn foreground(color: impl Into<String>) -> Self {
        Self::new(Kind::ForegroundColor, Action::Start, color)
    }

    /// Starts the background color `color` (a name or a number).
    pub fn background(color: impl Into<String>) -> Self {
        Self::new(Kind::BackgroundColor, Action::Start, color)
    }

    /// Maps an attribute designator letter to its token.
    ///
    /// Upper case letters start an attribute, lower case letters stop it.
    /// Anything unrecognized yields an [`empty`](Token::empty) token.
    pub fn attribute(letter: char) -> Self {
        match letter {
            'B' => Self::start(Kind::Bold),
            'F' => Self::start(Kind::ForegroundColor),
            'I' => Self::start(Kind::Italic),
            'K' => Self::start(Kind::BackgroundColor),
            'U' => Self::start(Kind::Underline),
            'b' => Self::stop(Kind::Bold),
            'f' => Self::stop(Kind::ForegroundColor),
            'i' => Self::stop(Kind::Italic),
            'k' => Self::stop(Kind::BackgroundColor),
            'u' => Self::stop(Kind::Underline),
            _ => Self::empty(),
        }
    }

    /// Replaces the token's text, keeping its id.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_start(&self) -> bool {
        self.action == Action::Start
    }

    pub fn is_stop(&self) -> bool {
        self.action == Action::Stop
    }

    /// True when `self` starts the same kind that `other` stops, or vice versa.
    pub fn is_opposite_of(&self, other: &Token) -> bool {
        self.kind == other.kind
            && matches!(
                (self.action, other.action),
                (Action::Start, Action::Stop) | (Action::Stop, Action::Start)
            )
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.action == other.action && self.text == other.text
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.id)?;

        if self.kind.is_attribute() || self.kind == Kind::Save {
            write!(f, ":{}", self.action)?;
        }

        write!(f, ":{}", self.kind)?;

        if !self.text.is_empty() {
            write!(f, ":{:?}", self.text)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_letters_map_to_start_and_stop() {
        let cases = [
            ('B', Kind::Bold, Action::Start),
            ('b', Kind::Bold, Action::Stop),
            ('I', Kind::Italic, Action::Start),
            ('i', Kind::Italic, Action::Stop),
            ('U', Kind::Underline, Action::Start),
            ('u', Kind::Underline, Action::Stop),
            ('F', Kind::ForegroundColor, Action::Start),
            ('f', Kind::ForegroundColor, Action::Stop),
            ('K', Kind::BackgroundColor, Action::Start),
            ('k', Kind::BackgroundColor, Action::Stop),
        ];

        for (letter, kind, action) in cases {
            let token = Token::attribute(letter);
            assert_eq!(token.kind(), kind, "letter {letter}");
            assert_eq!(token.action(), action, "letter {letter}");
        }
    }

    #[test]
    fn unknown_letter_is_empty() {
        let token = Token::attribute('x');
        assert_eq!(token.kind(), Kind::Empty);
        assert_eq!(token.action(), Action::None);
    }

    #[test]
    fn equality_ignores_id() {
        let a = Token::foreground("Grey37");
        let b = Token::foreground("Grey37");
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn equality_compares_text() {
        assert_ne!(Token::foreground("Grey37"), Token::foreground("Orange1"));
        assert_ne!(Token::foreground("1"), Token::background("1"));
    }

    #[test]
    fn clone_keeps_id() {
        let a = Token::literal("abc");
        let b = a.clone();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn opposite_tokens() {
        let start = Token::start(Kind::Italic);
        let stop = Token::stop(Kind::Italic);
        assert!(start.is_opposite_of(&stop));
        assert!(stop.is_opposite_of(&start));
        assert!(!start.is_opposite_of(&Token::stop(Kind::Bold)));
        assert!(!start.is_opposite_of(&Token::start(Kind::Italic)));
    }

    #[test]
    fn display_shows_action_only_for_attributes() {
        let text = Token::literal("[").to_string();
        assert!(text.ends_with(":TEXT:\"[\""), "{text}");

        let color = Token::foreground("Grey37").to_string();
        assert!(color.ends_with(":START:FGCOLOR:\"Grey37\""), "{color}");

        let stop = Token::stop(Kind::Italic).to_string();
        assert!(stop.ends_with(":STOP:ITALIC"), "{stop}");
    }
}
