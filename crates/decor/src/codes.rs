//! Per-terminal table of control sequences.

use std::borrow::Cow;
use std::collections::HashMap;

use decor_notation::{Action, Kind, Series, Token};

use crate::color;
use crate::profile::{Attr, Capabilities};

/// Every control sequence a decorator can emit, looked up once from a
/// [`Capabilities`] source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CodeTable {
    reset: String,
    enter: HashMap<Kind, String>,
    exit: HashMap<Kind, String>,
    foreground: Vec<String>,
    background: Vec<String>,
}

const ATTRS: [(Kind, Attr); 3] = [
    (Kind::Bold, Attr::Bold),
    (Kind::Italic, Attr::Italic),
    (Kind::Underline, Attr::Underline),
];

impl CodeTable {
    pub(crate) fn new<C: Capabilities + ?Sized>(caps: &C) -> Self {
        Self {
            reset: caps.reset(),
            enter: ATTRS
                .iter()
                .map(|&(kind, attr)| (kind, caps.enter(attr)))
                .collect(),
            exit: ATTRS
                .iter()
                .map(|&(kind, attr)| (kind, caps.exit(attr)))
                .collect(),
            foreground: (0..=u8::MAX).map(|n| caps.set_foreground(n)).collect(),
            background: (0..=u8::MAX).map(|n| caps.set_background(n)).collect(),
        }
    }

    /// Enter sequence for a start token. Color tokens resolve their argument;
    /// an unknown color renders as `<!color:ARG>`.
    pub(crate) fn enter_code(&self, token: &Token) -> Cow<'_, str> {
        match token.kind() {
            Kind::ForegroundColor => color_code(&self.foreground, token.text()),
            Kind::BackgroundColor => color_code(&self.background, token.text()),
            kind => Cow::Borrowed(lookup(&self.enter, kind)),
        }
    }

    /// Exit sequence for a stop token. Colors have no exit of their own and
    /// end with the reset sequence.
    pub(crate) fn exit_code(&self, token: &Token) -> &str {
        match token.kind() {
            Kind::ForegroundColor | Kind::BackgroundColor => &self.reset,
            kind => lookup(&self.exit, kind),
        }
    }

    /// True for stop tokens whose exit sequence is the full reset, which
    /// turns off every other active attribute as a side effect.
    pub(crate) fn is_reset(&self, token: &Token) -> bool {
        token.is_stop() && !self.reset.is_empty() && self.exit_code(token) == self.reset
    }

    /// The text one token renders to.
    pub(crate) fn code<'a>(&'a self, token: &'a Token) -> Cow<'a, str> {
        match (token.kind(), token.action()) {
            (Kind::Save, _) => Cow::Borrowed(""),
            (_, Action::Start) => self.enter_code(token),
            (_, Action::Stop) => Cow::Borrowed(self.exit_code(token)),
            (Kind::Text | Kind::Error, Action::None) => Cow::Borrowed(token.text()),
            (_, Action::None) => Cow::Borrowed(""),
        }
    }

    /// Concatenates the rendering of every token.
    pub(crate) fn render(&self, series: &Series) -> String {
        series.iter().map(|token| self.code(token)).collect()
    }
}

fn lookup(codes: &HashMap<Kind, String>, kind: Kind) -> &str {
    codes.get(&kind).map_or("", String::as_str)
}

fn color_code<'a>(codes: &'a [String], arg: &str) -> Cow<'a, str> {
    match color::resolve(arg).and_then(|n| codes.get(usize::from(n))) {
        Some(code) => Cow::Borrowed(code),
        None => Cow::Owned(format!("<!color:{arg}>")),
    }
}
