//! The decorator: notation in, control sequences out.

use std::sync::Arc;

use decor_notation::{parse, Series};
use tracing::debug;

use crate::codes::CodeTable;
use crate::error::{DecorError, Result};
use crate::optimize::Optimizer;
use crate::profile::{Capabilities, TermProfile};
use crate::template::Template;

/// Formats decor notation for one terminal type.
///
/// A decorator holds the terminal's control sequences, looked up once when
/// it is built. It is cheap to clone and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use decor::Decorator;
///
/// let decorator = Decorator::load("xterm-256color").unwrap();
/// assert_eq!(
///     decorator.format("@F(Grey37)[ABC:@I123@i]@f").unwrap(),
///     "\x1b[38;5;59m[ABC:\x1b[3m123\x1b[23m]\x1b(B\x1b[m"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Decorator {
    term: String,
    codes: Arc<CodeTable>,
}

impl Decorator {
    /// Builds a decorator for the terminal named by `TERM`.
    ///
    /// # Errors
    ///
    /// [`DecorError::TermNotSet`] if `TERM` is unset or empty, and
    /// [`DecorError::UnknownTerminal`] if there is no built-in profile for it.
    pub fn new() -> Result<Self> {
        let term = std::env::var("TERM").unwrap_or_default();
        if term.is_empty() {
            return Err(DecorError::TermNotSet);
        }
        Self::load(&term)
    }

    /// Like [`new`](Decorator::new), but falls back to the `dumb` profile
    /// when color output is disabled (see [`console::colors_enabled`]).
    ///
    /// # Errors
    ///
    /// Same as [`new`](Decorator::new) when colors are enabled.
    pub fn detect() -> Result<Self> {
        if !console::colors_enabled() {
            debug!("colors disabled, using the dumb profile");
            return Ok(Self::with_profile(&TermProfile::dumb()));
        }
        Self::new()
    }

    /// Builds a decorator from the built-in profile for `term`.
    ///
    /// # Errors
    ///
    /// [`DecorError::UnknownTerminal`] if no built-in profile matches.
    pub fn load(term: &str) -> Result<Self> {
        let profile = TermProfile::builtin(term).ok_or_else(|| DecorError::UnknownTerminal {
            term: term.to_string(),
        })?;
        Ok(Self::with_capabilities(term, &profile))
    }

    /// Builds a decorator from a terminal profile.
    pub fn with_profile(profile: &TermProfile) -> Self {
        Self::with_capabilities(profile.name.clone(), profile)
    }

    /// Builds a decorator from any source of control sequences.
    pub fn with_capabilities<C: Capabilities + ?Sized>(term: impl Into<String>, caps: &C) -> Self {
        let term = term.into();
        debug!(term = %term, "building code table");
        Self {
            term,
            codes: Arc::new(CodeTable::new(caps)),
        }
    }

    /// The terminal type this decorator was built for.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Renders `text` directly, without optimizing.
    ///
    /// Variable references render as nothing; use a [`Template`] to expand
    /// them.
    ///
    /// # Errors
    ///
    /// [`DecorError::Lex`] if `text` is not valid notation.
    pub fn format(&self, text: &str) -> Result<String> {
        let series = parse(text)?;
        debug!(tokens = series.len(), "formatting");
        Ok(self.codes.render(&series))
    }

    /// Parses `text` into a reusable template.
    ///
    /// # Errors
    ///
    /// [`DecorError::Lex`] if `text` is not valid notation.
    pub fn template(&self, text: &str) -> Result<Template> {
        let series = parse(text)?;
        Ok(Template::new(series, self.clone()))
    }

    /// Rewrites `series` so that attributes survive the terminal's resets and
    /// redundant codes are dropped.
    pub fn optimize(&self, series: Series) -> Series {
        Optimizer::new(&self.codes, series).run()
    }

    /// Concatenates the codes and text of every token in `series`.
    pub fn render(&self, series: &Series) -> String {
        self.codes.render(series)
    }
}
