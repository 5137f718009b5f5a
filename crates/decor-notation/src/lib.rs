//! Token model and lexer for decor notation.
//!
//! Decor notation annotates text with terminal display attributes using two
//! sigils: `@` for attributes and `$` for template variables. This crate
//! turns notation into an ordered [`Series`] of [`Token`]s; the `decor`
//! crate maps those tokens to a terminal's control sequences.
//!
//! # Example
//!
//! ```rust
//! use decor_notation::{parse, strip, Kind, Token};
//!
//! let series = parse("@B@F{44}user@f@b@@host").unwrap();
//! let kinds: Vec<Kind> = series.iter().map(Token::kind).collect();
//! assert_eq!(
//!     kinds,
//!     [Kind::Bold, Kind::ForegroundColor, Kind::Text, Kind::ForegroundColor, Kind::Bold, Kind::Text]
//! );
//!
//! assert_eq!(strip("@B@F{44}user@f@b@@host").unwrap(), "user@host");
//! ```
//!
//! # Notation
//!
//! ```text
//! @B (@b)   start (stop) bold
//! @I (@i)   start (stop) italics
//! @U (@u)   start (stop) underline
//! @F (@f)   start (stop) a foreground color: @F{Orchid1}, @F(213), @F+213+
//! @K (@k)   start (stop) a background color
//! ${name}   template variable reference
//! @@ $$     literal '@' and '$'
//! ```
//!
//! Color arguments are wrapped in any of `{}`, `()`, `[]` or `<>`, or in two
//! copies of any other character.

mod error;
mod lexer;
mod series;
mod token;

pub use error::{LexError, Result};
pub use lexer::{parse, strip};
pub use series::Series;
pub use token::{reset_ids, Action, Kind, Token};
