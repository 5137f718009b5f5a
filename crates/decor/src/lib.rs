//! # Decor - Terminal Attribute Notation
//!
//! `decor` turns a compact inline notation into the control sequences of a
//! specific terminal type. Text is annotated with `@` designators for bold,
//! italics, underline and 256 colors, and with `${name}` references that are
//! filled in when a template is expanded.
//!
//! ## Core Concepts
//!
//! - [`Decorator`]: Control sequences for one terminal type, looked up once
//! - [`Template`]: Notation parsed once and expanded against many value maps
//! - [`TermProfile`]: Built-in or YAML-defined control sequences per terminal
//! - [`Capabilities`]: The seam for plugging in another terminal database
//! - [`color`]: The fixed table of 256 color names
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use decor::Decorator;
//!
//! let decorator = Decorator::load("xterm-256color").unwrap();
//!
//! // One-shot formatting
//! let text = decorator.format("@Bdone@b").unwrap();
//! assert_eq!(text, "\x1b[1mdone\x1b(B\x1b[m");
//!
//! // Templates resolve variables, whose values are notation too
//! let prompt = decorator.template("@F{Grey37}[${Glyph}]@f").unwrap();
//! let values = HashMap::from([("Glyph", "@F<Orange1>>@f")]);
//! assert_eq!(
//!     prompt.expand(&values),
//!     "\x1b[38;5;59m[\x1b[38;5;214m>\x1b[38;5;59m]\x1b(B\x1b[m"
//! );
//! ```
//!
//! ## Notation
//!
//! | Notation     | Meaning                                  |
//! |--------------|------------------------------------------|
//! | `@B` / `@b`  | start / stop bold                        |
//! | `@I` / `@i`  | start / stop italics                     |
//! | `@U` / `@u`  | start / stop underline                   |
//! | `@F{c}` `@f` | start / stop foreground color `c`        |
//! | `@K{c}` `@k` | start / stop background color `c`        |
//! | `${name}`    | variable reference                       |
//! | `@@` `$$`    | literal `@` and `$`                      |
//!
//! Colors are names from [`color::NAMES`] (case-insensitive) or numbers
//! 0-255, wrapped in `{}`, `()`, `[]`, `<>` or two copies of any other
//! character.
//!
//! ## Formatting vs. Expanding
//!
//! [`Decorator::format`] renders each token as written. Terminals reset
//! every attribute when a color or bold ends, so nested attributes are lost
//! after the inner one closes. [`Template::expand`] optimizes the series
//! first: attributes still open after a reset are re-entered and redundant
//! codes are dropped.
//!
//! ## Configuration
//!
//! [`Decorator::new`] reads `TERM`. [`Decorator::detect`] additionally asks
//! `console` whether colors are enabled (`CLICOLOR`, `CLICOLOR_FORCE`, and
//! whether stdout is a terminal) and falls back to a profile that emits no
//! codes.
//! Terminal types without a built-in profile can be described in YAML, see
//! [`TermProfile::from_file`].
//!
//! ## Logging
//!
//! Lexing, resolution and optimization emit `tracing` events at `debug` and
//! `trace` level. Nothing is logged unless a subscriber is installed.

pub mod color;

mod codes;
mod decorator;
mod error;
mod optimize;
mod profile;
mod resolve;
mod template;

pub use decorator::Decorator;
pub use error::{CircularReference, DecorError, Result};
pub use profile::{Attr, Capabilities, Palette, TermProfile};
pub use resolve::{resolve, Bindings};
pub use template::Template;

pub use decor_notation::{parse, reset_ids, strip, Action, Kind, LexError, Series, Token};
