//! Terminal capability profiles.
//!
//! A decorator never talks to a terminal database directly. It asks a
//! [`Capabilities`] implementation for the literal control sequences of one
//! terminal type and caches them in a code table. [`TermProfile`] is the
//! implementation shipped with the crate: a handful of built-in profiles for
//! common terminal types, plus YAML loading for anything else.
//!
//! # Profile files
//!
//! ```yaml
//! name: xterm-kitty
//! aliases: [kitty]
//! reset: "\e(B\e[m"
//! bold: "\e[1m"
//! italic: "\e[3m"
//! exit_italic: "\e[23m"
//! underline: "\e[4m"
//! exit_underline: "\e[24m"
//! palette: xterm
//! ```
//!
//! `exit_bold` defaults to `reset`, since most terminals have no sequence
//! that ends bold alone. Missing sequences default to the empty string,
//! which renders nothing. YAML double quoted strings accept `\e` for escape.
//!
//! The `palette` selects how color numbers are encoded:
//!
//! | palette   | 0-7         | 8-15             | 16-255          |
//! |-----------|-------------|------------------|-----------------|
//! | `xterm`   | `ESC[3Nm`   | `ESC[9(N-8)m`    | `ESC[38;5;Nm`   |
//! | `indexed` | `ESC[38;5;Nm` for every color                  |||
//! | `none`    | no color output                                |||
//!
//! Background codes use `4`, `10` and `48` in place of `3`, `9` and `38`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DecorError, Result};

/// Attributes with their own enter and exit sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Bold,
    Italic,
    Underline,
}

/// The control sequences a terminal type uses for display attributes.
///
/// Implement this to drive a [`Decorator`](crate::Decorator) from a terminal
/// database of your choice. Every method is called once per code while the
/// decorator builds its table, never while formatting.
pub trait Capabilities {
    /// Sequence that turns every attribute off.
    fn reset(&self) -> String;

    /// Sequence that turns `attr` on.
    fn enter(&self, attr: Attr) -> String;

    /// Sequence that turns `attr` off.
    fn exit(&self, attr: Attr) -> String;

    /// Sequence that selects foreground color `color`.
    fn set_foreground(&self, color: u8) -> String;

    /// Sequence that selects background color `color`.
    fn set_background(&self, color: u8) -> String;
}

/// How a profile encodes color numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Classic SGR codes for the first 16 colors, 256-color codes after.
    #[default]
    Xterm,
    /// 256-color codes for every color.
    Indexed,
    /// No color support.
    #[serde(rename = "none")]
    Monochrome,
}

impl Palette {
    fn foreground(self, color: u8) -> String {
        match (self, color) {
            (Palette::Monochrome, _) => String::new(),
            (Palette::Xterm, 0..=7) => format!("\x1b[3{color}m"),
            (Palette::Xterm, 8..=15) => format!("\x1b[9{}m", color - 8),
            _ => format!("\x1b[38;5;{color}m"),
        }
    }

    fn background(self, color: u8) -> String {
        match (self, color) {
            (Palette::Monochrome, _) => String::new(),
            (Palette::Xterm, 0..=7) => format!("\x1b[4{color}m"),
            (Palette::Xterm, 8..=15) => format!("\x1b[10{}m", color - 8),
            _ => format!("\x1b[48;5;{color}m"),
        }
    }
}

/// Control sequences for one terminal type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermProfile {
    /// Terminal type, as found in `TERM`.
    pub name: String,
    /// Other `TERM` values this profile answers to.
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub reset: String,
    #[serde(default)]
    pub bold: String,
    /// Sequence that ends bold. Defaults to `reset`.
    #[serde(default)]
    pub exit_bold: Option<String>,
    #[serde(default)]
    pub italic: String,
    #[serde(default)]
    pub exit_italic: String,
    #[serde(default)]
    pub underline: String,
    #[serde(default)]
    pub exit_underline: String,
    #[serde(default)]
    pub palette: Palette,
}

const SGR0: &str = "\x1b(B\x1b[m";

impl TermProfile {
    /// The `xterm-256color` profile.
    pub fn xterm_256color() -> Self {
        Self {
            name: "xterm-256color".into(),
            aliases: Vec::new(),
            reset: SGR0.into(),
            bold: "\x1b[1m".into(),
            exit_bold: None,
            italic: "\x1b[3m".into(),
            exit_italic: "\x1b[23m".into(),
            underline: "\x1b[4m".into(),
            exit_underline: "\x1b[24m".into(),
            palette: Palette::Xterm,
        }
    }

    /// The `tmux-256color` profile.
    pub fn tmux_256color() -> Self {
        Self {
            name: "tmux-256color".into(),
            ..Self::xterm_256color()
        }
    }

    /// The `screen-256color` profile. Screen has no italics.
    pub fn screen_256color() -> Self {
        Self {
            name: "screen-256color".into(),
            reset: "\x1b[m\x0f".into(),
            italic: String::new(),
            exit_italic: String::new(),
            ..Self::xterm_256color()
        }
    }

    /// A profile that renders no control sequences at all.
    pub fn dumb() -> Self {
        Self {
            name: "dumb".into(),
            aliases: Vec::new(),
            reset: String::new(),
            bold: String::new(),
            exit_bold: None,
            italic: String::new(),
            exit_italic: String::new(),
            underline: String::new(),
            exit_underline: String::new(),
            palette: Palette::Monochrome,
        }
    }

    /// Every built-in profile.
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::xterm_256color(),
            Self::tmux_256color(),
            Self::screen_256color(),
            Self::dumb(),
        ]
    }

    /// Looks up a built-in profile by terminal type.
    pub fn builtin(term: &str) -> Option<Self> {
        Self::builtins().into_iter().find(|p| p.matches(term))
    }

    /// True if `term` is this profile's name or one of its aliases.
    pub fn matches(&self, term: &str) -> bool {
        self.name == term || self.aliases.iter().any(|a| a == term)
    }

    /// Parses a profile from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`DecorError::Profile`] if the YAML is malformed or lacks a
    /// `name`.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| DecorError::Profile {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads a profile from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`DecorError::Io`] if the file can't be read and
    /// [`DecorError::Profile`] if it doesn't parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let profile: Self = serde_yaml::from_str(&content).map_err(|e| DecorError::Profile {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), term = %profile.name, "loaded terminal profile");
        Ok(profile)
    }
}

impl Capabilities for TermProfile {
    fn reset(&self) -> String {
        self.reset.clone()
    }

    fn enter(&self, attr: Attr) -> String {
        match attr {
            Attr::Bold => self.bold.clone(),
            Attr::Italic => self.italic.clone(),
            Attr::Underline => self.underline.clone(),
        }
    }

    fn exit(&self, attr: Attr) -> String {
        match attr {
            Attr::Bold => self.exit_bold.clone().unwrap_or_else(|| self.reset.clone()),
            Attr::Italic => self.exit_italic.clone(),
            Attr::Underline => self.exit_underline.clone(),
        }
    }

    fn set_foreground(&self, color: u8) -> String {
        self.palette.foreground(color)
    }

    fn set_background(&self, color: u8) -> String {
        self.palette.background(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod builtins {
        use super::*;

        #[test]
        fn xterm_codes() {
            let xterm = TermProfile::xterm_256color();
            assert_eq!(xterm.reset(), "\x1b(B\x1b[m");
            assert_eq!(xterm.enter(Attr::Italic), "\x1b[3m");
            assert_eq!(xterm.exit(Attr::Italic), "\x1b[23m");
            assert_eq!(xterm.enter(Attr::Underline), "\x1b[4m");
            assert_eq!(xterm.exit(Attr::Underline), "\x1b[24m");
            assert_eq!(xterm.enter(Attr::Bold), "\x1b[1m");
        }

        #[test]
        fn bold_exit_defaults_to_reset() {
            let xterm = TermProfile::xterm_256color();
            assert_eq!(xterm.exit(Attr::Bold), xterm.reset());

            let custom = TermProfile {
                exit_bold: Some("\x1b[22m".into()),
                ..TermProfile::xterm_256color()
            };
            assert_eq!(custom.exit(Attr::Bold), "\x1b[22m");
        }

        #[test]
        fn lookup_by_name() {
            assert_eq!(
                TermProfile::builtin("screen-256color").map(|p| p.reset),
                Some("\x1b[m\x0f".to_string())
            );
            assert!(TermProfile::builtin("dumb").is_some());
            assert!(TermProfile::builtin("vt52").is_none());
        }

        #[test]
        fn dumb_renders_nothing() {
            let dumb = TermProfile::dumb();
            assert_eq!(dumb.set_foreground(59), "");
            assert_eq!(dumb.set_background(1), "");
            assert_eq!(dumb.exit(Attr::Bold), "");
        }
    }

    mod palette {
        use super::*;

        #[test]
        fn xterm_encoding() {
            let p = Palette::Xterm;
            assert_eq!(p.foreground(1), "\x1b[31m");
            assert_eq!(p.foreground(9), "\x1b[91m");
            assert_eq!(p.foreground(59), "\x1b[38;5;59m");
            assert_eq!(p.background(0), "\x1b[40m");
            assert_eq!(p.background(15), "\x1b[107m");
            assert_eq!(p.background(214), "\x1b[48;5;214m");
        }

        #[test]
        fn indexed_encoding() {
            let p = Palette::Indexed;
            assert_eq!(p.foreground(1), "\x1b[38;5;1m");
            assert_eq!(p.background(9), "\x1b[48;5;9m");
        }
    }

    mod yaml {
        use super::*;

        #[test]
        fn parses_full_profile() {
            let profile = TermProfile::from_yaml(
                r#"
name: xterm-kitty
aliases: [kitty]
reset: "\e[0m"
bold: "\e[1m"
exit_bold: "\e[22m"
italic: "\e[3m"
exit_italic: "\e[23m"
palette: indexed
"#,
            )
            .unwrap();

            assert_eq!(profile.name, "xterm-kitty");
            assert!(profile.matches("kitty"));
            assert_eq!(profile.reset(), "\x1b[0m");
            assert_eq!(profile.exit(Attr::Bold), "\x1b[22m");
            assert_eq!(profile.enter(Attr::Underline), "");
            assert_eq!(profile.set_foreground(3), "\x1b[38;5;3m");
        }

        #[test]
        fn defaults() {
            let profile = TermProfile::from_yaml("name: plain").unwrap();
            assert_eq!(profile.palette, Palette::Xterm);
            assert!(profile.aliases.is_empty());
            assert_eq!(profile.exit(Attr::Bold), "");
        }

        #[test]
        fn monochrome_palette_is_spelled_none() {
            let profile = TermProfile::from_yaml("name: mono\npalette: none").unwrap();
            assert_eq!(profile.palette, Palette::Monochrome);
        }

        #[test]
        fn missing_name_is_an_error() {
            let err = TermProfile::from_yaml("reset: x").unwrap_err();
            assert!(matches!(err, DecorError::Profile { path: None, .. }));
        }
    }
}
