//! ANSI style values and title alignment.
//!
//! A [`Style`] is an immutable sequence of SGR codes that renders to a
//! single combined escape sequence (`ESC[1;31m`, not one escape per code -
//! terminals process one sequence faster than several). An empty style
//! renders to the empty string, so "no styling" produces no escape bytes
//! anywhere in the output.

pub mod ansi;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub use ansi::{Color, FontStyle};

use ansi::{CSI, SGR};

/// Escape sequence clearing all colors and styles.
pub const RESET: &str = "\x1b[0m";

/// Horizontal placement of a title within a header line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// An immutable sequence of SGR codes.
///
/// Values with the same code sequence compare equal and render
/// identically. The empty style is the identity: it renders to `""` and
/// [`Style::apply`] returns the text untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    codes: Vec<u8>,
}

impl Style {
    /// The empty style: no codes, no escape bytes.
    pub fn none() -> Style {
        Style { codes: Vec::new() }
    }

    /// Build a style from raw SGR codes.
    pub fn from_codes<I>(codes: I) -> Style
    where
        I: IntoIterator<Item = u8>,
    {
        Style {
            codes: codes.into_iter().collect(),
        }
    }

    /// Parse a space-separated list of symbolic names, e.g. `"bold red"`.
    ///
    /// Each name is resolved against the color table first, then the
    /// style table. The bare name `default` exists in both tables and is
    /// rejected as ambiguous; `default_color` and `default_style` pick
    /// one explicitly.
    pub fn parse(spec: &str) -> Result<Style, Error> {
        let mut codes = Vec::new();
        for name in spec.split(' ') {
            codes.push(resolve_name(name)?);
        }
        Ok(Style { codes })
    }

    /// Concatenate another style's codes onto this one.
    pub fn and<S: Into<Style>>(mut self, other: S) -> Style {
        self.codes.extend(other.into().codes);
        self
    }

    /// Whether this style carries no codes.
    pub fn is_none(&self) -> bool {
        self.codes.is_empty()
    }

    /// Render the combined escape sequence; empty style renders `""`.
    pub fn escape(&self) -> String {
        if self.codes.is_empty() {
            return String::new();
        }
        let joined = self
            .codes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";");
        format!("{CSI}{joined}{SGR}")
    }

    /// Wrap `text` in this style and a trailing reset.
    ///
    /// The empty style returns `text` unchanged - no stray reset.
    pub fn apply(&self, text: &str) -> String {
        if self.is_none() {
            text.to_string()
        } else {
            format!("{}{text}{RESET}", self.escape())
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Style, Error> {
        Style::parse(spec)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Style {
        Style::from_codes([color.code()])
    }
}

impl From<FontStyle> for Style {
    fn from(style: FontStyle) -> Style {
        Style::from_codes([style.code()])
    }
}

impl From<u8> for Style {
    fn from(code: u8) -> Style {
        Style::from_codes([code])
    }
}

fn resolve_name(name: &str) -> Result<u8, Error> {
    match name {
        "default" => Err(Error::AmbiguousDefault),
        "default_color" => Ok(Color::Default.code()),
        "default_style" => Ok(FontStyle::Default.code()),
        _ => Color::from_name(name)
            .map(Color::code)
            .or_else(|| FontStyle::from_name(name).map(FontStyle::code))
            .ok_or_else(|| Error::InvalidStyle {
                value: name.to_string(),
                available: available_names(),
            }),
    }
}

fn available_names() -> String {
    Color::NAMES
        .iter()
        .chain(FontStyle::NAMES.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
