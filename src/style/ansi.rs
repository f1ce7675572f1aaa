//! ANSI SGR code tables.
//!
//! Two independent name tables, one for the standard foreground colors and
//! one for text styles. Both expose a `default` entry, which is why the
//! bare name `default` cannot be resolved without qualification (see
//! [`crate::style::Style::parse`]).

/// Control Sequence Introducer.
pub(crate) const CSI: &str = "\x1b[";

/// Select Graphic Rendition suffix.
pub(crate) const SGR: char = 'm';

/// Standard foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// The terminal's default foreground (SGR 39).
    Default,
    Gray,
}

impl Color {
    /// Names accepted by [`Color::from_name`], in table order.
    pub const NAMES: &'static [&'static str] = &[
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "default", "gray",
    ];

    /// The SGR code for this color.
    pub const fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Default => 39,
            Color::Gray => 90,
        }
    }

    /// Look up a color by its symbolic name.
    pub fn from_name(name: &str) -> Option<Color> {
        match name {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "default" => Some(Color::Default),
            "gray" => Some(Color::Gray),
            _ => None,
        }
    }
}

/// Text style attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Clears all colors and styles (SGR 0).
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    CrossedOut,
    /// Normal intensity (SGR 22), the style table's `default` entry.
    Default,
}

impl FontStyle {
    /// Names accepted by [`FontStyle::from_name`], in table order.
    pub const NAMES: &'static [&'static str] = &[
        "reset",
        "bold",
        "dim",
        "italic",
        "underline",
        "crossed_out",
        "default",
    ];

    /// The SGR code for this style.
    pub const fn code(self) -> u8 {
        match self {
            FontStyle::Reset => 0,
            FontStyle::Bold => 1,
            FontStyle::Dim => 2,
            FontStyle::Italic => 3,
            FontStyle::Underline => 4,
            FontStyle::CrossedOut => 9,
            FontStyle::Default => 22,
        }
    }

    /// Look up a style by its symbolic name.
    pub fn from_name(name: &str) -> Option<FontStyle> {
        match name {
            "reset" => Some(FontStyle::Reset),
            "bold" => Some(FontStyle::Bold),
            "dim" => Some(FontStyle::Dim),
            "italic" => Some(FontStyle::Italic),
            "underline" => Some(FontStyle::Underline),
            "crossed_out" => Some(FontStyle::CrossedOut),
            "default" => Some(FontStyle::Default),
            _ => None,
        }
    }
}
