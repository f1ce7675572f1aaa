//! Border glyph sets.

use std::str::FromStr;

use crate::error::Error;

/// The glyphs framing a panel: four corners, the horizontal fill used in
/// header and footer lines, and the vertical fill for the sides.
///
/// `vertical` is `None` in borderless-sides mode: content is emitted
/// without side glyphs, padding, or wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: Option<char>,
}

impl Border {
    /// Rounded box-drawing corners (the default).
    pub const ROUNDED: Border = Border::new('╭', '╮', '╰', '╯', '─', Some('│'));

    /// Square box-drawing corners.
    pub const SQUARE: Border = Border::new('┌', '┐', '└', '┘', '─', Some('│'));

    /// Double-line box drawing.
    pub const DOUBLE: Border = Border::new('╔', '╗', '╚', '╝', '═', Some('║'));

    /// Plain ASCII frame.
    pub const ASCII: Border = Border::new('+', '+', '+', '+', '-', Some('|'));

    pub const fn new(
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: Option<char>,
    ) -> Border {
        Border {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }

    /// Parse a border from its glyph string.
    ///
    /// Position 0-3 are the corners (top-left, top-right, bottom-left,
    /// bottom-right), position 4 the horizontal fill, position 5 the
    /// vertical fill. A 5-glyph spec selects borderless-sides mode.
    pub fn parse(spec: &str) -> Result<Border, Error> {
        let glyphs: Vec<char> = spec.chars().collect();
        match glyphs.len() {
            5 | 6 => Ok(Border::new(
                glyphs[0],
                glyphs[1],
                glyphs[2],
                glyphs[3],
                glyphs[4],
                glyphs.get(5).copied(),
            )),
            len => Err(Error::InvalidBorder {
                spec: spec.to_string(),
                len,
            }),
        }
    }
}

impl Default for Border {
    fn default() -> Border {
        Border::ROUNDED
    }
}

impl FromStr for Border {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Border, Error> {
        Border::parse(spec)
    }
}
