//! Error types for style and panel construction.
//!
//! Every variant is raised at construction time. Once a panel or style
//! value exists, rendering it cannot fail.

use thiserror::Error;

/// Errors from building styles, borders, and panels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Unknown symbolic style or color name.
    #[error("invalid style value '{value}'; available values: {available}")]
    InvalidStyle { value: String, available: String },

    /// Bare `default` exists in both the color and the style tables.
    #[error(
        "style name 'default' is ambiguous: it exists in both the color and the style table; \
         use 'default_color' for the color or 'default_style' for the style"
    )]
    AmbiguousDefault,

    /// Border specification with the wrong number of glyphs.
    #[error("invalid length for border '{spec}': expected 5 or 6 characters, got {len}")]
    InvalidBorder { spec: String, len: usize },

    /// Panel width too small to hold borders and margins.
    #[error("invalid width {width}: a panel needs at least 5 columns")]
    InvalidWidth { width: usize },

    /// Title block (title plus its margins) does not fit the header line.
    #[error("title '{title}' does not fit a panel {width} columns wide")]
    TitleTooWide { title: String, width: usize },

    /// Key column and separator leave no room for wrapped value lines.
    #[error(
        "key column of {key_width} columns leaves no room for values in a panel \
         {width} columns wide"
    )]
    KeyColumnTooWide { key_width: usize, width: usize },

    /// Content does not have the shape the panel expects.
    #[error("invalid content: expected {expected}, got {found}")]
    InvalidContentType {
        expected: &'static str,
        found: String,
    },
}
