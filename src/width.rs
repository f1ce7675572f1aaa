//! Terminal width resolution.

use terminal_size::{terminal_size, Width};

/// Fallback column count when no terminal is attached.
pub const DEFAULT_WIDTH: usize = 80;

/// Use `width` when given, otherwise the current terminal's column count,
/// otherwise [`DEFAULT_WIDTH`].
pub fn resolve_width(width: Option<usize>) -> usize {
    width.unwrap_or_else(detected_width)
}

fn detected_width() -> usize {
    match terminal_size() {
        Some((Width(columns), _)) => columns as usize,
        None => DEFAULT_WIDTH,
    }
}
