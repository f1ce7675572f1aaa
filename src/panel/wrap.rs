//! Word wrapping for panel content.
//!
//! Lines break only at whitespace boundaries, whitespace runs are kept
//! verbatim (no collapsing, no dropping), hyphens are not break points,
//! and a word is split mid-token only when it alone exceeds the target
//! width. Each code point counts as one column.

/// Wrap `text` into lines of at most `width` columns.
///
/// A line already shorter than `width` comes back unchanged. The
/// concatenation of the returned lines always reconstructs `text`
/// exactly, since no whitespace is dropped.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    debug_assert!(width > 0, "wrap width must be positive");
    let mut chunks = split_chunks(text);
    chunks.reverse(); // consume from the back

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line = String::new();
        let mut line_len = 0usize;

        // Greedily take whole chunks while they fit.
        while let Some(chunk) = chunks.last() {
            let chunk_len = chunk.chars().count();
            if line_len + chunk_len > width {
                break;
            }
            line.push_str(chunk);
            line_len += chunk_len;
            chunks.pop();
        }

        // A chunk wider than the whole target is hard-broken at the
        // remaining width; the rest is pushed back for the next line.
        if let Some(chunk) = chunks.last_mut() {
            if chunk.chars().count() > width {
                let take = width - line_len;
                let head: String = chunk.chars().take(take).collect();
                let rest: String = chunk.chars().skip(take).collect();
                line.push_str(&head);
                *chunk = rest;
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Split into alternating runs of whitespace and non-whitespace.
fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_is_ws = None;
    for ch in text.chars() {
        let is_ws = ch.is_whitespace();
        if current_is_ws != Some(is_ws) && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(ch);
        current_is_ws = Some(is_ws);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
