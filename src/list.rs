//! Titled one-line lists.

use std::fmt;

/// Separator between the title and the joined items.
const TITLE_SEPARATOR: &str = ": ";

/// A list rendered on a single line under a counted title, e.g.
/// `Packages (3): ruff@1.0.0  pytest@1.2.3  mkdocs@3.2.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitledList {
    title: String,
    content: String,
}

impl TitledList {
    /// Build a titled list; the title gains a `({count})` suffix and the
    /// items are stringified and joined with `separator`.
    pub fn new<T, I>(items: I, title: &str, separator: &str) -> TitledList
    where
        T: fmt::Display,
        I: IntoIterator<Item = T>,
    {
        let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
        TitledList {
            title: format!("{title} ({})", items.len()),
            content: items.join(separator),
        }
    }
}

impl fmt::Display for TitledList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.content.is_empty() {
            f.write_str(&self.title)
        } else {
            write!(f, "{}{TITLE_SEPARATOR}{}", self.title, self.content)
        }
    }
}
