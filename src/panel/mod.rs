//! Bordered panels for plain text and key-value content.
//!
//! A [`Panel`] is built once from its content and configuration, with all
//! validation happening up front; the resulting value renders through
//! `Display` without any failure path. Plain-text and key-value layouts
//! are two construction strategies over the same panel type
//! ([`Panel::text`] and [`Panel::params`]).

mod border;
mod wrap;

pub use border::Border;

use std::fmt;

use crate::error::Error;
use crate::style::{Align, Style, RESET};
use crate::width::resolve_width;

/// Replacement token for masked values.
const MASK: &str = "*****";

/// Configuration shared by every panel variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Total panel width; resolved from the terminal when `None`.
    pub width: Option<usize>,
    /// Title shown in the header line.
    pub title: String,
    pub title_align: Align,
    pub title_style: Style,
    /// Subtitle shown in the footer line.
    pub subtitle: String,
    pub subtitle_align: Align,
    pub subtitle_style: Style,
    pub border: Border,
    pub border_style: Style,
}

impl Default for PanelConfig {
    fn default() -> PanelConfig {
        PanelConfig {
            width: None,
            title: String::new(),
            title_align: Align::Center,
            title_style: Style::none(),
            subtitle: String::new(),
            subtitle_align: Align::Center,
            subtitle_style: Style::none(),
            border: Border::ROUNDED,
            border_style: Style::none(),
        }
    }
}

/// Extra knobs for key-value panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsConfig {
    pub panel: PanelConfig,
    /// Keys whose values are replaced with `*****`.
    pub hidden: Vec<String>,
    /// Separator between the key column and the values.
    pub separator: String,
}

impl Default for ParamsConfig {
    fn default() -> ParamsConfig {
        ParamsConfig {
            panel: PanelConfig::default(),
            hidden: Vec::new(),
            separator: " = ".to_string(),
        }
    }
}

/// A rendered panel: header line, content block, footer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    header: String,
    content: String,
    footer: String,
}

impl Panel {
    /// Build a panel around multi-line plain text.
    ///
    /// Each source line is word-wrapped to the panel's inner width; blank
    /// lines are preserved as-is. In borderless-sides mode (see
    /// [`Border`]) lines pass through verbatim.
    pub fn text(content: &str, config: &PanelConfig) -> Result<Panel, Error> {
        let width = resolve_width(config.width);
        let inner = inner_width(width)?;
        let content = text_content(content, inner, config);
        Panel::assemble(content, width, config)
    }

    /// Build a panel around ordered key-value pairs.
    ///
    /// Keys are padded to a shared column so separators align; rows that
    /// overflow the inner width wrap with a hanging indent under the
    /// value column. Keys listed in [`ParamsConfig::hidden`] render as
    /// `*****` regardless of their value.
    pub fn params<K, V, I>(pairs: I, config: &ParamsConfig) -> Result<Panel, Error>
    where
        K: fmt::Display,
        V: fmt::Display,
        I: IntoIterator<Item = (K, V)>,
    {
        let width = resolve_width(config.panel.width);
        let inner = inner_width(width)?;
        let rows: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        let content = params_content(&rows, width, inner, config)?;
        Panel::assemble(content, width, &config.panel)
    }

    fn assemble(content: String, width: usize, config: &PanelConfig) -> Result<Panel, Error> {
        let border = &config.border;
        let header = compose_header(
            &config.title,
            width,
            config.title_align,
            &config.title_style,
            border.top_left,
            border.horizontal,
            border.top_right,
            &config.border_style,
        )?;
        let footer = compose_header(
            &config.subtitle,
            width,
            config.subtitle_align,
            &config.subtitle_style,
            border.bottom_left,
            border.horizontal,
            border.bottom_right,
            &config.border_style,
        )?;
        tracing::debug!(width, "panel assembled");
        Ok(Panel {
            header,
            content,
            footer,
        })
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.header, self.content, self.footer)
    }
}

/// Width available to content between the side glyphs and their margins.
fn inner_width(total: usize) -> Result<usize, Error> {
    if total <= 4 {
        return Err(Error::InvalidWidth { width: total });
    }
    Ok(total - 4)
}

/// Compose one complete header or footer line.
///
/// The line is `left` + fill/title + `right`, wrapped in the border style
/// when one is set. `width` is the total panel width; the area between
/// the corner glyphs is `width - 2`.
#[allow(clippy::too_many_arguments)]
fn compose_header(
    title: &str,
    width: usize,
    align: Align,
    title_style: &Style,
    left: char,
    fill: char,
    right: char,
    border_style: &Style,
) -> Result<String, Error> {
    let inner = width.checked_sub(2).ok_or(Error::InvalidWidth { width })?;
    let body = fill_header(title, inner, align, title_style, fill, border_style).ok_or_else(
        || Error::TitleTooWide {
            title: title.to_string(),
            width,
        },
    )?;

    let mut line = String::new();
    line.push_str(&border_style.escape());
    line.push(left);
    line.push_str(&body);
    line.push(right);
    if !border_style.is_none() {
        line.push_str(RESET);
    }
    Ok(line)
}

/// Fill the area between the corner glyphs.
///
/// Returns `None` when the title block cannot fit: the block needs
/// `len(title) + 2` columns, plus one adjacent fill glyph for left and
/// right alignment.
fn fill_header(
    title: &str,
    inner: usize,
    align: Align,
    title_style: &Style,
    fill: char,
    border_style: &Style,
) -> Option<String> {
    if title.is_empty() {
        return Some(fill_run(fill, inner));
    }

    let block = title_block(title, title_style, border_style);
    let block_width = title.chars().count() + 2;
    let pad = inner.checked_sub(block_width)?;

    let line = match align {
        Align::Left => {
            if pad == 0 {
                return None;
            }
            format!("{fill}{block}{}", fill_run(fill, pad - 1))
        }
        // Odd padding puts the extra fill glyph on the right.
        Align::Center => format!(
            "{}{block}{}",
            fill_run(fill, pad / 2),
            fill_run(fill, pad - pad / 2)
        ),
        Align::Right => {
            if pad == 0 {
                return None;
            }
            format!("{}{block}{fill}", fill_run(fill, pad - 1))
        }
    };
    Some(line)
}

/// The title with its one-space margins and style transitions.
///
/// A reset leads the block when a border style is active (so the title is
/// not painted in border colors), and the border style is re-opened after
/// the trailing margin for the fill glyphs that follow.
fn title_block(title: &str, title_style: &Style, border_style: &Style) -> String {
    let mut block = String::new();
    if !border_style.is_none() {
        block.push_str(RESET);
    }
    block.push(' ');
    block.push_str(&title_style.apply(title));
    block.push(' ');
    block.push_str(&border_style.escape());
    block
}

fn fill_run(fill: char, count: usize) -> String {
    fill.to_string().repeat(count)
}

/// Pad one content line between two side glyphs.
///
/// Layout: side glyph, one-space margin, indent, line padded to the inner
/// width minus the indent, one-space margin, side glyph.
fn fill_line(line: &str, inner: usize, side: char, border_style: &Style, indent: &str) -> String {
    let glyph = styled_glyph(side, border_style);
    let content_width = inner.saturating_sub(indent.chars().count());
    format!("{glyph} {indent}{} {glyph}", pad_right(line, content_width))
}

fn styled_glyph(glyph: char, style: &Style) -> String {
    if style.is_none() {
        glyph.to_string()
    } else {
        format!("{}{glyph}{RESET}", style.escape())
    }
}

fn pad_right(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        line.to_string()
    } else {
        format!("{line}{}", " ".repeat(width - len))
    }
}

/// Reflow plain text into filled panel lines.
fn text_content(content: &str, inner: usize, config: &PanelConfig) -> String {
    let Some(side) = config.border.vertical else {
        // Borderless sides: no wrapping, no padding, no decoration.
        return content.lines().collect::<Vec<_>>().join("\n");
    };

    let mut lines = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(wrap::wrap(trimmed, inner));
    }
    lines
        .iter()
        .map(|line| fill_line(line, inner, side, &config.border_style, ""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lay out key-value rows with an aligned separator column.
fn params_content(
    rows: &[(String, String)],
    width: usize,
    inner: usize,
    config: &ParamsConfig,
) -> Result<String, Error> {
    let separator = &config.separator;
    let separator_len = separator.chars().count();
    let max_key = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);
    // Continuation lines align under the value column.
    let indent = " ".repeat(max_key + separator_len);

    let mut lines = Vec::new();
    for (key, value) in rows {
        let shown = if config.hidden.iter().any(|hidden| hidden == key) {
            MASK
        } else {
            value.as_str()
        };
        let row = format!("{}{separator}{shown}", pad_right(key, max_key));

        let Some(side) = config.panel.border.vertical else {
            lines.push(format!("  {row}"));
            continue;
        };

        if row.chars().count() <= inner {
            lines.push(fill_line(&row, inner, side, &config.panel.border_style, ""));
        } else {
            lines.extend(wrap_row(
                &row,
                inner,
                max_key + separator_len,
                side,
                &config.panel.border_style,
                &indent,
                width,
            )?);
        }
    }
    Ok(lines.join("\n"))
}

/// Split an overflowing row into a head segment and wrapped tail lines.
///
/// The head is cut at exactly the inner width, even mid-word; only the
/// tail is word-wrapped, into the space right of the value column.
fn wrap_row(
    row: &str,
    inner: usize,
    key_width: usize,
    side: char,
    border_style: &Style,
    indent: &str,
    width: usize,
) -> Result<Vec<String>, Error> {
    let inside = inner
        .checked_sub(key_width)
        .filter(|inside| *inside > 0)
        .ok_or(Error::KeyColumnTooWide { key_width, width })?;

    let head: String = row.chars().take(inner).collect();
    let tail: String = row.chars().skip(inner).collect();

    let mut lines = vec![fill_line(&head, inner, side, border_style, "")];
    for part in wrap::wrap(&tail, inside) {
        lines.push(fill_line(&part, inner, side, border_style, indent));
    }
    Ok(lines)
}
