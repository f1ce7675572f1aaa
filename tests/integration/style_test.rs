//! Styled rendering: escape placement and visible-width accounting.

use tpanel::{Align, Color, FontStyle, Panel, PanelConfig, Style};

/// Strip `ESC[...m` runs, leaving only visible characters.
fn visible(line: &str) -> String {
    let mut out = String::new();
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[test]
fn equivalent_styles_render_identical_escapes() {
    let parsed = Style::parse("bold red").unwrap();
    let built = Style::from(FontStyle::Bold).and(Color::Red);
    assert_eq!(parsed, built);
    assert_eq!(parsed.escape(), built.escape());
    assert_eq!(parsed.escape(), "\x1b[1;31m");
}

#[test]
fn unstyled_panels_contain_no_escape_bytes() {
    let config = PanelConfig {
        width: Some(20),
        title: "plain".to_string(),
        ..PanelConfig::default()
    };
    let panel = Panel::text("test", &config).unwrap();
    assert!(!panel.to_string().contains('\x1b'));
}

#[test]
fn styled_header_brackets_the_title() {
    let config = PanelConfig {
        width: Some(20),
        title: "title1".to_string(),
        title_align: Align::Left,
        border_style: Style::parse("red").unwrap(),
        ..PanelConfig::default()
    };
    let panel = Panel::text("test", &config).unwrap();
    let header = panel.to_string().lines().next().unwrap().to_string();
    assert_eq!(
        header,
        "\x1b[31m╭─\x1b[0m title1 \x1b[31m─────────╮\x1b[0m"
    );
}

#[test]
fn styled_title_gets_its_own_reset() {
    let config = PanelConfig {
        width: Some(20),
        title: "hi".to_string(),
        title_style: Style::parse("bold").unwrap(),
        ..PanelConfig::default()
    };
    let panel = Panel::text("test", &config).unwrap();
    let header = panel.to_string().lines().next().unwrap().to_string();
    assert!(header.contains("\x1b[1mhi\x1b[0m"));
}

#[test]
fn escapes_never_change_visible_width() {
    let config = PanelConfig {
        width: Some(24),
        title: "Params".to_string(),
        title_style: Style::parse("bold").unwrap(),
        subtitle: "end".to_string(),
        border_style: Style::from(Color::Gray),
        ..PanelConfig::default()
    };
    let panel = Panel::text("some wrapped content that spans lines", &config).unwrap();
    for line in panel.to_string().lines() {
        assert_eq!(visible(line).chars().count(), 24, "line {line:?}");
    }
}

#[test]
fn styled_side_glyphs_reset_before_content() {
    let config = PanelConfig {
        width: Some(20),
        border_style: Style::from(Color::Gray),
        ..PanelConfig::default()
    };
    let panel = Panel::text("test", &config).unwrap();
    let rendered = panel.to_string();
    let content = rendered.lines().nth(1).unwrap();
    assert_eq!(
        content,
        "\x1b[90m│\x1b[0m test             \x1b[90m│\x1b[0m"
    );
}
