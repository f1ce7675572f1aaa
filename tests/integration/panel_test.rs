//! Whole-panel rendering against known-good output.

use tpanel::{Align, Border, Error, Panel, PanelConfig};

fn plain(width: usize) -> PanelConfig {
    PanelConfig {
        width: Some(width),
        ..PanelConfig::default()
    }
}

#[test]
fn short_content_renders_three_lines() {
    let panel = Panel::text("test", &plain(20)).unwrap();
    insta::assert_snapshot!(panel, @r"
    ╭──────────────────╮
    │ test             │
    ╰──────────────────╯
    ");
}

#[test]
fn long_content_wraps_at_word_boundaries() {
    let panel = Panel::text("test looooong text", &plain(20)).unwrap();
    insta::assert_snapshot!(panel, @r"
    ╭──────────────────╮
    │ test looooong    │
    │ text             │
    ╰──────────────────╯
    ");
}

#[test]
fn left_aligned_title_sits_after_one_fill_glyph() {
    let config = PanelConfig {
        title: "title1".to_string(),
        title_align: Align::Left,
        ..plain(20)
    };
    let panel = Panel::text("test", &config).unwrap();
    let rendered = panel.to_string();
    assert_eq!(rendered.lines().next().unwrap(), "╭─ title1 ─────────╮");
}

#[test]
fn centered_title_puts_odd_padding_on_the_right() {
    let config = PanelConfig {
        title: "title1".to_string(),
        ..plain(21)
    };
    let panel = Panel::text("test", &config).unwrap();
    // Inner width 19, title block 8, padding 11: five fills left, six
    // fills right.
    assert_eq!(
        panel.to_string().lines().next().unwrap(),
        "╭───── title1 ──────╮"
    );
}

#[test]
fn right_aligned_subtitle_ends_before_one_fill_glyph() {
    let config = PanelConfig {
        subtitle: "done".to_string(),
        subtitle_align: Align::Right,
        ..plain(20)
    };
    let panel = Panel::text("test", &config).unwrap();
    assert_eq!(
        panel.to_string().lines().last().unwrap(),
        "╰─────────── done ─╯"
    );
}

#[test]
fn multi_line_content_keeps_blank_separators() {
    let text = "first paragraph\n\nsecond paragraph";
    let panel = Panel::text(text, &plain(22)).unwrap();
    insta::assert_snapshot!(panel, @r"
    ╭────────────────────╮
    │ first paragraph    │
    │                    │
    │ second paragraph   │
    ╰────────────────────╯
    ");
}

#[test]
fn alternate_border_sets_render() {
    let config = PanelConfig {
        border: Border::DOUBLE,
        ..plain(12)
    };
    let panel = Panel::text("test", &config).unwrap();
    insta::assert_snapshot!(panel, @r"
    ╔══════════╗
    ║ test     ║
    ╚══════════╝
    ");
}

#[test]
fn width_too_small_fails_construction() {
    for width in [0, 3, 4] {
        assert_eq!(
            Panel::text("test", &plain(width)),
            Err(Error::InvalidWidth { width })
        );
    }
    assert!(Panel::text("test", &plain(5)).is_ok());
}

#[test]
fn every_line_matches_the_configured_width() {
    let text = "a few words that will wrap\nand a second line\n\nshort";
    for width in [12, 20, 37, 80] {
        let panel = Panel::text(text, &plain(width)).unwrap();
        for line in panel.to_string().lines() {
            assert_eq!(line.chars().count(), width, "width {width}: {line:?}");
        }
    }
}
