//! Command-line interface definitions.
//!
//! Kept in the library so xtask can generate man pages and completions
//! from the same definitions the binary parses.

use clap::{Args, Parser, Subcommand};

use crate::style::Align;

/// Render styled terminal panels, parameter panels, and titled lists.
#[derive(Debug, Parser)]
#[command(name = "tpanel", version = crate::version(), about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a plain-text panel.
    Panel(PanelArgs),
    /// Render a key-value parameters panel.
    Params(ParamsArgs),
    /// Render a titled list.
    List(ListArgs),
    /// Inspect the user configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Framing flags shared by the panel subcommands.
#[derive(Debug, Args)]
pub struct FrameArgs {
    /// Total panel width (terminal width when omitted).
    #[arg(long)]
    pub width: Option<usize>,

    /// Title shown in the top border.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Title alignment.
    #[arg(long, value_enum, default_value = "center")]
    pub title_align: Align,

    /// Title style names, e.g. "bold red".
    #[arg(long)]
    pub title_style: Option<String>,

    /// Subtitle shown in the bottom border.
    #[arg(long, default_value = "")]
    pub subtitle: String,

    /// Subtitle alignment.
    #[arg(long, value_enum, default_value = "center")]
    pub subtitle_align: Align,

    /// Subtitle style names.
    #[arg(long)]
    pub subtitle_style: Option<String>,

    /// Border glyphs: four corners, horizontal fill, optional vertical
    /// fill (5 glyphs disable the side borders).
    #[arg(long)]
    pub border: Option<String>,

    /// Border style names, e.g. "gray".
    #[arg(long)]
    pub border_style: Option<String>,
}

#[derive(Debug, Args)]
pub struct PanelArgs {
    /// Panel body; read from stdin when absent.
    pub content: Option<String>,

    #[command(flatten)]
    pub frame: FrameArgs,
}

#[derive(Debug, Args)]
pub struct ParamsArgs {
    /// `key=value` pairs, displayed in the given order.
    pub pairs: Vec<String>,

    /// A JSON object to display instead of `key=value` pairs.
    #[arg(long, conflicts_with = "pairs")]
    pub json: Option<String>,

    /// Keys whose values are masked with `*****` (repeatable).
    #[arg(long)]
    pub hidden: Vec<String>,

    /// Separator between keys and values.
    #[arg(long)]
    pub separator: Option<String>,

    #[command(flatten)]
    pub frame: FrameArgs,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// List items.
    pub items: Vec<String>,

    /// List title; rendered with the item count appended.
    #[arg(long, default_value = "Content")]
    pub title: String,

    /// Separator between items.
    #[arg(long, default_value = "  ")]
    pub separator: String,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML.
    Show,
    /// Print the config file path.
    Path,
}
