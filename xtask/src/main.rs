//! Development tasks: man page and shell completion generation.
//!
//! Run with `cargo run -p xtask -- <task>`. Artifacts land in
//! `target/dist/`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use tpanel::cli::Cli;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Development tasks for tpanel")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate the tpanel man page.
    Man,
    /// Generate shell completions for bash, zsh, and fish.
    Completions,
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man => man(),
        Task::Completions => completions(),
    }
}

fn dist_dir() -> Result<PathBuf> {
    let dir = PathBuf::from("target/dist");
    fs::create_dir_all(&dir).context("failed to create target/dist")?;
    Ok(dir)
}

fn man() -> Result<()> {
    let dir = dist_dir()?;
    let man = clap_mangen::Man::new(Cli::command());
    let mut rendered = Vec::new();
    man.render(&mut rendered)
        .context("failed to render the man page")?;
    let path = dir.join("tpanel.1");
    fs::write(&path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn completions() -> Result<()> {
    let dir = dist_dir()?;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let mut command = Cli::command();
        let path = clap_complete::generate_to(shell, &mut command, "tpanel", &dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
