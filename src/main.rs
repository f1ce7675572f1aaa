//! Entry point for the `tpanel` binary.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tpanel::cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Panel(args) => commands::panel::handle_panel(args),
        Command::Params(args) => commands::panel::handle_params(args),
        Command::List(args) => commands::list::handle_list(args),
        Command::Config { action } => commands::config::handle(action),
        Command::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "tpanel", &mut std::io::stdout());
            Ok(())
        }
    }
}
