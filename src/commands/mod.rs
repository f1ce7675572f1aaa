//! Subcommand handlers for the `tpanel` binary.

pub mod config;
pub mod list;
pub mod panel;
