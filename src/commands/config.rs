//! Config subcommands handler

use anyhow::Result;

use tpanel::cli::ConfigAction;
use tpanel::Config;

/// Show the current configuration or its file path.
#[cfg(not(tarpaulin_include))]
pub fn handle(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}
