//! User configuration for the `tpanel` binary.
//!
//! Lives at `<config dir>/tpanel/config.toml`. The `TPANEL_CONFIG`
//! environment variable overrides the path (tests point it at a scratch
//! location). A missing file yields the defaults; a malformed file is an
//! error.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TPANEL_CONFIG";

/// Defaults applied to panels rendered from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default panel width; the terminal width is used when absent.
    pub width: Option<usize>,
    /// Border glyphs: four corners, horizontal fill, optional vertical
    /// fill.
    pub border: String,
    /// Style names applied to borders, e.g. "gray" (empty: no styling).
    pub border_style: String,
    /// Style names applied to titles and subtitles (empty: no styling).
    pub title_style: String,
    /// Key-value separator for params panels.
    pub separator: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: None,
            border: "╭╮╰╯─│".to_string(),
            border_style: String::new(),
            title_style: String::new(),
            separator: " = ".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file, honoring [`CONFIG_ENV`].
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(dir.join("tpanel").join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Config> {
        Config::load_from(&Config::config_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Write the config to its resolved path, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Config::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
