//! Panel subcommand handlers.

use std::io::Read;

use anyhow::{anyhow, Context, Result};

use tpanel::cli::{FrameArgs, PanelArgs, ParamsArgs};
use tpanel::{Border, Config, Error, Panel, PanelConfig, ParamsConfig, Style};

/// Render a plain-text panel from an argument or stdin.
#[cfg(not(tarpaulin_include))]
pub fn handle_panel(args: &PanelArgs) -> Result<()> {
    let config = Config::load()?;
    let content = match &args.content {
        Some(content) => content.clone(),
        None => read_stdin()?,
    };
    let panel = Panel::text(&content, &frame_config(&args.frame, &config)?)?;
    println!("{panel}");
    Ok(())
}

/// Render a key-value panel from `key=value` pairs or a JSON object.
#[cfg(not(tarpaulin_include))]
pub fn handle_params(args: &ParamsArgs) -> Result<()> {
    let config = Config::load()?;
    let pairs = match &args.json {
        Some(json) => json_pairs(json)?,
        None => arg_pairs(&args.pairs)?,
    };
    let params = ParamsConfig {
        panel: frame_config(&args.frame, &config)?,
        hidden: args.hidden.clone(),
        separator: args
            .separator
            .clone()
            .unwrap_or_else(|| config.separator.clone()),
    };
    let panel = Panel::params(pairs, &params)?;
    println!("{panel}");
    Ok(())
}

/// Merge framing flags with the user config into a panel config.
fn frame_config(frame: &FrameArgs, config: &Config) -> Result<PanelConfig> {
    let border_spec = frame.border.clone().unwrap_or_else(|| config.border.clone());
    Ok(PanelConfig {
        width: frame.width.or(config.width),
        title: frame.title.clone(),
        title_align: frame.title_align,
        title_style: parse_style(frame.title_style.as_deref(), &config.title_style)?,
        subtitle: frame.subtitle.clone(),
        subtitle_align: frame.subtitle_align,
        subtitle_style: parse_style(frame.subtitle_style.as_deref(), &config.title_style)?,
        border: Border::parse(&border_spec)?,
        border_style: parse_style(frame.border_style.as_deref(), &config.border_style)?,
    })
}

/// Flag value wins over the config value; empty means no styling.
fn parse_style(flag: Option<&str>, fallback: &str) -> Result<Style> {
    let spec = flag.unwrap_or(fallback);
    if spec.is_empty() {
        return Ok(Style::none());
    }
    Ok(Style::parse(spec)?)
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read content from stdin")?;
    Ok(content)
}

fn arg_pairs(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("expected key=value, got '{pair}'"))
        })
        .collect()
}

/// Parse a JSON object into display pairs, preserving key order.
fn json_pairs(json: &str) -> Result<Vec<(String, String)>> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("failed to parse --json input")?;
    let object = match value {
        serde_json::Value::Object(object) => object,
        other => {
            return Err(Error::InvalidContentType {
                expected: "a JSON object of key-value pairs",
                found: json_type(&other).to_string(),
            }
            .into())
        }
    };
    Ok(object
        .into_iter()
        .map(|(key, value)| (key, json_scalar(&value)))
        .collect())
}

/// Strings display bare; everything else keeps its JSON form.
fn json_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
