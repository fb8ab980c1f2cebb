use anyhow::{Context, Result};
use fixsrc_checker::CheckerOptions;
use fixsrc_solver::Edition;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::args::{CliArgs, EditionSetting, OutputFormat};

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "fixsrc.json";

/// Boolean options accept both `true` and `"true"`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FixsrcConfig {
    #[serde(default)]
    pub edition: Option<EditionSetting>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub parallel: Option<bool>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub pretty: Option<bool>,
}

pub fn parse_config(source: &str) -> Result<FixsrcConfig> {
    serde_json::from_str(source).context("failed to parse fixsrc.json")
}

pub fn load_config(path: &Path) -> Result<FixsrcConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&source).with_context(|| format!("in {}", path.display()))
}

/// The explicit `--config` path, or `fixsrc.json` in `cwd` if it exists.
pub fn find_config(args: &CliArgs, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(if path.is_absolute() {
            path.clone()
        } else {
            cwd.join(path)
        });
    }
    let default = cwd.join(CONFIG_FILE_NAME);
    default.is_file().then_some(default)
}

/// Options after merging the config file with command-line flags.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    /// `None` means detect per graph.
    pub edition: Option<Edition>,
    pub checker: CheckerOptions,
    pub format: OutputFormat,
    pub pretty: Option<bool>,
    pub debug_graph: bool,
}

/// Flags override the file; exclude patterns from both are combined.
pub fn resolve_options(args: &CliArgs, config: &FixsrcConfig) -> Result<ResolvedOptions> {
    let edition = match args.edition.or(config.edition).unwrap_or_default() {
        EditionSetting::Auto => None,
        EditionSetting::A => Some(Edition::A),
        EditionSetting::B => Some(Edition::B),
    };

    let mut exclude: Vec<&str> = config
        .exclude
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    exclude.extend(args.exclude.iter().map(String::as_str));

    let mut checker = CheckerOptions::default()
        .with_exclude(exclude.as_slice())
        .context("invalid exclude pattern")?;
    checker.parallel = !args.sequential && config.parallel.unwrap_or(true);

    Ok(ResolvedOptions {
        edition,
        checker,
        format: args.format.or(config.format).unwrap_or_default(),
        pretty: args.pretty.or(config.pretty),
        debug_graph: args.debug_graph,
    })
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
