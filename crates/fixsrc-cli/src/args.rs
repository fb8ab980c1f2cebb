use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// CLI arguments for the fixsrc binary.
#[derive(Parser, Debug)]
#[command(
    name = "fixsrc",
    version,
    about = "Checks that test-class fixture parameters have a fixture source"
)]
pub struct CliArgs {
    /// Symbol graph files, or directories searched for `*.fixsrc.json`.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Framework edition rules to apply; `auto` detects them per graph.
    #[arg(long, value_enum, ignore_case = true)]
    pub edition: Option<EditionSetting>,

    /// Path to a fixsrc.json configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Diagnostic output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Colour the text output. Defaults to on when stderr is a terminal.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub pretty: Option<bool>,

    /// Skip test classes whose name matches this glob. Repeatable.
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Check test classes on the current thread only.
    #[arg(long)]
    pub sequential: bool,

    /// Print each bound symbol graph to stderr before checking it.
    #[arg(long = "debug-graph")]
    pub debug_graph: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditionSetting {
    #[default]
    Auto,
    #[value(alias = "v2")]
    A,
    #[value(alias = "v3")]
    B,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
