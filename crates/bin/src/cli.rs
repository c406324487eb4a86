//! CLI argument definitions for the Genery binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Genery helpers for nested JSON records and multilingual text
#[derive(Parser, Debug)]
#[command(name = "genery")]
#[command(about = "Genery: nested record and text helpers")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human", env = "GENERY_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten a JSON object into a single level
    Flatten(FlattenArgs),
    /// Look up the first path that resolves in a JSON object
    Lookup(LookupArgs),
    /// Deep-merge an overrides object into a base object
    Merge(MergeArgs),
    /// Normalize the keys of a JSON object
    NormalizeKeys(NormalizeKeysArgs),
    /// Transliterate text to basic Latin
    Downcode(DowncodeArgs),
    /// Extract URLs from text
    Urls(UrlsArgs),
    /// Format a duration in milliseconds for humans
    HumanTime(HumanTimeArgs),
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// Separator placed between nested keys
    #[arg(short, long, default_value = "_", env = "GENERY_SEPARATOR")]
    pub separator: String,

    /// JSON file to read; stdin when omitted
    pub file: Option<PathBuf>,
}

/// Arguments for the lookup command
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Paths to try, in order
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// JSON value returned when no path resolves
    #[arg(long, default_value = "null")]
    pub default: String,

    /// Delimiter between path segments
    #[arg(short, long, default_value = ".", env = "GENERY_DELIMITER")]
    pub delimiter: String,

    /// JSON file to read; stdin when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// JSON file holding the base object
    pub base: PathBuf,

    /// JSON file holding the overrides
    pub overrides: PathBuf,
}

/// Arguments for the normalize-keys command
#[derive(clap::Args, Debug)]
pub struct NormalizeKeysArgs {
    /// Keep the original letter case
    #[arg(long)]
    pub keep_case: bool,

    /// Replacement for runs of non-alphanumeric characters
    #[arg(short, long, default_value = "_", env = "GENERY_SEPARATOR")]
    pub separator: String,

    /// JSON file to read; stdin when omitted
    pub file: Option<PathBuf>,
}

/// Arguments for the downcode command
#[derive(clap::Args, Debug)]
pub struct DowncodeArgs {
    /// Text to transliterate
    pub text: String,
}

/// Arguments for the urls command
#[derive(clap::Args, Debug)]
pub struct UrlsArgs {
    /// Keep duplicate URLs
    #[arg(long)]
    pub all: bool,

    /// Text file to read; stdin when omitted
    pub file: Option<PathBuf>,
}

/// Arguments for the human-time command
#[derive(clap::Args, Debug)]
pub struct HumanTimeArgs {
    /// Duration in milliseconds
    pub ms: f64,

    /// Number of decimals
    #[arg(short, long, default_value_t = 3)]
    pub round_to: usize,
}
