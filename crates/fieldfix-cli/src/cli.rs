//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fieldfix",
    version,
    about = "Correct free-text categorical fields against reference mappings",
    long_about = "Validate and correct categorical columns of a CSV dataset against\n\
                  reference sheets of known-incorrect -> correct value pairs.\n\
                  Corrected values are inserted next to the originals; values with\n\
                  no known correction are flagged."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Correct a dataset and write the augmented CSV.
    Correct(CorrectArgs),

    /// List the reference categories and default target columns.
    Categories,
}

#[derive(Parser)]
pub struct CorrectArgs {
    /// Path to the main data CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory holding the reference sheets (trade.csv, state.csv, ...).
    #[arg(long = "refs", value_name = "DIR")]
    pub refs: PathBuf,

    /// Output path for the corrected CSV (default: cleaned_data.csv next to INPUT).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Correct and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
