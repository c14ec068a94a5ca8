//! Command-line interface for `metacsv`.
//!
//! This module provides the CLI parsing using clap; `main` routes each
//! command to its `commands::<name>::execute`.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::CliOverrides;

/// `metacsv` - bulk CSV export/import for metadata entities.
#[derive(Parser, Debug)]
#[command(name = "metacsv")]
#[command(
    author,
    version,
    about = "Bulk CSV export/import for metadata entity records",
    long_about = None,
    after_help = "Cells hold lists with ';', pairs with ':' and arrays with '|'. Required headers end with '*'."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Column layout file (overrides METACSV_CONFIG and discovered files)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config: self.config.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a JSON array of entities as a CSV document
    Export(ExportArgs),

    /// Decode a CSV document into a JSON array of entities
    Import(ImportArgs),

    /// Show the header row of the active column layout
    Headers(HeadersArgs),

    /// Run one cell decoder and print its parts
    Split(SplitArgs),

    /// Write the default column layout to .metacsv/config.yaml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// JSON input file (stdin when omitted or '-')
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// CSV output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ImportArgs {
    /// CSV input file (stdin when omitted or '-')
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// JSON output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug, Default)]
pub struct HeadersArgs {
    /// Also list each column's kind and entity field
    #[arg(long)]
    pub columns: bool,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Decoder to run
    #[arg(value_enum)]
    pub kind: SplitKind,

    /// Cell text, as it appears after top-level CSV unquoting
    pub cell: String,
}

/// Cell decoders exposed by `split`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
    /// `;`-separated values
    Multi,
    /// `type:name` pair
    Pair,
    /// `|`-separated array elements
    Array,
    /// Quote-aware `key:value` entries
    Extension,
}

impl SplitKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Multi => "multi",
            Self::Pair => "pair",
            Self::Array => "array",
            Self::Extension => "extension",
        }
    }
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: ShellType,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Supported shells for completions.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
