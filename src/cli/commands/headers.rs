//! Headers command: show the active layout's header row.

use metacsv_codec::Document;
use metacsv_codec::delimiter::LINE_SEPARATOR;

use crate::cli::HeadersArgs;
use crate::cli::commands::print_json;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::{HeadersOutput, format_column_line};

/// Execute the headers command.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded.
pub fn execute(args: &HeadersArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load_config(overrides)?;
    let output = HeadersOutput::from(&config);

    if json {
        return print_json(&output);
    }

    let line = metacsv_codec::format(&Document::new(config.headers()))?;
    println!("{}", line.trim_end_matches(LINE_SEPARATOR));
    if args.columns {
        println!();
        for column in &config.columns {
            println!("{}", format_column_line(column));
        }
    }
    Ok(())
}
