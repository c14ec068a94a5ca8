//! Import command: CSV to entity JSON.

use std::fs;

use metacsv_codec::parse_document;
use tracing::info;

use crate::cli::ImportArgs;
use crate::cli::commands::{print_json, read_input};
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::format_import_summary;
use crate::sync::import_document;

/// Execute the import command.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded, the document is ragged or
/// its headers do not fit the layout, or the output cannot be written.
pub fn execute(args: &ImportArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load_config(overrides)?;
    let document = parse_document(&read_input(args.input.as_deref())?)?;
    let (entities, report) = import_document(&document, &config)?;

    let mut rendered = if args.compact {
        serde_json::to_string(&entities)?
    } else {
        serde_json::to_string_pretty(&entities)?
    };
    rendered.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), entities = report.entities, "wrote entity JSON");
            if json {
                print_json(&report)?;
            } else {
                println!("{}", format_import_summary(&report, path));
            }
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
