//! Export command: entity JSON to CSV.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use metacsv_codec::write_document;
use tracing::info;

use crate::cli::ExportArgs;
use crate::cli::commands::{print_json, read_input};
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::format_export_summary;
use crate::sync::{export_entities, parse_entities};

/// Execute the export command.
///
/// The CSV goes to `--output` or stdout. A summary is printed only when the
/// CSV went to a file, so stdout never mixes the two.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded, the input is not a JSON
/// array of objects, or the output cannot be written.
pub fn execute(args: &ExportArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load_config(overrides)?;
    let entities = parse_entities(&read_input(args.input.as_deref())?)?;
    let (document, report) = export_entities(&entities, &config)?;

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_document(&mut writer, &document)?;
            writer.flush()?;
            info!(path = %path.display(), entities = report.entities, "wrote CSV document");
            if json {
                print_json(&report)?;
            } else {
                println!("{}", format_export_summary(&report, path));
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_document(&mut handle, &document)?;
            handle.flush()?;
        }
    }
    Ok(())
}
