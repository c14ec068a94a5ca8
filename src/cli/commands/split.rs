//! Split command: run one cell decoder for inspection.

use metacsv_codec::decode::{
    split_extension, split_internal_array, split_multi_value, split_type_name_pair,
};

use crate::cli::commands::print_json;
use crate::cli::{SplitArgs, SplitKind};
use crate::error::Result;
use crate::format::{SplitOutput, format_split_parts};

/// Decode `cell` with the decoder for `kind`.
#[must_use]
pub fn split_cell(kind: SplitKind, cell: &str) -> Option<Vec<String>> {
    match kind {
        SplitKind::Multi => split_multi_value(Some(cell)),
        SplitKind::Pair => split_type_name_pair(Some(cell)),
        SplitKind::Array => Some(split_internal_array(Some(cell))),
        SplitKind::Extension => Some(split_extension(Some(cell))),
    }
}

/// Execute the split command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &SplitArgs, json: bool) -> Result<()> {
    let parts = split_cell(args.kind, &args.cell);

    if json {
        return print_json(&SplitOutput {
            kind: args.kind.as_str().to_string(),
            input: args.cell.clone(),
            parts,
        });
    }
    println!("{}", format_split_parts(parts.as_deref()));
    Ok(())
}
