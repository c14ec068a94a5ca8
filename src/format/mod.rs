//! Output formatting for `metacsv`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! CSV and entity JSON go to stdout or the `--output` file; summaries and
//! diagnostics never mix into them.
//!
//! # JSON Output Types
//!
//! - [`HeadersOutput`] - Rendered header row plus column details (headers)
//! - [`SplitOutput`] - Decoder parts (split)
//! - [`InitOutput`] - Written config location (init)

mod output;
mod text;

pub use output::{ColumnOutput, HeadersOutput, InitOutput, SplitOutput};
pub use text::{
    format_column_line, format_export_summary, format_import_summary, format_split_parts,
};
