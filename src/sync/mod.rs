//! Entity JSON <-> CSV document conversion for `metacsv`.
//!
//! This module handles:
//! - Export: JSON entity objects -> one CSV row each, per the column layout
//! - Import: CSV rows -> JSON entity objects, per the column layout
//!
//! Column kinds decide which codec encoder or decoder runs for each cell.

mod export;
mod import;

pub use export::{ExportReport, export_entities, parse_entities};
pub use import::{ImportReport, import_document};
