//! Fixed delimiters of the export format.
//!
//! These are part of the wire contract and never change at runtime.

/// Top-level field separator.
pub const SEPARATOR: char = ',';

/// Separator between values of a multi-valued cell.
pub const FIELD_SEPARATOR: char = ';';

/// Separator between an entity type and a name, or between interval bounds.
pub const ENTITY_TYPE_SEPARATOR: char = ':';

/// Separator between array elements inside one extension value.
pub const INTERNAL_ARRAY_SEPARATOR: char = '|';

/// Line terminator of every document row.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Quote character used by both the top-level and the cell-level grammar.
pub const QUOTE: char = '"';

/// Returns true if `value` contains a character that forces cell-level quoting.
#[must_use]
pub fn needs_field_quoting(value: &str) -> bool {
    value.contains(SEPARATOR) || value.contains(FIELD_SEPARATOR)
}
