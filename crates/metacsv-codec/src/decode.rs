//! Cell decoders.
//!
//! The `split_*` functions take a cell apart on one delimiter. The `decode_*`
//! functions build semantic values on top of them. None of them fail: malformed
//! input yields a best-effort split, and unusable parts are skipped with a
//! warning.

use tracing::{trace, warn};

use crate::delimiter::{
    ENTITY_TYPE_SEPARATOR, FIELD_SEPARATOR, INTERNAL_ARRAY_SEPARATOR, QUOTE, needs_field_quoting,
};
use crate::model::{EntityReference, LabelType, TagLabel, TagSource};

fn is_blank(field: Option<&str>) -> bool {
    field.is_none_or(|f| f.trim().is_empty())
}

/// Split on `separator`, dropping trailing empty segments. Input without the
/// separator always yields exactly one element.
fn split_trimming_trailing(field: &str, separator: char) -> Vec<String> {
    let mut parts: Vec<String> = field.split(separator).map(str::to_string).collect();
    if parts.len() > 1 {
        while parts.last().is_some_and(String::is_empty) {
            parts.pop();
        }
    }
    parts
}

// ============================================================================
// Splitters
// ============================================================================

/// Split a multi-valued cell on `;`. Absent for a missing or blank cell.
///
/// Not quote-aware; use [`decode_string_list`] for cells that may carry quoted
/// values.
#[must_use]
pub fn split_multi_value(field: Option<&str>) -> Option<Vec<String>> {
    if is_blank(field) {
        return None;
    }
    field.map(|f| split_trimming_trailing(f, FIELD_SEPARATOR))
}

/// Split a `type:name` pair on `:`. Absent only for a missing cell; a blank
/// cell yields a single empty element.
#[must_use]
pub fn split_type_name_pair(field: Option<&str>) -> Option<Vec<String>> {
    field.map(|f| split_trimming_trailing(f, ENTITY_TYPE_SEPARATOR))
}

/// Split an extension array value on `|`. Empty for a missing or blank cell.
#[must_use]
pub fn split_internal_array(field: Option<&str>) -> Vec<String> {
    match field {
        Some(f) if !f.trim().is_empty() => split_trimming_trailing(f, INTERNAL_ARRAY_SEPARATOR),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InQuotes,
}

impl ScanState {
    const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::InQuotes,
            Self::InQuotes => Self::Normal,
        }
    }
}

/// Split an extension cell into `key:value` entries, honouring quotes.
///
/// `;` inside double quotes does not split. A doubled quote inside quotes is a
/// literal `"`. Quote characters are kept while scanning; an entry that
/// contains `,` or `;` and is wrapped in quotes loses the wrapping pair when
/// it is emitted. An unterminated quote runs to the end of the cell.
#[must_use]
pub fn split_extension(field: Option<&str>) -> Vec<String> {
    let Some(field) = field.filter(|f| !f.trim().is_empty()) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut buffer = String::new();
    let mut state = ScanState::Normal;
    let mut chars = field.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, state) {
            (QUOTE, ScanState::InQuotes) if chars.peek() == Some(&QUOTE) => {
                chars.next();
                buffer.push(QUOTE);
            }
            (QUOTE, _) => {
                state = state.toggled();
                buffer.push(QUOTE);
            }
            (FIELD_SEPARATOR, ScanState::Normal) => flush_entry(&mut result, &mut buffer),
            _ => buffer.push(c),
        }
    }

    if state == ScanState::InQuotes {
        warn!(
            cell_len = field.len(),
            "unterminated quote in extension cell"
        );
    }
    flush_entry(&mut result, &mut buffer);
    result
}

fn flush_entry(result: &mut Vec<String>, buffer: &mut String) {
    let entry = std::mem::take(buffer);
    let wrapped = entry.len() >= 2 && entry.starts_with(QUOTE) && entry.ends_with(QUOTE);
    let entry = if wrapped && needs_field_quoting(&entry) {
        entry[1..entry.len() - 1].to_string()
    } else {
        entry
    };
    trace!(entry = %entry, "extension entry");
    result.push(entry);
}

// ============================================================================
// Semantic decoders
// ============================================================================

/// `true`/`false` in any case; anything else is absent.
#[must_use]
pub fn decode_bool(field: Option<&str>) -> Option<bool> {
    match field.map(|f| f.trim().to_lowercase()).as_deref() {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// String list written by [`crate::encode::encode_string_list`].
///
/// Quote-aware, so values that were quoted for containing `,` or `;` come back
/// intact.
#[must_use]
pub fn decode_string_list(field: Option<&str>) -> Vec<String> {
    split_extension(field)
}

/// References of `entity_type` from a `;`-joined list of fully-qualified names.
#[must_use]
pub fn decode_entity_references(field: Option<&str>, entity_type: &str) -> Vec<EntityReference> {
    split_multi_value(field)
        .unwrap_or_default()
        .into_iter()
        .filter(|fqn| !fqn.is_empty())
        .map(|fqn| EntityReference::new(entity_type, fqn))
        .collect()
}

/// Owners or reviewers from `type:name` pairs.
///
/// Pairs that do not split into exactly a non-empty type and name are skipped.
#[must_use]
pub fn decode_owners(field: Option<&str>) -> Vec<EntityReference> {
    let mut owners = Vec::new();
    for entry in split_multi_value(field).unwrap_or_default() {
        match split_type_name_pair(Some(&entry)).as_deref() {
            Some([entity_type, name]) if !entity_type.is_empty() && !name.is_empty() => {
                owners.push(EntityReference::named(entity_type.as_str(), name.as_str()));
            }
            _ => warn!(entry = %entry, "skipping malformed type:name pair"),
        }
    }
    owners
}

/// Tag labels of `source` from a `;`-joined list of tag FQNs.
#[must_use]
pub fn decode_tag_labels(field: Option<&str>, source: TagSource) -> Vec<TagLabel> {
    split_multi_value(field)
        .unwrap_or_default()
        .into_iter()
        .filter(|fqn| !fqn.is_empty())
        .map(|fqn| TagLabel::new(fqn, source, LabelType::Manual))
        .collect()
}

/// Extension entries as `(key, raw value)` pairs, split at the first `:`.
///
/// The raw value keeps any inner `type:fqn`, `start:end` or `|` structure.
#[must_use]
pub fn decode_extension(field: Option<&str>) -> Vec<(String, String)> {
    split_extension(field)
        .into_iter()
        .filter_map(|entry| match entry.split_once(ENTITY_TYPE_SEPARATOR) {
            Some((key, value)) if !key.is_empty() => Some((key.to_string(), value.to_string())),
            _ => {
                warn!(entry = %entry, "skipping extension entry without key");
                None
            }
        })
        .collect()
}
