//! Cell encoders.
//!
//! Each encoder turns one semantic value into exactly one cell. `None` means the
//! cell is absent. Cell-level quoting only protects the private delimiters;
//! escaping of `"`, CR and LF for the top-level CSV happens in
//! [`crate::document`].

use crate::delimiter::{
    ENTITY_TYPE_SEPARATOR, FIELD_SEPARATOR, INTERNAL_ARRAY_SEPARATOR, QUOTE, SEPARATOR,
    needs_field_quoting,
};
use crate::model::{EntityReference, Extension, ExtensionValue, TagCategory, TagLabel};
use serde_json::{Map, Value};

// ============================================================================
// Quoting helpers
// ============================================================================

/// Wrap `field` in double quotes without escaping.
#[must_use]
pub fn quote(field: &str) -> String {
    format!("{QUOTE}{field}{QUOTE}")
}

/// Quote `field` when it contains `,` or `;`.
#[must_use]
pub fn quote_csv_field(field: &str) -> String {
    if needs_field_quoting(field) {
        quote(field)
    } else {
        field.to_string()
    }
}

/// Join values with `;`, quoting each one that contains a delimiter.
///
/// Returns an empty string for an empty list.
#[must_use]
pub fn quote_field<S: AsRef<str>>(values: &[S]) -> String {
    join_cell(values.iter().map(|value| quote_csv_field(value.as_ref())))
}

/// Single-line text form of a record, for diagnostics.
#[must_use]
pub fn record_to_string<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| quote_csv_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

fn join_cell<I: IntoIterator<Item = String>>(parts: I) -> String {
    parts
        .into_iter()
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}

fn non_empty(cell: String) -> Option<String> {
    (!cell.is_empty()).then_some(cell)
}

// ============================================================================
// Scalar cells
// ============================================================================

/// Empty string when absent, otherwise `true` or `false`.
#[must_use]
pub fn encode_bool(value: Option<bool>) -> Option<String> {
    Some(value.map_or_else(String::new, |b| b.to_string()))
}

/// The value verbatim.
#[must_use]
pub fn encode_string(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// `;`-joined values, each quoted if it contains `,` or `;`. Absent when empty.
#[must_use]
pub fn encode_string_list<S: AsRef<str>>(values: &[S]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(quote_field(values))
    }
}

// ============================================================================
// References and tags
// ============================================================================

/// Fully-qualified name of a single reference.
#[must_use]
pub fn encode_entity_reference(reference: Option<&EntityReference>) -> Option<String> {
    reference.map(|r| r.fully_qualified_name.clone())
}

/// `;`-joined fully-qualified names. Absent when empty.
#[must_use]
pub fn encode_entity_references(references: &[EntityReference]) -> Option<String> {
    if references.is_empty() {
        return None;
    }
    Some(join_cell(
        references.iter().map(|r| r.fully_qualified_name.clone()),
    ))
}

/// `;`-joined tag FQNs of the labels that fall in `category`.
///
/// Absent when no label qualifies.
#[must_use]
pub fn encode_tag_labels(tags: &[TagLabel], category: TagCategory) -> Option<String> {
    non_empty(join_cell(
        tags.iter()
            .filter(|tag| category.includes(tag))
            .map(|tag| tag.tag_fqn.clone()),
    ))
}

/// `type:name` pairs joined with `;`. Absent when empty.
#[must_use]
pub fn encode_owners(owners: &[EntityReference]) -> Option<String> {
    encode_typed_names(owners)
}

/// `type:name` pairs joined with `;`. Absent when empty.
#[must_use]
pub fn encode_reviewers(reviewers: &[EntityReference]) -> Option<String> {
    encode_typed_names(reviewers)
}

fn encode_typed_names(references: &[EntityReference]) -> Option<String> {
    if references.is_empty() {
        return None;
    }
    Some(join_cell(references.iter().map(|r| {
        format!(
            "{}{ENTITY_TYPE_SEPARATOR}{}",
            r.entity_type,
            r.display_name()
        )
    })))
}

// ============================================================================
// Extension
// ============================================================================

/// `key:value` pairs joined with `;`, each pair quoted if it contains `,` or `;`.
///
/// Absent when the extension is missing or empty.
#[must_use]
pub fn encode_extension(extension: Option<&Extension>) -> Option<String> {
    let extension = extension.filter(|e| !e.is_empty())?;
    Some(join_cell(extension.iter().map(|(key, value)| {
        quote_csv_field(&format!(
            "{key}{ENTITY_TYPE_SEPARATOR}{}",
            format_extension_value(value)
        ))
    })))
}

/// Text form of one extension value.
///
/// Entity references become `type:fqn`, intervals `start:end`, lists are joined
/// with `|`. Maps of no known shape fall back to `{k=v, k2=v2}` in insertion
/// order, with any `"` turned into `'` so the cell scanner never sees a quote.
#[must_use]
pub fn format_extension_value(value: &ExtensionValue) -> String {
    match value {
        ExtensionValue::Scalar(scalar) => scalar.to_string(),
        ExtensionValue::EntityReference {
            entity_type,
            fully_qualified_name,
        } => format!("{entity_type}{ENTITY_TYPE_SEPARATOR}{fully_qualified_name}"),
        ExtensionValue::TimeInterval { start, end } => {
            format!("{start}{ENTITY_TYPE_SEPARATOR}{end}")
        }
        ExtensionValue::List(items) => items
            .iter()
            .map(format_extension_value)
            .collect::<Vec<_>>()
            .join(&INTERNAL_ARRAY_SEPARATOR.to_string()),
        ExtensionValue::Map(map) => format_map(map).replace(QUOTE, "'"),
    }
}

fn format_map(map: &Map<String, Value>) -> String {
    let body = map
        .iter()
        .map(|(key, value)| format!("{key}={}", format_map_value(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

fn format_map_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => format!(
            "[{}]",
            items
                .iter()
                .map(format_map_value)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Value::Object(map) => format_map(map),
    }
}
