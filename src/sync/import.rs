//! Import: CSV document rows to entity JSON objects.

use metacsv_codec::decode::{
    decode_bool, decode_entity_references, decode_extension, decode_owners, decode_string_list,
    decode_tag_labels,
};
use metacsv_codec::encode::record_to_string;
use metacsv_codec::{Document, EntityReference};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::{ColumnSpec, Config, FieldKind};
use crate::error::Result;
use crate::validation::match_headers;

/// Summary of an import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub entities: usize,
    /// Layout columns present in the document.
    pub columns: usize,
    /// Optional layout columns the document did not carry.
    pub skipped_columns: Vec<String>,
}

/// Decode every row of `document` into an entity object.
///
/// Absent cells leave their field out of the object. Tag columns sharing a
/// field append to the same list.
///
/// # Errors
///
/// Returns `UnknownColumn` or `MissingColumn` if the headers do not fit the
/// layout, or `Json` if a decoded value cannot be serialized.
pub fn import_document(document: &Document, config: &Config) -> Result<(Vec<Value>, ImportReport)> {
    let positions = match_headers(config, document)?;

    let mut entities = Vec::with_capacity(document.len());
    for (row_index, row) in document.rows().iter().enumerate() {
        trace!(
            row = row_index + 1,
            record = %record_to_string(&row.iter().map(|c| c.as_deref().unwrap_or_default()).collect::<Vec<_>>()),
            "decoding row"
        );
        let mut entity = Map::new();
        for (column, position) in config.columns.iter().zip(&positions) {
            if let Some(position) = position {
                decode_column(column, document.cell(row_index, *position), &mut entity)?;
            }
        }
        entities.push(Value::Object(entity));
    }

    let report = ImportReport {
        entities: entities.len(),
        columns: positions.iter().flatten().count(),
        skipped_columns: config
            .columns
            .iter()
            .zip(&positions)
            .filter(|(_, position)| position.is_none())
            .map(|(column, _)| column.name.clone())
            .collect(),
    };
    debug!(entities = report.entities, columns = report.columns, "imported document");
    Ok((entities, report))
}

fn decode_column(column: &ColumnSpec, cell: Option<&str>, entity: &mut Map<String, Value>) -> Result<()> {
    let key = column.field_key();
    let entity_type = column.entity_type.as_deref().unwrap_or_default();

    let value = match column.kind {
        FieldKind::Bool => decode_bool(cell).map(Value::Bool),
        FieldKind::String => cell.map(|s| Value::String(s.to_string())),
        FieldKind::StringList => non_empty(decode_string_list(cell))?,
        FieldKind::EntityReference => cell
            .map(|fqn| serde_json::to_value(EntityReference::new(entity_type, fqn)))
            .transpose()?,
        FieldKind::EntityReferences => non_empty(decode_entity_references(cell, entity_type))?,
        FieldKind::ClassificationTags | FieldKind::GlossaryTerms | FieldKind::Tier => {
            let Some(source) = column.kind.tag_source() else {
                return Ok(());
            };
            let tags = decode_tag_labels(cell, source);
            if !tags.is_empty() {
                append_list(entity, key, serde_json::to_value(tags)?);
            }
            return Ok(());
        }
        FieldKind::Owners | FieldKind::Reviewers => non_empty(decode_owners(cell))?,
        FieldKind::Extension => {
            let entries: Map<String, Value> = decode_extension(cell)
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            (!entries.is_empty()).then_some(Value::Object(entries))
        }
    };

    if let Some(value) = value {
        entity.insert(key.to_string(), value);
    }
    Ok(())
}

fn non_empty<T: Serialize>(items: Vec<T>) -> Result<Option<Value>> {
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_value(items)?))
}

fn append_list(entity: &mut Map<String, Value>, key: &str, items: Value) {
    let Value::Array(items) = items else {
        return;
    };
    match entity.get_mut(key) {
        Some(Value::Array(existing)) => existing.extend(items),
        _ => {
            entity.insert(key.to_string(), Value::Array(items));
        }
    }
}
