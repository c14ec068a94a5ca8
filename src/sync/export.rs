//! Export: entity JSON objects to a CSV document.

use metacsv_codec::{Document, EntityReference, Extension, RecordBuilder, Row, TagLabel};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{ColumnSpec, Config, FieldKind};
use crate::error::{MetacsvError, Result};

/// Summary of an export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub entities: usize,
    pub columns: usize,
}

/// Parse export input: a JSON array of entity objects.
///
/// # Errors
///
/// Returns `Json` for malformed JSON and `InvalidInput` when the top level is
/// not an array or an element is not an object.
pub fn parse_entities(text: &str) -> Result<Vec<Map<String, Value>>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(MetacsvError::invalid_input("expected a JSON array of entities"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(entity) => Ok(entity),
            other => Err(MetacsvError::invalid_input(format!(
                "entity {i} is a {}, expected an object",
                json_type_name(&other)
            ))),
        })
        .collect()
}

/// Encode every entity as one row of a document laid out by `config`.
///
/// Fields that do not match their column kind are logged and left empty.
///
/// # Errors
///
/// Returns `Codec(ShapeMismatch)` if a row does not fit the header; this only
/// happens if the layout changes mid-export.
pub fn export_entities(
    entities: &[Map<String, Value>],
    config: &Config,
) -> Result<(Document, ExportReport)> {
    let mut document = Document::new(config.headers());
    for entity in entities {
        document.add_row(entity_row(entity, config))?;
    }

    let report = ExportReport {
        entities: document.len(),
        columns: config.columns.len(),
    };
    debug!(entities = report.entities, columns = report.columns, "exported entities");
    Ok((document, report))
}

fn entity_row(entity: &Map<String, Value>, config: &Config) -> Row {
    config
        .columns
        .iter()
        .fold(
            RecordBuilder::with_capacity(config.columns.len()),
            |builder, column| {
                let value = entity.get(column.field_key()).filter(|v| !v.is_null());
                encode_column(builder, column, value)
            },
        )
        .build()
}

fn encode_column(builder: RecordBuilder, column: &ColumnSpec, value: Option<&Value>) -> RecordBuilder {
    match column.kind {
        FieldKind::Bool => builder.bool(value.and_then(Value::as_bool)),
        FieldKind::String => builder.string(value.and_then(value_text).as_deref()),
        FieldKind::StringList => {
            let values: Vec<String> = value
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(value_text).collect())
                .unwrap_or_default();
            builder.string_list(&values)
        }
        FieldKind::EntityReference => {
            let reference: Option<EntityReference> = value.and_then(|v| typed(column, v));
            builder.entity_reference(reference.as_ref())
        }
        FieldKind::EntityReferences => builder.entity_references(&typed_list(column, value)),
        FieldKind::ClassificationTags | FieldKind::GlossaryTerms | FieldKind::Tier => {
            let tags: Vec<TagLabel> = typed_list(column, value);
            match column.kind.tag_category() {
                Some(category) => builder.tag_labels(&tags, category),
                None => builder.cell(None),
            }
        }
        FieldKind::Owners => builder.owners(&typed_list(column, value)),
        FieldKind::Reviewers => builder.reviewers(&typed_list(column, value)),
        FieldKind::Extension => {
            let extension = value.map(Extension::from_json);
            builder.extension(extension.as_ref())
        }
    }
}

/// Scalar text of a JSON value; structured values become compact JSON.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn typed<T: DeserializeOwned>(column: &ColumnSpec, value: &Value) -> Option<T> {
    match T::deserialize(value) {
        Ok(typed) => Some(typed),
        Err(e) => {
            warn!(column = %column.name, kind = %column.kind, error = %e, "ignoring field that does not match column kind");
            None
        }
    }
}

fn typed_list<T: DeserializeOwned>(column: &ColumnSpec, value: Option<&Value>) -> Vec<T> {
    value.and_then(|v| typed(column, v)).unwrap_or_default()
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacsv_codec::format;
    use serde_json::json;

    fn entity(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn layout(columns: Vec<ColumnSpec>) -> Config {
        crate::logging::init_test_logging();
        Config { columns }
    }

    #[test]
    fn test_parse_entities_rejects_non_array() {
        let err = parse_entities(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, MetacsvError::InvalidInput { .. }));
    }

    #[test]
    fn test_parse_entities_rejects_non_object_element() {
        let err = parse_entities(r#"[{"name": "x"}, 3]"#).unwrap_err();
        assert!(err.to_string().contains("entity 1 is a number"));
    }

    #[test]
    fn test_export_glossary_term() {
        let config = layout(vec![
            ColumnSpec::new("name", FieldKind::String).required(),
            ColumnSpec::new("synonyms", FieldKind::StringList),
            ColumnSpec::new("tags", FieldKind::ClassificationTags),
            ColumnSpec::new("glossaryTerms", FieldKind::GlossaryTerms),
            ColumnSpec::new("tiers", FieldKind::Tier),
            ColumnSpec::new("owners", FieldKind::Owners),
            ColumnSpec::new("deprecated", FieldKind::Bool),
        ]);
        let entities = vec![entity(json!({
            "name": "Revenue",
            "synonyms": ["income", "sales, gross"],
            "tags": [
                {"tagFQN": "PII.Sensitive", "source": "Classification", "labelType": "Manual"},
                {"tagFQN": "Tier.Tier1", "source": "Classification"},
                {"tagFQN": "Finance.Metrics", "source": "Glossary"}
            ],
            "owners": [{"type": "team", "fullyQualifiedName": "finance", "name": "finance"}],
            "deprecated": false
        }))];

        let (doc, report) = export_entities(&entities, &config).unwrap();
        assert_eq!(report, ExportReport { entities: 1, columns: 7 });
        assert_eq!(
            format(&doc).unwrap(),
            "name*,synonyms,tags,glossaryTerms,tiers,owners,deprecated\r\n\
             Revenue,\"income;\"\"sales, gross\"\"\",PII.Sensitive,Finance.Metrics,Tier.Tier1,team:finance,false\r\n"
        );
    }

    #[test]
    fn test_export_missing_and_mismatched_fields_are_empty() {
        let config = layout(vec![
            ColumnSpec::new("name", FieldKind::String),
            ColumnSpec::new("owners", FieldKind::Owners),
            ColumnSpec::new("deprecated", FieldKind::Bool),
        ]);
        let entities = vec![entity(json!({"name": 42, "owners": "alice"}))];

        let (doc, _) = export_entities(&entities, &config).unwrap();
        assert_eq!(doc.rows()[0], vec![Some("42".to_string()), None, Some(String::new())]);
    }

    #[test]
    fn test_export_extension_and_references() {
        let config = layout(vec![
            ColumnSpec::new("relatedTerms", FieldKind::EntityReferences).entity_type("glossaryTerm"),
            ColumnSpec::new("extension", FieldKind::Extension),
        ]);
        let entities = vec![entity(json!({
            "relatedTerms": [
                {"type": "glossaryTerm", "fullyQualifiedName": "Finance.Cost"},
                {"type": "glossaryTerm", "fullyQualifiedName": "Finance.Profit"}
            ],
            "extension": {
                "owner": {"type": "user", "fullyQualifiedName": "alice"},
                "window": {"start": 1, "end": 2}
            }
        }))];

        let (doc, _) = export_entities(&entities, &config).unwrap();
        assert_eq!(doc.cell(0, 0), Some("Finance.Cost;Finance.Profit"));
        assert_eq!(doc.cell(0, 1), Some("owner:user:alice;window:1:2"));
    }

    #[test]
    fn test_export_custom_field_key() {
        let mut experts = ColumnSpec::new("experts", FieldKind::Reviewers);
        experts.field = Some("reviewers".to_string());
        let config = layout(vec![experts]);
        let entities = vec![entity(json!({
            "reviewers": [{"type": "user", "fullyQualifiedName": "bob"}]
        }))];

        let (doc, _) = export_entities(&entities, &config).unwrap();
        assert_eq!(doc.cell(0, 0), Some("user:bob"));
    }
}
