use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ColumnSpec, Config, FieldKind};

/// One layout column as shown by `headers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOutput {
    pub name: String,
    pub required: bool,
    pub kind: FieldKind,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

impl From<&ColumnSpec> for ColumnOutput {
    fn from(column: &ColumnSpec) -> Self {
        Self {
            name: column.name.clone(),
            required: column.required,
            kind: column.kind,
            field: column.field_key().to_string(),
            entity_type: column.entity_type.clone(),
        }
    }
}

/// Header row for the active layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadersOutput {
    /// Rendered names, required ones marked with `*`.
    pub headers: Vec<String>,
    pub columns: Vec<ColumnOutput>,
}

impl From<&Config> for HeadersOutput {
    fn from(config: &Config) -> Self {
        Self {
            headers: metacsv_codec::render(&config.headers()),
            columns: config.columns.iter().map(ColumnOutput::from).collect(),
        }
    }
}

/// Result of running one decoder on a cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutput {
    pub kind: String,
    pub input: String,
    /// `None` when the decoder reports an absent result.
    pub parts: Option<Vec<String>>,
}

/// Result of `init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitOutput {
    pub path: PathBuf,
    pub columns: usize,
    pub overwritten: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_output_from_default_layout() {
        let output = HeadersOutput::from(&Config::default());
        assert_eq!(output.headers.len(), output.columns.len());
        let tiers = output.columns.iter().find(|c| c.name == "tiers").unwrap();
        assert_eq!(tiers.field, "tags");

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["headers"][1], "name*");
        assert_eq!(json["columns"][0]["kind"], "entityReference");
        assert!(json["columns"][0]["entityType"].is_string());
        assert!(json["columns"][0].get("entity_type").is_none());
        assert!(json["columns"][1].get("entityType").is_none());
    }
}
