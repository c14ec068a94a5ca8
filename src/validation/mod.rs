//! Validation helpers for `metacsv`.
//!
//! Layout checks collect every problem before reporting; document header
//! checks stop at the first unknown or missing column.

use std::collections::HashSet;

use metacsv_codec::Document;
use metacsv_codec::header::REQUIRED_MARKER;

use crate::config::{ColumnSpec, Config};
use crate::error::{MetacsvError, Result, ValidationError};

/// Validates a column layout.
pub struct LayoutValidator;

impl LayoutValidator {
    /// Validate a layout and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any layout rule is violated.
    pub fn validate(config: &Config) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if config.columns.is_empty() {
            errors.push(ValidationError::new("columns", "must define at least one column"));
        }

        let mut seen = HashSet::new();
        for (i, column) in config.columns.iter().enumerate() {
            let path = format!("columns[{i}]");
            Self::validate_column(&path, column, &mut errors);
            if !column.name.is_empty() && !seen.insert(column.name.as_str()) {
                errors.push(ValidationError::new(
                    format!("{path}.name"),
                    format!("duplicate column '{}'", column.name),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_column(path: &str, column: &ColumnSpec, errors: &mut Vec<ValidationError>) {
        if column.name.trim().is_empty() {
            errors.push(ValidationError::new(format!("{path}.name"), "cannot be empty"));
        }
        if column.name.ends_with(REQUIRED_MARKER) {
            errors.push(ValidationError::new(
                format!("{path}.name"),
                "cannot end with '*' (use required: true)",
            ));
        }
        if column.field.as_deref().is_some_and(|f| f.trim().is_empty()) {
            errors.push(ValidationError::new(format!("{path}.field"), "cannot be empty"));
        }
        if column.kind.needs_entity_type()
            && column
                .entity_type
                .as_deref()
                .is_none_or(|t| t.trim().is_empty())
        {
            errors.push(ValidationError::new(
                format!("{path}.entityType"),
                format!("required for kind {}", column.kind),
            ));
        }
    }
}

/// Map each layout column to its position in a parsed document.
///
/// Headers are matched by name; the required marker is ignored.
///
/// # Errors
///
/// Returns `UnknownColumn` for a document header the layout does not define,
/// or `MissingColumn` for a required layout column absent from the document.
pub fn match_headers(config: &Config, document: &Document) -> Result<Vec<Option<usize>>> {
    if let Some(unknown) = document
        .headers()
        .iter()
        .find(|h| config.column(&h.name).is_none())
    {
        return Err(MetacsvError::UnknownColumn {
            name: unknown.name.clone(),
        });
    }

    config
        .columns
        .iter()
        .map(|column| match document.column_index(&column.name) {
            Some(index) => Ok(Some(index)),
            None if column.required => Err(MetacsvError::MissingColumn {
                name: column.name.clone(),
            }),
            None => Ok(None),
        })
        .collect()
}
