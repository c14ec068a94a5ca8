//! Text formatting functions for `metacsv`.
//!
//! Plain (non-ANSI) lines for terminal output of layouts, decoder results
//! and run summaries.

use std::path::Path;

use metacsv_codec::header::render_header;

use crate::config::ColumnSpec;
use crate::sync::{ExportReport, ImportReport};

/// Format one layout column.
///
/// Format: `{rendered header}  {kind}  -> {field}` plus the entity type for
/// reference kinds.
#[must_use]
pub fn format_column_line(column: &ColumnSpec) -> String {
    let mut line = format!(
        "{:<20} {:<20} -> {}",
        render_header(&column.header()),
        column.kind.as_str(),
        column.field_key()
    );
    if let Some(entity_type) = &column.entity_type {
        line.push_str(&format!(" ({entity_type})"));
    }
    line
}

/// Numbered decoder parts, or `(absent)`.
#[must_use]
pub fn format_split_parts(parts: Option<&[String]>) -> String {
    match parts {
        None => "(absent)".to_string(),
        Some([]) => "(no parts)".to_string(),
        Some(parts) => parts
            .iter()
            .enumerate()
            .map(|(i, part)| format!("{:>3}: {part}", i + 1))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[must_use]
pub fn format_export_summary(report: &ExportReport, output: &Path) -> String {
    format!(
        "Exported {} {} ({} columns) to {}",
        report.entities,
        plural(report.entities, "entity", "entities"),
        report.columns,
        output.display()
    )
}

#[must_use]
pub fn format_import_summary(report: &ImportReport, output: &Path) -> String {
    let mut summary = format!(
        "Imported {} {} ({} columns) to {}",
        report.entities,
        plural(report.entities, "entity", "entities"),
        report.columns,
        output.display()
    );
    if !report.skipped_columns.is_empty() {
        summary.push_str(&format!(
            "\nColumns not in document: {}",
            report.skipped_columns.join(", ")
        ));
    }
    summary
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldKind;

    #[test]
    fn test_format_column_line() {
        let column = ColumnSpec::new("relatedTerms", FieldKind::EntityReferences)
            .entity_type("glossaryTerm");
        let line = format_column_line(&column);
        assert!(line.starts_with("relatedTerms "));
        assert!(line.contains("entityReferences"));
        assert!(line.ends_with("-> relatedTerms (glossaryTerm)"));

        let name = ColumnSpec::new("name", FieldKind::String).required();
        assert!(format_column_line(&name).starts_with("name* "));
    }

    #[test]
    fn test_format_split_parts() {
        assert_eq!(format_split_parts(None), "(absent)");
        assert_eq!(format_split_parts(Some(&[] as &[String])), "(no parts)");
        let parts = vec!["a".to_string(), "b:c".to_string()];
        assert_eq!(format_split_parts(Some(parts.as_slice())), "  1: a\n  2: b:c");
    }

    #[test]
    fn test_summaries() {
        let export = ExportReport {
            entities: 1,
            columns: 3,
        };
        assert_eq!(
            format_export_summary(&export, Path::new("out.csv")),
            "Exported 1 entity (3 columns) to out.csv"
        );

        let import = ImportReport {
            entities: 2,
            columns: 2,
            skipped_columns: vec!["owners".to_string()],
        };
        assert_eq!(
            format_import_summary(&import, Path::new("out.json")),
            "Imported 2 entities (2 columns) to out.json\nColumns not in document: owners"
        );
    }
}
