//! Row assembly.

use crate::encode;
use crate::model::{EntityReference, Extension, Row, TagCategory, TagLabel};

/// Builds one row, one cell per call.
///
/// ```
/// use metacsv_codec::{EntityReference, RecordBuilder};
///
/// let row = RecordBuilder::new()
///     .string(Some("orders"))
///     .owners(&[EntityReference::named("user", "alice")])
///     .bool(None)
///     .build();
/// assert_eq!(row, vec![Some("orders".into()), Some("user:alice".into()), Some(String::new())]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    cells: Row,
}

impl RecordBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            cells: Vec::with_capacity(columns),
        }
    }

    /// Append an already-encoded cell.
    #[must_use]
    pub fn cell(mut self, cell: Option<String>) -> Self {
        self.cells.push(cell);
        self
    }

    #[must_use]
    pub fn bool(self, value: Option<bool>) -> Self {
        self.cell(encode::encode_bool(value))
    }

    #[must_use]
    pub fn string(self, value: Option<&str>) -> Self {
        self.cell(encode::encode_string(value))
    }

    #[must_use]
    pub fn string_list<S: AsRef<str>>(self, values: &[S]) -> Self {
        self.cell(encode::encode_string_list(values))
    }

    #[must_use]
    pub fn entity_reference(self, reference: Option<&EntityReference>) -> Self {
        self.cell(encode::encode_entity_reference(reference))
    }

    #[must_use]
    pub fn entity_references(self, references: &[EntityReference]) -> Self {
        self.cell(encode::encode_entity_references(references))
    }

    #[must_use]
    pub fn tag_labels(self, tags: &[TagLabel], category: TagCategory) -> Self {
        self.cell(encode::encode_tag_labels(tags, category))
    }

    #[must_use]
    pub fn owners(self, owners: &[EntityReference]) -> Self {
        self.cell(encode::encode_owners(owners))
    }

    #[must_use]
    pub fn reviewers(self, reviewers: &[EntityReference]) -> Self {
        self.cell(encode::encode_reviewers(reviewers))
    }

    #[must_use]
    pub fn extension(self, extension: Option<&Extension>) -> Self {
        self.cell(encode::encode_extension(extension))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn build(self) -> Row {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_call_appends_one_cell() {
        let empty: [&str; 0] = [];
        let builder = RecordBuilder::with_capacity(9)
            .bool(Some(true))
            .string(None)
            .string_list(&empty)
            .entity_reference(None)
            .entity_references(&[])
            .tag_labels(&[], TagCategory::Tier)
            .owners(&[])
            .reviewers(&[])
            .extension(None);
        assert_eq!(builder.len(), 9);
        let row = builder.build();
        assert_eq!(row[0].as_deref(), Some("true"));
        assert!(row[1..].iter().all(Option::is_none));
    }
}
