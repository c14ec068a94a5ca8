//! Whole-document formatting and parsing.
//!
//! Top-level CSV follows RFC 4180: `,` between cells, CRLF after every row,
//! and cells holding `,`, `"`, CR or LF wrapped in quotes with inner quotes
//! doubled. This layer knows nothing about the `;`, `:` and `|` sub-grammar
//! inside cells.

use std::io::Write;

use tracing::debug;

use crate::error::{CodecError, Result};
use crate::header::{parse_header, render};
use crate::model::{Header, Row};

/// Headers plus positionally aligned rows.
///
/// Every row has exactly one cell per header; [`Document::add_row`] enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    headers: Vec<Header>,
    rows: Vec<Row>,
}

impl Document {
    #[must_use]
    pub fn new(headers: Vec<Header>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a document from headers and rows, checking every row's width.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for the first row whose cell count differs from
    /// the header count.
    pub fn from_parts(headers: Vec<Header>, rows: Vec<Row>) -> Result<Self> {
        let mut document = Self::new(headers);
        for row in rows {
            document.add_row(row)?;
        }
        Ok(document)
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the row does not have one cell per header.
    /// Row numbers in the error are 1-based and count data rows only.
    pub fn add_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(CodecError::shape_mismatch(
                self.rows.len() + 1,
                self.headers.len(),
                row.len(),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Position of the column named `name`, ignoring the required marker.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.name == name)
    }

    /// Cell at `row`, `column`; `None` when absent or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Format a document as CSV text.
///
/// A document without headers formats as empty text.
///
/// # Errors
///
/// Returns an error if the CSV writer fails, which does not happen for
/// in-memory output in practice.
pub fn format(document: &Document) -> Result<String> {
    let mut output = Vec::new();
    write_document(&mut output, document)?;
    Ok(String::from_utf8(output)?)
}

/// Write a document as CSV to `writer`.
///
/// # Errors
///
/// Returns an error if writing to the underlying writer fails.
pub fn write_document<W: Write>(writer: W, document: &Document) -> Result<()> {
    if document.headers.is_empty() {
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(render(&document.headers))?;
    for row in &document.rows {
        csv_writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    csv_writer.flush()?;

    debug!(
        columns = document.headers.len(),
        rows = document.rows.len(),
        "formatted document"
    );
    Ok(())
}

/// Parse CSV text into a document.
///
/// The first record is the header row; a trailing `*` marks a required column.
/// Empty cells become absent.
///
/// # Errors
///
/// Returns `Csv` for malformed top-level CSV and `ShapeMismatch` for a row
/// whose width differs from the header row.
pub fn parse_document(text: &str) -> Result<Document> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<Header> = reader.headers()?.iter().map(parse_header).collect();
    let mut document = Document::new(headers);

    for record in reader.records() {
        let record = record?;
        let row: Row = record
            .iter()
            .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
            .collect();
        document.add_row(row)?;
    }

    debug!(
        columns = document.headers.len(),
        rows = document.rows.len(),
        "parsed document"
    );
    Ok(document)
}
