//! `metacsv-codec` — delimited-text codec for metadata entity records.
//!
//! Flattens entity values into single CSV cells using private delimiters and
//! parses them back. Pure, synchronous and stateless: every function works on
//! caller-owned values and nothing is cached between calls.
//!
//! | Separator | Meaning |
//! |-----------|---------|
//! | `,`       | top-level cell separator |
//! | `;`       | values inside a multi-valued cell |
//! | `:`       | `type:name`, `key:value`, `start:end` |
//! | `\|`      | array elements inside one extension value |
//!
//! # Quick Start
//!
//! ```
//! use metacsv_codec::{Document, Header, RecordBuilder, TagCategory, TagLabel, format};
//!
//! let mut doc = Document::new(vec![Header::required("name"), Header::optional("tags")]);
//! let tags = vec![TagLabel::classification("PII.Sensitive"), TagLabel::classification("Tier.Gold")];
//! doc.add_row(
//!     RecordBuilder::new()
//!         .string(Some("orders"))
//!         .tag_labels(&tags, TagCategory::Classification)
//!         .build(),
//! )
//! .unwrap();
//!
//! assert_eq!(format(&doc).unwrap(), "name*,tags\r\norders,PII.Sensitive\r\n");
//! ```

pub mod decode;
pub mod delimiter;
pub mod document;
pub mod encode;
pub mod error;
pub mod header;
pub mod model;
pub mod record;

pub use document::{Document, format, parse_document, write_document};
pub use error::{CodecError, Result};
pub use header::render;
pub use model::{
    EntityReference, Extension, ExtensionValue, Header, LabelType, Row, Scalar, TagCategory,
    TagLabel, TagSource,
};
pub use record::RecordBuilder;

/// Codec crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
