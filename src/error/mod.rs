//! Error types and handling for `metacsv`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Wraps codec errors from `metacsv-codec` unchanged
//! - Provides recovery hints and stable error codes for JSON error output
//! - Supports `anyhow` for errors raised at the CLI boundary

use std::path::PathBuf;

use metacsv_codec::CodecError;
use serde_json::{Value, json};
use thiserror::Error;

/// Primary error type for `metacsv` operations.
#[derive(Error, Debug)]
pub enum MetacsvError {
    // === Codec Errors ===
    /// Document assembly or parsing failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    // === Input Errors ===
    /// Export input is not a JSON array of objects.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Imported document has a column the layout does not define.
    #[error("Unknown column in document: {name}")]
    UnknownColumn { name: String },

    /// Imported document lacks a column the layout marks as required.
    #[error("Required column missing from document: {name}")]
    MissingColumn { name: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    // === Configuration Errors ===
    /// Config file already present.
    #[error("Already initialized at '{path}'")]
    AlreadyInitialized { path: PathBuf },

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Wrapped anyhow error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A single field validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl MetacsvError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Codec(CodecError::ShapeMismatch { .. }) => "SHAPE_MISMATCH",
            Self::Codec(CodecError::Csv(_)) => "CSV_PARSE_ERROR",
            Self::Codec(_) => "CODEC_ERROR",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::UnknownColumn { .. } => "UNKNOWN_COLUMN",
            Self::MissingColumn { .. } => "MISSING_COLUMN",
            Self::Validation { .. } | Self::ValidationErrors { .. } => "VALIDATION_FAILED",
            Self::AlreadyInitialized { .. } => "ALREADY_INITIALIZED",
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code: 2 for configuration, 3 for bad input data, 4 for
    /// I/O, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::AlreadyInitialized { .. }
            | Self::Validation { .. }
            | Self::ValidationErrors { .. }
            | Self::Yaml(_) => 2,
            Self::Codec(_)
            | Self::InvalidInput { .. }
            | Self::UnknownColumn { .. }
            | Self::MissingColumn { .. }
            | Self::Json(_) => 3,
            Self::FileNotFound(_) | Self::Io(_) => 4,
            Self::Other(_) => 1,
        }
    }

    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Codec(CodecError::ShapeMismatch { .. }) => {
                Some("Every row needs exactly one cell per header")
            }
            Self::UnknownColumn { .. } | Self::MissingColumn { .. } => {
                Some("Run `metacsv headers` to see the expected columns")
            }
            Self::AlreadyInitialized { .. } => Some("Use --force to overwrite"),
            Self::InvalidInput { .. } => Some("Export expects a JSON array of entity objects"),
            Self::Validation { .. } | Self::ValidationErrors { .. } | Self::Yaml(_) => {
                Some("Check the column layout in your config file")
            }
            _ => None,
        }
    }

    /// JSON form for `--json` error output.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "hint": self.suggestion(),
                "exit_code": self.exit_code(),
            }
        })
    }

    /// Human-readable form, with hint on a second line.
    #[must_use]
    pub fn to_human(&self) -> String {
        self.suggestion().map_or_else(
            || format!("Error: {self}"),
            |hint| format!("Error: {self}\nHint: {hint}"),
        )
    }

    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create from multiple validation errors.
    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }
}

/// Result type using `MetacsvError`.
pub type Result<T> = std::result::Result<T, MetacsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_passes_through() {
        let err = MetacsvError::from(CodecError::shape_mismatch(2, 3, 1));
        assert_eq!(err.to_string(), "Row 2 has 1 cells, expected 3");
        assert_eq!(err.code(), "SHAPE_MISMATCH");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_validation_error() {
        let err = MetacsvError::from_validation_errors(vec![ValidationError::new(
            "columns[0].name",
            "cannot be empty",
        )]);
        assert_eq!(
            err.to_string(),
            "Validation failed: columns[0].name: cannot be empty"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_from_validation_errors_single_vs_many() {
        let single = MetacsvError::from_validation_errors(vec![ValidationError::new("a", "b")]);
        assert!(matches!(single, MetacsvError::Validation { .. }));

        let many = MetacsvError::from_validation_errors(vec![
            ValidationError::new("a", "b"),
            ValidationError::new("c", "d"),
        ]);
        assert!(matches!(many, MetacsvError::ValidationErrors { errors } if errors.len() == 2));
    }

    #[test]
    fn test_to_json_shape() {
        let err = MetacsvError::UnknownColumn {
            name: "color".to_string(),
        };
        let value = err.to_json();
        assert_eq!(value["error"]["code"], "UNKNOWN_COLUMN");
        assert_eq!(value["error"]["exit_code"], 3);
        assert!(value["error"]["hint"].is_string());
    }

    #[test]
    fn test_anyhow_error_is_internal() {
        let err = MetacsvError::from(anyhow::anyhow!("opening log file run.log"));
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_human(), "Error: opening log file run.log");
    }

    #[test]
    fn test_to_human_includes_hint() {
        let err = MetacsvError::AlreadyInitialized {
            path: PathBuf::from(".metacsv/config.yaml"),
        };
        assert!(err.to_human().contains("Hint: Use --force"));
        let io = MetacsvError::Io(std::io::Error::other("boom"));
        assert!(!io.to_human().contains("Hint"));
    }
}
