//! Error types for the packing slip generator
//!
//! This module defines all error types that can occur while loading the input
//! files, resolving an order against the catalog, and rendering the slip.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Input Errors**: Malformed catalog rows, invalid structured documents,
//!   unparsable numbers, unresolvable catalog references
//! - **Arithmetic Errors**: Overflow while computing line and order totals
//! - **Render Errors**: Failures while laying out or writing the PDF
//!
//! Every error is terminal for a run; there is no recoverable variant.

use std::path::Path;
use thiserror::Error;

/// Main error type for the packing slip generator
///
/// Each variant includes relevant context to help diagnose and fix the
/// offending input file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlipError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Tabular (catalog) file could not be parsed
    #[error("TSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Structured document could not be deserialized
    ///
    /// Covers syntax errors as well as missing required keys.
    #[error("Invalid document '{path}': {message}")]
    InvalidDocument {
        /// Path of the offending document
        path: String,
        /// Deserializer message
        message: String,
    },

    /// A catalog record lacks a column required to build a line item
    #[error("Catalog record {catalog_no} has no {field} value")]
    MissingField {
        /// Catalog number of the record
        catalog_no: String,
        /// Column that is missing
        field: String,
    },

    /// A numeric field could not be parsed
    #[error("Invalid {field} '{value}' for {catalog_no}")]
    InvalidNumber {
        /// Name of the field (e.g. "qty", "UNIT-PRICE")
        field: String,
        /// The raw value
        value: String,
        /// Catalog number the value belongs to
        catalog_no: String,
    },

    /// An order entry references a catalog number that does not exist
    #[error("Unresolvable catalog reference: {catalog_no}")]
    UnresolvedCatalogReference {
        /// The formatted catalog number that was looked up
        catalog_no: String,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// PDF layout or serialization failed
    #[error("Render error: {message}")]
    RenderError {
        /// Description of the failure
        message: String,
    },
}

// Conversion from io::Error to SlipError
impl From<std::io::Error> for SlipError {
    fn from(error: std::io::Error) -> Self {
        SlipError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SlipError
impl From<csv::Error> for SlipError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SlipError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<lopdf::Error> for SlipError {
    fn from(error: lopdf::Error) -> Self {
        SlipError::RenderError {
            message: error.to_string(),
        }
    }
}

impl From<image::ImageError> for SlipError {
    fn from(error: image::ImageError) -> Self {
        SlipError::RenderError {
            message: format!("logo image: {}", error),
        }
    }
}

// Helper functions for creating common errors

impl SlipError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &Path) -> Self {
        SlipError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Map an I/O error raised while opening `path`
    ///
    /// `NotFound` becomes [`SlipError::FileNotFound`]; everything else keeps
    /// the path in the message.
    pub fn open_failed(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::file_not_found(path)
        } else {
            SlipError::IoError {
                message: format!("Failed to open '{}': {}", path.display(), error),
            }
        }
    }

    /// Create an InvalidDocument error
    pub fn invalid_document(path: &Path, message: impl Into<String>) -> Self {
        SlipError::InvalidDocument {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(catalog_no: &str, field: &str) -> Self {
        SlipError::MissingField {
            catalog_no: catalog_no.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(field: &str, value: &str, catalog_no: &str) -> Self {
        SlipError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
            catalog_no: catalog_no.to_string(),
        }
    }

    /// Create an UnresolvedCatalogReference error
    pub fn unresolved_reference(catalog_no: &str) -> Self {
        SlipError::UnresolvedCatalogReference {
            catalog_no: catalog_no.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        SlipError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a RenderError
    pub fn render(message: impl Into<String>) -> Self {
        SlipError::RenderError {
            message: message.into(),
        }
    }
}
