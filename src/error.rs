//! Unified error types for bom-merge.
//!
//! Only boundary validation failures surface as errors: a malformed table
//! file, mismatched table shapes handed to the comparator, a missing
//! snapshot slot. Internal tree operations (suffix bump, traversal, rename
//! with zero matches) are total and fall back to identity/empty results.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bom-merge operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomMergeError {
    /// Errors reading or validating a flat table
    #[error("Failed to load table: {context}")]
    Tabular {
        context: String,
        #[source]
        source: TabularErrorKind,
    },

    /// Errors during revision comparison
    #[error("Comparison failed: {context}")]
    Compare {
        context: String,
        #[source]
        source: CompareErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A named snapshot slot does not exist in the store
    #[error("No snapshot in slot '{0}'")]
    SlotNotFound(String),
}

/// Specific table-loading error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TabularErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Inconsistent row shape: row {row} {detail}")]
    InconsistentShape { row: usize, detail: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Specific comparison error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CompareErrorKind {
    #[error("Table shapes differ: old has {old_columns} columns, new has {new_columns}")]
    ShapeMismatch {
        old_columns: usize,
        new_columns: usize,
    },
}

/// Convenient Result type for bom-merge operations
pub type Result<T> = std::result::Result<T, BomMergeError>;

impl BomMergeError {
    /// Create a table error with context
    pub fn tabular(context: impl Into<String>, source: TabularErrorKind) -> Self {
        Self::Tabular {
            context: context.into(),
            source,
        }
    }

    /// Create a comparison error with context
    pub fn compare(context: impl Into<String>, source: CompareErrorKind) -> Self {
        Self::Compare {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: message.into(),
            source,
        }
    }

    /// Create a shape error for a specific row of a table
    pub fn inconsistent_shape(
        context: impl Into<String>,
        row: usize,
        detail: impl Into<String>,
    ) -> Self {
        Self::tabular(
            context,
            TabularErrorKind::InconsistentShape {
                row,
                detail: detail.into(),
            },
        )
    }
}
