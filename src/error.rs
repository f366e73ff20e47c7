//! Error types for attendance loading and aggregation

use thiserror::Error;

/// Errors raised at the data source / aggregation boundary
///
/// All variants describe structural problems with the input. None of them
/// are transient, so callers report and abort rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Shape mismatch: '{entity}' has {actual} time-units, expected {expected}")]
    ShapeMismatch {
        entity: String,
        expected: usize,
        actual: usize,
    },

    #[error("Source unavailable: {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },
}

impl AttendanceError {
    pub(crate) fn unavailable(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for attendance operations
pub type Result<T> = std::result::Result<T, AttendanceError>;
