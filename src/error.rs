//! Error types for the grading pipeline.
//!
//! [`GradeError`] covers the fatal cases that stop a run. [`RowError`]
//! describes why a single data row was skipped; it never aborts processing.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while reading the input or writing the output.
#[derive(Debug, Error)]
pub enum GradeError {
    /// The input path does not exist.
    #[error("File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },

    /// Any other failure while reading the input.
    #[error("Error reading file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },

    /// Any failure while creating or writing the output.
    #[error("Error writing file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Underlying cause of a [`GradeError::Read`].
#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    MissingHeader,
}

/// Reasons a data row is dropped from the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has {fields} field(s), expected at least 4")]
    Incomplete { fields: usize },

    #[error("invalid score '{value}' for student {student}")]
    InvalidScore { student: String, value: String },

    #[error("score {score} for student {student} is outside 0..=100")]
    OutOfRange { student: String, score: i64 },
}

/// Result type for fatal pipeline operations.
pub type GradeResult<T> = Result<T, GradeError>;
