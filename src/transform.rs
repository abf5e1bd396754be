//! Turns input rows into graded student results.
//!
//! Each row is handled on its own: a row that cannot be graded is logged and
//! skipped, and processing moves on to the next one.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::RowError;
use crate::reader::InputRow;
use crate::stats::{ScoreSet, StudentResult};

/// Minimum field count of a gradeable row: name plus three scores.
pub const MIN_FIELDS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// Reject scores outside 0..=100.
    pub strict: bool,
}

/// Counts collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows_read: usize,
    pub processed: usize,
    pub skipped_incomplete: usize,
    pub skipped_invalid: usize,
}

impl RunSummary {
    pub fn skipped(&self) -> usize {
        self.skipped_incomplete + self.skipped_invalid
    }
}

#[derive(Debug, Clone, Default)]
pub struct Processed {
    pub results: Vec<StudentResult>,
    pub summary: RunSummary,
}

/// Grades a single row.
pub fn grade_row(row: &InputRow, options: &TransformOptions) -> Result<StudentResult, RowError> {
    let Some([name, s1, s2, s3]) = row.fields.get(..MIN_FIELDS) else {
        return Err(RowError::Incomplete {
            fields: row.fields.len(),
        });
    };

    let scores = ScoreSet::parse(
        name,
        [s1.as_str(), s2.as_str(), s3.as_str()],
        options.strict,
    )?;
    Ok(StudentResult::from_scores(name.as_str(), scores))
}

/// Grades every row, keeping input order and dropping rows that fail.
pub fn process_rows(rows: &[InputRow], options: &TransformOptions) -> Processed {
    let mut processed = Processed::default();
    processed.summary.rows_read = rows.len();

    for row in rows {
        match grade_row(row, options) {
            Ok(result) => {
                processed.results.push(result);
                processed.summary.processed += 1;
            }
            Err(e @ RowError::Incomplete { .. }) => {
                warn!(line = row.line, row = ?row.fields, error = %e, "Skipping incomplete row");
                processed.summary.skipped_incomplete += 1;
            }
            Err(e) => {
                error!(line = row.line, student = row.name(), error = %e, "Invalid data for student, skipping row");
                processed.summary.skipped_invalid += 1;
            }
        }
    }

    info!(
        rows_read = processed.summary.rows_read,
        processed = processed.summary.processed,
        skipped = processed.summary.skipped(),
        "Rows graded"
    );

    processed
}
