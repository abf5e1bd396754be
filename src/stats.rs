use serde::Serialize;

use crate::error::RowError;
use crate::grade::{Grade, Outcome};

/// Lowest and highest score accepted in strict mode.
pub const SCORE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// The three scores of one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSet([i64; 3]);

impl ScoreSet {
    pub fn new(scores: [i64; 3]) -> Self {
        Self(scores)
    }

    /// Parses three score fields for `student`.
    ///
    /// Surrounding whitespace is ignored. With `strict`, every score must
    /// also fall within [`SCORE_RANGE`].
    pub fn parse(student: &str, fields: [&str; 3], strict: bool) -> Result<Self, RowError> {
        let mut scores = [0i64; 3];
        for (slot, raw) in scores.iter_mut().zip(fields) {
            *slot = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| RowError::InvalidScore {
                    student: student.to_string(),
                    value: raw.to_string(),
                })?;
        }

        if strict {
            if let Some(&score) = scores.iter().find(|s| !SCORE_RANGE.contains(s)) {
                return Err(RowError::OutOfRange {
                    student: student.to_string(),
                    score,
                });
            }
        }

        Ok(Self(scores))
    }

    pub fn scores(&self) -> [i64; 3] {
        self.0
    }

    pub fn average(&self) -> f64 {
        let values = self.0.map(|s| s as f64);
        mean(&values)
    }

    pub fn min(&self) -> i64 {
        self.0.into_iter().min().unwrap_or_default()
    }

    pub fn max(&self) -> i64 {
        self.0.into_iter().max().unwrap_or_default()
    }
}

/// One output row. Field order matches the written CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentResult {
    pub name: String,
    pub score1: i64,
    pub score2: i64,
    pub score3: i64,
    pub average: f64,
    pub grade: Grade,
    pub min_score: i64,
    pub max_score: i64,
    pub result: Outcome,
}

impl StudentResult {
    pub fn from_scores(name: impl Into<String>, scores: ScoreSet) -> Self {
        let average = scores.average();
        let [score1, score2, score3] = scores.scores();
        Self {
            name: name.into(),
            score1,
            score2,
            score3,
            average,
            grade: Grade::from_average(average),
            min_score: scores.min(),
            max_score: scores.max(),
            result: Outcome::from_average(average),
        }
    }
}
