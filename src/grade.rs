//! Letter grades and pass/fail outcomes derived from a student's average.

use serde::Serialize;
use std::fmt;

/// Average at or above which a student passes.
pub const PASS_THRESHOLD: f64 = 50.0;

/// Letter grade for an average score.
///
/// | Range  | Grade |
/// |--------|-------|
/// | >= 90  | A     |
/// | >= 75  | B     |
/// | >= 60  | C     |
/// | >= 50  | D     |
/// | < 50   | F     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_average(average: f64) -> Self {
        match average {
            a if a >= 90.0 => Grade::A,
            a if a >= 75.0 => Grade::B,
            a if a >= 60.0 => Grade::C,
            a if a >= PASS_THRESHOLD => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass/fail label for an average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn from_average(average: f64) -> Self {
        if average >= PASS_THRESHOLD {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Pass => "Pass",
            Outcome::Fail => "Fail",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_average(100.0), Grade::A);
        assert_eq!(Grade::from_average(90.0), Grade::A);
        assert_eq!(Grade::from_average(89.999), Grade::B);
        assert_eq!(Grade::from_average(75.0), Grade::B);
        assert_eq!(Grade::from_average(74.999), Grade::C);
        assert_eq!(Grade::from_average(60.0), Grade::C);
        assert_eq!(Grade::from_average(59.999), Grade::D);
        assert_eq!(Grade::from_average(50.0), Grade::D);
        assert_eq!(Grade::from_average(49.999), Grade::F);
        assert_eq!(Grade::from_average(0.0), Grade::F);
        assert_eq!(Grade::from_average(-10.0), Grade::F);
    }

    #[test]
    fn test_outcome_threshold() {
        assert_eq!(Outcome::from_average(50.0), Outcome::Pass);
        assert_eq!(Outcome::from_average(49.999), Outcome::Fail);
        assert_eq!(Outcome::from_average(95.0), Outcome::Pass);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Grade::B.to_string(), "B");
        assert_eq!(Outcome::Fail.to_string(), "Fail");
    }
}
