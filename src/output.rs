//! Output formatting and persistence for graded results.
//!
//! Supports the augmented CSV file plus pretty and JSON run summaries.

use anyhow::Result;
use csv::{Terminator, WriterBuilder};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{GradeError, GradeResult};
use crate::stats::StudentResult;
use crate::transform::RunSummary;

/// Columns appended to the input header, in output order.
pub const EXTRA_COLUMNS: [&str; 5] = ["Average", "Grade", "Min Score", "Max Score", "Result"];

/// Logs a run summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &RunSummary) {
    debug!("{:#?}", summary);
}

/// Prints a run summary as pretty JSON on stdout.
pub fn print_json(summary: &RunSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes `results` to `path`, creating or truncating the file.
///
/// The header row is `header` followed by [`EXTRA_COLUMNS`]; each result
/// follows as one row in the order given.
pub fn write_results(path: &Path, header: &[String], results: &[StudentResult]) -> GradeResult<()> {
    let write_err = |source: csv::Error| GradeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false) // header comes from the input file
        .terminator(Terminator::CRLF)
        .from_path(path)
        .map_err(write_err)?;

    let columns = header
        .iter()
        .map(String::as_str)
        .chain(EXTRA_COLUMNS);
    writer.write_record(columns).map_err(write_err)?;

    for result in results {
        writer.serialize(result).map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;

    info!(path = %path.display(), rows = results.len(), "Results written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ScoreSet;
    use std::fs;
    use tempfile::tempdir;

    fn header() -> Vec<String> {
        ["Name", "S1", "S2", "S3"].map(String::from).to_vec()
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&RunSummary::default());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&RunSummary::default()).unwrap();
    }

    #[test]
    fn test_write_results_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let results = vec![StudentResult::from_scores("Alice", ScoreSet::new([90, 80, 70]))];

        write_results(&path, &header(), &results).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,S1,S2,S3,Average,Grade,Min Score,Max Score,Result",
                "Alice,90,80,70,80.0,B,70,90,Pass",
            ]
        );
    }

    #[test]
    fn test_rows_end_with_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let results = vec![StudentResult::from_scores("Alice", ScoreSet::new([90, 80, 70]))];

        write_results(&path, &header(), &results).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Name,S1,S2,S3,Average,Grade,Min Score,Max Score,Result\r\n\
             Alice,90,80,70,80.0,B,70,90,Pass\r\n"
        );
    }

    #[test]
    fn test_fractional_average() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let results = vec![StudentResult::from_scores("Bo", ScoreSet::new([100, 100, 99]))];

        write_results(&path, &header(), &results).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Bo,100,100,99,99.66666666666667,A,99,100,Pass"));
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        write_results(&path, &header(), &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let results = vec![StudentResult::from_scores("Doe, Jane", ScoreSet::new([60, 60, 60]))];

        write_results(&path, &header(), &results).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Doe, Jane\",60,60,60,60.0,C,60,60,Pass"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.csv");

        let err = write_results(&path, &header(), &[]).unwrap_err();
        assert!(matches!(err, GradeError::Write { .. }));
    }
}
