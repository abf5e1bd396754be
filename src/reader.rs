//! Loads the input CSV into a header and its data rows.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::{GradeError, GradeResult, ReadFailure};

/// One data row as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub fields: Vec<String>,
}

impl InputRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Field 0, or an empty string when the row has no fields.
    pub fn name(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    fn is_blank(&self) -> bool {
        self.fields.iter().all(String::is_empty)
    }
}

/// Header plus data rows of an input file.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<InputRow>,
}

/// Reads `path` as comma-separated text.
///
/// The first row becomes [`Table::header`]. Rows whose fields are all empty
/// are dropped. Rows may have any number of fields.
///
/// # Errors
///
/// Returns [`GradeError::FileNotFound`] if `path` does not exist and
/// [`GradeError::Read`] on any other failure, including an input with no
/// header row.
pub fn read_table(path: &Path) -> GradeResult<Table> {
    let read_err = |source: ReadFailure| GradeError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GradeError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => read_err(csv::Error::from(e).into()),
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let header: Vec<String> = rdr
        .headers()
        .map_err(|e| read_err(e.into()))?
        .iter()
        .map(str::to_string)
        .collect();
    if header.is_empty() {
        return Err(read_err(ReadFailure::MissingHeader));
    }

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while rdr
        .read_record(&mut record)
        .map_err(|e| read_err(e.into()))?
    {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row = InputRow::new(line, record.iter().map(str::to_string).collect());
        if row.is_blank() {
            debug!(line, "Skipping blank row");
            continue;
        }
        rows.push(row);
    }

    debug!(path = %path.display(), columns = header.len(), rows = rows.len(), "Input loaded");

    Ok(Table { header, rows })
}
