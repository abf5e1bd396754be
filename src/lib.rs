pub mod config;
pub mod error;
pub mod grade;
pub mod logging;
pub mod output;
pub mod reader;
pub mod stats;
pub mod transform;

use std::path::Path;
use tracing::info;

use crate::error::GradeResult;
use crate::transform::{RunSummary, TransformOptions};

/// Reads `input`, grades every row and writes the augmented CSV to `output`.
///
/// The output file is only touched once the input has been read in full.
pub fn run(input: &Path, output: &Path, options: &TransformOptions) -> GradeResult<RunSummary> {
    let _span = tracing::info_span!("run", input = %input.display()).entered();

    let table = reader::read_table(input)?;
    let processed = transform::process_rows(&table.rows, options);
    output::write_results(output, &table.header, &processed.results)?;

    info!(output = %output.display(), "Run complete");
    output::print_pretty(&processed.summary);

    Ok(processed.summary)
}
