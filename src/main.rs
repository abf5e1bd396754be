//! CLI entry point for the grade report tool.
//!
//! Reads a CSV of student names and three scores, and writes a copy with
//! average, grade, min, max and pass/fail columns appended.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use grade_report::{
    config::LogConfig,
    logging,
    output::print_json,
    run,
    transform::TransformOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "grade_report", version)]
#[command(about = "Compute averages, grades and pass/fail for student scores", long_about = None)]
struct Cli {
    /// CSV file with a header row, then name and three scores per row
    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,

    /// CSV file to write results to (created or truncated)
    #[arg(value_name = "OUTPUT_FILE")]
    output: PathBuf,

    /// Skip rows with any score outside 0..=100
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Print a JSON run summary to stdout after writing results
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", Cli::command().render_usage());
            return ExitCode::from(1);
        }
    };

    let log_config = LogConfig::from_env();
    let _file_guard = logging::init(&log_config);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let options = TransformOptions { strict: cli.strict };
    let summary = run(&cli.input, &cli.output, &options)?;

    println!("Results saved to '{}'", cli.output.display());
    info!(
        processed = summary.processed,
        skipped = summary.skipped(),
        "Results saved"
    );

    if cli.json {
        print_json(&summary)?;
    }

    Ok(())
}
