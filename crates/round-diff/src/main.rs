//! Line-by-line rounded diff for numeric regression baselines.
//!
//! Entry point for the command-line comparator. Exit codes: 0 when every
//! row matches, 1 for a usage error or any mismatching row, 2 when either
//! input fails to parse as newline-separated floats.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use rd_core::compare_files;

/// Compare two files of newline-separated floats at 6-decimal tolerance.
#[derive(Parser, Debug)]
#[command(name = "round-diff")]
#[command(author, version)]
#[command(about = "Compare two files of newline-separated floats, line by line, \
flagging pairs that differ after rounding to 6 decimal digits")]
struct Args {
    /// File holding the values under test
    actual: PathBuf,
    /// File holding the baseline values
    expected: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Missing or malformed arguments: usage text on stdout, exit 1,
            // no file access.
            log::debug!("argument error: {}", err.kind());
            let mut stdout = io::stdout().lock();
            let _ = write!(stdout, "{}", Args::command().render_help());
            return ExitCode::from(1);
        }
    };

    let mut stdout = io::stdout().lock();
    match compare_files(&args.actual, &args.expected, &mut stdout) {
        Ok(status) => status.into(),
        Err(err) => {
            // Filesystem failures are not comparison verdicts.
            eprintln!("round-diff: {}", err);
            ExitCode::FAILURE
        }
    }
}
