//! # Commands
//!
//! ```text
//! commands/
//! ├── mod.rs          ◄─── Dispatch from a parsed `Command`
//! ├── report.rs       ◄─── validate, compute, table, chart, report
//! └── interactive.rs  ◄─── Worksheet session on stdin
//! ```

pub mod interactive;
pub mod report;

use std::io::{BufRead, Write};

use crate::cli::Command;
use crate::config::CliConfig;
use crate::error::CliError;
use report::Section;

/// Executes one command, reading session input from `input` and writing
/// results to `out`.
pub fn execute<R: BufRead, W: Write>(
    command: &Command,
    config: &CliConfig,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let (section, args) = match command {
        Command::Validate(args) => (Section::Validate, args),
        Command::Compute(args) => (Section::Compute, args),
        Command::Table(args) => (Section::Table, args),
        Command::Chart(args) => (Section::Chart, args),
        Command::Report(args) => (Section::Full, args),
        Command::Interactive => return interactive::run_session(input, out, config),
    };

    let inputs = args.parse()?;
    let report = report::build_report(section, inputs)?;
    report::write_report(&report, config, out)
}
