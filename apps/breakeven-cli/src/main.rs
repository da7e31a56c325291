//! # breakeven
//!
//! Command-line entry point. Parses arguments, loads configuration,
//! installs logging and hands off to [`breakeven_cli::run`].

use std::process::ExitCode;

use breakeven_cli::cli::Cli;
use breakeven_cli::config::OutputFormat;
use breakeven_cli::error::CliError;
use clap::Parser;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match breakeven_cli::load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            report_error(&err, cli.format.unwrap_or_default());
            return err.exit_code();
        }
    };

    if let Err(err) = breakeven_cli::init_tracing(&config, cli.verbose) {
        eprintln!("warning: {}", err);
    }

    info!(command = ?cli.command, "starting");

    match breakeven_cli::run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, config.output_format);
            err.exit_code()
        }
    }
}

/// JSON mode keeps errors machine-readable on stdout; text mode uses stderr.
fn report_error(err: &CliError, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(err) {
            Ok(json) => println!("{}", json),
            Err(_) => eprintln!("error: {}", err),
        },
        OutputFormat::Text => eprintln!("error: {}", err),
    }
}
