//! # Break-Even CLI Library
//!
//! Everything behind the `breakeven` binary, exposed as a library so the
//! commands can be driven from tests with in-memory input and output.
//!
//! ## Module Organization
//! ```text
//! breakeven_cli/
//! ├── lib.rs          ◄─── You are here (logging setup, run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── File + environment configuration
//! ├── error.rs        ◄─── CliError (code + message)
//! ├── render.rs       ◄─── Aligned text tables, two-decimal money
//! └── commands/
//!     ├── report.rs       ◄─── One-shot commands
//!     └── interactive.rs  ◄─── Worksheet session
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::error::CliError;

/// Filter used by `--verbose`. `breakeven` is the binary's own target.
const VERBOSE_LOG_FILTER: &str = "info,breakeven=debug,breakeven_core=debug,breakeven_cli=debug";

/// Resolves the effective configuration: file and environment, then flags.
pub fn load_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::load(cli.config.as_deref())?;
    Ok(config.with_overrides(cli.currency.clone(), cli.format)?)
}

/// Runs a command against the process's stdin and stdout.
pub fn run(command: &Command, config: &CliConfig) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(command, config, stdin.lock(), &mut out)
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=breakeven_core=debug` - Show engine computations
/// - `--verbose` - Debug for the binary and both crates, info elsewhere
/// - Default: `log_filter` from config (warnings only)
///
/// Logs go to stderr so stdout stays parseable in JSON mode.
pub fn init_tracing(config: &CliConfig, verbose: bool) -> Result<(), CliError> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| CliError::internal(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOG_FILTER;
    use crate::error::ErrorCode;
    use clap::Parser;

    #[test]
    fn test_log_filters_parse() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(EnvFilter::try_new(VERBOSE_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let cli = Cli::try_parse_from([
            "breakeven",
            "--config",
            "/nonexistent/breakeven.toml",
            "validate",
            "-p",
            "10",
            "-f",
            "500",
            "-c",
            "4",
        ])
        .unwrap();

        let err = load_config(&cli).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.starts_with("Failed to load configuration"));
    }

    #[test]
    fn test_long_currency_flag_is_config_error() {
        let cli = Cli::try_parse_from([
            "breakeven",
            "--currency",
            "DOLLARS-US",
            "validate",
            "-p",
            "10",
            "-f",
            "500",
            "-c",
            "4",
        ])
        .unwrap();
        assert_eq!(load_config(&cli).unwrap_err().code, ErrorCode::ConfigError);
    }
}
