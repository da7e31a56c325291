//! Command-line arguments.
//!
//! One subcommand per engine operation, plus `report` (everything at once)
//! and `interactive` (a worksheet session on stdin).

use std::path::PathBuf;

use breakeven_core::validation::{
    parse_amount, ValidationResult, FIELD_FIXED_COSTS, FIELD_PRICE, FIELD_VARIABLE_COST,
};
use breakeven_core::BreakEvenInputs;
use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "breakeven", version, about = "Break-even analysis for a single product")]
pub struct Cli {
    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Currency symbol shown before amounts (overrides config)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check the inputs without computing anything
    Validate(InputArgs),
    /// Contribution margin and break-even point
    Compute(InputArgs),
    /// Projection table around the break-even point (±2 units)
    Table(InputArgs),
    /// Revenue and cost series around the break-even point (±5 units)
    Chart(InputArgs),
    /// Break-even point, projection table and chart series
    Report(InputArgs),
    /// Line-oriented worksheet session on stdin
    Interactive,
}

/// The three raw inputs, kept as text so parse failures are reported with
/// the same messages as range failures.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Unit sale price
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: String,

    /// Total fixed costs for the period
    #[arg(short, long, allow_hyphen_values = true)]
    pub fixed_costs: String,

    /// Variable cost per unit
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub variable_cost: String,
}

impl InputArgs {
    /// Parses the raw text into numbers. Range checks happen later.
    pub fn parse(&self) -> ValidationResult<BreakEvenInputs> {
        Ok(BreakEvenInputs::new(
            parse_amount(FIELD_PRICE, &self.price)?,
            parse_amount(FIELD_FIXED_COSTS, &self.fixed_costs)?,
            parse_amount(FIELD_VARIABLE_COST, &self.variable_cost)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compute_command() {
        let cli = Cli::try_parse_from([
            "breakeven",
            "compute",
            "--price",
            "10",
            "--fixed-costs",
            "500",
            "--variable-cost",
            "4",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.parse().unwrap(), BreakEvenInputs::new(10.0, 500.0, 4.0));
    }

    #[test]
    fn test_negative_values_reach_the_validator() {
        let cli = Cli::try_parse_from(["breakeven", "table", "-p", "-5", "-f", "100", "-c", "8"]).unwrap();
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        assert_eq!(args.parse().unwrap().price, -5.0);
    }

    #[test]
    fn test_unparseable_input() {
        let args = InputArgs {
            price: "ten".to_string(),
            fixed_costs: "500".to_string(),
            variable_cost: "4".to_string(),
        };
        let err = args.parse().unwrap_err();
        assert_eq!(err.field(), FIELD_PRICE);
    }
}
