//! # Interactive Session
//!
//! A line-oriented worksheet: set fields, calculate, chart, clear.
//!
//! ```text
//! > price 10
//! > fixed 500
//! > variable 4
//! > chart
//! error: compute break-even first
//! > calc
//! Contribution margin per unit: Q6.00
//! ...
//! > chart
//! ...
//! > clear
//! ```
//!
//! Every error is printed and the session continues; only I/O failures end
//! it early.

use std::io::{BufRead, Write};

use breakeven_core::validation::{parse_amount, FIELD_FIXED_COSTS, FIELD_PRICE, FIELD_VARIABLE_COST};
use breakeven_core::Worksheet;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::render;

const HELP: &str = "\
Commands:
  price <amount>      set the unit sale price
  fixed <amount>      set the total fixed costs
  variable <amount>   set the variable cost per unit
  calc                compute break-even and the projection table
  chart               show the chart series (after calc)
  show                show the current inputs
  clear               reset inputs and results
  help                show this message
  quit                leave the session";

/// Runs the session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &CliConfig,
) -> Result<(), CliError> {
    let mut sheet = Worksheet::new();
    let symbol = config.currency_symbol.as_str();

    writeln!(out, "Break-even worksheet. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let argument = words.collect::<Vec<_>>().join(" ");
        debug!(command, "session command");

        match command {
            "price" | "fixed" | "variable" => {
                let field = match command {
                    "price" => FIELD_PRICE,
                    "fixed" => FIELD_FIXED_COSTS,
                    _ => FIELD_VARIABLE_COST,
                };
                match parse_amount(field, &argument) {
                    Ok(value) => {
                        let mut inputs = *sheet.inputs();
                        match command {
                            "price" => inputs.price = value,
                            "fixed" => inputs.fixed_costs = value,
                            _ => inputs.variable_cost_per_unit = value,
                        }
                        sheet.set_inputs(inputs);
                    }
                    Err(err) => writeln!(out, "error: {}", err)?,
                }
            }
            "calc" | "calculate" => match sheet.calculate() {
                Ok(calculation) => {
                    write!(out, "{}", render::summary(&calculation.result, symbol))?;
                    write!(out, "{}", render::projection_table(&calculation.table, symbol))?;
                }
                Err(err) => writeln!(out, "error: {}", CliError::from(err))?,
            },
            "chart" | "graph" => match sheet.chart_series() {
                Ok(series) => write!(out, "{}", render::chart_series(&series, symbol))?,
                Err(err) => writeln!(out, "error: {}", CliError::from(err))?,
            },
            "show" => {
                let inputs = sheet.inputs();
                writeln!(out, "price:                  {}", inputs.price)?;
                writeln!(out, "fixed costs:            {}", inputs.fixed_costs)?;
                writeln!(out, "variable cost per unit: {}", inputs.variable_cost_per_unit)?;
                let status = if sheet.calculation().is_some() {
                    "calculated"
                } else {
                    "not calculated"
                };
                writeln!(out, "status:                 {}", status)?;
            }
            "clear" | "reset" => {
                sheet.reset();
                writeln!(out, "Cleared.")?;
            }
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(out, "error: unknown command '{}' (try 'help')", other)?,
        }
    }

    Ok(())
}
