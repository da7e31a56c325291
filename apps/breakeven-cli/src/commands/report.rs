//! # One-shot Commands
//!
//! `validate`, `compute`, `table`, `chart` and `report`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw args ──► parse ──► Worksheet::set_inputs                           │
//! │                              │                                          │
//! │                  validate ◄──┤  (every command)                        │
//! │                              ▼                                          │
//! │                  calculate ──► result + table                          │
//! │                              │                                          │
//! │                  chart_series (re-validates) ──► points + references   │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                  Report ──► text or JSON                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use breakeven_core::{
    validate_inputs, BreakEvenInputs, BreakEvenOutlook, BreakEvenResult, ChartSeries,
    ProjectionRow, Worksheet,
};
use serde::Serialize;
use tracing::debug;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::render;

/// Which parts of the analysis a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Validate,
    Compute,
    Table,
    Chart,
    Full,
}

impl Section {
    fn wants_table(self) -> bool {
        matches!(self, Section::Table | Section::Full)
    }

    fn wants_chart(self) -> bool {
        matches!(self, Section::Chart | Section::Full)
    }
}

/// Structured command output. Absent parts are omitted from JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub inputs: BreakEvenInputs,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<BreakEvenResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlook: Option<BreakEvenOutlook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<ProjectionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSeries>,
}

/// Runs the requested section against fresh inputs.
pub fn build_report(section: Section, inputs: BreakEvenInputs) -> Result<Report, CliError> {
    debug!(?section, ?inputs, "building report");

    let mut report = Report {
        inputs,
        valid: false,
        result: None,
        outlook: None,
        table: None,
        chart: None,
    };

    if section == Section::Validate {
        validate_inputs(&inputs)?;
        report.valid = true;
        return Ok(report);
    }

    let mut sheet = Worksheet::new();
    sheet.set_inputs(inputs);

    let calculation = sheet.calculate()?;
    report.valid = true;
    report.result = Some(calculation.result);
    report.outlook = Some(calculation.result.outlook());
    if section.wants_table() {
        report.table = Some(calculation.table.clone());
    }

    if section.wants_chart() {
        report.chart = Some(sheet.chart_series()?);
    }

    Ok(report)
}

/// Writes a report in the configured format.
pub fn write_report<W: Write>(report: &Report, config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    match config.output_format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(report, &config.currency_symbol, out)?,
    }
    Ok(())
}

fn write_text<W: Write>(report: &Report, symbol: &str, out: &mut W) -> Result<(), CliError> {
    let Some(result) = report.result.as_ref() else {
        writeln!(out, "Inputs are valid.")?;
        return Ok(());
    };

    write!(out, "{}", render::summary(result, symbol))?;

    if let Some(table) = report.table.as_ref() {
        writeln!(out)?;
        writeln!(out, "Projection table")?;
        write!(out, "{}", render::projection_table(table, symbol))?;
    }

    if let Some(chart) = report.chart.as_ref() {
        writeln!(out)?;
        writeln!(out, "Chart series")?;
        write!(out, "{}", render::chart_series(chart, symbol))?;
    }

    Ok(())
}
