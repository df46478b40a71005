//! Rendering a [`Schedule`] for the terminal.
//!
//! The table has one column per debt in ledger order and six rows per period.
//! Payments keep their negative sign.

use std::io::{self, Write};

use payoff_config::ReportConfig;
use payoff_core::{PeriodResult, Schedule, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub width: usize,
    pub precision: usize,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            width: 12,
            precision: 2,
        }
    }
}

impl From<&ReportConfig> for TableStyle {
    fn from(config: &ReportConfig) -> Self {
        Self {
            width: config.column_width,
            precision: config.precision,
        }
    }
}

pub fn write_table<W: Write>(out: &mut W, schedule: &Schedule, style: TableStyle) -> io::Result<()> {
    for name in &schedule.debts {
        write!(out, "{:>width$} | ", name, width = style.width)?;
    }
    writeln!(out)?;
    writeln!(out)?;

    for period in &schedule.periods {
        write_period(out, period, style)?;
    }
    Ok(())
}

fn write_period<W: Write>(out: &mut W, period: &PeriodResult, style: TableStyle) -> io::Result<()> {
    write_row(out, period.starting(), "starting amount", style)?;
    write_row(out, period.interest(), "interest", style)?;
    write_row(out, period.after_interest(), "new amount", style)?;
    write_row(out, period.minimum_payments(), "minimum payments", style)?;
    write_row(out, period.excess_payments(), "excess payments", style)?;
    write_row(out, period.ending(), "ending amount", style)?;
    writeln!(out)
}

fn write_row<W, I>(out: &mut W, values: I, label: &str, style: TableStyle) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = f64>,
{
    for value in values {
        write!(
            out,
            "{:>width$.precision$} | ",
            positive_zero(value),
            width = style.width,
            precision = style.precision
        )?;
    }
    writeln!(out, "{label}")
}

/// `-0.0` would otherwise print as `-0.00`.
fn positive_zero(value: f64) -> f64 {
    value + 0.0
}

pub fn write_summary<W: Write>(
    out: &mut W,
    schedule: &Schedule,
    style: TableStyle,
) -> io::Result<()> {
    let precision = style.precision;
    match schedule.termination {
        Termination::PaidOff => {
            writeln!(out, "months to payoff: {}", schedule.period_count())?
        }
        Termination::PeriodLimit { limit } => {
            writeln!(out, "not paid off within {limit} months")?
        }
    }
    writeln!(
        out,
        "total interest: {:.precision$}",
        positive_zero(schedule.total_interest())
    )?;
    writeln!(
        out,
        "total paid: {:.precision$}",
        positive_zero(schedule.total_paid())
    )?;

    for (name, payoff) in schedule.debts.iter().zip(schedule.payoff_periods()) {
        let status = match payoff {
            Some(0) => "no balance".to_string(),
            Some(month) => format!("paid off in month {month}"),
            None => "open".to_string(),
        };
        writeln!(out, "{:>width$} | {status}", name, width = style.width)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, schedule: &Schedule) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, schedule)?;
    writeln!(out).map_err(serde_json::Error::io)
}
