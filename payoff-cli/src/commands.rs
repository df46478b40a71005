use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use payoff_config::PayoffConfig;
use payoff_core::{Ledger, Schedule, SimulationEngine, Termination};
use payoff_telemetry::{EventLogger, MetricsRecorder};
use tracing::{debug, warn};

use crate::error::CliError;
use crate::report::{self, TableStyle};

const LONG_ABOUT: &str = "\
This tool takes in a list of debts (see DEBT) and uses the avalanche \
philosophy of debt management to pay off debts. Each time a debt is paid \
off, its payment amount (along with any EXTRA) will be put towards the next \
highest rate debt.";

/// Simulate paying off debts with the avalanche method.
#[derive(Parser, Debug, Clone)]
#[command(name = "payoff", version, about, long_about = LONG_ABOUT, allow_negative_numbers = true)]
pub struct Cli {
    /// The file detailing debts in a JSON array format. Each element in the
    /// array must have a debt name `name`, debt amount `amount`, interest rate
    /// `rate`, and a minimum payment `payment`.
    #[arg(value_name = "DEBT")]
    pub debt_file: PathBuf,

    /// The extra amount to be paid each month, which will be allocated to the
    /// next highest debt.
    #[arg(value_name = "EXTRA", default_value_t = 0.0, value_parser = parse_amount)]
    pub extra: f64,

    /// Configuration file (defaults to config/payoff.yaml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Stop after this many months if debts are still open
    #[arg(long)]
    pub max_periods: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit the payoff summary after the table
    #[arg(long)]
    pub no_summary: bool,

    /// Print Prometheus metrics to stderr after the run
    #[arg(long)]
    pub metrics: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_amount(value: &str) -> Result<f64, String> {
    let amount: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(format!("'{value}' is not a finite amount"))
    }
}

impl Cli {
    /// Command line flags take precedence over file and environment settings.
    fn apply_overrides(&self, config: &mut PayoffConfig) {
        if let Some(max_periods) = self.max_periods {
            config.engine.max_periods = max_periods;
        }
        if let Some(format) = self.format {
            config.report.format = match format {
                OutputFormat::Table => "table".into(),
                OutputFormat::Json => "json".into(),
            };
        }
        if self.no_summary {
            config.report.summary = false;
        }
        if self.metrics {
            config.telemetry.metrics = true;
        }
    }
}

pub fn run_command(cli: Cli) -> Result<(), CliError> {
    let mut config = PayoffConfig::resolve(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    EventLogger::init(&config.telemetry.log_level);
    debug!(?config, "Configuration loaded");

    let ledger = Ledger::from_json_path(&cli.debt_file)?;
    EventLogger::log_run_start(
        &cli.debt_file.display().to_string(),
        ledger.len(),
        cli.extra,
        config.engine.max_periods,
    );

    let metrics = if config.telemetry.metrics {
        Some(MetricsRecorder::new()?)
    } else {
        None
    };

    let schedule = SimulationEngine::new(ledger, cli.extra)
        .with_max_periods(config.engine.max_periods)
        .run();

    if let Some(metrics) = &metrics {
        record_metrics(metrics, &schedule);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Validation guarantees the configured format is one of the known names.
    let format = OutputFormat::from_str(&config.report.format, true).unwrap_or(OutputFormat::Table);
    match format {
        OutputFormat::Table => {
            let style = TableStyle::from(&config.report);
            report::write_table(&mut out, &schedule, style)?;
            if config.report.summary {
                report::write_summary(&mut out, &schedule, style)?;
            }
        }
        OutputFormat::Json => report::write_json(&mut out, &schedule)?,
    }
    out.flush()?;

    if let Some(metrics) = &metrics {
        eprint!("{}", metrics.gather_metrics()?);
    }

    match schedule.termination {
        Termination::PaidOff => Ok(()),
        Termination::PeriodLimit { limit } => {
            warn!(limit, "Simulation stopped before all debts were paid off");
            Err(CliError::PeriodLimit { limit })
        }
    }
}

fn record_metrics(metrics: &MetricsRecorder, schedule: &Schedule) {
    for period in &schedule.periods {
        metrics.record_period(
            period.total_interest(),
            period.total_excess(),
            period.retired().count(),
        );
    }
}
