//! ## payoff-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! Logs go to stderr so stdout carries only the report.

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
    ///
    /// Calling this more than once is harmless; later calls are ignored.
    pub fn init(default_level: &str) {
        let _ = fmt()
            .with_env_filter(Self::filter(default_level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    fn filter(default_level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }

    /// Records the inputs of a run before the engine starts.
    pub fn log_run_start(source: &str, debts: usize, extra: f64, max_periods: u32) {
        tracing::info!(
            source,
            debts,
            extra,
            max_periods,
            "Starting payoff simulation"
        );
    }
}
