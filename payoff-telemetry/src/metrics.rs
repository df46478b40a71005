//! ## payoff-telemetry::metrics
//! **Prometheus counters for a simulation run**

use prometheus::{Counter, Encoder, IntCounter, Registry, TextEncoder};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub periods_simulated: IntCounter,
    pub debts_retired: IntCounter,
    pub interest_accrued: Counter,
    pub excess_applied: Counter,
}

impl MetricsRecorder {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let periods_simulated =
            IntCounter::new("payoff_periods_total", "Simulated monthly periods")?;
        let debts_retired = IntCounter::new("payoff_debts_retired_total", "Debts paid to zero")?;
        let interest_accrued =
            Counter::new("payoff_interest_accrued_total", "Interest accrued across all debts")?;
        let excess_applied = Counter::new(
            "payoff_excess_applied_total",
            "Excess payments cascaded to debts",
        )?;

        registry.register(Box::new(periods_simulated.clone()))?;
        registry.register(Box::new(debts_retired.clone()))?;
        registry.register(Box::new(interest_accrued.clone()))?;
        registry.register(Box::new(excess_applied.clone()))?;

        Ok(Self {
            registry,
            periods_simulated,
            debts_retired,
            interest_accrued,
            excess_applied,
        })
    }

    /// Records one period's totals. Negative amounts are ignored since
    /// counters only grow.
    pub fn record_period(&self, interest: f64, excess: f64, retired: usize) {
        self.periods_simulated.inc();
        self.debts_retired.inc_by(retired as u64);
        if interest > 0.0 {
            self.interest_accrued.inc_by(interest);
        }
        if excess > 0.0 {
            self.excess_applied.inc_by(excess);
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_period() {
        let metrics = MetricsRecorder::new().unwrap();
        metrics.record_period(12.5, 40.0, 1);
        metrics.record_period(0.0, -5.0, 0);

        assert_eq!(metrics.periods_simulated.get(), 2);
        assert_eq!(metrics.debts_retired.get(), 1);
        assert!((metrics.interest_accrued.get() - 12.5).abs() < 1e-9);
        assert!((metrics.excess_applied.get() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_gather_metrics() {
        let metrics = MetricsRecorder::new().unwrap();
        metrics.record_period(1.0, 0.0, 0);
        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("payoff_periods_total 1"));
        assert!(text.contains("payoff_interest_accrued_total"));
    }
}
