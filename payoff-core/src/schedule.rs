//! Per-period trace records and the collected result of a run.

use serde::Serialize;

/// What happened to one debt during one period.
///
/// Payments use a negative sign convention, so
/// `ending == starting + interest + minimum_payment + excess_payment`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodLine {
    pub starting: f64,
    pub interest: f64,
    pub after_interest: f64,
    pub minimum_payment: f64,
    pub excess_payment: f64,
    pub ending: f64,
}

impl PeriodLine {
    /// Total paid toward this debt in the period, as a positive amount.
    pub fn paid(&self) -> f64 {
        -(self.minimum_payment + self.excess_payment)
    }
}

/// One simulated month, with a line per debt in ledger order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodResult {
    /// 1-based month number.
    pub period: u32,
    pub lines: Vec<PeriodLine>,
    /// Extra contribution plus freed minimum payments available for cascade.
    pub excess_pool: f64,
    /// Portion of the pool left over after every debt was cleared.
    pub unallocated: f64,
}

impl PeriodResult {
    pub fn starting(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(|l| l.starting)
    }

    pub fn interest(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(|l| l.interest)
    }

    pub fn after_interest(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(|l| l.after_interest)
    }

    pub fn minimum_payments(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(|l| l.minimum_payment)
    }

    pub fn excess_payments(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(|l| l.excess_payment)
    }

    pub fn ending(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(|l| l.ending)
    }

    pub fn total_interest(&self) -> f64 {
        self.interest().sum()
    }

    pub fn total_excess(&self) -> f64 {
        -self.excess_payments().sum::<f64>()
    }

    pub fn total_paid(&self) -> f64 {
        self.lines.iter().map(PeriodLine::paid).sum()
    }

    /// Indices of debts that reached zero during this period.
    pub fn retired(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.after_interest > 0.0 && l.ending == 0.0)
            .map(|(i, _)| i)
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Termination {
    /// Every balance reached zero.
    PaidOff,
    /// The period guard tripped with balances still outstanding.
    PeriodLimit { limit: u32 },
}

/// Full trace of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    /// Debt names in ledger (rate descending) order.
    pub debts: Vec<String>,
    pub opening_balances: Vec<f64>,
    pub periods: Vec<PeriodResult>,
    pub termination: Termination,
}

impl Schedule {
    pub fn is_paid_off(&self) -> bool {
        self.termination == Termination::PaidOff
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn total_interest(&self) -> f64 {
        self.periods.iter().map(PeriodResult::total_interest).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.periods.iter().map(PeriodResult::total_paid).sum()
    }

    /// Month in which each debt was cleared. `Some(0)` means it started at
    /// zero, `None` means it was still open when the run stopped.
    pub fn payoff_periods(&self) -> Vec<Option<u32>> {
        self.opening_balances
            .iter()
            .enumerate()
            .map(|(i, &opening)| {
                if opening == 0.0 {
                    return Some(0);
                }
                self.periods
                    .iter()
                    .find(|p| p.lines[i].ending == 0.0)
                    .map(|p| p.period)
            })
            .collect()
    }
}
