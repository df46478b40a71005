//! ## payoff-core::engine
//! **Avalanche simulation loop**
//!
//! Each period the engine:
//! 1. accrues interest on every open balance and adds it,
//! 2. pays each debt's minimum, capped at what is owed,
//! 3. pools the extra contribution with every minimum that had nothing left
//!    to pay (debts already at zero, and the overshoot of capped payments),
//! 4. cascades that pool down the ledger, highest rate first.
//!
//! The run ends once every balance is exactly zero. A period guard stops runs
//! whose payments never outpace interest.

use tracing::{debug, info, instrument, warn};

use crate::debt::Debt;
use crate::ledger::Ledger;
use crate::schedule::{PeriodLine, PeriodResult, Schedule, Termination};

/// One hundred years of monthly periods.
pub const DEFAULT_MAX_PERIODS: u32 = 1200;

/// Drives a [`Ledger`] to zero one period at a time.
///
/// The engine is an iterator over [`PeriodResult`]s; it yields nothing once all
/// balances are zero or the period guard is reached.
#[derive(Debug)]
pub struct SimulationEngine {
    ledger: Ledger,
    extra: f64,
    max_periods: u32,
    period: u32,
    limit_reached: bool,
}

impl SimulationEngine {
    /// `extra` is contributed every period on top of the minimum payments.
    /// Zero and negative values are accepted.
    pub fn new(ledger: Ledger, extra: f64) -> Self {
        Self {
            ledger,
            extra,
            max_periods: DEFAULT_MAX_PERIODS,
            period: 0,
            limit_reached: false,
        }
    }

    pub fn with_max_periods(mut self, max_periods: u32) -> Self {
        self.max_periods = max_periods;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn extra(&self) -> f64 {
        self.extra
    }

    /// Number of periods simulated so far.
    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn is_done(&self) -> bool {
        self.ledger.all_zero() || self.period >= self.max_periods
    }

    /// Simulates one period unconditionally and returns its trace.
    pub fn step(&mut self) -> PeriodResult {
        self.period += 1;

        let starting = self.ledger.balances();

        let interest = self.ledger.accrue_interest();
        self.ledger.apply(&interest);
        let after_interest = self.ledger.balances();

        let (minimums, freed) = minimum_payments(self.ledger.debts());
        self.ledger.apply(&minimums);

        let excess_pool = self.extra + freed;
        let (excess, remaining) = cascade(self.ledger.debts(), excess_pool);
        self.ledger.apply(&excess);

        let ending = self.ledger.balances();

        let lines = (0..starting.len())
            .map(|i| PeriodLine {
                starting: starting[i],
                interest: interest[i],
                after_interest: after_interest[i],
                minimum_payment: minimums[i],
                excess_payment: excess[i],
                ending: ending[i],
            })
            .collect();

        let result = PeriodResult {
            period: self.period,
            lines,
            excess_pool,
            unallocated: remaining.max(0.0),
        };

        debug!(
            period = result.period,
            interest = result.total_interest(),
            excess_pool,
            balance = self.ledger.total_balance(),
            "Period simulated"
        );
        for i in result.retired() {
            info!(
                debt = %self.ledger.debts()[i].name,
                period = result.period,
                "Debt paid off"
            );
        }

        result
    }

    /// Runs to completion and collects the trace.
    #[instrument(skip(self), fields(debts = self.ledger.len(), extra = self.extra))]
    pub fn run(mut self) -> Schedule {
        let debts = self.ledger.names();
        let opening_balances = self.ledger.balances();

        let periods: Vec<PeriodResult> = self.by_ref().collect();

        let termination = if self.ledger.all_zero() {
            Termination::PaidOff
        } else {
            Termination::PeriodLimit {
                limit: self.max_periods,
            }
        };

        let schedule = Schedule {
            debts,
            opening_balances,
            periods,
            termination,
        };
        info!(
            periods = schedule.period_count(),
            total_interest = schedule.total_interest(),
            paid_off = schedule.is_paid_off(),
            "Simulation finished"
        );
        schedule
    }
}

impl Iterator for SimulationEngine {
    type Item = PeriodResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ledger.all_zero() {
            return None;
        }
        if self.period >= self.max_periods {
            if !self.limit_reached {
                warn!(
                    limit = self.max_periods,
                    balance = self.ledger.total_balance(),
                    "Period limit reached with balances outstanding"
                );
                self.limit_reached = true;
            }
            return None;
        }
        Some(self.step())
    }
}

/// Minimum payment per debt (negative) and the capacity those minimums could
/// not use.
///
/// A payment is capped at the remaining balance; the overshoot and the full
/// minimum of an already cleared debt are both freed for the cascade.
fn minimum_payments(debts: &[Debt]) -> (Vec<f64>, f64) {
    let mut freed = 0.0;
    let mut payments = Vec::with_capacity(debts.len());
    for debt in debts {
        if debt.balance > 0.0 {
            let paid = debt.minimum_payment.min(debt.balance);
            freed += debt.minimum_payment - paid;
            payments.push(-paid);
        } else {
            freed += debt.minimum_payment;
            payments.push(0.0);
        }
    }
    (payments, freed)
}

/// Spreads `pool` over the debts in ledger order, clearing each before moving
/// to the next. Returns the (negative) payments and whatever is left over.
fn cascade(debts: &[Debt], pool: f64) -> (Vec<f64>, f64) {
    let mut remaining = pool;
    let payments: Vec<f64> = debts
        .iter()
        .map(|debt| {
            if debt.balance > 0.0 && remaining > 0.0 {
                let paid = remaining.min(debt.balance);
                remaining -= paid;
                -paid
            } else {
                0.0
            }
        })
        .collect();
    (payments, remaining)
}
