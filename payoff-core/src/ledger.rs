//! ## payoff-core::ledger
//! **Rate-ordered debt collection**
//!
//! The ledger owns every [`Debt`] for the duration of a run. Its order is fixed
//! at construction (rate descending, ties in input order) and is the priority
//! order used when cascading excess payments.

use std::path::Path;

use tracing::debug;
use validator::Validate;

use crate::debt::{Debt, DebtRecord};
use crate::error::InputError;
use crate::input;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    debts: Vec<Debt>,
}

impl Ledger {
    /// Validates the records and orders them by rate, highest first.
    ///
    /// Equal rates keep their input order.
    pub fn build<I>(records: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = DebtRecord>,
    {
        let mut debts = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            record
                .validate()
                .map_err(|e| InputError::invalid_record(index, &record.name, &e))?;
            debts.push(Debt::from(record));
        }

        // `sort_by` is stable, which is what keeps ties in input order.
        debts.sort_by(|a, b| b.rate.total_cmp(&a.rate));
        debug!(debts = debts.len(), "Ledger built");

        Ok(Self { debts })
    }

    /// Reads a JSON debt file and builds a ledger from it.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        Self::build(input::load_records(path)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        Self::build(input::parse_records(json)?)
    }

    /// Interest each debt would accrue this period, in ledger order.
    ///
    /// Does not touch balances; pass the result to [`Ledger::apply`].
    pub fn accrue_interest(&self) -> Vec<f64> {
        self.debts.iter().map(Debt::monthly_interest).collect()
    }

    /// Adds `amounts[i]` to the balance of debt `i`.
    ///
    /// Payments are negative. No clamping happens here: callers bound payments
    /// by the remaining balance beforehand.
    pub fn apply(&mut self, amounts: &[f64]) {
        debug_assert_eq!(amounts.len(), self.debts.len());
        for (debt, amount) in self.debts.iter_mut().zip(amounts) {
            debt.balance += amount;
        }
    }

    /// True once every balance is exactly zero.
    pub fn all_zero(&self) -> bool {
        self.debts.iter().all(Debt::is_paid_off)
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn balances(&self) -> Vec<f64> {
        self.debts.iter().map(|d| d.balance).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.debts.iter().map(|d| d.name.clone()).collect()
    }

    pub fn total_balance(&self) -> f64 {
        self.debts.iter().map(|d| d.balance).sum()
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}
