//! Debt records as read from input and as tracked by the ledger.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Number of compounding periods per year. Rates are nominal annual rates.
pub const PERIODS_PER_YEAR: f64 = 12.0;

/// One element of the input debt file.
///
/// Field names follow the file format: `amount` is the starting balance and
/// `payment` is the minimum payment due each period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DebtRecord {
    /// Display label for the debt.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// Starting balance.
    #[validate(range(min = 0.0, message = "amount must be non-negative"))]
    #[validate(custom(function = validate_finite))]
    pub amount: f64,

    /// Nominal annual interest rate as a fraction (0.18 for 18%).
    #[validate(range(min = 0.0, message = "rate must be non-negative"))]
    #[validate(custom(function = validate_finite))]
    pub rate: f64,

    /// Minimum payment due each period.
    #[validate(range(min = 0.0, message = "payment must be non-negative"))]
    #[validate(custom(function = validate_finite))]
    pub payment: f64,
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("must_be_finite"))
    }
}

impl DebtRecord {
    pub fn new(name: impl Into<String>, amount: f64, rate: f64, payment: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            rate,
            payment,
        }
    }
}

/// A single loan or credit line inside a [`Ledger`](crate::Ledger).
///
/// Only `balance` changes during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Debt {
    pub name: String,
    pub balance: f64,
    pub rate: f64,
    pub minimum_payment: f64,
}

impl Debt {
    /// Interest accrued over one period on the current balance.
    #[inline]
    pub fn monthly_interest(&self) -> f64 {
        if self.balance > 0.0 {
            self.balance * (self.rate / PERIODS_PER_YEAR)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_paid_off(&self) -> bool {
        self.balance == 0.0
    }
}

impl From<DebtRecord> for Debt {
    fn from(record: DebtRecord) -> Self {
        Self {
            name: record.name,
            // `+ 0.0` turns a `-0.0` input into `0.0`.
            balance: record.amount + 0.0,
            rate: record.rate + 0.0,
            minimum_payment: record.payment + 0.0,
        }
    }
}
