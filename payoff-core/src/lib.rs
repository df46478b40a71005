//! # payoff-core
//!
//! Avalanche debt payoff simulation.
//!
//! ### Key Submodules:
//! - `ledger`: rate-ordered debts with accrual and payment operations
//! - `engine`: the month-by-month loop that pays minimums and cascades excess
//! - `schedule`: per-period trace records for reporting
//! - `input`: JSON debt file loading

pub mod debt;
pub mod engine;
pub mod error;
pub mod input;
pub mod ledger;
pub mod schedule;

pub mod prelude {
    pub use crate::debt::*;
    pub use crate::engine::*;
    pub use crate::error::*;
    pub use crate::ledger::*;
    pub use crate::schedule::*;
}

pub use debt::{Debt, DebtRecord};
pub use engine::{SimulationEngine, DEFAULT_MAX_PERIODS};
pub use error::InputError;
pub use ledger::Ledger;
pub use schedule::{PeriodLine, PeriodResult, Schedule, Termination};
