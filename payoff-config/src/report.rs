//! Report rendering parameters.
//!
//! Controls how the period trace is written to stdout:
//! - Output format (column table or JSON)
//! - Column width and decimal places for the table
//! - Whether the payoff summary follows the table

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct ReportConfig {
    /// `table` or `json`.
    #[serde(default = "default_format")]
    #[validate(custom(function = validation::validate_format))]
    pub format: String,

    /// Width of each value column.
    #[serde(default = "default_column_width")]
    #[validate(range(min = 4, max = 40))]
    pub column_width: usize,

    /// Decimal places printed for amounts.
    #[serde(default = "default_precision")]
    #[validate(range(max = 8))]
    pub precision: usize,

    /// Print months-to-payoff and totals after the table.
    #[serde(default = "default_true")]
    pub summary: bool,
}

fn default_format() -> String {
    "table".into()
}

fn default_column_width() -> usize {
    12
}

fn default_precision() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            column_width: default_column_width(),
            precision: default_precision(),
            summary: default_true(),
        }
    }
}
