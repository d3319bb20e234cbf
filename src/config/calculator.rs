//! Profit calculator configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Profit calculator defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Unit value preloaded into the calculator.
    pub default_unit_value: Option<Decimal>,
    /// Start month preselected in the range selector.
    pub default_start_month: Option<String>,
}
