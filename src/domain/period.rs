//! Period summary statistics and the calculator's derived values.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// PeriodStat summarizes betting activity over a range of months.
///
/// Profit and stakes are measured in units, where one unit is 1% of a
/// notional bankroll. ROI is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStat {
    /// Number of settled bets in the period.
    pub total_bets: u32,
    /// Net profit in units.
    pub profit_units: Decimal,
    /// Return on investment as a percentage.
    pub roi: Decimal,
    /// Total amount staked in units.
    pub total_staked: Decimal,
}

impl PeriodStat {
    /// Profit converted to currency for the given unit value.
    pub fn total_profit(&self, unit_value: Decimal) -> Decimal {
        self.profit_units * unit_value
    }

    /// Average stake per bet converted to currency for the given unit value.
    ///
    /// Zero when the period holds no bets.
    pub fn avg_stake(&self, unit_value: Decimal) -> Decimal {
        if self.total_bets == 0 {
            return Decimal::ZERO;
        }
        self.total_staked / Decimal::from(self.total_bets) * unit_value
    }
}

/// Rounds to two decimal places, away from zero on midpoints.
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a user-supplied unit value.
///
/// Takes the leading numeric prefix of the input, so "10 units" parses as 10.
/// Empty or non-numeric input yields zero. Never fails.
pub fn parse_unit_value(input: &str) -> Decimal {
    let trimmed = input.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(Decimal::ZERO)
}
