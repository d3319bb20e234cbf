//! Serializable views assembled for presentation surfaces.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{MonthRecord, PeriodStat, SeasonStat};

/// One month as presented, with its derived ROI.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub month: String,
    pub profit: Decimal,
    pub roi: Decimal,
    pub bets: u32,
}

impl From<&MonthRecord> for MonthView {
    fn from(record: &MonthRecord) -> Self {
        Self {
            month: record.month.clone(),
            profit: record.profit,
            roi: record.roi(),
            bets: record.bets,
        }
    }
}

/// Calculator outputs for one unit value and start month.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorView {
    pub unit_value: Decimal,
    pub start_month: Option<String>,
    #[serde(flatten)]
    pub stat: PeriodStat,
    pub total_profit: Decimal,
    pub avg_stake: Decimal,
}

/// The full dashboard payload: all-time summary, seasons newest-first,
/// months newest-first, and the calculator values.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub all_time: PeriodStat,
    pub seasons: Vec<SeasonStat>,
    pub months: Vec<MonthView>,
    pub calculator: CalculatorView,
}
