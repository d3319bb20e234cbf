//! Monthly records and the month-range fold.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::{PeriodStat, round2};

/// MonthRecord represents one calendar month of betting activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Human-readable month label, unique within a table (e.g. "August 2025").
    pub month: String,
    /// Net profit in units.
    pub profit: Decimal,
    /// Number of settled bets.
    pub bets: u32,
    /// Total amount staked in units.
    pub staked: Decimal,
}

impl MonthRecord {
    pub fn new(month: impl Into<String>, profit: Decimal, bets: u32, staked: Decimal) -> Self {
        Self {
            month: month.into(),
            profit,
            bets,
            staked,
        }
    }

    /// Return on investment for the month, rounded to two decimals.
    ///
    /// Zero when nothing was staked.
    pub fn roi(&self) -> Decimal {
        if self.staked.is_zero() {
            return Decimal::ZERO;
        }
        round2(self.profit / self.staked * Decimal::ONE_HUNDRED)
    }
}

/// Parses a month label like "August 2025", "Aug 2025" or "Jan 25" into the
/// first day of that month. Two-digit years land in the 2000s.
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    let padded = format!("1 {}", label.trim());
    let date = NaiveDate::parse_from_str(&padded, "%d %B %Y").ok()?;
    if date.year() < 100 {
        date.with_year(date.year() + 2000)
    } else {
        Some(date)
    }
}

/// MonthTable is the immutable month series, held oldest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthTable {
    records: Vec<MonthRecord>,
}

impl MonthTable {
    /// Builds a table from records, ordering them oldest-first by their
    /// parsed month label. Records with unrecognized labels keep their
    /// relative order at the end of the table.
    pub fn new(mut records: Vec<MonthRecord>) -> Self {
        records.sort_by_key(|r| parse_month_label(&r.month).unwrap_or(NaiveDate::MAX));
        Self { records }
    }

    /// Records oldest-first, the canonical internal order.
    pub fn records(&self) -> &[MonthRecord] {
        &self.records
    }

    /// Records newest-first, the order results are presented in.
    pub fn newest_first(&self) -> impl Iterator<Item = &MonthRecord> {
        self.records.iter().rev()
    }

    /// Label of the earliest month in the table, if any.
    pub fn earliest(&self) -> Option<&str> {
        self.records.first().map(|r| r.month.as_str())
    }

    /// Sums a run of records into a period summary.
    ///
    /// ROI divides the rounded profit by the summed stakes; a zero stake sum
    /// yields zero ROI rather than a division error.
    pub fn fold(records: &[MonthRecord]) -> PeriodStat {
        let total_bets = records.iter().map(|r| r.bets).sum();
        let profit_units = round2(records.iter().map(|r| r.profit).sum());
        let total_staked: Decimal = records.iter().map(|r| r.staked).sum();
        let roi = if total_staked.is_zero() {
            Decimal::ZERO
        } else {
            round2(profit_units / total_staked * Decimal::ONE_HUNDRED)
        };
        PeriodStat {
            total_bets,
            profit_units,
            roi,
            total_staked,
        }
    }

    /// Aggregates every month from `start_month` (exact label match) to the
    /// newest month in the table.
    ///
    /// An unknown label degrades to the published all-time summary. So does
    /// the earliest month itself: the published constant is allowed to differ
    /// slightly from the recomputed fold, and the published figure wins.
    pub fn stats_since(&self, start_month: &str, all_time: &PeriodStat) -> PeriodStat {
        let Some(index) = self.records.iter().position(|r| r.month == start_month) else {
            return all_time.clone();
        };
        if index == 0 {
            return all_time.clone();
        }
        Self::fold(&self.records[index..])
    }
}
