//! Row classification: the one place positional field access happens.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{MonthRecord, parse_month_label, season_label};

use super::csv::RawRow;
use super::numeric::{coerce_count, coerce_decimal};

/// Column holding the value of a labeled statistic row.
const VALUE_FIELD: usize = 2;
/// Columns holding profit, ROI and bet count on season and month rows.
const PROFIT_FIELD: usize = 2;
const ROI_FIELD: usize = 3;
const BETS_FIELD: usize = 4;
/// Optional staked column on month rows.
const STAKED_FIELD: usize = 5;

/// Statistic labels recognized in the first column of the results sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLabel {
    TotalBets,
    Profit,
    Roi,
    TotalStaked,
}

impl StatLabel {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "total bets" => Some(Self::TotalBets),
            "profit" => Some(Self::Profit),
            "roi" => Some(Self::Roi),
            "total staked" => Some(Self::TotalStaked),
            _ => None,
        }
    }
}

/// A row reduced to its recognized shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    /// An all-time statistic cell, e.g. `Total Bets,,3077`.
    Stat { label: StatLabel, value: String },
    /// A season override row, e.g. `Season 24/25,,233.73,12.73,1967`.
    ///
    /// Fields that fail numeric coercion are None and leave the derived
    /// season value untouched.
    Season {
        label: String,
        profit: Option<Decimal>,
        roi: Option<Decimal>,
        bets: Option<u32>,
    },
    /// A month row, e.g. `August 2025,,29.35,11.66,242,251.70`.
    Month { date: NaiveDate, record: MonthRecord },
    /// Anything else; callers skip these.
    Other,
}

/// Classifies a parsed row.
///
/// Matching on the first field is case-insensitive and trimmed. Statistic
/// labels are exact matches, month labels must parse as a calendar month,
/// and season rows only need a season-like token ("24/25", "2024/25",
/// "2024/2025") somewhere in the field. Season labels are normalized to the
/// four-digit form.
pub fn classify(row: &RawRow) -> RowKind {
    let Some(first) = row.field(0) else {
        return RowKind::Other;
    };
    if first.is_empty() {
        return RowKind::Other;
    }

    if let Some(label) = StatLabel::from_label(&first.to_lowercase()) {
        return RowKind::Stat {
            label,
            value: row.field(VALUE_FIELD).unwrap_or_default().to_string(),
        };
    }

    if let Some(date) = parse_month_label(first) {
        if let Some(record) = month_record(row, first) {
            return RowKind::Month { date, record };
        }
        return RowKind::Other;
    }

    if let Some(start_year) = season_token(first) {
        return RowKind::Season {
            label: season_label(start_year),
            profit: row.field(PROFIT_FIELD).and_then(coerce_decimal),
            roi: row.field(ROI_FIELD).and_then(coerce_decimal),
            bets: row.field(BETS_FIELD).and_then(coerce_count),
        };
    }

    RowKind::Other
}

/// Builds a month record from a month-labeled row.
///
/// Profit is required; a month row without a coercible profit cell is
/// skipped. When the staked column is absent, the stake is back-computed
/// from the published ROI (`profit / roi * 100`), the inverse of how ROI is
/// derived everywhere else. No ROI either means a zero stake.
fn month_record(row: &RawRow, label: &str) -> Option<MonthRecord> {
    let profit = row.field(PROFIT_FIELD).and_then(coerce_decimal)?;
    let bets = row.field(BETS_FIELD).and_then(coerce_count).unwrap_or(0);
    let staked = match row.field(STAKED_FIELD).and_then(coerce_decimal) {
        Some(staked) => staked,
        None => {
            let roi = row.field(ROI_FIELD).and_then(coerce_decimal);
            match roi {
                Some(roi) if !roi.is_zero() => profit / roi * Decimal::ONE_HUNDRED,
                _ => Decimal::ZERO,
            }
        }
    };
    Some(MonthRecord::new(label, profit, bets, staked))
}

/// Finds a season-like token and returns the starting year, normalized to
/// four digits. Both years may be two or four digits; the second year must
/// follow the first.
fn season_token(text: &str) -> Option<i32> {
    for (i, _) in text.match_indices('/') {
        let before: String = text[..i]
            .chars()
            .rev()
            .take_while(char::is_ascii_digit)
            .collect();
        let after: String = text[i + 1..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        if !matches!(before.len(), 2 | 4) || !matches!(after.len(), 2 | 4) {
            continue;
        }

        let before: String = before.chars().rev().collect();
        let start = expand_year(before.parse().ok()?);
        let end = expand_year(after.parse().ok()?);
        if end == start + 1 {
            return Some(start);
        }
    }
    None
}

fn expand_year(year: i32) -> i32 {
    if year < 100 { 2000 + year } else { year }
}
