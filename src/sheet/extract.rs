//! Label-based extraction of the results snapshot.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{MonthRecord, MonthTable, ResultsData, derive_seasons};

use super::classify::{RowKind, StatLabel, classify};
use super::csv::RawRow;
use super::numeric::{coerce_count, coerce_decimal};

/// Folds classified rows over the fallback defaults.
///
/// Every field keeps its default unless a row supplies a value that coerces
/// cleanly; when a label appears more than once, the last write wins. Month
/// rows, when present, replace the default month table. Season overrides are
/// applied after seasons are derived from whichever table survives.
///
/// Never fails: malformed input degrades to the defaults field by field.
pub fn extract_results(rows: &[RawRow], defaults: &ResultsData) -> ResultsData {
    let mut all_time = defaults.all_time.clone();
    let mut months: Vec<MonthRecord> = Vec::new();
    let mut overrides: Vec<SeasonOverride> = Vec::new();

    for row in rows {
        match classify(row) {
            RowKind::Stat { label, value } => match label {
                StatLabel::TotalBets => {
                    if let Some(v) = coerce_count(&value) {
                        all_time.total_bets = v;
                    }
                }
                StatLabel::Profit => {
                    if let Some(v) = coerce_decimal(&value) {
                        all_time.profit_units = v;
                    }
                }
                StatLabel::Roi => {
                    if let Some(v) = coerce_decimal(&value) {
                        all_time.roi = v;
                    }
                }
                StatLabel::TotalStaked => {
                    if let Some(v) = coerce_decimal(&value) {
                        all_time.total_staked = v;
                    }
                }
            },
            RowKind::Month { record, .. } => upsert_month(&mut months, record),
            RowKind::Season {
                label,
                profit,
                roi,
                bets,
            } => overrides.push(SeasonOverride {
                label,
                profit,
                roi,
                bets,
            }),
            RowKind::Other => {}
        }
    }

    let months = if months.is_empty() {
        defaults.months.clone()
    } else {
        MonthTable::new(months)
    };

    let mut seasons = derive_seasons(&months);
    if seasons.is_empty() {
        seasons = defaults.seasons.clone();
    }

    for o in overrides {
        let Some(season) = seasons.iter_mut().find(|s| s.label == o.label) else {
            debug!(label = %o.label, "Season override has no matching season, skipping");
            continue;
        };
        if let Some(profit) = o.profit {
            season.stat.profit_units = profit;
        }
        if let Some(roi) = o.roi {
            season.stat.roi = roi;
        }
        if let Some(bets) = o.bets {
            season.stat.total_bets = bets;
        }
    }

    ResultsData {
        all_time,
        months,
        seasons,
    }
}

struct SeasonOverride {
    label: String,
    profit: Option<Decimal>,
    roi: Option<Decimal>,
    bets: Option<u32>,
}

/// Month labels are unique within a table; a repeated label overwrites the
/// earlier row, consistent with last-write-wins everywhere else.
fn upsert_month(months: &mut Vec<MonthRecord>, record: MonthRecord) {
    match months.iter_mut().find(|m| m.month == record.month) {
        Some(existing) => *existing = record,
        None => months.push(record),
    }
}
