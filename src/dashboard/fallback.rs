//! Canonical embedded fallback dataset.
//!
//! Substituted whenever the published sheet cannot be fetched. One dataset,
//! one provenance (see DESIGN.md): the month rows sum exactly to the
//! published season and all-time figures, so the fold and the published
//! constants agree to two decimals.

use rust_decimal::Decimal;

use crate::domain::{MonthRecord, MonthTable, PeriodStat, ResultsData, derive_seasons};

/// Published all-time summary; tracking began August 2024.
pub fn all_time() -> PeriodStat {
    PeriodStat {
        total_bets: 3077,
        profit_units: Decimal::new(35026, 2),
        roi: Decimal::new(1145, 2),
        total_staked: Decimal::new(305960, 2),
    }
}

/// The embedded month table. Seasons run August through July; the gap
/// between May and August 2025 is the off-season.
pub fn month_table() -> MonthTable {
    MonthTable::new(vec![
        month("August 2024", 1842, 171, 16230),
        month("September 2024", 2411, 198, 18590),
        month("October 2024", 3176, 214, 20145),
        month("November 2024", -1238, 205, 19280),
        month("December 2024", 4125, 228, 21160),
        month("January 2025", 2204, 216, 20315),
        month("February 2025", 3567, 189, 17825),
        month("March 2025", 1980, 202, 18970),
        month("April 2025", 2851, 187, 17490),
        month("May 2025", 2455, 157, 13640),
        month("August 2025", 2935, 242, 25170),
        month("September 2025", 916, 205, 21450),
        month("October 2025", -27, 156, 16875),
        month("November 2025", 3290, 227, 26050),
        month("December 2025", 4516, 172, 21820),
        month("January 2026", 23, 108, 10950),
    ])
}

/// The full fallback snapshot: published all-time constants plus seasons
/// derived from the embedded table.
pub fn results_data() -> ResultsData {
    let months = month_table();
    let seasons = derive_seasons(&months);
    ResultsData {
        all_time: all_time(),
        months,
        seasons,
    }
}

fn month(label: &str, profit_cents: i64, bets: u32, staked_cents: i64) -> MonthRecord {
    MonthRecord::new(
        label,
        Decimal::new(profit_cents, 2),
        bets,
        Decimal::new(staked_cents, 2),
    )
}
