//! Season grouping and summaries.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::month::{MonthRecord, MonthTable, parse_month_label};
use super::period::PeriodStat;

/// First month of a season; seasons run August through July.
const SEASON_START_MONTH: u32 = 8;

/// Whether a season is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonStatus {
    Current,
    Completed,
}

impl fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonStatus::Current => write!(f, "current"),
            SeasonStatus::Completed => write!(f, "completed"),
        }
    }
}

/// SeasonStat summarizes one labeled season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStat {
    /// Season label, e.g. "2024/2025".
    pub label: String,
    #[serde(flatten)]
    pub stat: PeriodStat,
    pub status: SeasonStatus,
}

/// Canonical label for the season starting in `start_year`.
pub fn season_label(start_year: i32) -> String {
    format!("{}/{}", start_year, start_year + 1)
}

/// Year the season containing `date` started.
fn season_start_year(date: NaiveDate) -> i32 {
    if date.month() >= SEASON_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Groups the month table into seasons and folds each group.
///
/// The season containing the newest month is `current`; earlier seasons are
/// `completed`. Months with unrecognized labels are skipped. Seasons are
/// returned newest-first.
pub fn derive_seasons(table: &MonthTable) -> Vec<SeasonStat> {
    let mut groups: Vec<(i32, Vec<MonthRecord>)> = Vec::new();
    for record in table.records() {
        let Some(date) = parse_month_label(&record.month) else {
            continue;
        };
        let year = season_start_year(date);
        match groups.last_mut() {
            Some((last, members)) if *last == year => members.push(record.clone()),
            _ => groups.push((year, vec![record.clone()])),
        }
    }

    let newest = groups.last().map(|(year, _)| *year);
    let mut seasons: Vec<SeasonStat> = groups
        .into_iter()
        .map(|(year, members)| SeasonStat {
            label: season_label(year),
            stat: MonthTable::fold(&members),
            status: if Some(year) == newest {
                SeasonStatus::Current
            } else {
                SeasonStatus::Completed
            },
        })
        .collect();
    seasons.reverse();
    seasons
}
