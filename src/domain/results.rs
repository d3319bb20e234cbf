//! The assembled results snapshot.

use serde::{Deserialize, Serialize};

use super::month::MonthTable;
use super::period::PeriodStat;
use super::season::SeasonStat;

/// ResultsData is the immutable base snapshot every consumer derives from.
///
/// Rebuilt fresh on each load; user-driven recalculation reads from it and
/// never mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsData {
    /// Published aggregate over every recorded month.
    pub all_time: PeriodStat,
    /// Oldest-first month series.
    pub months: MonthTable,
    /// Per-season summaries, newest-first.
    pub seasons: Vec<SeasonStat>,
}

impl ResultsData {
    /// Aggregates from `start_month` to the newest month. Unknown labels and
    /// the earliest month fall back to the published all-time summary.
    pub fn stats_since(&self, start_month: &str) -> PeriodStat {
        self.months.stats_since(start_month, &self.all_time)
    }

    /// Season summary for the given label.
    pub fn season(&self, label: &str) -> Option<&SeasonStat> {
        self.seasons.iter().find(|s| s.label == label)
    }
}
