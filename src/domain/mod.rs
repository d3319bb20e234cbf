//! Domain models for the tipster results dashboard.

mod month;
mod period;
mod results;
mod season;
mod testimonial;

pub use month::{MonthRecord, MonthTable, parse_month_label};
pub use period::{PeriodStat, parse_unit_value};
pub use results::ResultsData;
pub use season::{SeasonStat, SeasonStatus, derive_seasons, season_label};
pub use testimonial::Testimonial;
